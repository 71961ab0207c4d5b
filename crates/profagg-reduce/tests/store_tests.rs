// profagg - Profiling CSV aggregation toolkit
//
// Copyright (c) 2025 profagg contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! End-to-end tests over synthetic run directories.

use profagg_core::{Category, Cell, Limits, ThreadId};
use profagg_reduce::{
    discover, AggregateStore, ReduceError, Statistic, StoreConfig, TOTAL_TIME_COLUMN,
};
use profagg_test::fixtures::{self, builders::ProfileBuilder};
use profagg_test::RunDirBuilder;

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn test_dense_layout_discovers_every_thread() {
    for (ranks, threads) in [(1, 1), (2, 3), (4, 8), (3, 12)] {
        let run = RunDirBuilder::new()
            .dense(ranks, threads, |_, _| fixtures::summary_block(1.0))
            .build();

        let topology = discover(run.path()).unwrap();
        let ids: Vec<u32> = topology.thread_ids().map(ThreadId::get).collect();
        assert_eq!(ids, (0..threads).collect::<Vec<_>>());

        let attributed: usize = topology.iter().map(|(_, files)| files.len()).sum();
        assert_eq!(attributed, (ranks * threads) as usize);
        assert_eq!(topology.total_files(), run.file_count());
    }
}

#[test]
fn test_store_file_counts_match_ranks() {
    let run = RunDirBuilder::new()
        .dense(5, 2, |_, _| fixtures::summary_block(1.0))
        .build();
    let store = AggregateStore::open(run.path()).unwrap();

    for thread in store.thread_ids() {
        assert_eq!(store.file_count(thread), Some(5));
    }
    assert_eq!(store.total_files(), 10);
}

#[test]
fn test_divergent_directory_fails_store() {
    let run = RunDirBuilder::new()
        .thread_file(0, 0, fixtures::summary_block(1.0))
        .file("rank0", "stray.csv", "")
        .build();
    let config = StoreConfig::from_limits(Limits::default().with_max_thread_scan(8));

    assert!(matches!(
        AggregateStore::open_with_config(run.path(), &config),
        Err(ReduceError::DiscoveryDiverged { .. })
    ));
}

#[test]
fn test_stray_file_fails_fast_without_scan_bound() {
    let run = RunDirBuilder::new()
        .dense(2, 3, |_, _| fixtures::summary_block(1.0))
        .file("rank1", "core-dump.csv", "")
        .build();
    let config = StoreConfig::from_limits(Limits::unlimited());

    match AggregateStore::open_with_config(run.path(), &config) {
        Err(ReduceError::DiscoveryDiverged {
            scanned,
            attributed,
            total,
        }) => {
            assert_eq!(scanned, 3);
            assert_eq!(attributed, 6);
            assert_eq!(total, 7);
        }
        other => panic!("unexpected result {:?}", other.map(|s| s.total_files())),
    }
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn test_max_time_over_threads() {
    let run = RunDirBuilder::new()
        .thread_file(0, 0, fixtures::summary_block(10.0))
        .thread_file(0, 1, fixtures::summary_block(25.5))
        .thread_file(0, 2, fixtures::summary_block(7.2))
        .build();
    let store = AggregateStore::open(run.path()).unwrap();
    assert_eq!(store.calculate_max_time().unwrap(), 25.5);
}

#[test]
fn test_max_time_uses_per_thread_maximum() {
    let run = RunDirBuilder::new()
        .thread_file(0, 0, fixtures::summary_block(3.0))
        .thread_file(1, 0, fixtures::summary_block(30.0))
        .thread_file(0, 1, fixtures::summary_block(20.0))
        .build();
    let store = AggregateStore::open(run.path()).unwrap();
    assert_eq!(store.calculate_max_time().unwrap(), 30.0);
}

#[test]
fn test_max_time_rejects_text() {
    let text = ProfileBuilder::new()
        .block(&["executable", TOTAL_TIME_COLUMN], &["a.out", "n/a"])
        .build();
    let run = RunDirBuilder::new().thread_file(0, 0, text).build();
    let store = AggregateStore::open(run.path()).unwrap();

    assert!(matches!(
        store.calculate_max_time(),
        Err(ReduceError::MissingValue {
            category: Category::Summary,
            ..
        })
    ));
}

#[test]
fn test_missing_column_in_one_file_is_untouched() {
    let with_x = ProfileBuilder::new()
        .block(&["PAPI_TOT_INS", "X"], &["10", "4"])
        .build();
    let without_x = fixtures::papi_block(20, 1);
    let run = RunDirBuilder::new()
        .thread_file(0, 0, with_x)
        .thread_file(1, 0, without_x)
        .build();

    let store = AggregateStore::open(run.path()).unwrap();
    let record = store.record(ThreadId(0)).unwrap();
    for statistic in Statistic::ALL {
        assert_eq!(
            record.table(statistic).value(Category::Papi, 0, "X"),
            Some(&Cell::Int(4)),
            "{} table",
            statistic
        );
    }
    assert_eq!(
        record.sum().value(Category::Papi, 0, "PAPI_TOT_INS"),
        Some(&Cell::Int(30))
    );
}

#[test]
fn test_header_only_block_does_not_seed_aggregate() {
    let run = RunDirBuilder::new()
        .thread_file(0, 0, format!("{}PAPI_TOT_INS\n", fixtures::summary_block(12.5)))
        .thread_file(1, 0, "PAPI_TOT_INS\n500\n")
        .build();

    let store = AggregateStore::open(run.path()).unwrap();
    let record = store.record(ThreadId(0)).unwrap();
    assert_eq!(
        record.sum().value(Category::Papi, 0, "PAPI_TOT_INS"),
        Some(&Cell::Int(500))
    );
    assert_eq!(store.calculate_max_time().unwrap(), 12.5);
}

#[test]
fn test_mean_elapsed_time() {
    let run = RunDirBuilder::new()
        .thread_file(0, 0, fixtures::summary_block(2.0))
        .thread_file(1, 0, fixtures::summary_block(4.0))
        .thread_file(2, 0, fixtures::summary_block(9.0))
        .build();
    let store = AggregateStore::open(run.path()).unwrap();
    let record = store.record(ThreadId(0)).unwrap();

    assert_eq!(record.file_count(), 3);
    assert_eq!(
        record.mean(Category::Summary, 0, TOTAL_TIME_COLUMN),
        Some(5.0)
    );
}

#[test]
fn test_records_and_summary_index() {
    let run = RunDirBuilder::new()
        .dense(2, 2, |rank, thread| {
            fixtures::thread_file(f64::from(rank + thread), 100, 50)
        })
        .build();
    let store = AggregateStore::open(run.path()).unwrap();

    let threads: Vec<_> = store.records().map(|(thread, _)| thread).collect();
    assert_eq!(threads, vec![ThreadId(0), ThreadId(1)]);
    assert_eq!(
        store.summary_index().values(TOTAL_TIME_COLUMN).unwrap(),
        ["0.0", "1.0", "1.0", "2.0"]
    );
    assert_eq!(store.summary_index().values("executable").unwrap().len(), 4);
}
