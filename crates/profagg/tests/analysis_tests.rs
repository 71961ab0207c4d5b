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

//! End-to-end tests through the facade crate.

use profagg::csv::parse_str;
use profagg::reduce::reduce;
use profagg::{
    analyze, analyze_with_config, derive_run_metrics, Category, Cell, Limits, Statistic,
    StoreConfig, SummaryIndex, ThreadId,
};
use profagg_test::fixtures::{self, builders::ProfileBuilder};
use profagg_test::RunDirBuilder;

#[test]
fn test_analyze_full_pipeline() {
    let run = RunDirBuilder::new()
        .dense(4, 3, |rank, thread| {
            fixtures::thread_file(f64::from(rank * 3 + thread), 1000, 250)
        })
        .build();

    let store = analyze(run.path()).unwrap();
    assert_eq!(store.total_files(), 12);
    assert_eq!(
        store.thread_ids().collect::<Vec<_>>(),
        vec![ThreadId(0), ThreadId(1), ThreadId(2)]
    );
    assert_eq!(store.calculate_max_time().unwrap(), 11.0);

    let record = store.record(ThreadId(2)).unwrap();
    assert_eq!(record.file_count(), 4);
    assert_eq!(
        record.min().value(Category::Summary, 0, "total_time_seconds"),
        Some(&Cell::Float(2.0))
    );
    assert_eq!(
        record.sum().value(Category::Papi, 0, "PAPI_TOT_INS"),
        Some(&Cell::Int(4000))
    );
}

#[test]
fn test_derived_metrics_from_store() {
    let run = RunDirBuilder::new()
        .thread_file(0, 0, fixtures::papi_block(100, 50))
        .thread_file(0, 1, fixtures::papi_block(200, 0))
        .build();
    let store = analyze(run.path()).unwrap();

    let metrics = derive_run_metrics(&store, Statistic::Max);
    let ipc = metrics
        .iter()
        .find(|m| m.name == "instructions_per_cycle")
        .unwrap();
    assert_eq!(ipc.values, vec![2.0, 0.0]);
}

#[test]
fn test_metric_skips_threads_missing_a_counter() {
    let run = RunDirBuilder::new()
        .thread_file(0, 0, "PAPI_TOT_INS\n100\n")
        .thread_file(0, 1, fixtures::papi_block(200, 100))
        .thread_file(0, 2, fixtures::papi_block(300, 300))
        .build();
    let store = analyze(run.path()).unwrap();

    let metrics = derive_run_metrics(&store, Statistic::Max);
    let ipc = metrics
        .iter()
        .find(|m| m.name == "instructions_per_cycle")
        .unwrap();
    assert_eq!(ipc.threads, vec![ThreadId(1), ThreadId(2)]);
    assert_eq!(ipc.values, vec![2.0, 1.0]);
}

#[test]
fn test_all_zero_metrics_are_suppressed() {
    let run = RunDirBuilder::new()
        .thread_file(0, 0, fixtures::papi_block(0, 10))
        .thread_file(0, 1, fixtures::papi_block(0, 10))
        .thread_file(0, 2, fixtures::papi_block(0, 10))
        .thread_file(0, 3, fixtures::papi_block(5, 10))
        .build();
    let store = analyze(run.path()).unwrap();

    // only the fourth thread is non-zero, too late to count
    assert!(derive_run_metrics(&store, Statistic::Sum).is_empty());
}

#[test]
fn test_non_zero_within_prefix_is_kept() {
    let run = RunDirBuilder::new()
        .thread_file(0, 0, fixtures::papi_block(0, 10))
        .thread_file(0, 1, fixtures::papi_block(0, 10))
        .thread_file(0, 2, fixtures::papi_block(4, 10))
        .build();
    let store = analyze(run.path()).unwrap();

    let metrics = derive_run_metrics(&store, Statistic::Sum);
    let ipc = metrics
        .iter()
        .find(|m| m.name == "instructions_per_cycle")
        .unwrap();
    assert_eq!(ipc.values, vec![0.0, 0.0, 0.4]);
}

#[test]
fn test_parallel_and_bounded_config() {
    let run = RunDirBuilder::new()
        .dense(2, 5, |_, thread| fixtures::summary_block(f64::from(thread) * 1.5))
        .build();
    let config = StoreConfig {
        parallel: true,
        ..StoreConfig::from_limits(Limits::default().with_max_thread_scan(5))
    };

    let store = analyze_with_config(run.path(), &config).unwrap();
    assert_eq!(store.thread_ids().count(), 5);
    assert_eq!(store.calculate_max_time().unwrap(), 6.0);
}

#[test]
fn test_reduce_parsed_files_directly() {
    let files: Vec<_> = [1, 2, 3]
        .iter()
        .map(|n| {
            let calls = n.to_string();
            let text = ProfileBuilder::new()
                .block(&["io_total_time", "io_calls"], &["0.5", calls.as_str()])
                .build();
            parse_str(&text, &mut SummaryIndex::new()).unwrap()
        })
        .collect();

    let record = reduce(files).unwrap();
    assert_eq!(
        record.table(Statistic::Sum).value(Category::Io, 0, "io_calls"),
        Some(&Cell::Int(6))
    );
    assert_eq!(record.mean(Category::Io, 0, "io_total_time"), Some(0.5));
}
