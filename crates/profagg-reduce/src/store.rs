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

//! Aggregate store: discovery, reduction and queries for one run directory.

use crate::discovery::{discover_with_limits, ThreadTopology};
use crate::error::{ReduceError, Result};
use crate::reducer::{AggregateRecord, Statistic};
use profagg_core::{Category, Limits, SummaryIndex, ThreadId};
use profagg_csv::{parse_file_with_config, ParseConfig};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// SUMMARY column holding a file's elapsed wall time.
pub const TOTAL_TIME_COLUMN: &str = "total_time_seconds";

/// Configuration for building an [`AggregateStore`].
///
/// # Examples
///
/// ```
/// use profagg_reduce::StoreConfig;
///
/// let config = StoreConfig {
///     parallel: true,
///     max_threads: Some(4),
///     ..Default::default()
/// };
/// assert!(!config.parse.strict_width);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Per-file parser options.
    pub parse: ParseConfig,

    /// Discovery bound and resource limits.
    pub limits: Limits,

    /// Reduce thread ids on rayon workers (default: `false`).
    pub parallel: bool,

    /// Size of a dedicated worker pool; `None` uses the global pool.
    pub max_threads: Option<usize>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_limits(Limits::default())
    }
}

impl StoreConfig {
    /// Sequential configuration honouring the given limits.
    pub fn from_limits(limits: Limits) -> Self {
        Self {
            parse: ParseConfig::from_limits(&limits),
            limits,
            parallel: false,
            max_threads: None,
        }
    }
}

/// Per-thread aggregates of one run directory.
///
/// Built once by [`open`](AggregateStore::open) and immutable afterwards.
///
/// # Examples
///
/// ```
/// use profagg_core::ThreadId;
/// use profagg_reduce::AggregateStore;
/// use profagg_test::{fixtures, RunDirBuilder};
///
/// let run = RunDirBuilder::new()
///     .thread_file(0, 0, fixtures::thread_file(10.0, 100, 50))
///     .thread_file(1, 0, fixtures::thread_file(25.5, 100, 50))
///     .thread_file(0, 1, fixtures::thread_file(7.25, 100, 50))
///     .build();
///
/// let store = AggregateStore::open(run.path()).unwrap();
/// assert_eq!(store.thread_ids().count(), 2);
/// assert_eq!(store.file_count(ThreadId(0)), Some(2));
/// assert_eq!(store.calculate_max_time().unwrap(), 25.5);
/// ```
#[derive(Debug, Clone)]
pub struct AggregateStore {
    root: PathBuf,
    topology: ThreadTopology,
    records: BTreeMap<ThreadId, AggregateRecord>,
    summary: SummaryIndex,
}

impl AggregateStore {
    /// Build a store with default configuration.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_config(root, &StoreConfig::default())
    }

    /// Discover, parse and reduce every file below `root`.
    ///
    /// # Errors
    ///
    /// Fails on non-convergent discovery, on the first file that cannot be
    /// read or parsed, or when the worker pool cannot be built.
    pub fn open_with_config(root: impl AsRef<Path>, config: &StoreConfig) -> Result<Self> {
        let root = root.as_ref();
        let topology = discover_with_limits(root, &config.limits)?;

        let work: Vec<(ThreadId, &[PathBuf])> = topology.iter().collect();
        let reduced = if config.parallel {
            let run = || {
                work.par_iter()
                    .map(|(thread, files)| reduce_thread(*thread, files, &config.parse))
                    .collect::<Result<Vec<_>>>()
            };
            match config.max_threads {
                Some(threads) => rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?
                    .install(run)?,
                None => run()?,
            }
        } else {
            work.iter()
                .map(|(thread, files)| reduce_thread(*thread, files, &config.parse))
                .collect::<Result<Vec<_>>>()?
        };

        let mut records = BTreeMap::new();
        let mut summary = SummaryIndex::new();
        for (thread, record, local) in reduced {
            summary.merge(local);
            records.insert(thread, record);
        }

        info!(
            root = %root.display(),
            threads = records.len(),
            files = topology.total_files(),
            parallel = config.parallel,
            "built aggregate store"
        );

        Ok(Self {
            root: root.to_path_buf(),
            topology,
            records,
            summary,
        })
    }

    /// The run directory this store was built from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Discovered topology, including every file path.
    pub fn topology(&self) -> &ThreadTopology {
        &self.topology
    }

    /// Thread ids, ascending.
    pub fn thread_ids(&self) -> impl Iterator<Item = ThreadId> + '_ {
        self.records.keys().copied()
    }

    /// Aggregate for one thread.
    pub fn record(&self, thread: ThreadId) -> Option<&AggregateRecord> {
        self.records.get(&thread)
    }

    /// Every aggregate, ascending by thread id.
    pub fn records(&self) -> impl Iterator<Item = (ThreadId, &AggregateRecord)> {
        self.records.iter().map(|(thread, record)| (*thread, record))
    }

    /// Number of files folded into one thread's aggregate.
    pub fn file_count(&self, thread: ThreadId) -> Option<usize> {
        self.records.get(&thread).map(AggregateRecord::file_count)
    }

    /// Number of CSV files found below the root.
    pub fn total_files(&self) -> usize {
        self.topology.total_files()
    }

    /// Raw SUMMARY values of every parsed file, in thread then file order.
    pub fn summary_index(&self) -> &SummaryIndex {
        &self.summary
    }

    /// Longest elapsed time of the run.
    ///
    /// The maximum over all threads of the max-table SUMMARY row 0
    /// `total_time_seconds` value.
    ///
    /// # Errors
    ///
    /// - `NoThreads` when the store is empty
    /// - `MissingValue` when a thread lacks a numeric elapsed time
    pub fn calculate_max_time(&self) -> Result<f64> {
        let mut longest: Option<f64> = None;
        for (thread, record) in &self.records {
            let time = record
                .max()
                .value(Category::Summary, 0, TOTAL_TIME_COLUMN)
                .and_then(|cell| cell.as_number())
                .ok_or_else(|| ReduceError::MissingValue {
                    thread: *thread,
                    category: Category::Summary,
                    column: TOTAL_TIME_COLUMN.to_string(),
                })?;
            longest = Some(longest.map_or(time, |t| t.max(time)));
        }
        longest.ok_or(ReduceError::NoThreads)
    }

    /// Aligned hardware-counter series for the named counters.
    ///
    /// Reads row 0 of the chosen statistic's PAPI table. A thread is included
    /// only when it holds a numeric value for every requested counter, so
    /// every series has one value per included thread, in ascending id order.
    ///
    /// # Examples
    ///
    /// ```
    /// use profagg_core::ThreadId;
    /// use profagg_reduce::{AggregateStore, Statistic};
    /// use profagg_test::{fixtures, RunDirBuilder};
    ///
    /// let run = RunDirBuilder::new()
    ///     .thread_file(0, 0, "PAPI_TOT_INS\n100\n")
    ///     .thread_file(0, 1, fixtures::papi_block(200, 100))
    ///     .build();
    /// let store = AggregateStore::open(run.path()).unwrap();
    ///
    /// let series = store.counter_series(Statistic::Max, &["PAPI_TOT_INS", "PAPI_TOT_CYC"]);
    /// assert_eq!(series.threads, vec![ThreadId(1)]);
    /// assert_eq!(series.counters["PAPI_TOT_INS"], vec![200.0]);
    /// ```
    pub fn counter_series(&self, statistic: Statistic, counters: &[&str]) -> CounterSeries {
        let names: BTreeSet<&str> = counters.iter().copied().collect();
        let mut series = CounterSeries {
            threads: Vec::new(),
            counters: names
                .iter()
                .map(|name| (name.to_string(), Vec::new()))
                .collect(),
        };

        for (thread, record) in &self.records {
            let Some(table) = record.table(statistic).get(Category::Papi) else {
                continue;
            };
            let values: Option<Vec<f64>> = names
                .iter()
                .map(|name| table.value(0, name).and_then(|cell| cell.as_number()))
                .collect();
            let Some(values) = values else {
                debug!(thread = %thread, "thread lacks a requested counter, left out");
                continue;
            };

            series.threads.push(*thread);
            for (name, value) in names.iter().zip(values) {
                if let Some(column) = series.counters.get_mut(*name) {
                    column.push(value);
                }
            }
        }
        series
    }
}

/// Counter values of the threads that hold every requested counter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CounterSeries {
    /// Included threads, ascending.
    pub threads: Vec<ThreadId>,
    /// One series per requested counter, aligned with `threads`.
    pub counters: BTreeMap<String, Vec<f64>>,
}

/// Parse and fold every file of one thread.
fn reduce_thread(
    thread: ThreadId,
    files: &[PathBuf],
    config: &ParseConfig,
) -> Result<(ThreadId, AggregateRecord, SummaryIndex)> {
    let mut summary = SummaryIndex::new();
    let mut record: Option<AggregateRecord> = None;

    for path in files {
        let parsed = parse_file_with_config(path, &mut summary, config)?;
        match record.as_mut() {
            Some(record) => record.fold(&parsed),
            None => record = Some(AggregateRecord::from_first(parsed)),
        }
    }

    let record = record.ok_or(ReduceError::EmptyThread(thread))?;
    debug!(thread = %thread, files = record.file_count(), "reduced thread");
    Ok((thread, record, summary))
}
