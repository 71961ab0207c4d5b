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

//! # profagg
//!
//! Discover, parse and reduce the per-thread CSV output of a profiled
//! parallel run.
//!
//! A run directory holds one subdirectory per rank, each with one file per
//! thread named `<name>-<thread>.csv`. Every file is a stack of small
//! header/data tables (SUMMARY, RUSAGE, IO, MPI, PAPI, ...). profagg finds
//! the thread ids, parses every file into typed tables, and folds all files
//! of a thread into elementwise max, min and sum tables.
//!
//! ## Quick Start
//!
//! ```rust
//! use profagg::{analyze, derive_run_metrics, Statistic};
//! use profagg_test::{fixtures, RunDirBuilder};
//!
//! let run = RunDirBuilder::new()
//!     .dense(2, 2, |rank, thread| {
//!         fixtures::thread_file(f64::from(rank + thread) + 1.0, 1000, 400)
//!     })
//!     .build();
//!
//! let store = analyze(run.path()).expect("run directory reduces");
//! assert_eq!(store.thread_ids().count(), 2);
//! assert_eq!(store.calculate_max_time().unwrap(), 3.0);
//!
//! let metrics = derive_run_metrics(&store, Statistic::Max);
//! assert_eq!(metrics[0].name, "instructions_per_cycle");
//! assert_eq!(metrics[0].values, vec![2.5, 2.5]);
//! assert_eq!(metrics[0].threads.len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`csv`]: Parsing a single profiling file
//! - [`reduce`]: Discovery, reduction and the aggregate store
//! - [`metrics`]: Derived hardware-counter metrics

// Re-export core types
pub use profagg_core::{
    coerce, Category, CategorySniffer, CategoryTable, Cell, CoreError, Limits, ParsedFile, Row,
    SummaryIndex, ThreadId, CATEGORY_RULES,
};

pub use profagg_reduce::{
    AggregateRecord, AggregateStore, CounterSeries, ReduceError, Statistic, StoreConfig,
    ThreadTopology,
};

pub use profagg_metrics::Metric;

/// Parsing of single profiling files.
pub mod csv {
    pub use profagg_csv::{
        parse_file, parse_file_with_config, parse_reader, parse_str, CsvError, ParseConfig,
        DEFAULT_MAX_ROWS,
    };
}

/// Thread discovery and cross-file reduction.
pub mod reduce {
    pub use profagg_reduce::{
        discover, discover_with_limits, reduce, AggregateRecord, AggregateStore, CounterSeries,
        ReduceError, Statistic, StoreConfig, ThreadTopology, TOTAL_TIME_COLUMN,
    };
}

/// Derived hardware-counter metrics.
pub mod metrics {
    pub use profagg_metrics::{
        counters, derive_metrics, evaluate, Formula, Metric, MetricRule, METRIC_RULES,
        ZERO_PREFIX,
    };
}

/// Discover, parse and reduce a run directory with default configuration.
///
/// # Errors
///
/// Fails on non-convergent discovery or the first unreadable file.
#[inline]
pub fn analyze(root: impl AsRef<std::path::Path>) -> Result<AggregateStore, ReduceError> {
    AggregateStore::open(root)
}

/// Discover, parse and reduce a run directory.
#[inline]
pub fn analyze_with_config(
    root: impl AsRef<std::path::Path>,
    config: &StoreConfig,
) -> Result<AggregateStore, ReduceError> {
    AggregateStore::open_with_config(root, config)
}

/// One derived metric over the threads that hold all of its counters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunMetric {
    /// Metric name, e.g. `instructions_per_cycle`.
    pub name: &'static str,
    /// Threads the values belong to, ascending.
    pub threads: Vec<ThreadId>,
    /// One value per entry of `threads`.
    pub values: Vec<f64>,
}

/// Derived metrics over the PAPI counters of a store.
///
/// Each metric is evaluated over its own aligned counter series: a thread
/// lacking one of the metric's counters is left out of that metric only.
/// Metrics with no qualifying thread, or whose leading values are all zero,
/// are dropped.
pub fn derive_run_metrics(store: &AggregateStore, statistic: Statistic) -> Vec<RunMetric> {
    profagg_metrics::METRIC_RULES
        .iter()
        .filter_map(|rule| {
            let series = store.counter_series(statistic, rule.inputs);
            let metric = profagg_metrics::evaluate(rule, &series.counters)?;
            Some(RunMetric {
                name: metric.name,
                threads: series.threads,
                values: metric.values,
            })
        })
        .collect()
}
