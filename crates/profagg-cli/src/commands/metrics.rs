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

//! Metrics command - derived hardware-counter ratios

use super::{open_store, print_json};
use crate::cli::{OutputFormat, RunArgs};
use crate::error::Result;
use colored::Colorize;
use profagg::{derive_run_metrics, RunMetric};
use profagg_core::ThreadId;
use profagg_reduce::Statistic;
use serde::Serialize;

#[derive(Serialize)]
struct MetricsReport {
    statistic: Statistic,
    threads: Vec<ThreadId>,
    metrics: Vec<RunMetric>,
}

/// Derive metrics from the PAPI counters of every thread.
///
/// Counter values are read from row 0 of each thread's PAPI table in the
/// chosen aggregate. A metric covers only the threads holding all of its
/// counters, and lists them.
///
/// # Errors
///
/// Returns `Err` if the run directory cannot be reduced.
pub fn metrics(run: &RunArgs, statistic: Statistic) -> Result<()> {
    let store = open_store(run)?;
    let report = MetricsReport {
        statistic,
        threads: store.thread_ids().collect(),
        metrics: derive_run_metrics(&store, statistic),
    };

    if run.format == OutputFormat::Json {
        return print_json(&report);
    }

    if report.metrics.is_empty() {
        println!("{}", "No metrics could be derived".yellow());
        return Ok(());
    }
    for metric in &report.metrics {
        let values: Vec<String> = metric
            .threads
            .iter()
            .zip(&metric.values)
            .map(|(thread, v)| format!("{}={:.6}", thread, v))
            .collect();
        println!("{}: [{}]", metric.name.green(), values.join(", "));
    }
    Ok(())
}
