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

//! Derived hardware-counter metrics.
//!
//! Input is one series per PAPI counter, one value per thread, as produced
//! by `AggregateStore::counter_series`. Each metric in [`METRIC_RULES`] whose
//! counters are all present is computed element-wise over the zipped series;
//! a zero denominator yields `0.0`.
//!
//! A metric is dropped when its first three values (all of them, if there
//! are fewer) are exactly zero.
//!
//! # Examples
//!
//! ```
//! use profagg_metrics::derive_metrics;
//! use std::collections::BTreeMap;
//!
//! let mut counters = BTreeMap::new();
//! counters.insert("PAPI_TOT_INS".to_string(), vec![100.0, 200.0]);
//! counters.insert("PAPI_TOT_CYC".to_string(), vec![50.0, 0.0]);
//!
//! let metrics = derive_metrics(&counters);
//! assert_eq!(metrics[0].name, "instructions_per_cycle");
//! assert_eq!(metrics[0].values, vec![2.0, 0.0]);
//! ```

mod rules;

pub use rules::{counters, Formula, MetricRule, METRIC_RULES};

use std::collections::BTreeMap;
use tracing::debug;

/// Number of leading values inspected by the all-zero check.
pub const ZERO_PREFIX: usize = 3;

/// One derived metric, one value per thread.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Metric {
    /// Metric name, e.g. `instructions_per_cycle`.
    pub name: &'static str,
    /// Element-wise results.
    pub values: Vec<f64>,
}

/// Compute every applicable metric, in [`METRIC_RULES`] order.
pub fn derive_metrics(counters: &BTreeMap<String, Vec<f64>>) -> Vec<Metric> {
    METRIC_RULES
        .iter()
        .filter_map(|rule| evaluate(rule, counters))
        .collect()
}

/// Compute one metric, or `None` when an input is missing or the result is
/// suppressed.
pub fn evaluate(rule: &MetricRule, counters: &BTreeMap<String, Vec<f64>>) -> Option<Metric> {
    let inputs = rule
        .inputs
        .iter()
        .map(|name| counters.get(*name).map(Vec::as_slice))
        .collect::<Option<Vec<&[f64]>>>()?;

    let len = inputs.iter().map(|series| series.len()).min().unwrap_or(0);
    let mut point = vec![0.0; inputs.len()];
    let values: Vec<f64> = (0..len)
        .map(|i| {
            for (slot, series) in point.iter_mut().zip(&inputs) {
                *slot = series[i];
            }
            rule.formula.apply(&point)
        })
        .collect();

    if leading_zeros(&values) {
        debug!(metric = rule.name, "suppressed all-zero metric");
        return None;
    }
    Some(Metric {
        name: rule.name,
        values,
    })
}

/// True when the first [`ZERO_PREFIX`] values (or all, if fewer) are zero.
fn leading_zeros(values: &[f64]) -> bool {
    values.iter().take(ZERO_PREFIX).all(|v| *v == 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(entries: &[(&str, &[f64])]) -> BTreeMap<String, Vec<f64>> {
        entries
            .iter()
            .map(|(name, values)| (name.to_string(), values.to_vec()))
            .collect()
    }

    fn find<'a>(metrics: &'a [Metric], name: &str) -> Option<&'a Metric> {
        metrics.iter().find(|m| m.name == name)
    }

    #[test]
    fn test_ipc_with_zero_cycles() {
        let metrics = derive_metrics(&series(&[
            ("PAPI_TOT_INS", &[100.0, 200.0]),
            ("PAPI_TOT_CYC", &[50.0, 0.0]),
        ]));
        assert_eq!(find(&metrics, "instructions_per_cycle").unwrap().values, vec![2.0, 0.0]);
        assert_eq!(find(&metrics, "computational_intensity").unwrap().values, vec![0.5, 0.0]);
    }

    #[test]
    fn test_all_zero_prefix_is_suppressed() {
        let metrics = derive_metrics(&series(&[
            ("PAPI_TOT_INS", &[0.0, 0.0, 0.0, 9.0]),
            ("PAPI_TOT_CYC", &[1.0, 1.0, 1.0, 1.0]),
        ]));
        assert!(find(&metrics, "instructions_per_cycle").is_none());
    }

    #[test]
    fn test_short_series_suppression() {
        assert!(leading_zeros(&[]));
        assert!(leading_zeros(&[0.0]));
        assert!(!leading_zeros(&[0.0, 0.5]));
    }

    #[test]
    fn test_missing_counter_skips_metric() {
        let metrics = derive_metrics(&series(&[("PAPI_TOT_INS", &[1.0])]));
        assert!(metrics.is_empty());
    }

    #[test]
    fn test_series_are_zipped_to_shortest() {
        let metrics = derive_metrics(&series(&[
            ("PAPI_TOT_INS", &[4.0, 6.0, 8.0]),
            ("PAPI_TOT_CYC", &[2.0, 3.0]),
        ]));
        assert_eq!(find(&metrics, "instructions_per_cycle").unwrap().values, vec![2.0, 2.0]);
    }

    #[test]
    fn test_output_follows_rule_order() {
        let all: Vec<(&str, &[f64])> = counters::ALL_COUNTERS
            .iter()
            .map(|name| (*name, &[3.0, 5.0][..]))
            .collect();
        let mut input = series(&all);
        input.insert("PAPI_L1_TCM".to_string(), vec![9.0, 9.0]);
        input.insert("PAPI_L2_TCM".to_string(), vec![6.0, 6.0]);
        input.insert("PAPI_L3_TCM".to_string(), vec![2.0, 2.0]);

        let names: Vec<_> = derive_metrics(&input).iter().map(|m| m.name).collect();
        let expected: Vec<_> = METRIC_RULES.iter().map(|r| r.name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_cache_hits() {
        let metrics = derive_metrics(&series(&[
            ("PAPI_L1_TCM", &[10.0, 20.0]),
            ("PAPI_L2_TCM", &[4.0, 8.0]),
            ("PAPI_L3_TCM", &[1.0, 2.0]),
            ("PAPI_LD_INS", &[3.0, 0.0]),
        ]));
        assert_eq!(find(&metrics, "L2_cache_hits").unwrap().values, vec![6.0, 12.0]);
        assert_eq!(find(&metrics, "L3_cache_hits").unwrap().values, vec![3.0, 6.0]);
        assert_eq!(find(&metrics, "L3_cache_hits_per_load").unwrap().values, vec![1.0, 0.0]);
        assert_eq!(find(&metrics, "mem_hits_per_load").unwrap().values, vec![1.0 / 3.0, 0.0]);
        assert!(find(&metrics, "L2_cache_hits_per_instruct").is_none());
    }
}
