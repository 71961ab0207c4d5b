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

//! The fixed table of derived metrics.

/// Counter names read by the rules.
pub mod counters {
    pub const TOT_INS: &str = "PAPI_TOT_INS";
    pub const TOT_CYC: &str = "PAPI_TOT_CYC";
    pub const REF_CYC: &str = "PAPI_REF_CYC";
    pub const REF_NS: &str = "PAPI_REF_NS";
    pub const DP_OPS: &str = "PAPI_DP_OPS";
    pub const FDV_INS: &str = "PAPI_FDV_INS";
    pub const FDV_OPS: &str = "PAPI_FDV_OPS";
    pub const VEC_DP: &str = "PAPI_VEC_DP";
    pub const LD_INS: &str = "PAPI_LD_INS";
    pub const L1_TCM: &str = "PAPI_L1_TCM";
    pub const L2_TCM: &str = "PAPI_L2_TCM";
    pub const L3_TCM: &str = "PAPI_L3_TCM";

    /// Every counter some rule reads.
    pub const ALL_COUNTERS: [&str; 12] = [
        TOT_INS, TOT_CYC, REF_CYC, REF_NS, DP_OPS, FDV_INS, FDV_OPS, VEC_DP, LD_INS, L1_TCM,
        L2_TCM, L3_TCM,
    ];
}

use counters::*;

/// How one metric combines its input counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula {
    /// `inputs[0] / inputs[1]`
    Ratio,
    /// `(inputs[0] + inputs[1]) / inputs[2]`
    SumRatio,
    /// `inputs[0] / (inputs[1] + inputs[2])`
    RatioOfSum,
    /// `inputs[0] - inputs[1]`
    Difference,
    /// `(inputs[0] - inputs[1]) / inputs[2]`
    DifferenceRatio,
}

impl Formula {
    /// Evaluate for one position. A zero denominator yields `0.0`.
    ///
    /// # Panics
    ///
    /// Panics if `x` holds fewer than [`arity`](Formula::arity) values.
    pub fn apply(self, x: &[f64]) -> f64 {
        match self {
            Self::Ratio => divide(x[0], x[1]),
            Self::SumRatio => divide(x[0] + x[1], x[2]),
            Self::RatioOfSum => divide(x[0], x[1] + x[2]),
            Self::Difference => x[0] - x[1],
            Self::DifferenceRatio => divide(x[0] - x[1], x[2]),
        }
    }

    /// Number of input counters the formula reads.
    pub fn arity(self) -> usize {
        match self {
            Self::Ratio | Self::Difference => 2,
            Self::SumRatio | Self::RatioOfSum | Self::DifferenceRatio => 3,
        }
    }
}

fn divide(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// One derived metric: its name, input counters and formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricRule {
    /// Output name.
    pub name: &'static str,
    /// Counter names, in formula order.
    pub inputs: &'static [&'static str],
    /// How the inputs combine.
    pub formula: Formula,
}

const fn rule(
    name: &'static str,
    inputs: &'static [&'static str],
    formula: Formula,
) -> MetricRule {
    MetricRule {
        name,
        inputs,
        formula,
    }
}

/// Every derived metric, in output order.
pub const METRIC_RULES: &[MetricRule] = &[
    rule("instructions_per_cycle", &[TOT_INS, TOT_CYC], Formula::Ratio),
    rule("computational_intensity", &[TOT_CYC, TOT_INS], Formula::Ratio),
    rule("processor_core_base_freq", &[REF_CYC, REF_NS], Formula::Ratio),
    rule("FLOP_rate", &[DP_OPS, FDV_INS, REF_NS], Formula::SumRatio),
    rule("processor_turbo_rate", &[TOT_CYC, REF_CYC], Formula::Ratio),
    rule("processor_turbo_freq", &[TOT_CYC, REF_NS], Formula::Ratio),
    rule("ratio_of_load_instruct", &[LD_INS, TOT_INS], Formula::Ratio),
    rule("time_per_load_instruct", &[REF_NS, LD_INS], Formula::Ratio),
    rule("vectorization_rate", &[VEC_DP, DP_OPS, FDV_OPS], Formula::RatioOfSum),
    rule("ratio_of_fp_instruct", &[DP_OPS, TOT_INS], Formula::Ratio),
    rule("float_point_intensity", &[DP_OPS, LD_INS], Formula::Ratio),
    rule("mem_hits_per_load", &[L3_TCM, LD_INS], Formula::Ratio),
    rule("mem_hits_per_instruct", &[L3_TCM, TOT_INS], Formula::Ratio),
    rule("L3_cache_hits", &[L2_TCM, L3_TCM], Formula::Difference),
    rule("L3_cache_hits_per_load", &[L2_TCM, L3_TCM, LD_INS], Formula::DifferenceRatio),
    rule("L3_cache_hits_per_instruct", &[L2_TCM, L3_TCM, TOT_INS], Formula::DifferenceRatio),
    rule("L2_cache_hits", &[L1_TCM, L2_TCM], Formula::Difference),
    rule("L2_cache_hits_per_load", &[L1_TCM, L2_TCM, LD_INS], Formula::DifferenceRatio),
    rule("L2_cache_hits_per_instruct", &[L1_TCM, L2_TCM, TOT_INS], Formula::DifferenceRatio),
];
