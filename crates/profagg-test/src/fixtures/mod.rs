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

//! Canonical profiling CSV blocks and files.

pub mod builders;
pub mod errors;

use builders::ProfileBuilder;

/// Header of the canonical SUMMARY block.
pub const SUMMARY_HEADER: &[&str] = &["executable", "host", "total_time_seconds"];

/// Header of the canonical RUSAGE block.
pub const RUSAGE_HEADER: &[&str] = &["utime_seconds", "stime_seconds", "maxrss_kB"];

/// Header of the canonical PAPI block.
pub const PAPI_HEADER: &[&str] = &["PAPI_TOT_INS", "PAPI_TOT_CYC"];

/// Type alias for a list of named fixture texts.
pub type FixtureList = Vec<(&'static str, String)>;

/// A SUMMARY block with the given elapsed time.
pub fn summary_block(total_time_seconds: f64) -> String {
    let time = format_float(total_time_seconds);
    ProfileBuilder::new()
        .block(SUMMARY_HEADER, &["a.out", "node01", time.as_str()])
        .build()
}

/// A PAPI block with instruction and cycle counts.
pub fn papi_block(instructions: i64, cycles: i64) -> String {
    let (instructions, cycles) = (instructions.to_string(), cycles.to_string());
    ProfileBuilder::new()
        .block(PAPI_HEADER, &[instructions.as_str(), cycles.as_str()])
        .build()
}

/// A RUSAGE block.
pub fn rusage_block(utime: f64, stime: f64, maxrss_kb: i64) -> String {
    let fields = [format_float(utime), format_float(stime), maxrss_kb.to_string()];
    let fields: Vec<&str> = fields.iter().map(String::as_str).collect();
    ProfileBuilder::new().block(RUSAGE_HEADER, &fields).build()
}

/// A typical per-thread file: SUMMARY, RUSAGE and PAPI blocks.
pub fn thread_file(total_time_seconds: f64, instructions: i64, cycles: i64) -> String {
    let mut text = summary_block(total_time_seconds);
    text.push_str(&rusage_block(1.5, 0.25, 2048));
    text.push_str(&papi_block(instructions, cycles));
    text
}

/// A file touching every named category plus one unrecognised block.
pub fn every_category() -> String {
    ProfileBuilder::new()
        .block(SUMMARY_HEADER, &["a.out", "node01", "3.5"])
        .block(RUSAGE_HEADER, &["1.5", "0.25", "2048"])
        .block(&["dmem_high_water_mark_kB"], &["4096"])
        .block(&["io_total_time", "io_calls"], &["0.75", "12"])
        .block(&["total_mpi_time_seconds", "mpi_calls"], &["1.25", "40"])
        .block(&["idle_time", "work_time"], &["0.5", "2.5"])
        .block(&["allocation_calls", "allocation_bytes"], &["10", "65536"])
        .block(&["free_calls"], &["9"])
        .block(PAPI_HEADER, &["1000", "400"])
        .block(&["custom_counter"], &["7"])
        .build()
}

/// All named fixture texts, for tests that sweep every fixture.
pub fn all() -> FixtureList {
    vec![
        ("summary", summary_block(12.5)),
        ("papi", papi_block(1000, 400)),
        ("rusage", rusage_block(1.5, 0.25, 2048)),
        ("thread_file", thread_file(12.5, 1000, 400)),
        ("every_category", every_category()),
    ]
}

/// Render a float so it always reads back as a float.
fn format_float(value: f64) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_block_shape() {
        assert_eq!(
            summary_block(10.0),
            "executable,host,total_time_seconds\na.out,node01,10.0\n"
        );
    }

    #[test]
    fn test_thread_file_has_three_blocks() {
        assert_eq!(thread_file(1.0, 1, 2).lines().count(), 6);
    }

    #[test]
    fn test_all_fixtures_are_non_empty() {
        for (name, text) in all() {
            assert!(!text.is_empty(), "fixture {} is empty", name);
        }
    }
}
