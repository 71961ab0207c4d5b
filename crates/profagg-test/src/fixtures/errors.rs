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

//! Malformed profiling inputs for error-path tests.

/// Inputs the CSV reader itself rejects, as (name, bytes) pairs.
pub fn unreadable_samples() -> Vec<(&'static str, &'static [u8])> {
    vec![
        ("invalid_utf8_header", b"\xff\xfe\n1\n"),
        ("invalid_utf8_data", b"executable\n\xc3\x28\n"),
    ]
}

/// Inputs whose data rows disagree with their header width, as
/// (name, text, expected width, actual width).
pub fn width_mismatch_samples() -> Vec<(&'static str, &'static str, usize, usize)> {
    vec![
        ("long_row", "io_total_time,io_calls\n1.0,2,3\n", 2, 3),
        ("short_row", "io_total_time,io_calls\n1.0\n", 2, 1),
        ("empty_header_field", "PAPI_TOT_INS\n1,2\n", 1, 2),
    ]
}

/// Inputs that parse but carry odd cell content, as (name, text).
///
/// None of these is an error: unparseable cells become text.
pub fn odd_cell_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("words", "custom\nhello\n"),
        ("inf_nan", "custom,other\ninf,nan\n"),
        ("empty_cells", "custom,other\n,\n"),
        ("padded", "custom\n  42  \n"),
        ("capitalized_bool", "custom\nTrue\n"),
    ]
}
