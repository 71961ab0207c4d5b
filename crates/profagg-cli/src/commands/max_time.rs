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

//! Max-time command

use super::{open_store, print_json};
use crate::cli::{OutputFormat, RunArgs};
use crate::error::Result;
use profagg_reduce::TOTAL_TIME_COLUMN;
use serde_json::json;

/// Print the longest `total_time_seconds` of any thread.
///
/// # Errors
///
/// Returns `Err` if the run holds no threads or a thread lacks a numeric
/// elapsed time.
pub fn max_time(run: &RunArgs) -> Result<()> {
    let store = open_store(run)?;
    let seconds = store.calculate_max_time()?;

    match run.format {
        OutputFormat::Json => print_json(&json!({
            "column": TOTAL_TIME_COLUMN,
            "max_time_seconds": seconds,
            "threads": store.thread_ids().count(),
        })),
        OutputFormat::Text => {
            println!("{}", seconds);
            Ok(())
        }
    }
}
