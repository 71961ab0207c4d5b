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

//! Summary command - raw SUMMARY values across a run

use super::{open_store, print_json};
use crate::cli::{OutputFormat, RunArgs};
use crate::error::Result;
use colored::Colorize;

/// Print every raw SUMMARY value, grouped by column.
///
/// Values appear in thread order, then file order within a thread, exactly
/// as they were written (surrounding whitespace included).
///
/// # Errors
///
/// Returns `Err` if the run directory cannot be reduced.
pub fn summary(run: &RunArgs) -> Result<()> {
    let store = open_store(run)?;
    let index = store.summary_index();

    if run.format == OutputFormat::Json {
        return print_json(index);
    }

    if index.is_empty() {
        println!("{}", "No SUMMARY tables found".yellow());
        return Ok(());
    }
    for column in index.columns() {
        let values = index.values(column).unwrap_or_default();
        println!("{} ({} values)", column.green(), values.len());
        for value in values {
            println!("  {:?}", value);
        }
    }
    Ok(())
}
