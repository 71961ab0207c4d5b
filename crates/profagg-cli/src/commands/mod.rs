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

//! CLI command implementations

mod aggregate;
mod inspect;
mod max_time;
mod metrics;
mod summary;
mod threads;

pub use aggregate::aggregate;
pub use inspect::inspect;
pub use max_time::max_time;
pub use metrics::metrics;
pub use summary::summary;
pub use threads::threads;

use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use colored::Colorize;
use profagg_core::{Category, CategoryTable};
use profagg_reduce::AggregateStore;
use serde::Serialize;
use tracing::debug;

/// Build the aggregate store for a run directory.
///
/// # Errors
///
/// Returns `Err` if `run.dir` is not a directory or if discovery, parsing or
/// reduction fails.
pub fn open_store(run: &RunArgs) -> Result<AggregateStore> {
    ensure_dir(run)?;
    let config = run.store_config();
    debug!(?config, "opening run directory");
    Ok(AggregateStore::open_with_config(&run.dir, &config)?)
}

fn ensure_dir(run: &RunArgs) -> Result<()> {
    if run.dir.is_dir() {
        Ok(())
    } else {
        Err(CliError::NotADirectory(run.dir.display().to_string()))
    }
}

/// Print a value as pretty JSON on stdout.
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(CliError::json_format)?;
    println!("{}", text);
    Ok(())
}

/// Print one category table: its shape, and optionally every row.
fn print_table(category: Category, table: &CategoryTable, rows: bool) {
    println!(
        "{} ({} columns, {} rows)",
        category.to_string().green().bold(),
        table.columns.len(),
        table.len()
    );
    if !rows {
        println!("  columns: [{}]", table.columns.join(", "));
        return;
    }
    for index in 0..table.len() {
        println!("  [{}]", index);
        for (column, cell) in table.row_entries(index) {
            println!("    {}: {} ({})", column.yellow(), cell, cell.type_name());
        }
    }
}
