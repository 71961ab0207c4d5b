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

//! Aggregate command - one thread's reduced tables

use super::{open_store, print_json, print_table};
use crate::cli::{OutputFormat, RunArgs};
use crate::error::{CliError, Result};
use colored::Colorize;
use profagg_core::{Category, CategoryTable, ThreadId};
use profagg_reduce::Statistic;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct AggregateReport<'a> {
    thread: ThreadId,
    statistic: Statistic,
    file_count: usize,
    tables: BTreeMap<Category, &'a CategoryTable>,
}

/// Print the max, min or sum tables of one thread.
///
/// With `category`, only that table is printed; an absent category prints
/// nothing.
///
/// # Errors
///
/// Returns `Err` if the run cannot be reduced, the thread is not present,
/// or `category` is not a valid label.
pub fn aggregate(
    run: &RunArgs,
    thread: ThreadId,
    statistic: Statistic,
    category: Option<&str>,
) -> Result<()> {
    let filter: Option<Category> = category.map(str::parse::<Category>).transpose()?;

    let store = open_store(run)?;
    let record = store
        .record(thread)
        .ok_or(CliError::UnknownThread(thread))?;

    let tables: BTreeMap<Category, &CategoryTable> = record
        .table(statistic)
        .iter()
        .filter(|(category, _)| filter.map_or(true, |wanted| wanted == *category))
        .collect();

    if run.format == OutputFormat::Json {
        return print_json(&AggregateReport {
            thread,
            statistic,
            file_count: record.file_count(),
            tables,
        });
    }

    println!(
        "{} thread {}, {} of {} files",
        "Aggregate:".cyan(),
        thread,
        statistic,
        record.file_count()
    );
    for (category, table) in tables {
        println!();
        print_table(category, table, true);
    }
    Ok(())
}
