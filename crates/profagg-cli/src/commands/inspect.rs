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

//! Inspect command - parsed table visualization

use super::{print_json, print_table};
use crate::cli::{max_file_size, OutputFormat};
use crate::error::Result;
use colored::Colorize;
use profagg_core::{Limits, ParsedFile, SummaryIndex};
use profagg_csv::{parse_file_with_config, ParseConfig};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct InspectReport<'a> {
    tables: &'a ParsedFile,
    summary: &'a SummaryIndex,
}

/// Parse one profiling file and print its category tables.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or parsed.
///
/// # Examples
///
/// ```no_run
/// use profagg_cli::cli::OutputFormat;
/// use profagg_cli::commands::inspect;
/// use std::path::Path;
///
/// inspect(Path::new("run/rank0/app-0.csv"), true, false, OutputFormat::Text)?;
/// # Ok::<(), profagg_cli::error::CliError>(())
/// ```
pub fn inspect(file: &Path, rows: bool, strict_width: bool, format: OutputFormat) -> Result<()> {
    let limits = Limits {
        max_file_size: max_file_size(),
        ..Limits::default()
    };
    let config = ParseConfig {
        strict_width,
        ..ParseConfig::from_limits(&limits)
    };

    let mut summary = SummaryIndex::new();
    let parsed = parse_file_with_config(file, &mut summary, &config)?;

    if format == OutputFormat::Json {
        return print_json(&InspectReport {
            tables: &parsed,
            summary: &summary,
        });
    }

    println!("{} {}", "File:".cyan(), file.display());
    println!("{} {}", "Tables:".cyan(), parsed.len());
    for (category, table) in parsed.iter() {
        println!();
        print_table(category, table, rows);
    }
    Ok(())
}
