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

//! Threads command - thread-topology listing

use super::{ensure_dir, print_json};
use crate::cli::{OutputFormat, RunArgs};
use crate::error::Result;
use colored::Colorize;
use profagg_core::ThreadId;
use profagg_reduce::discover_with_limits;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct ThreadReport<'a> {
    thread: ThreadId,
    files: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    paths: Option<&'a [PathBuf]>,
}

#[derive(Serialize)]
struct TopologyReport<'a> {
    total_files: usize,
    threads: Vec<ThreadReport<'a>>,
}

/// List the thread ids present in a run directory.
///
/// Only discovery runs; no file is parsed.
///
/// # Errors
///
/// Returns `Err` if `run.dir` is not a directory or discovery does not
/// converge.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use profagg_cli::cli::RunArgs;
/// use profagg_cli::commands::threads;
///
/// #[derive(Parser)]
/// struct Args {
///     #[command(flatten)]
///     run: RunArgs,
/// }
///
/// let args = Args::parse_from(["threads", "run"]);
/// threads(&args.run, true)?;
/// # Ok::<(), profagg_cli::error::CliError>(())
/// ```
pub fn threads(run: &RunArgs, files: bool) -> Result<()> {
    ensure_dir(run)?;
    let config = run.store_config();
    let topology = discover_with_limits(&run.dir, &config.limits)?;

    let report = TopologyReport {
        total_files: topology.total_files(),
        threads: topology
            .iter()
            .map(|(thread, paths)| ThreadReport {
                thread,
                files: paths.len(),
                paths: files.then_some(paths),
            })
            .collect(),
    };

    match run.format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            println!(
                "{} {} threads, {} files",
                "Topology:".cyan(),
                report.threads.len(),
                report.total_files
            );
            for entry in &report.threads {
                println!("  thread {}: {} files", entry.thread.to_string().green(), entry.files);
                for path in entry.paths.unwrap_or_default() {
                    println!("    {}", path.display());
                }
            }
            Ok(())
        }
    }
}
