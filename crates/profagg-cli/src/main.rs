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

//! profagg command line interface

use clap::Parser;
use profagg_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// profagg - profiling CSV discovery and aggregation
///
/// Reads a run directory laid out as `DIR/<rank>/<name>-<thread>.csv`,
/// reduces every thread's files into max/min/sum tables and reports on them.
///
/// # Examples
///
/// ```bash
/// # Which threads ran?
/// profagg threads run/
///
/// # Longest thread, reducing in parallel
/// profagg max-time run/ --parallel
///
/// # Counter ratios as JSON
/// profagg metrics run/ --format json
/// ```
#[derive(Parser)]
#[command(name = "profagg")]
#[command(author, version, about = "profagg - profiling CSV discovery and aggregation", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG applies otherwise
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) if verbose == 0 => filter,
        _ => EnvFilter::new(format!("profagg={}", level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
