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

//! profagg CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **threads**: List the thread ids discovered in a run directory
//! - **inspect**: Print the category tables parsed from one file
//! - **summary**: Print every raw SUMMARY value across a run
//! - **aggregate**: Print one thread's max/min/sum tables
//! - **max-time**: Print the longest elapsed time of any thread
//! - **metrics**: Derive hardware-counter metrics per thread
//!
//! Every run-directory command accepts `--format json`, `--parallel` and
//! `--strict-width`. The per-file size limit can be raised or lowered with
//! the `PROFAGG_MAX_FILE_SIZE` environment variable (bytes).
//!
//! # Examples
//!
//! ```no_run
//! use clap::Parser;
//! use profagg_cli::cli::Commands;
//!
//! #[derive(Parser)]
//! struct Cli {
//!     #[command(subcommand)]
//!     command: Commands,
//! }
//!
//! let cli = Cli::parse_from(["profagg", "max-time", "run"]);
//! cli.command.execute()?;
//! # Ok::<(), profagg_cli::error::CliError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod error;
