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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::Result;
use clap::{Args, Subcommand, ValueEnum};
use profagg_core::{Limits, ThreadId};
use profagg_reduce::{Statistic, StoreConfig};
use std::path::PathBuf;

/// Environment variable overriding the per-file size limit, in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "PROFAGG_MAX_FILE_SIZE";

/// Output format for report commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Aggregate table selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatArg {
    /// Elementwise maximum across files
    Max,
    /// Elementwise minimum across files
    Min,
    /// Elementwise sum across files
    Sum,
}

impl From<StatArg> for Statistic {
    fn from(arg: StatArg) -> Self {
        match arg {
            StatArg::Max => Statistic::Max,
            StatArg::Min => Statistic::Min,
            StatArg::Sum => Statistic::Sum,
        }
    }
}

/// Options shared by every command that reads a run directory.
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Run directory holding one subdirectory per rank
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Reduce threads in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for --parallel (defaults to one per core)
    #[arg(short, long, value_name = "N", requires = "parallel")]
    pub jobs: Option<usize>,

    /// Fail on rows whose width differs from their header
    #[arg(long)]
    pub strict_width: bool,

    /// Highest number of thread ids probed during discovery
    #[arg(long, value_name = "N")]
    pub max_thread_scan: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl RunArgs {
    /// Build the store configuration from flags and environment.
    pub fn store_config(&self) -> StoreConfig {
        let mut limits = Limits {
            max_file_size: max_file_size(),
            ..Limits::default()
        };
        if let Some(scan) = self.max_thread_scan {
            limits = limits.with_max_thread_scan(scan);
        }

        let mut config = StoreConfig::from_limits(limits);
        config.parse.strict_width = self.strict_width;
        config.parallel = self.parallel;
        config.max_threads = self.jobs;
        config
    }
}

/// Maximum file size from `PROFAGG_MAX_FILE_SIZE`, or the default limit.
pub fn max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(Limits::default().max_file_size)
}

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use profagg_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List discovered thread ids and their files
    ///
    /// Probes `DIR/*/*-<id>.csv` for ids 0, 1, 2, ... until every CSV file
    /// under the run directory is accounted for.
    Threads {
        #[command(flatten)]
        run: RunArgs,

        /// Also list every file path
        #[arg(long)]
        files: bool,
    },

    /// Print the tables parsed from one profiling file
    Inspect {
        /// Profiling CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Show every row, not just table shapes
        #[arg(short, long)]
        rows: bool,

        /// Fail on rows whose width differs from their header
        #[arg(long)]
        strict_width: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print every raw SUMMARY value seen across the run
    Summary {
        #[command(flatten)]
        run: RunArgs,
    },

    /// Print one thread's aggregate tables
    Aggregate {
        #[command(flatten)]
        run: RunArgs,

        /// Thread id
        #[arg(short, long, value_name = "ID")]
        thread: ThreadId,

        /// Aggregate table to show
        #[arg(short, long, value_enum, default_value = "max")]
        stat: StatArg,

        /// Restrict output to one category (e.g. PAPI, DATA0)
        #[arg(short, long, value_name = "CATEGORY")]
        category: Option<String>,
    },

    /// Print the longest elapsed time of any thread
    MaxTime {
        #[command(flatten)]
        run: RunArgs,
    },

    /// Derive hardware-counter metrics per thread
    Metrics {
        #[command(flatten)]
        run: RunArgs,

        /// Aggregate table the counters are read from
        #[arg(short, long, value_enum, default_value = "max")]
        stat: StatArg,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if discovery, parsing or reduction fails, or if the
    /// requested thread or category is not present.
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Threads { run, files } => commands::threads(&run, files),
            Commands::Inspect {
                file,
                rows,
                strict_width,
                format,
            } => commands::inspect(&file, rows, strict_width, format),
            Commands::Summary { run } => commands::summary(&run),
            Commands::Aggregate {
                run,
                thread,
                stat,
                category,
            } => commands::aggregate(&run, thread, stat.into(), category.as_deref()),
            Commands::MaxTime { run } => commands::max_time(&run),
            Commands::Metrics { run, stat } => commands::metrics(&run, stat.into()),
        }
    }
}
