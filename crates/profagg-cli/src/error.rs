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

//! Structured error types for the profagg CLI.
//!
//! Every command returns `Result<(), CliError>`; `main` prints the error as
//! `Error: ...` and exits with a failure code.

use profagg_core::{CoreError, ThreadId};
use profagg_csv::CsvError;
use profagg_reduce::ReduceError;
use thiserror::Error;

/// The main error type for CLI operations.
///
/// # Examples
///
/// ```rust
/// use profagg_cli::error::CliError;
/// use profagg_core::ThreadId;
///
/// let err = CliError::UnknownThread(ThreadId(9));
/// assert_eq!(err.to_string(), "Thread 9 was not found in the run directory");
/// ```
#[derive(Error, Debug)]
pub enum CliError {
    /// Discovery, parsing or reduction of a run directory failed.
    #[error(transparent)]
    Reduce(#[from] ReduceError),

    /// A single profiling file could not be parsed.
    #[error(transparent)]
    Csv(#[from] CsvError),

    /// A category or thread argument did not parse.
    #[error("Invalid input: {0}")]
    Core(#[from] CoreError),

    /// The requested thread id is not present.
    #[error("Thread {0} was not found in the run directory")]
    UnknownThread(ThreadId),

    /// The run directory argument is not a directory.
    #[error("'{0}' is not a directory")]
    NotADirectory(String),

    /// JSON output could not be produced.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },
}

impl CliError {
    /// Create a JSON formatting error.
    pub fn json_format(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}

/// Convenience type alias for `Result` with `CliError`.
pub type Result<T> = std::result::Result<T, CliError>;
