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

//! Error types for discovery and reduction.

use profagg_core::{Category, ThreadId};
use profagg_csv::CsvError;
use thiserror::Error;

/// Errors raised while discovering, parsing and reducing a run directory.
///
/// Every variant is fatal for the store being built.
///
/// # Examples
///
/// ```
/// use profagg_reduce::ReduceError;
///
/// let err = ReduceError::DiscoveryDiverged {
///     scanned: 16,
///     attributed: 6,
///     total: 8,
/// };
/// assert!(err.to_string().contains("failed to converge"));
/// ```
#[derive(Debug, Error)]
pub enum ReduceError {
    /// The thread-id scan ended without accounting for every CSV file.
    #[error(
        "Thread-topology discovery failed to converge: {attributed} of {total} files attributed after scanning {scanned} thread ids"
    )]
    DiscoveryDiverged {
        /// Candidate ids tried.
        scanned: u32,
        /// Files matched to some thread id.
        attributed: usize,
        /// CSV files present under the run directory.
        total: usize,
    },

    /// A discovery pattern could not be compiled.
    #[error("Invalid discovery pattern '{pattern}': {source}")]
    Pattern {
        /// The pattern text.
        pattern: String,
        /// Underlying glob error.
        #[source]
        source: glob::PatternError,
    },

    /// A directory entry could not be read during discovery.
    #[error("Cannot read directory entry: {0}")]
    Glob(#[from] glob::GlobError),

    /// A profiling file could not be parsed.
    #[error(transparent)]
    Csv(#[from] CsvError),

    /// A discovered thread id turned out to have no files.
    #[error("Thread {0} has no files")]
    EmptyThread(ThreadId),

    /// A query needed at least one thread.
    #[error("No thread ids were discovered")]
    NoThreads,

    /// A thread lacks a numeric value a query needs.
    #[error("Thread {thread} has no numeric {category} value for column '{column}'")]
    MissingValue {
        /// The thread lacking the value.
        thread: ThreadId,
        /// Category that was searched.
        category: Category,
        /// Column that was searched.
        column: String,
    },

    /// The dedicated worker pool could not be created.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Convenience type alias for `Result` with `ReduceError`.
pub type Result<T> = std::result::Result<T, ReduceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_display() {
        let err = ReduceError::MissingValue {
            thread: ThreadId(3),
            category: Category::Summary,
            column: "total_time_seconds".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Thread 3 has no numeric SUMMARY value for column 'total_time_seconds'"
        );
    }

    #[test]
    fn test_csv_error_is_transparent() {
        let inner = CsvError::SecurityLimit {
            limit: 1,
            actual: 2,
        };
        let msg = inner.to_string();
        let err: ReduceError = inner.into();
        assert_eq!(err.to_string(), msg);
    }

    #[test]
    fn test_pattern_error_display() {
        let source = glob::Pattern::new("[").unwrap_err();
        let err = ReduceError::Pattern {
            pattern: "[".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Invalid discovery pattern '['"));
    }
}
