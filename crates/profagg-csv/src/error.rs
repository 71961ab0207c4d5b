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

//! Error types for profiling CSV parsing.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// CSV parsing error types.
///
/// Every failure while reading one profiling file is fatal for that file;
/// unparseable cell content is not an error (it becomes text).
///
/// # Examples
///
/// ```
/// use profagg_csv::CsvError;
///
/// let err = CsvError::WidthMismatch {
///     expected: 5,
///     actual: 3,
///     row: 10,
/// };
///
/// assert_eq!(
///     err.to_string(),
///     "Row width mismatch: expected 5 columns, got 3 in row 10"
/// );
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// CSV syntax error at a specific line.
    ///
    /// # Examples
    ///
    /// ```
    /// use profagg_csv::CsvError;
    ///
    /// let err = CsvError::ParseError {
    ///     line: 42,
    ///     message: "invalid UTF-8".to_string(),
    /// };
    /// assert!(err.to_string().contains("line 42"));
    /// ```
    #[error("CSV parse error at line {line}: {message}")]
    ParseError {
        /// Line number where the error occurred (1-based).
        line: usize,
        /// Detailed error message.
        message: String,
    },

    /// Data row width differs from its header (strict mode only).
    #[error("Row width mismatch: expected {expected} columns, got {actual} in row {row}")]
    WidthMismatch {
        /// Number of header columns.
        expected: usize,
        /// Number of fields in the data row.
        actual: usize,
        /// Line number of the data row (1-based).
        row: usize,
    },

    /// Record count exceeded the configured limit.
    ///
    /// # Examples
    ///
    /// ```
    /// use profagg_csv::CsvError;
    ///
    /// let err = CsvError::SecurityLimit {
    ///     limit: 1_000_000,
    ///     actual: 1_000_001,
    /// };
    /// assert!(err.to_string().contains("Security limit"));
    /// ```
    #[error("Security limit exceeded: row count {actual} exceeds maximum {limit}")]
    SecurityLimit {
        /// Maximum allowed records.
        limit: usize,
        /// Record count reached.
        actual: usize,
    },

    /// File is larger than the configured maximum and was not read.
    #[error("File '{}' is too large ({actual} bytes). Maximum allowed: {max} bytes", .path.display())]
    FileTooLarge {
        /// The offending file.
        path: PathBuf,
        /// Actual size in bytes.
        actual: u64,
        /// Configured maximum in bytes.
        max: u64,
    },

    /// I/O error during reading.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any of the above, attributed to a file.
    #[error("{}: {}", .path.display(), .source)]
    File {
        /// The file being parsed.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: Box<CsvError>,
    },
}

/// Convenience type alias for `Result` with `CsvError`.
pub type Result<T> = std::result::Result<T, CsvError>;

impl CsvError {
    /// Attribute an error to a file, unless it already names one.
    ///
    /// # Examples
    ///
    /// ```
    /// use profagg_csv::CsvError;
    ///
    /// let err = CsvError::ParseError {
    ///     line: 3,
    ///     message: "unterminated quote".to_string(),
    /// };
    /// let err = err.with_path("run/rank0/app-0.csv");
    /// assert!(err.to_string().starts_with("run/rank0/app-0.csv: "));
    /// ```
    pub fn with_path(self, path: impl AsRef<Path>) -> Self {
        match self {
            err @ (CsvError::File { .. } | CsvError::FileTooLarge { .. }) => err,
            other => CsvError::File {
                path: path.as_ref().to_path_buf(),
                source: Box::new(other),
            },
        }
    }

    /// The innermost error, skipping file attribution.
    pub fn root_cause(&self) -> &CsvError {
        match self {
            CsvError::File { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = CsvError::ParseError {
            line: 42,
            message: "invalid UTF-8".to_string(),
        };
        assert_eq!(err.to_string(), "CSV parse error at line 42: invalid UTF-8");
    }

    #[test]
    fn test_security_limit_display() {
        let err = CsvError::SecurityLimit {
            limit: 10,
            actual: 11,
        };
        assert_eq!(
            err.to_string(),
            "Security limit exceeded: row count 11 exceeds maximum 10"
        );
    }

    #[test]
    fn test_file_too_large_display() {
        let err = CsvError::FileTooLarge {
            path: PathBuf::from("big.csv"),
            actual: 2048,
            max: 1024,
        };
        let msg = err.to_string();
        assert!(msg.contains("big.csv"));
        assert!(msg.contains("2048 bytes"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let csv_err = CsvError::from(io_err);
        assert!(csv_err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_with_path_wraps_once() {
        let err = CsvError::SecurityLimit { limit: 1, actual: 2 }
            .with_path("a.csv")
            .with_path("b.csv");
        assert!(err.to_string().starts_with("a.csv: "));
        assert!(matches!(err.root_cause(), CsvError::SecurityLimit { .. }));
    }

    #[test]
    fn test_with_path_keeps_file_too_large() {
        let err = CsvError::FileTooLarge {
            path: PathBuf::from("big.csv"),
            actual: 2,
            max: 1,
        }
        .with_path("other.csv");
        assert!(matches!(err, CsvError::FileTooLarge { .. }));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CsvError>();
    }
}
