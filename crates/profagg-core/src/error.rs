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

//! Error types for the core data model.

use thiserror::Error;

/// Errors raised by the core data model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A category label that is neither a named category nor `DATA<n>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use profagg_core::CoreError;
    ///
    /// let err = CoreError::UnknownCategory("TIMERS".to_string());
    /// assert_eq!(err.to_string(), "Unknown category label: TIMERS");
    /// ```
    #[error("Unknown category label: {0}")]
    UnknownCategory(String),

    /// A thread id that is not a non-negative integer.
    #[error("Invalid thread id: {0}")]
    InvalidThreadId(String),
}

/// Convenience type alias for `Result` with `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_thread_id_display() {
        let err = CoreError::InvalidThreadId("-3".to_string());
        assert_eq!(err.to_string(), "Invalid thread id: -3");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CoreError>();
    }
}
