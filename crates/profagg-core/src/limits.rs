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

//! Resource limits for parsing and discovery.

/// Configurable limits for a single analysis run.
///
/// These bound the work done on untrusted input: oversized files are refused
/// before they are read, and thread discovery gives up instead of scanning
/// forever when a run directory holds files it cannot attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum size of one CSV file in bytes (default: 256MB).
    pub max_file_size: u64,
    /// Maximum number of CSV records in one file (default: 1M).
    pub max_rows: usize,
    /// Maximum number of candidate thread ids probed by discovery (default: 65536).
    pub max_thread_scan: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_file_size: 256 * 1024 * 1024, // 256MB
            max_rows: 1_000_000,
            max_thread_scan: 65_536,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_file_size: u64::MAX,
            max_rows: usize::MAX,
            max_thread_scan: u32::MAX,
        }
    }

    /// Replace the discovery scan bound.
    pub fn with_max_thread_scan(mut self, max_thread_scan: u32) -> Self {
        self.max_thread_scan = max_thread_scan;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_file_size, 256 * 1024 * 1024);
        assert_eq!(limits.max_rows, 1_000_000);
        assert_eq!(limits.max_thread_scan, 65_536);
    }

    #[test]
    fn test_unlimited() {
        let limits = Limits::unlimited();
        assert_eq!(limits.max_file_size, u64::MAX);
        assert_eq!(limits.max_thread_scan, u32::MAX);
    }

    #[test]
    fn test_with_max_thread_scan() {
        let limits = Limits::default().with_max_thread_scan(8);
        assert_eq!(limits.max_thread_scan, 8);
        assert_eq!(limits.max_rows, 1_000_000);
    }
}
