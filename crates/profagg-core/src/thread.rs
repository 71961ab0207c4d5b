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

//! Thread identifiers encoded in profiling file names.

use crate::error::CoreError;
use std::fmt;
use std::str::FromStr;

/// Integer slot identifying a thread within and across ranks.
///
/// Every profiling file name ends in `-<id>.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ThreadId(pub u32);

impl ThreadId {
    /// The numeric id.
    pub fn get(self) -> u32 {
        self.0
    }

    /// File-name suffix that identifies this thread, e.g. `-3.csv`.
    pub fn file_suffix(self) -> String {
        format!("-{}.csv", self.0)
    }

    /// Extract the thread id from a file name such as `lulesh-host-4021-3.csv`.
    ///
    /// # Examples
    ///
    /// ```
    /// use profagg_core::ThreadId;
    ///
    /// assert_eq!(ThreadId::from_file_name("app-1042-3.csv"), Some(ThreadId(3)));
    /// assert_eq!(ThreadId::from_file_name("app.csv"), None);
    /// ```
    pub fn from_file_name(name: &str) -> Option<ThreadId> {
        let stem = name.strip_suffix(".csv")?;
        let (_, digits) = stem.rsplit_once('-')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok().map(ThreadId)
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ThreadId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(ThreadId)
            .map_err(|_| CoreError::InvalidThreadId(s.to_string()))
    }
}

impl From<u32> for ThreadId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
