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

//! Table categories and header-keyword sniffing.
//!
//! Profiling CSV files do not declare what each stacked table holds. The
//! category is recovered from the header line: fields are scanned left to
//! right and each one is tested against [`CATEGORY_RULES`] in order. The first
//! field that contains a rule's keyword decides the category. Headers with no
//! matching field get a synthesized [`Category::Data`] label numbered by how
//! many unmatched headers the same file produced before it.

use crate::error::CoreError;
use std::fmt;
use std::str::FromStr;

/// Category of one table within a parsed file.
///
/// The declaration order is the sniffing priority order, and is also the
/// order in which categories iterate inside a [`ParsedFile`](crate::ParsedFile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Run summary (executable, host, total time).
    Summary,
    /// `getrusage` counters.
    Rusage,
    /// Dynamic memory high-water marks.
    Dmem,
    /// I/O call timings.
    Io,
    /// MPI call timings.
    Mpi,
    /// OpenMP tools interface timings.
    Ompt,
    /// Memory allocation calls.
    MemAlloc,
    /// Memory free calls.
    MemFree,
    /// PAPI hardware counters.
    Papi,
    /// Unrecognized header, numbered per file.
    Data(u32),
}

/// Ordered (keyword, category) sniffing rules; the first hit wins.
pub const CATEGORY_RULES: &[(&str, Category)] = &[
    ("executable", Category::Summary),
    ("utime_seconds", Category::Rusage),
    ("dmem_high_water_mark_kB", Category::Dmem),
    ("io_total_time", Category::Io),
    ("total_mpi_time_seconds", Category::Mpi),
    ("idle_time", Category::Ompt),
    ("allocation_calls", Category::MemAlloc),
    ("free_calls", Category::MemFree),
    ("PAPI", Category::Papi),
];

impl Category {
    /// Every named (non-`DATA`) category in priority order.
    pub const NAMED: [Category; 9] = [
        Category::Summary,
        Category::Rusage,
        Category::Dmem,
        Category::Io,
        Category::Mpi,
        Category::Ompt,
        Category::MemAlloc,
        Category::MemFree,
        Category::Papi,
    ];

    /// Canonical label, e.g. `"SUMMARY"`. `DATA<n>` labels are rendered by
    /// `Display`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Summary => "SUMMARY",
            Self::Rusage => "RUSAGE",
            Self::Dmem => "DMEM",
            Self::Io => "IO",
            Self::Mpi => "MPI",
            Self::Ompt => "OMPT",
            Self::MemAlloc => "MEMALLOC",
            Self::MemFree => "MEMFREE",
            Self::Papi => "PAPI",
            Self::Data(_) => "DATA",
        }
    }

    /// Match a single header field against the keyword rules.
    pub fn match_field(field: &str) -> Option<Category> {
        CATEGORY_RULES
            .iter()
            .find(|(keyword, _)| field.contains(keyword))
            .map(|(_, category)| *category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data(n) => write!(f, "DATA{}", n),
            other => f.write_str(other.label()),
        }
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(category) = Self::NAMED.iter().find(|c| c.label() == s) {
            return Ok(*category);
        }
        s.strip_prefix("DATA")
            .and_then(|n| n.parse::<u32>().ok())
            .map(Category::Data)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Category {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// Per-file category sniffer.
///
/// Holds the count of unmatched headers seen so far so that successive
/// unknown tables in one file become `DATA0`, `DATA1`, ...
#[derive(Debug, Default, Clone)]
pub struct CategorySniffer {
    unmatched: u32,
}

impl CategorySniffer {
    /// Create a sniffer for a new file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one (already trimmed) header line.
    ///
    /// # Examples
    ///
    /// ```
    /// use profagg_core::{Category, CategorySniffer};
    ///
    /// let mut sniffer = CategorySniffer::new();
    /// assert_eq!(sniffer.classify(&["host", "executable"]), Category::Summary);
    /// assert_eq!(sniffer.classify(&["foo", "bar"]), Category::Data(0));
    /// assert_eq!(sniffer.classify(&["PAPI_TOT_CYC"]), Category::Papi);
    /// assert_eq!(sniffer.classify(&["baz"]), Category::Data(1));
    /// ```
    pub fn classify<S: AsRef<str>>(&mut self, header: &[S]) -> Category {
        if let Some(category) = header
            .iter()
            .find_map(|field| Category::match_field(field.as_ref()))
        {
            return category;
        }

        let category = Category::Data(self.unmatched);
        self.unmatched += 1;
        category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_rule_matches() {
        for (keyword, expected) in CATEGORY_RULES {
            let field = format!("prefix_{}_suffix", keyword);
            assert_eq!(Category::match_field(&field), Some(*expected), "{}", keyword);
        }
    }

    #[test]
    fn test_rule_priority_within_one_field() {
        // A field carrying two keywords resolves to the earlier rule.
        assert_eq!(
            Category::match_field("executable_PAPI"),
            Some(Category::Summary)
        );
        assert_eq!(
            Category::match_field("PAPI_free_calls"),
            Some(Category::MemFree)
        );
    }

    #[test]
    fn test_leftmost_field_wins() {
        let mut sniffer = CategorySniffer::new();
        let header = ["PAPI_TOT_INS", "executable"];
        assert_eq!(sniffer.classify(&header), Category::Papi);
    }

    #[test]
    fn test_unmatched_headers_are_numbered() {
        let mut sniffer = CategorySniffer::new();
        assert_eq!(sniffer.classify(&["a"]), Category::Data(0));
        assert_eq!(sniffer.classify(&["executable"]), Category::Summary);
        assert_eq!(sniffer.classify(&["b"]), Category::Data(1));
        assert_eq!(sniffer.classify(&["c"]), Category::Data(2));
    }

    #[test]
    fn test_empty_header_is_unmatched() {
        let mut sniffer = CategorySniffer::new();
        let header: [&str; 0] = [];
        assert_eq!(sniffer.classify(&header), Category::Data(0));
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(Category::match_field("papi_tot_ins"), None);
        assert_eq!(Category::match_field("dmem_high_water_mark_kb"), None);
    }

    #[test]
    fn test_display_and_parse() {
        for category in Category::NAMED {
            let label = category.to_string();
            assert_eq!(label.parse::<Category>().unwrap(), category);
        }
        assert_eq!(Category::Data(3).to_string(), "DATA3");
        assert_eq!("DATA12".parse::<Category>().unwrap(), Category::Data(12));
    }

    #[test]
    fn test_parse_unknown_label() {
        let err = "TIMERS".parse::<Category>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownCategory(ref s) if s == "TIMERS"));
        assert!("DATA".parse::<Category>().is_err());
    }

    #[test]
    fn test_ordering_follows_priority() {
        assert!(Category::Summary < Category::Rusage);
        assert!(Category::MemFree < Category::Papi);
        assert!(Category::Papi < Category::Data(0));
        assert!(Category::Data(0) < Category::Data(1));
    }
}
