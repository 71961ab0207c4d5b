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

//! Cross-file elementwise reduction.

use profagg_core::{Category, CategoryTable, Cell, ParsedFile};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Which aggregate table to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Statistic {
    /// Elementwise maximum.
    Max,
    /// Elementwise minimum.
    Min,
    /// Elementwise sum.
    Sum,
}

impl Statistic {
    /// All statistics in display order.
    pub const ALL: [Statistic; 3] = [Statistic::Max, Statistic::Min, Statistic::Sum];

    /// Lowercase name, e.g. `"max"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Max => "max",
            Self::Min => "min",
            Self::Sum => "sum",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Statistic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "max" => Ok(Self::Max),
            "min" => Ok(Self::Min),
            "sum" => Ok(Self::Sum),
            _ => Err(format!("unknown statistic '{}' (expected max, min or sum)", s)),
        }
    }
}

/// Per-thread aggregate of every file sharing a thread id.
///
/// The three tables are shaped like a [`ParsedFile`]. Rows are matched
/// across files purely by position within a category.
///
/// # Examples
///
/// ```
/// use profagg_core::{Category, Cell, SummaryIndex};
/// use profagg_csv::parse_str;
/// use profagg_reduce::AggregateRecord;
///
/// let mut summary = SummaryIndex::new();
/// let a = parse_str("PAPI_TOT_INS\n100\n", &mut summary).unwrap();
/// let b = parse_str("PAPI_TOT_INS\n300\n", &mut summary).unwrap();
///
/// let mut record = AggregateRecord::from_first(a);
/// record.fold(&b);
///
/// assert_eq!(record.file_count(), 2);
/// assert_eq!(record.sum().value(Category::Papi, 0, "PAPI_TOT_INS"), Some(&Cell::Int(400)));
/// assert_eq!(record.max().value(Category::Papi, 0, "PAPI_TOT_INS"), Some(&Cell::Int(300)));
/// assert_eq!(record.min().value(Category::Papi, 0, "PAPI_TOT_INS"), Some(&Cell::Int(100)));
/// assert_eq!(record.mean(Category::Papi, 0, "PAPI_TOT_INS"), Some(200.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AggregateRecord {
    max: ParsedFile,
    min: ParsedFile,
    sum: ParsedFile,
    file_count: usize,
}

impl AggregateRecord {
    /// Seed an aggregate with its first file.
    pub fn from_first(first: ParsedFile) -> Self {
        Self {
            max: first.clone(),
            min: first.clone(),
            sum: first,
            file_count: 1,
        }
    }

    /// Fold one more file into the aggregate.
    ///
    /// Categories the aggregate has not seen yet are copied in whole and
    /// take no further part in this fold. For every other category, each
    /// row index present on both sides and each column present in both rows
    /// is summed and compared; anything present on one side only is left
    /// untouched.
    pub fn fold(&mut self, incoming: &ParsedFile) {
        let mut inserted = Vec::new();
        for (category, table) in incoming.iter() {
            if !self.sum.contains(category) {
                self.max.insert(category, table.clone());
                self.min.insert(category, table.clone());
                self.sum.insert(category, table.clone());
                inserted.push(category);
            }
        }

        for (category, table) in incoming.iter() {
            if inserted.contains(&category) {
                continue;
            }
            if let Some(sum) = self.sum.get_mut(category) {
                combine(sum, table, |acc, cell| {
                    if let Some(total) = acc.checked_add(cell) {
                        *acc = total;
                    }
                });
            }
            if let Some(max) = self.max.get_mut(category) {
                combine(max, table, |acc, cell| {
                    if cell.compare(acc) == Ordering::Greater {
                        *acc = cell.clone();
                    }
                });
            }
            if let Some(min) = self.min.get_mut(category) {
                combine(min, table, |acc, cell| {
                    if cell.compare(acc) == Ordering::Less {
                        *acc = cell.clone();
                    }
                });
            }
        }

        self.file_count += 1;
        debug!(
            files = self.file_count,
            new_categories = inserted.len(),
            "folded file into aggregate"
        );
    }

    /// Elementwise maxima.
    pub fn max(&self) -> &ParsedFile {
        &self.max
    }

    /// Elementwise minima.
    pub fn min(&self) -> &ParsedFile {
        &self.min
    }

    /// Elementwise sums.
    pub fn sum(&self) -> &ParsedFile {
        &self.sum
    }

    /// The table for one statistic.
    pub fn table(&self, statistic: Statistic) -> &ParsedFile {
        match statistic {
            Statistic::Max => &self.max,
            Statistic::Min => &self.min,
            Statistic::Sum => &self.sum,
        }
    }

    /// Number of files folded in, including the seed.
    pub fn file_count(&self) -> usize {
        self.file_count
    }

    /// Sum divided by file count for one numeric cell.
    ///
    /// Returns `None` when the cell is missing or not numeric.
    pub fn mean(&self, category: Category, row: usize, column: &str) -> Option<f64> {
        let total = self.sum.value(category, row, column)?.as_number()?;
        Some(total / self.file_count as f64)
    }
}

/// Fold a sequence of parsed files, in order.
///
/// Returns `None` for an empty sequence.
pub fn reduce<I>(files: I) -> Option<AggregateRecord>
where
    I: IntoIterator<Item = ParsedFile>,
{
    let mut files = files.into_iter();
    let mut record = AggregateRecord::from_first(files.next()?);
    for file in files {
        record.fold(&file);
    }
    Some(record)
}

/// Apply `merge` to every cell present in both tables at the same row
/// index and column name.
fn combine<F>(target: &mut CategoryTable, incoming: &CategoryTable, mut merge: F)
where
    F: FnMut(&mut Cell, &Cell),
{
    let rows = target.rows.len().min(incoming.rows.len());
    for row in 0..rows {
        for index in 0..target.columns.len() {
            let column = &target.columns[index];
            // repeated header names resolve to their first occurrence
            if target.column_index(column) != Some(index) {
                continue;
            }
            let Some(cell) = incoming.value(row, column) else {
                continue;
            };
            if let Some(acc) = target.rows[row].get_mut(index) {
                merge(acc, cell);
            }
        }
    }
}
