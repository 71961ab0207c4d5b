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

//! Parsed tables: rows, category tables, whole files and the summary index.

use crate::category::Category;
use crate::value::Cell;
use std::collections::BTreeMap;

/// One data row, positionally aligned with its table's header.
///
/// A row may be shorter than the header when the source line had fewer
/// fields; the trailing columns are then simply absent.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Create a row from cells.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Cell at a column position.
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Mutable cell at a column position.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    /// Number of cells present.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the row holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in column order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// A table of one category: header plus rows.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryTable {
    /// Column names from the header line, trimmed.
    pub columns: Vec<String>,
    /// Data rows in file order.
    pub rows: Vec<Row>,
}

impl CategoryTable {
    /// Create an empty table for a header.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row.
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Position of a column by name.
    ///
    /// Headers can in principle repeat a name; the first occurrence wins.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Returns true if the header contains the column.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell at (row, column name).
    ///
    /// # Examples
    ///
    /// ```
    /// use profagg_core::{Cell, CategoryTable, Row};
    ///
    /// let mut table = CategoryTable::new(vec!["host".into(), "total_time_seconds".into()]);
    /// table.push_row(Row::new(vec![Cell::from("n01"), Cell::Float(12.5)]));
    ///
    /// assert_eq!(table.value(0, "total_time_seconds"), Some(&Cell::Float(12.5)));
    /// assert_eq!(table.value(1, "host"), None);
    /// ```
    pub fn value(&self, row: usize, column: &str) -> Option<&Cell> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }

    /// Mutable cell at (row, column name).
    pub fn value_mut(&mut self, row: usize, column: &str) -> Option<&mut Cell> {
        let index = self.column_index(column)?;
        self.rows.get_mut(row)?.get_mut(index)
    }

    /// Iterate a row as `(column, cell)` pairs, stopping at the shorter side.
    pub fn row_entries(&self, row: usize) -> impl Iterator<Item = (&str, &Cell)> {
        let cells = self.rows.get(row).map(Row::cells).unwrap_or_default();
        self.columns.iter().map(String::as_str).zip(cells.iter())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Every category table parsed from one file.
///
/// Also used as the shape of each statistic table in an aggregate record.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ParsedFile {
    tables: BTreeMap<Category, CategoryTable>,
}

impl ParsedFile {
    /// Create an empty parsed file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a table, returning the one it replaced.
    pub fn insert(&mut self, category: Category, table: CategoryTable) -> Option<CategoryTable> {
        self.tables.insert(category, table)
    }

    /// Table for a category.
    pub fn get(&self, category: Category) -> Option<&CategoryTable> {
        self.tables.get(&category)
    }

    /// Mutable table for a category.
    pub fn get_mut(&mut self, category: Category) -> Option<&mut CategoryTable> {
        self.tables.get_mut(&category)
    }

    /// Returns true if the category is present.
    pub fn contains(&self, category: Category) -> bool {
        self.tables.contains_key(&category)
    }

    /// Categories in priority order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.tables.keys().copied()
    }

    /// `(category, table)` pairs in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryTable)> {
        self.tables.iter().map(|(c, t)| (*c, t))
    }

    /// Mutable `(category, table)` pairs in priority order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Category, &mut CategoryTable)> {
        self.tables.iter_mut().map(|(c, t)| (*c, t))
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if no table was parsed.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Shorthand for `get(category)?.value(row, column)`.
    pub fn value(&self, category: Category, row: usize, column: &str) -> Option<&Cell> {
        self.get(category)?.value(row, column)
    }
}

/// Raw SUMMARY values keyed by column, accumulated across every parsed file.
///
/// Values are stored exactly as they appeared in the file (not trimmed, not
/// coerced), in arrival order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SummaryIndex {
    columns: BTreeMap<String, Vec<String>>,
}

impl SummaryIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one raw value for a column.
    pub fn record(&mut self, column: &str, raw: &str) {
        self.columns
            .entry(column.to_string())
            .or_default()
            .push(raw.to_string());
    }

    /// Every value seen for a column, in arrival order.
    pub fn values(&self, column: &str) -> Option<&[String]> {
        self.columns.get(column).map(Vec::as_slice)
    }

    /// Column names in sorted order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Append everything from another index after this one's values.
    pub fn merge(&mut self, other: SummaryIndex) {
        for (column, values) in other.columns {
            self.columns.entry(column).or_default().extend(values);
        }
    }

    /// Number of distinct columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_table() -> CategoryTable {
        let mut table = CategoryTable::new(vec![
            "executable".to_string(),
            "total_time_seconds".to_string(),
            "ranks".to_string(),
        ]);
        table.push_row(Row::new(vec![
            Cell::from("a.out"),
            Cell::Float(10.5),
            Cell::Int(4),
        ]));
        table
    }

    // ==================== CategoryTable tests ====================

    #[test]
    fn test_value_lookup() {
        let table = summary_table();
        assert_eq!(table.value(0, "ranks"), Some(&Cell::Int(4)));
        assert_eq!(table.value(0, "missing"), None);
        assert_eq!(table.value(3, "ranks"), None);
    }

    #[test]
    fn test_value_mut() {
        let mut table = summary_table();
        *table.value_mut(0, "ranks").unwrap() = Cell::Int(8);
        assert_eq!(table.value(0, "ranks"), Some(&Cell::Int(8)));
    }

    #[test]
    fn test_short_row_lacks_trailing_columns() {
        let mut table = CategoryTable::new(vec!["a".to_string(), "b".to_string()]);
        table.push_row(Row::new(vec![Cell::Int(1)]));
        assert_eq!(table.value(0, "a"), Some(&Cell::Int(1)));
        assert_eq!(table.value(0, "b"), None);
        assert_eq!(table.row_entries(0).count(), 1);
    }

    #[test]
    fn test_row_entries_pairs_columns() {
        let table = summary_table();
        let entries: Vec<_> = table.row_entries(0).collect();
        assert_eq!(entries[1], ("total_time_seconds", &Cell::Float(10.5)));
        assert_eq!(entries.len(), 3);
        assert_eq!(table.row_entries(9).count(), 0);
    }

    // ==================== ParsedFile tests ====================

    #[test]
    fn test_parsed_file_orders_by_priority() {
        let mut file = ParsedFile::new();
        file.insert(Category::Papi, CategoryTable::default());
        file.insert(Category::Data(0), CategoryTable::default());
        file.insert(Category::Summary, summary_table());

        let order: Vec<_> = file.categories().collect();
        assert_eq!(order, vec![Category::Summary, Category::Papi, Category::Data(0)]);
    }

    #[test]
    fn test_parsed_file_insert_replaces() {
        let mut file = ParsedFile::new();
        assert!(file.insert(Category::Io, CategoryTable::default()).is_none());
        assert!(file.insert(Category::Io, summary_table()).is_some());
        assert_eq!(file.len(), 1);
        assert_eq!(
            file.value(Category::Io, 0, "executable"),
            Some(&Cell::from("a.out"))
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = ParsedFile::new();
        original.insert(Category::Summary, summary_table());
        let mut copy = original.clone();
        *copy
            .get_mut(Category::Summary)
            .unwrap()
            .value_mut(0, "ranks")
            .unwrap() = Cell::Int(99);

        assert_eq!(original.value(Category::Summary, 0, "ranks"), Some(&Cell::Int(4)));
    }

    // ==================== SummaryIndex tests ====================

    #[test]
    fn test_summary_index_accumulates_in_order() {
        let mut index = SummaryIndex::new();
        index.record("executable", " a.out");
        index.record("executable", "b.out ");
        assert_eq!(index.values("executable").unwrap(), [" a.out", "b.out "]);
        assert_eq!(index.values("host"), None);
    }

    #[test]
    fn test_summary_index_merge_appends() {
        let mut first = SummaryIndex::new();
        first.record("host", "n01");
        let mut second = SummaryIndex::new();
        second.record("host", "n02");
        second.record("ranks", "4");

        first.merge(second);
        assert_eq!(first.values("host").unwrap(), ["n01", "n02"]);
        assert_eq!(first.len(), 2);
        assert_eq!(first.columns().collect::<Vec<_>>(), vec!["host", "ranks"]);
    }
}
