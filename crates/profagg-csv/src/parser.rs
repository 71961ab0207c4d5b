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

//! Parse stacked profiling tables out of one CSV file.

use crate::error::{CsvError, Result};
use profagg_core::{
    coerce, Category, CategorySniffer, CategoryTable, Limits, ParsedFile, Row, SummaryIndex,
};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Default maximum number of records per file.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Configuration for profiling CSV parsing.
///
/// # Examples
///
/// ```
/// # use profagg_csv::ParseConfig;
/// let config = ParseConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert!(!config.strict_width);
///
/// // Reject rows whose width differs from their header
/// let strict = ParseConfig {
///     strict_width: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    /// Field delimiter character (default: `,`).
    pub delimiter: u8,

    /// Whether a data row whose width differs from its header is an error
    /// (default: `false`).
    ///
    /// When `false`, header and data fields are paired positionally: extra
    /// data fields are dropped and a short row simply lacks its trailing
    /// columns. A warning is logged either way.
    pub strict_width: bool,

    /// Maximum number of CSV records in one file (default: 1,000,000).
    pub max_rows: usize,

    /// Maximum file size in bytes for [`parse_file_with_config`]
    /// (default: 256MB).
    pub max_file_size: u64,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::from_limits(&Limits::default())
    }
}

impl ParseConfig {
    /// Configuration honouring the given limits, other options at default.
    pub fn from_limits(limits: &Limits) -> Self {
        Self {
            delimiter: b',',
            strict_width: false,
            max_rows: limits.max_rows,
            max_file_size: limits.max_file_size,
        }
    }
}

/// Header and rows of the block currently being read.
struct Block {
    category: Category,
    table: CategoryTable,
}

impl Block {
    fn push_record(
        &mut self,
        record: &csv::StringRecord,
        line: usize,
        config: &ParseConfig,
        summary: &mut SummaryIndex,
    ) -> Result<()> {
        let width = self.table.columns.len();
        if record.len() != width {
            if config.strict_width {
                return Err(CsvError::WidthMismatch {
                    expected: width,
                    actual: record.len(),
                    row: line,
                });
            }
            warn!(
                line,
                category = %self.category,
                expected = width,
                actual = record.len(),
                "row width differs from header, pairing fields positionally"
            );
        }

        if self.category == Category::Summary {
            for (column, raw) in self.table.columns.iter().zip(record.iter()) {
                summary.record(column, raw);
            }
        }

        let cells = record.iter().take(width).map(coerce).collect();
        self.table.push_row(Row::new(cells));
        Ok(())
    }

    /// Store the block in `parsed`. A header with no data row leaves
    /// `parsed` untouched.
    fn commit(self, parsed: &mut ParsedFile) {
        if self.table.is_empty() {
            debug!(category = %self.category, "header without data, block dropped");
            return;
        }
        if parsed.insert(self.category, self.table).is_some() {
            debug!(category = %self.category, "category repeated, later block replaces earlier");
        }
    }
}

/// Parse a profiling CSV string with default configuration.
///
/// SUMMARY rows also append their raw values to `summary`.
///
/// # Examples
///
/// ```
/// use profagg_core::{Category, Cell, SummaryIndex};
/// use profagg_csv::parse_str;
///
/// let csv = "executable,total_time_seconds\n\
///            a.out,12.5\n\
///            PAPI_TOT_INS,PAPI_TOT_CYC\n\
///            1000,400\n";
///
/// let mut summary = SummaryIndex::new();
/// let parsed = parse_str(csv, &mut summary).unwrap();
///
/// assert_eq!(parsed.value(Category::Summary, 0, "total_time_seconds"), Some(&Cell::Float(12.5)));
/// assert_eq!(parsed.value(Category::Papi, 0, "PAPI_TOT_CYC"), Some(&Cell::Int(400)));
/// assert_eq!(summary.values("executable").unwrap(), ["a.out"]);
/// ```
pub fn parse_str(csv: &str, summary: &mut SummaryIndex) -> Result<ParsedFile> {
    parse_reader(csv.as_bytes(), summary, &ParseConfig::default())
}

/// Parse one profiling file from disk with default configuration.
pub fn parse_file(path: impl AsRef<Path>, summary: &mut SummaryIndex) -> Result<ParsedFile> {
    parse_file_with_config(path, summary, &ParseConfig::default())
}

/// Parse one profiling file from disk.
///
/// The file size is checked before anything is read. The file handle is
/// dropped on every exit path, and any error is attributed to `path`.
///
/// # Errors
///
/// - `FileTooLarge` when the file exceeds `config.max_file_size`
/// - `File { .. }` wrapping I/O, syntax, width or row-limit failures
pub fn parse_file_with_config(
    path: impl AsRef<Path>,
    summary: &mut SummaryIndex,
    config: &ParseConfig,
) -> Result<ParsedFile> {
    let path = path.as_ref();

    let metadata = std::fs::metadata(path).map_err(|e| CsvError::from(e).with_path(path))?;
    if metadata.len() > config.max_file_size {
        return Err(CsvError::FileTooLarge {
            path: path.to_path_buf(),
            actual: metadata.len(),
            max: config.max_file_size,
        });
    }

    let file = File::open(path).map_err(|e| CsvError::from(e).with_path(path))?;
    let parsed =
        parse_reader(BufReader::new(file), summary, config).map_err(|e| e.with_path(path))?;

    debug!(
        path = %path.display(),
        categories = parsed.len(),
        "parsed profiling file"
    );
    Ok(parsed)
}

/// Parse stacked header/data blocks from any reader.
///
/// Records alternate strictly between header and data, whatever their
/// widths: record 1 is a header, record 2 its data, record 3 the next
/// header, and so on. Each header is classified by [`CategorySniffer`]; each
/// data cell goes through [`coerce`]. A block is committed to the result when
/// the next header arrives or input ends, provided it holds at least one data
/// row, and a category that appears twice keeps only its later block. Blank lines are skipped by the CSV reader and
/// do not count as records.
///
/// # Errors
///
/// - `ParseError` for malformed CSV (e.g. invalid UTF-8)
/// - `WidthMismatch` when `config.strict_width` is set
/// - `SecurityLimit` when more than `config.max_rows` records are read
pub fn parse_reader<R: Read>(
    reader: R,
    summary: &mut SummaryIndex,
    config: &ParseConfig,
) -> Result<ParsedFile> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let mut parsed = ParsedFile::new();
    let mut sniffer = CategorySniffer::new();
    let mut current: Option<Block> = None;
    let mut expect_header = true;
    let mut record = csv::StringRecord::new();
    let mut count = 0usize;

    loop {
        let more = csv_reader
            .read_record(&mut record)
            .map_err(|e| CsvError::ParseError {
                line: e.position().map_or(count + 1, |p| p.line() as usize),
                message: e.to_string(),
            })?;
        if !more {
            break;
        }

        count += 1;
        if count > config.max_rows {
            return Err(CsvError::SecurityLimit {
                limit: config.max_rows,
                actual: count,
            });
        }
        let line = record.position().map_or(count, |p| p.line() as usize);

        if expect_header {
            if let Some(block) = current.take() {
                block.commit(&mut parsed);
            }
            let columns: Vec<String> = record.iter().map(|f| f.trim().to_string()).collect();
            let category = sniffer.classify(&columns);
            current = Some(Block {
                category,
                table: CategoryTable::new(columns),
            });
        } else if let Some(block) = current.as_mut() {
            block.push_record(&record, line, config, summary)?;
        }

        expect_header = !expect_header;
    }

    if let Some(block) = current.take() {
        block.commit(&mut parsed);
    }

    Ok(parsed)
}
