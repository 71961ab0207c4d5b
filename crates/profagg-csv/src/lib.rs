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

//! Multi-table profiling CSV parser.
//!
//! A profiling file is a vertical stack of small tables, each one header
//! line followed by one data line:
//!
//! ```text
//! executable,host,total_time_seconds
//! a.out,node01,12.5
//! PAPI_TOT_INS,PAPI_TOT_CYC
//! 1000,400
//! ```
//!
//! Each header is classified into a [`Category`](profagg_core::Category) by
//! keyword sniffing, each data cell is coerced into a typed
//! [`Cell`](profagg_core::Cell), and SUMMARY rows additionally feed a
//! [`SummaryIndex`](profagg_core::SummaryIndex) of raw values.
//!
//! # Examples
//!
//! ```
//! use profagg_core::{Category, SummaryIndex};
//! use profagg_csv::{parse_reader, ParseConfig};
//!
//! let data = "utime_seconds,stime_seconds\n1.5,0.25\n";
//! let config = ParseConfig {
//!     strict_width: true,
//!     ..Default::default()
//! };
//!
//! let mut summary = SummaryIndex::new();
//! let parsed = parse_reader(data.as_bytes(), &mut summary, &config).unwrap();
//! assert!(parsed.contains(Category::Rusage));
//! ```
//!
//! # Errors
//!
//! Parse failures are fatal for the file and reported through [`CsvError`];
//! errors from [`parse_file`] name the offending path.

mod error;
mod parser;

pub use error::{CsvError, Result};
pub use parser::{
    parse_file, parse_file_with_config, parse_reader, parse_str, ParseConfig, DEFAULT_MAX_ROWS,
};
