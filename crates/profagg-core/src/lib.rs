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

//! Core data model for profiling CSV aggregation.
//!
//! A profiling run writes one CSV file per (rank, thread) pair. Each file
//! stacks several small tables, one per measurement category, and none of
//! them declare a schema. This crate holds the pieces every other crate
//! shares:
//!
//! - [`Cell`] and [`coerce`]: typed cells and the literal coercion ladder
//! - [`Category`] and [`CategorySniffer`]: header-keyword classification
//! - [`CategoryTable`], [`ParsedFile`], [`SummaryIndex`]: parsed output
//! - [`ThreadId`]: the thread slot encoded in file names
//! - [`Limits`]: resource bounds for parsing and discovery
//!
//! # Examples
//!
//! ```
//! use profagg_core::{coerce, Category, CategorySniffer, Cell};
//!
//! let mut sniffer = CategorySniffer::new();
//! let header = ["executable", "host", "total_time_seconds"];
//! assert_eq!(sniffer.classify(&header), Category::Summary);
//! assert_eq!(coerce("12.5"), Cell::Float(12.5));
//! ```

mod category;
mod coerce;
mod error;
mod limits;
mod table;
mod thread;
mod value;

pub use category::{Category, CategorySniffer, CATEGORY_RULES};
pub use coerce::coerce;
pub use error::{CoreError, Result};
pub use limits::Limits;
pub use table::{CategoryTable, ParsedFile, Row, SummaryIndex};
pub use thread::ThreadId;
pub use value::Cell;
