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

//! Discovery and reduction of per-thread profiling output.
//!
//! A parallel run leaves one CSV file per (rank, thread) pair:
//!
//! ```text
//! run/
//!   rank0/app-0.csv  rank0/app-1.csv
//!   rank1/app-0.csv  rank1/app-1.csv
//! ```
//!
//! This crate finds the thread ids present ([`discover`]), parses every file
//! of a thread and folds them into an [`AggregateRecord`] of elementwise
//! max, min and sum, and serves queries over the result through
//! [`AggregateStore`].
//!
//! # Examples
//!
//! ```no_run
//! use profagg_reduce::{AggregateStore, Statistic, StoreConfig};
//!
//! let config = StoreConfig {
//!     parallel: true,
//!     ..Default::default()
//! };
//! let store = AggregateStore::open_with_config("run", &config)?;
//!
//! println!("longest thread: {}s", store.calculate_max_time()?);
//! let series = store.counter_series(Statistic::Max, &["PAPI_TOT_INS", "PAPI_TOT_CYC"]);
//! for (counter, values) in &series.counters {
//!     println!("{}: {:?} over threads {:?}", counter, values, series.threads);
//! }
//! # Ok::<(), profagg_reduce::ReduceError>(())
//! ```

mod discovery;
mod error;
mod reducer;
mod store;

pub use discovery::{discover, discover_with_limits, ThreadTopology};
pub use error::{ReduceError, Result};
pub use reducer::{reduce, AggregateRecord, Statistic};
pub use store::{AggregateStore, CounterSeries, StoreConfig, TOTAL_TIME_COLUMN};
