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

//! Shared test fixtures for the profagg crates.
//!
//! This crate provides canonical profiling CSV blocks, a builder for whole
//! profiling files, and a builder for synthetic run directories laid out as
//! `root/<rank-dir>/<name>-<thread>.csv`.
//!
//! # Quick Start
//!
//! ```rust
//! use profagg_test::fixtures::{self, builders::ProfileBuilder};
//! use profagg_test::RunDirBuilder;
//!
//! // Canned file text
//! let text = fixtures::thread_file(12.5, 1000, 400);
//! assert!(text.starts_with("executable,"));
//!
//! // Custom file text
//! let text = ProfileBuilder::new()
//!     .block(&["io_total_time", "io_calls"], &["0.5", "3"])
//!     .build();
//!
//! // A 2 rank x 3 thread run directory
//! let run = RunDirBuilder::new().dense(2, 3, |_, _| text.clone()).build();
//! assert_eq!(run.file_count(), 6);
//! ```

pub mod fixtures;
mod rundir;

pub use rundir::{RunDir, RunDirBuilder};
