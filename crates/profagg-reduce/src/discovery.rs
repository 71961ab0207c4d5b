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

//! Thread-topology discovery.
//!
//! A run directory holds one subdirectory per rank and, inside each, one
//! file per thread named `<anything>-<thread>.csv`. The set of thread ids is
//! not recorded anywhere, so it is found by probing `*-0.csv`, `*-1.csv`, ...
//! until every CSV file below the root has been attributed to some id.

use crate::error::{ReduceError, Result};
use glob::{MatchOptions, Pattern};
use profagg_core::{Limits, ThreadId};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Thread ids present in a run directory and the files of each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreadTopology {
    total_files: usize,
    threads: BTreeMap<ThreadId, Vec<PathBuf>>,
}

impl ThreadTopology {
    /// Discovered thread ids, ascending.
    pub fn thread_ids(&self) -> impl Iterator<Item = ThreadId> + '_ {
        self.threads.keys().copied()
    }

    /// Files attributed to one thread, sorted by path.
    pub fn files(&self, thread: ThreadId) -> Option<&[PathBuf]> {
        self.threads.get(&thread).map(Vec::as_slice)
    }

    /// Every thread with its files, ascending by id.
    pub fn iter(&self) -> impl Iterator<Item = (ThreadId, &[PathBuf])> {
        self.threads
            .iter()
            .map(|(thread, files)| (*thread, files.as_slice()))
    }

    /// Count of `root/*/*.csv` files.
    pub fn total_files(&self) -> usize {
        self.total_files
    }

    /// Number of discovered thread ids.
    pub fn len(&self) -> usize {
        self.threads.len()
    }

    /// True when the run directory holds no CSV files.
    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }
}

/// Discover the thread topology with default limits.
pub fn discover(root: impl AsRef<Path>) -> Result<ThreadTopology> {
    discover_with_limits(root, &Limits::default())
}

/// Discover the thread topology of a run directory.
///
/// Counts every `root/*/*.csv` file (hidden entries excluded), then probes
/// candidate ids from 0 upwards. An id is present when `root/*/*-<id>.csv`
/// matches at least one file. Probing stops as soon as the matched files
/// account for the total, or once no file name carries a larger id.
///
/// # Errors
///
/// - `DiscoveryDiverged` when some file can never be attributed, when
///   `limits.max_thread_scan` ids are probed without accounting for every
///   file, or when more files are attributed than exist
/// - `Pattern`/`Glob` for unreadable directory entries
///
/// # Examples
///
/// ```
/// use profagg_core::ThreadId;
/// use profagg_reduce::discover;
/// use profagg_test::RunDirBuilder;
///
/// let run = RunDirBuilder::new()
///     .dense(2, 3, |_, _| "executable\na.out\n".to_string())
///     .build();
///
/// let topology = discover(run.path()).unwrap();
/// let ids: Vec<_> = topology.thread_ids().collect();
/// assert_eq!(ids, vec![ThreadId(0), ThreadId(1), ThreadId(2)]);
/// assert_eq!(topology.total_files(), 6);
/// ```
pub fn discover_with_limits(root: impl AsRef<Path>, limits: &Limits) -> Result<ThreadTopology> {
    let root = root.as_ref();
    let base = Pattern::escape(&root.to_string_lossy());

    let all_files = glob_files(&format!("{}/*/*.csv", base))?;
    let total_files = all_files.len();
    let last_candidate = all_files.iter().filter_map(|path| probe_id(path)).max();
    let mut topology = ThreadTopology {
        total_files,
        threads: BTreeMap::new(),
    };
    if total_files == 0 {
        info!(root = %root.display(), "no profiling files found");
        return Ok(topology);
    }

    let mut attributed = 0usize;
    let mut scanned = 0u32;
    while attributed < total_files
        && scanned < limits.max_thread_scan
        && last_candidate.map_or(false, |last| scanned <= last.get())
    {
        let thread = ThreadId(scanned);
        scanned += 1;

        let files = glob_files(&format!("{}/*/*{}", base, thread.file_suffix()))?;
        if files.is_empty() {
            continue;
        }
        debug!(thread = %thread, files = files.len(), "thread id present");
        attributed += files.len();
        topology.threads.insert(thread, files);
    }

    if attributed != total_files {
        return Err(ReduceError::DiscoveryDiverged {
            scanned,
            attributed,
            total: total_files,
        });
    }

    info!(
        root = %root.display(),
        threads = topology.len(),
        files = total_files,
        "discovered thread topology"
    );
    Ok(topology)
}

/// The id whose probe pattern matches this file, if any.
///
/// Only canonical suffixes count: `app-07.csv` is matched by no probe.
fn probe_id(path: &Path) -> Option<ThreadId> {
    let name = path.file_name()?.to_str()?;
    ThreadId::from_file_name(name).filter(|thread| name.ends_with(&thread.file_suffix()))
}

/// Regular files matching a pattern, sorted.
fn glob_files(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries = glob::glob_with(pattern, MATCH_OPTIONS).map_err(|source| {
        ReduceError::Pattern {
            pattern: pattern.to_string(),
            source,
        }
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
