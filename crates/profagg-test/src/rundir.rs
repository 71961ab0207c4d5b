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

//! Synthetic run directories on disk.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builder for a temporary run directory.
///
/// Files are written under `root/<rank-dir>/<file-name>` when
/// [`build`](RunDirBuilder::build) is called. Rank directories are named
/// `rank<N>` and thread files `app-<T>.csv` unless given explicitly.
///
/// # Examples
///
/// ```
/// use profagg_test::RunDirBuilder;
///
/// let run = RunDirBuilder::new()
///     .thread_file(0, 0, "executable\na.out\n")
///     .thread_file(1, 0, "executable\nb.out\n")
///     .file("rank0", "notes.txt", "ignored")
///     .build();
///
/// assert!(run.path().join("rank1/app-0.csv").exists());
/// assert_eq!(run.file_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RunDirBuilder {
    files: Vec<(PathBuf, String)>,
}

impl RunDirBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `rank<rank>/app-<thread>.csv`.
    pub fn thread_file(self, rank: u32, thread: u32, contents: impl Into<String>) -> Self {
        self.file(
            format!("rank{}", rank),
            format!("app-{}.csv", thread),
            contents,
        )
    }

    /// Adds every `rank x thread` file for a dense layout.
    pub fn dense<F>(mut self, ranks: u32, threads: u32, mut contents: F) -> Self
    where
        F: FnMut(u32, u32) -> String,
    {
        for rank in 0..ranks {
            for thread in 0..threads {
                self = self.thread_file(rank, thread, contents(rank, thread));
            }
        }
        self
    }

    /// Adds an arbitrary file below a rank directory.
    pub fn file(
        mut self,
        rank_dir: impl AsRef<Path>,
        name: impl AsRef<Path>,
        contents: impl Into<String>,
    ) -> Self {
        self.files
            .push((rank_dir.as_ref().join(name), contents.into()));
        self
    }

    /// Adds a file at an arbitrary path relative to the root.
    pub fn raw(mut self, relative: impl AsRef<Path>, contents: impl Into<String>) -> Self {
        self.files
            .push((relative.as_ref().to_path_buf(), contents.into()));
        self
    }

    /// Writes everything into a fresh temporary directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory or any file cannot be created.
    pub fn build(self) -> RunDir {
        let dir = TempDir::new().expect("create temporary run directory");
        let mut csv_files = 0;
        for (relative, contents) in self.files {
            let path = dir.path().join(&relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("create rank directory");
            }
            fs::write(&path, contents).expect("write fixture file");
            if is_discoverable_csv(&relative) {
                csv_files += 1;
            }
        }
        RunDir { dir, csv_files }
    }
}

/// A run directory that is removed when dropped.
#[derive(Debug)]
pub struct RunDir {
    dir: TempDir,
    csv_files: usize,
}

impl RunDir {
    /// Root of the run directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Number of `*.csv` files written exactly one directory below the root,
    /// excluding hidden entries.
    pub fn file_count(&self) -> usize {
        self.csv_files
    }
}

fn is_discoverable_csv(relative: &Path) -> bool {
    let parts: Vec<_> = relative.components().collect();
    if parts.len() != 2 {
        return false;
    }
    let hidden = parts
        .iter()
        .any(|c| c.as_os_str().to_string_lossy().starts_with('.'));
    !hidden && relative.extension().map_or(false, |ext| ext == "csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_layout() {
        let run = RunDirBuilder::new()
            .dense(3, 2, |r, t| format!("x\n{}\n", r * 10 + t))
            .build();
        assert_eq!(run.file_count(), 6);
        let text = fs::read_to_string(run.path().join("rank2/app-1.csv")).unwrap();
        assert_eq!(text, "x\n21\n");
    }

    #[test]
    fn test_count_skips_hidden_and_nested() {
        let run = RunDirBuilder::new()
            .thread_file(0, 0, "")
            .file(".cache", "app-0.csv", "")
            .file("rank0", ".app-1.csv", "")
            .raw("top-0.csv", "")
            .raw("rank0/deep/app-0.csv", "")
            .build();
        assert_eq!(run.file_count(), 1);
    }
}
