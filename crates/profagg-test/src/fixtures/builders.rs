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

//! Builder for stacked header/data profiling files.

/// Builder for profiling CSV text.
///
/// Each block is one header line followed by zero or more data lines.
/// Fields are written verbatim, so tests control whitespace and quoting.
///
/// # Examples
///
/// ```
/// use profagg_test::fixtures::builders::ProfileBuilder;
///
/// let text = ProfileBuilder::new()
///     .block(&["PAPI_TOT_INS", "PAPI_TOT_CYC"], &["100", "50"])
///     .header(&["free_calls"])
///     .build();
///
/// assert_eq!(text, "PAPI_TOT_INS,PAPI_TOT_CYC\n100,50\nfree_calls\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProfileBuilder {
    lines: Vec<String>,
}

impl ProfileBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header line and its data line.
    pub fn block(self, header: &[&str], data: &[&str]) -> Self {
        self.header(header).row(data)
    }

    /// Adds a bare header line.
    pub fn header(self, fields: &[&str]) -> Self {
        self.line(fields.join(","))
    }

    /// Adds a data line.
    pub fn row(self, fields: &[&str]) -> Self {
        self.line(fields.join(","))
    }

    /// Adds a raw line verbatim.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Builds the file text, newline-terminated.
    pub fn build(self) -> String {
        let mut text = String::new();
        for line in self.lines {
            text.push_str(&line);
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder() {
        assert_eq!(ProfileBuilder::new().build(), "");
    }

    #[test]
    fn test_raw_line_is_verbatim() {
        let text = ProfileBuilder::new().line(" a , b ").build();
        assert_eq!(text, " a , b \n");
    }
}
