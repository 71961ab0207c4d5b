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

//! Cell coercion ladder.
//!
//! Every data cell of a profiling CSV goes through [`coerce`], which tries the
//! literal forms in a fixed order and keeps the first that parses:
//!
//! 1. **Integer**: base-10 `i64`, optional sign, `_` allowed between digits
//! 2. **Float**: finite `f64` containing at least one digit (`1.5`, `.5`, `2e-3`)
//! 3. **Boolean**: `True`/`False` or `true`/`false`
//! 4. **Text**: the trimmed token, unchanged
//!
//! Integers that overflow `i64` fall through to the float rung. Words such as
//! `inf` or `nan` are names rather than literals and therefore stay text.

use crate::value::Cell;
use std::borrow::Cow;

/// Coerce a raw CSV token into the most specific [`Cell`] it parses as.
///
/// Coercion never fails: unparseable input falls back to trimmed text.
///
/// # Examples
///
/// ```
/// use profagg_core::{coerce, Cell};
///
/// assert_eq!(coerce(" 42 "), Cell::Int(42));
/// assert_eq!(coerce("0.125"), Cell::Float(0.125));
/// assert_eq!(coerce("True"), Cell::Bool(true));
/// assert_eq!(coerce(" a.out "), Cell::Text("a.out".to_string()));
/// ```
pub fn coerce(raw: &str) -> Cell {
    let trimmed = raw.trim();

    if let Some(n) = parse_int(trimmed) {
        return Cell::Int(n);
    }
    if let Some(f) = parse_float(trimmed) {
        return Cell::Float(f);
    }
    if let Some(b) = parse_bool(trimmed) {
        return Cell::Bool(b);
    }

    Cell::Text(trimmed.to_string())
}

fn parse_int(s: &str) -> Option<i64> {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit() || b == b'_') {
        return None;
    }
    strip_digit_separators(s)?.parse::<i64>().ok()
}

fn parse_float(s: &str) -> Option<f64> {
    if !s.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    let f = strip_digit_separators(s)?.parse::<f64>().ok()?;
    f.is_finite().then_some(f)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "True" | "true" => Some(true),
        "False" | "false" => Some(false),
        _ => None,
    }
}

/// Remove `_` digit separators, rejecting any `_` not flanked by two digits.
fn strip_digit_separators(s: &str) -> Option<Cow<'_, str>> {
    if !s.contains('_') {
        return Some(Cow::Borrowed(s));
    }

    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| bytes.get(j));
        let after = bytes.get(i + 1);
        match (before, after) {
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {}
            _ => return None,
        }
    }

    Some(Cow::Owned(s.replace('_', "")))
}
