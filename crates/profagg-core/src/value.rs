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

//! Cell values produced by coercing raw CSV tokens.

use std::cmp::Ordering;
use std::fmt;

/// A single coerced CSV cell.
///
/// Cells are produced by [`coerce`](crate::coerce) and never hold a null: an
/// empty token is kept as an empty [`Cell::Text`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Cell {
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Anything that did not parse as a literal, trimmed.
    Text(String),
}

impl Cell {
    /// Numeric view of the cell, counting booleans as `0`/`1`.
    ///
    /// This is the view used by aggregation arithmetic and ordering.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Text(_) => None,
        }
    }

    /// Try to get the cell as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Short type label used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Text(_) => "text",
        }
    }

    /// Integer view for exact arithmetic; booleans count as `0`/`1`.
    fn integral(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    /// Add two cells.
    ///
    /// Integer (and boolean) operands stay integral unless the sum overflows,
    /// in which case the result is promoted to a float. Any float operand
    /// yields a float. Returns `None` when either side is text.
    ///
    /// # Examples
    ///
    /// ```
    /// use profagg_core::Cell;
    ///
    /// assert_eq!(Cell::Int(2).checked_add(&Cell::Int(3)), Some(Cell::Int(5)));
    /// assert_eq!(Cell::Int(2).checked_add(&Cell::Float(0.5)), Some(Cell::Float(2.5)));
    /// assert_eq!(Cell::Int(2).checked_add(&Cell::Text("x".into())), None);
    /// ```
    pub fn checked_add(&self, other: &Cell) -> Option<Cell> {
        if let (Some(a), Some(b)) = (self.integral(), other.integral()) {
            return Some(match a.checked_add(b) {
                Some(n) => Cell::Int(n),
                None => Cell::Float(a as f64 + b as f64),
            });
        }
        Some(Cell::Float(self.as_number()? + other.as_number()?))
    }

    /// Total order over cells.
    ///
    /// Numeric cells compare by value (exactly when both are integral), any
    /// numeric cell sorts before any text cell, and text compares
    /// lexicographically.
    pub fn compare(&self, other: &Cell) -> Ordering {
        if let (Some(a), Some(b)) = (self.integral(), other.integral()) {
            return a.cmp(&b);
        }
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.as_str().cmp(&other.as_str()),
        }
    }

    /// The larger of two cells; ties keep `self`.
    pub fn max_of<'a>(&'a self, other: &'a Cell) -> &'a Cell {
        if other.compare(self) == Ordering::Greater {
            other
        } else {
            self
        }
    }

    /// The smaller of two cells; ties keep `self`.
    pub fn min_of<'a>(&'a self, other: &'a Cell) -> &'a Cell {
        if other.compare(self) == Ordering::Less {
            other
        } else {
            self
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
