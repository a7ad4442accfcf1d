// Copyright (C) 2021-2026 The LOLCODE Rust Team
// This file is part of the lolcode-parser workspace.

// The lolcode-parser workspace is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The lolcode-parser workspace is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the lolcode-parser workspace. If not, see <https://www.gnu.org/licenses/>.

use crate::Symbol;
use std::fmt;

/// A source location: the file an item came from and the line it started on.
///
/// Unlike a byte-offset span, `Span` only tracks the line of the *first* token of a
/// construct, matching what the tokenizer hands the parser and what diagnostics quote.
#[derive(Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Span {
    pub file: Symbol,
    pub line: u32,
}

impl Span {
    pub fn new(file: Symbol, line: u32) -> Self {
        Span { file, line }
    }

    /// A placeholder span for synthesized nodes that have no source location.
    pub fn dummy() -> Self {
        Span { file: Symbol::intern("<dummy>"), line: 0 }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Combines two spans by keeping the one that starts first.
///
/// Used to build the span of a larger construct out of the spans of its parts, e.g.
/// an `if`/`then`/`else` statement's span runs from its `O RLY?` to its `OIC`.
impl std::ops::Add for Span {
    type Output = Span;

    fn add(self, other: Span) -> Span {
        if self.line <= other.line { self } else { other }
    }
}
