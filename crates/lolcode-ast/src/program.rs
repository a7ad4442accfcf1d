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

use crate::{Block, Node};
use lolcode_span::Span;
use std::fmt;

/// The root of a parsed program: everything between `HAI <version>` and `KTHXBYE`/EOF.
///
/// `version` is recorded verbatim but never validated; see the parser's open question
/// about the `HAI` version token.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Program {
    pub version: Option<String>,
    pub block: Block,
    pub span: Span,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => writeln!(f, "HAI {version}")?,
            None => writeln!(f, "HAI")?,
        }
        write!(f, "{}", self.block)?;
        writeln!(f, "KTHXBYE")
    }
}

crate::simple_node_impl!(Program);
