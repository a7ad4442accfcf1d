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

use crate::{Block, Expression, Node};
use lolcode_span::Span;
use std::fmt;

/// `O RLY? YA RLY <yes> (MEBBE <guard> <block>)* (NO WAI <no>)? OIC`.
///
/// The source grammar keeps `guards` and `blocks` as two parallel arrays of equal
/// length; here that invariant is structural, since `elifs` pairs each guard with its
/// block directly.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConditionalStatement {
    pub yes: Block,
    pub elifs: Vec<(Expression, Block)>,
    pub no: Option<Block>,
    pub span: Span,
}

impl fmt::Display for ConditionalStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "O RLY?")?;
        writeln!(f, "YA RLY")?;
        write!(f, "{}", self.yes)?;
        for (guard, block) in &self.elifs {
            writeln!(f, "MEBBE {guard}")?;
            write!(f, "{block}")?;
        }
        if let Some(no) = &self.no {
            writeln!(f, "NO WAI")?;
            write!(f, "{no}")?;
        }
        write!(f, "OIC")
    }
}

crate::simple_node_impl!(ConditionalStatement);
