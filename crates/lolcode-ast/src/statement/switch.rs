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

/// `WTF? (OMG <guard> <block>)+ (OMGWTF <block>)? OIC`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SwitchStatement {
    pub cases: Vec<(Expression, Block)>,
    pub default: Option<Block>,
    pub span: Span,
}

impl fmt::Display for SwitchStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "WTF?")?;
        for (guard, block) in &self.cases {
            writeln!(f, "OMG {guard}")?;
            write!(f, "{block}")?;
        }
        if let Some(default) = &self.default {
            writeln!(f, "OMGWTF")?;
            write!(f, "{default}")?;
        }
        write!(f, "OIC")
    }
}

crate::simple_node_impl!(SwitchStatement);
