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

use crate::{Block, Identifier, Node};
use lolcode_span::Span;
use std::fmt;

/// `O HAI IM <name> [IM LIEK <parent>] <body> KTHX`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArrayDefinitionStatement {
    pub name: Identifier,
    pub parent: Option<Identifier>,
    pub body: Block,
    pub span: Span,
}

impl fmt::Display for ArrayDefinitionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "O HAI IM {}", self.name)?;
        if let Some(parent) = &self.parent {
            write!(f, " IM LIEK {parent}")?;
        }
        writeln!(f)?;
        write!(f, "{}", self.body)?;
        write!(f, "KTHX")
    }
}

crate::simple_node_impl!(ArrayDefinitionStatement);
