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

/// `HOW IZ <scope> <name> [YR <arg> (AN YR <arg>)*] <body> IF U SAY SO`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FunctionDefinition {
    pub scope: Identifier,
    pub name: Identifier,
    pub params: Vec<Identifier>,
    pub body: Block,
    pub span: Span,
}

impl fmt::Display for FunctionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HOW IZ {} {}", self.scope, self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i == 0 {
                write!(f, " YR {param}")?;
            } else {
                write!(f, " AN YR {param}")?;
            }
        }
        writeln!(f)?;
        write!(f, "{}", self.body)?;
        write!(f, "IF U SAY SO")
    }
}

crate::simple_node_impl!(FunctionDefinition);
