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

use crate::{Expression, Identifier, Node};
use lolcode_span::Span;
use std::fmt;

/// `<scope> IZ <name> [YR <arg> (AN YR <arg>)*] MKAY`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CallExpression {
    pub scope: Identifier,
    pub name: Identifier,
    pub args: Vec<Expression>,
    pub span: Span,
}

impl fmt::Display for CallExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} IZ {}", self.scope, self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i == 0 {
                write!(f, " YR {arg}")?;
            } else {
                write!(f, " AN YR {arg}")?;
            }
        }
        write!(f, " MKAY")
    }
}

crate::simple_node_impl!(CallExpression);
