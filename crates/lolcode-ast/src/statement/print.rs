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

use crate::{Expression, Node};
use lolcode_span::Span;
use std::fmt;

/// `VISIBLE <expr> (<expr>)* [!]`. `suppress_newline` records a trailing `!`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PrintStatement {
    pub args: Vec<Expression>,
    pub suppress_newline: bool,
    pub span: Span,
}

impl fmt::Display for PrintStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VISIBLE")?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        if self.suppress_newline {
            write!(f, " !")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(PrintStatement);
