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

use crate::{Block, Expression, Identifier, Node};
use lolcode_span::Span;
use std::fmt;

/// The loop-update verb: a built-in increment/decrement, or the name of a
/// previously defined unary function. Whether a named function actually has arity
/// one is a semantic question the parser defers to the evaluator.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum LoopUpdate {
    Uppin,
    Nerfin,
    Function(Identifier),
}

impl fmt::Display for LoopUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoopUpdate::Uppin => f.write_str("UPPIN"),
            LoopUpdate::Nerfin => f.write_str("NERFIN"),
            LoopUpdate::Function(ident) => write!(f, "{ident}"),
        }
    }
}

/// The loop's exit condition: `TIL <expr>` (loop while false) or `WILE <expr>`
/// (loop while true).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum LoopGuard {
    Til(Expression),
    Wile(Expression),
}

impl fmt::Display for LoopGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoopGuard::Til(expr) => write!(f, "TIL {expr}"),
            LoopGuard::Wile(expr) => write!(f, "WILE {expr}"),
        }
    }
}

/// `IM IN YR <name> [<update> YR <var>] [<guard>] <body> IM OUTTA YR <name>`.
///
/// `update` pairs the operator with the variable it updates, since the grammar only
/// ever admits the two together: `[<update-op> YR <var>]` is one optional group, not
/// two independently optional fields.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LoopStatement {
    pub name: Identifier,
    pub update: Option<(LoopUpdate, Identifier)>,
    pub guard: Option<LoopGuard>,
    pub body: Block,
    pub span: Span,
}

impl fmt::Display for LoopStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IM IN YR {}", self.name)?;
        if let Some((op, var)) = &self.update {
            write!(f, " {op} YR {var}")?;
        }
        if let Some(guard) = &self.guard {
            write!(f, " {guard}")?;
        }
        writeln!(f)?;
        write!(f, "{}", self.body)?;
        write!(f, "IM OUTTA YR {}", self.name)
    }
}

crate::simple_node_impl!(LoopStatement);
