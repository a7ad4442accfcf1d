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

use crate::Node;
use lolcode_span::Span;
use std::fmt;

/// Arity class an [`OperatorKind`] belongs to; the expression parser uses this to decide
/// whether `AN` is optional and whether a trailing `MKAY` is required.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
    NAry,
}

/// Every prefix operator keyword the expression parser recognizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OperatorKind {
    Add,
    Sub,
    Mult,
    Div,
    Mod,
    Max,
    Min,
    And,
    Or,
    Xor,
    Not,
    Eq,
    Neq,
    AllOf,
    AnyOf,
    Concat,
}

impl OperatorKind {
    pub fn arity(self) -> Arity {
        use OperatorKind::*;
        match self {
            Not => Arity::Unary,
            Add | Sub | Mult | Div | Mod | Max | Min | And | Or | Xor | Eq | Neq => Arity::Binary,
            AllOf | AnyOf | Concat => Arity::NAry,
        }
    }

    /// `true` for the three n-ary operators, whose argument list is terminated by `MKAY`.
    pub fn requires_terminator(self) -> bool {
        self.arity() == Arity::NAry
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OperatorKind::Add => "SUM OF",
            OperatorKind::Sub => "DIFF OF",
            OperatorKind::Mult => "PRODUKT OF",
            OperatorKind::Div => "QUOSHUNT OF",
            OperatorKind::Mod => "MOD OF",
            OperatorKind::Max => "BIGGR OF",
            OperatorKind::Min => "SMALLR OF",
            OperatorKind::And => "BOTH OF",
            OperatorKind::Or => "EITHER OF",
            OperatorKind::Xor => "WON OF",
            OperatorKind::Not => "NOT",
            OperatorKind::Eq => "BOTH SAEM",
            OperatorKind::Neq => "DIFFRINT",
            OperatorKind::AllOf => "ALL OF",
            OperatorKind::AnyOf => "ANY OF",
            OperatorKind::Concat => "SMOOSH",
        };
        f.write_str(s)
    }
}

/// A prefix operator expression. `operands.len()` always matches `op.arity()`: 1 for
/// unary, 2 for binary, 1 or more for n-ary.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OperatorExpression {
    pub op: OperatorKind,
    pub operands: Vec<crate::Expression>,
    pub span: Span,
}

impl fmt::Display for OperatorExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.op)?;
        for operand in &self.operands {
            write!(f, " {operand}")?;
        }
        if self.op.requires_terminator() {
            write!(f, " MKAY")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(OperatorExpression);
