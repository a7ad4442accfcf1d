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

use crate::{Expression, Identifier, Node, TypeTag};
use lolcode_span::Span;
use std::fmt;

/// The optional initializer on a declaration. The three forms the grammar allows
/// (`ITZ <expr>`, `ITZ A <type>`, `ITZ LIEK A <parent>`) are mutually exclusive by
/// construction here, rather than by a runtime check over three `Option` fields.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum DeclarationInit {
    None,
    Expr(Expression),
    Type(TypeTag),
    Parent(Identifier),
}

/// `<scope> HAS A <target> [init]`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeclarationStatement {
    pub scope: Identifier,
    pub target: Identifier,
    pub init: DeclarationInit,
    pub span: Span,
}

impl fmt::Display for DeclarationStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} HAS A {}", self.scope, self.target)?;
        match &self.init {
            DeclarationInit::None => Ok(()),
            DeclarationInit::Expr(expr) => write!(f, " ITZ {expr}"),
            DeclarationInit::Type(ty) => write!(f, " ITZ A {ty}"),
            DeclarationInit::Parent(parent) => write!(f, " ITZ LIEK A {parent}"),
        }
    }
}

crate::simple_node_impl!(DeclarationStatement);
