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
use lolcode_span::{Span, Symbol};
use std::fmt;

/// The two forms an identifier's name can take.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum IdentifierKind {
    /// A plain name token, e.g. `VAR`.
    Direct(Symbol),
    /// `SRS <expr>`: the name is computed at runtime by evaluating `expr`.
    Indirect(Box<Expression>),
}

/// A name reference, optionally followed by one or more `'Z <slot>` member accesses.
///
/// `slot` is a singly linked chain rather than a list: `BUCKET'Z IDX'Z 2` parses as
/// `Identifier{BUCKET, slot: Some(Identifier{IDX, slot: Some(Identifier{2})})}`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Identifier {
    pub kind: IdentifierKind,
    pub slot: Option<Box<Identifier>>,
    pub span: Span,
}

impl Identifier {
    pub fn direct(name: Symbol, span: Span) -> Self {
        Identifier { kind: IdentifierKind::Direct(name), slot: None, span }
    }

    pub fn indirect(expr: Expression, span: Span) -> Self {
        Identifier { kind: IdentifierKind::Indirect(Box::new(expr)), slot: None, span }
    }

    pub fn with_slot(mut self, slot: Identifier) -> Self {
        self.slot = Some(Box::new(slot));
        self
    }

    /// The plain name this identifier resolves to, if it was written directly rather
    /// than via `SRS`. Used by the loop-closer name check, which compares textual names.
    pub fn direct_name(&self) -> Option<Symbol> {
        match &self.kind {
            IdentifierKind::Direct(name) => Some(*name),
            IdentifierKind::Indirect(_) => None,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IdentifierKind::Direct(name) => write!(f, "{name}")?,
            IdentifierKind::Indirect(expr) => write!(f, "SRS {expr}")?,
        }
        if let Some(slot) = &self.slot {
            write!(f, "'Z {slot}")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(Identifier);
