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

/// A literal value. `Nil` (`NOOB`) and `Array` carry no payload; the others carry the
/// value the tokenizer already parsed out of the literal's text.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Constant {
    Integer(i64, Span),
    Float(f32, Span),
    Boolean(bool, Span),
    String(String, Span),
    Nil(Span),
    Array(Span),
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Integer(v, _) => write!(f, "{v}"),
            Constant::Float(v, _) => write!(f, "{v}"),
            Constant::Boolean(true, _) => f.write_str("WIN"),
            Constant::Boolean(false, _) => f.write_str("FAIL"),
            Constant::String(v, _) => write!(f, "\"{v}\""),
            Constant::Nil(_) => f.write_str("NOOB"),
            Constant::Array(_) => f.write_str("BUKKIT"),
        }
    }
}

impl Node for Constant {
    fn span(&self) -> Span {
        match self {
            Constant::Integer(_, span)
            | Constant::Float(_, span)
            | Constant::Boolean(_, span)
            | Constant::String(_, span)
            | Constant::Nil(span)
            | Constant::Array(span) => *span,
        }
    }

    fn set_span(&mut self, new_span: Span) {
        match self {
            Constant::Integer(_, span)
            | Constant::Float(_, span)
            | Constant::Boolean(_, span)
            | Constant::String(_, span)
            | Constant::Nil(span)
            | Constant::Array(span) => *span = new_span,
        }
    }
}
