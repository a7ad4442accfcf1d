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

mod call;
mod cast;
mod operator;

pub use call::CallExpression;
pub use cast::CastExpression;
pub use operator::{Arity, OperatorExpression, OperatorKind};

use crate::{Constant, Identifier, Node};
use lolcode_span::Span;
use std::fmt;

/// One expression node. Pure: building one has no parse-time side effects beyond
/// consuming tokens.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Expression {
    Cast(CastExpression),
    Constant(Constant),
    Identifier(Identifier),
    Call(Box<CallExpression>),
    Operator(OperatorExpression),
    /// The implicit variable `IT`.
    Implicit(Span),
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Cast(e) => write!(f, "{e}"),
            Expression::Constant(e) => write!(f, "{e}"),
            Expression::Identifier(e) => write!(f, "{e}"),
            Expression::Call(e) => write!(f, "{e}"),
            Expression::Operator(e) => write!(f, "{e}"),
            Expression::Implicit(_) => f.write_str("IT"),
        }
    }
}

impl Node for Expression {
    fn span(&self) -> Span {
        match self {
            Expression::Cast(e) => e.span(),
            Expression::Constant(e) => e.span(),
            Expression::Identifier(e) => e.span(),
            Expression::Call(e) => e.span(),
            Expression::Operator(e) => e.span(),
            Expression::Implicit(span) => *span,
        }
    }

    fn set_span(&mut self, new_span: Span) {
        match self {
            Expression::Cast(e) => e.set_span(new_span),
            Expression::Constant(e) => e.set_span(new_span),
            Expression::Identifier(e) => e.set_span(new_span),
            Expression::Call(e) => e.set_span(new_span),
            Expression::Operator(e) => e.set_span(new_span),
            Expression::Implicit(span) => *span = new_span,
        }
    }
}

impl From<CastExpression> for Expression {
    fn from(value: CastExpression) -> Self {
        Expression::Cast(value)
    }
}

impl From<Constant> for Expression {
    fn from(value: Constant) -> Self {
        Expression::Constant(value)
    }
}

impl From<Identifier> for Expression {
    fn from(value: Identifier) -> Self {
        Expression::Identifier(value)
    }
}

impl From<CallExpression> for Expression {
    fn from(value: CallExpression) -> Self {
        Expression::Call(Box::new(value))
    }
}

impl From<OperatorExpression> for Expression {
    fn from(value: OperatorExpression) -> Self {
        Expression::Operator(value)
    }
}
