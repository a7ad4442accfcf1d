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

mod array_def;
mod assign;
mod break_;
mod cast;
mod declaration;
mod deallocation;
mod expression_stmt;
mod function;
mod conditional;
mod input;
mod loop_;
mod print;
mod return_;
mod switch;

pub use array_def::ArrayDefinitionStatement;
pub use assign::AssignmentStatement;
pub use break_::BreakStatement;
pub use cast::CastStatement;
pub use conditional::ConditionalStatement;
pub use declaration::{DeclarationInit, DeclarationStatement};
pub use deallocation::DeallocationStatement;
pub use expression_stmt::ExpressionStatement;
pub use function::FunctionDefinition;
pub use input::InputStatement;
pub use loop_::{LoopGuard, LoopStatement, LoopUpdate};
pub use print::PrintStatement;
pub use return_::ReturnStatement;
pub use switch::SwitchStatement;

use crate::Node;
use lolcode_span::Span;
use std::fmt;

/// One of the fourteen statement forms the statement parser can produce.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Statement {
    Cast(CastStatement),
    Print(PrintStatement),
    Input(InputStatement),
    Assignment(AssignmentStatement),
    Declaration(DeclarationStatement),
    Conditional(ConditionalStatement),
    Switch(SwitchStatement),
    Break(BreakStatement),
    Return(ReturnStatement),
    Loop(Box<LoopStatement>),
    Deallocation(DeallocationStatement),
    FunctionDefinition(Box<FunctionDefinition>),
    Expression(ExpressionStatement),
    ArrayDefinition(Box<ArrayDefinitionStatement>),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Cast(s) => write!(f, "{s}"),
            Statement::Print(s) => write!(f, "{s}"),
            Statement::Input(s) => write!(f, "{s}"),
            Statement::Assignment(s) => write!(f, "{s}"),
            Statement::Declaration(s) => write!(f, "{s}"),
            Statement::Conditional(s) => write!(f, "{s}"),
            Statement::Switch(s) => write!(f, "{s}"),
            Statement::Break(s) => write!(f, "{s}"),
            Statement::Return(s) => write!(f, "{s}"),
            Statement::Loop(s) => write!(f, "{s}"),
            Statement::Deallocation(s) => write!(f, "{s}"),
            Statement::FunctionDefinition(s) => write!(f, "{s}"),
            Statement::Expression(s) => write!(f, "{s}"),
            Statement::ArrayDefinition(s) => write!(f, "{s}"),
        }
    }
}

impl Node for Statement {
    fn span(&self) -> Span {
        match self {
            Statement::Cast(s) => s.span(),
            Statement::Print(s) => s.span(),
            Statement::Input(s) => s.span(),
            Statement::Assignment(s) => s.span(),
            Statement::Declaration(s) => s.span(),
            Statement::Conditional(s) => s.span(),
            Statement::Switch(s) => s.span(),
            Statement::Break(s) => s.span(),
            Statement::Return(s) => s.span(),
            Statement::Loop(s) => s.span(),
            Statement::Deallocation(s) => s.span(),
            Statement::FunctionDefinition(s) => s.span(),
            Statement::Expression(s) => s.span(),
            Statement::ArrayDefinition(s) => s.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        match self {
            Statement::Cast(s) => s.set_span(span),
            Statement::Print(s) => s.set_span(span),
            Statement::Input(s) => s.set_span(span),
            Statement::Assignment(s) => s.set_span(span),
            Statement::Declaration(s) => s.set_span(span),
            Statement::Conditional(s) => s.set_span(span),
            Statement::Switch(s) => s.set_span(span),
            Statement::Break(s) => s.set_span(span),
            Statement::Return(s) => s.set_span(span),
            Statement::Loop(s) => s.set_span(span),
            Statement::Deallocation(s) => s.set_span(span),
            Statement::FunctionDefinition(s) => s.set_span(span),
            Statement::Expression(s) => s.set_span(span),
            Statement::ArrayDefinition(s) => s.set_span(span),
        }
    }
}

macro_rules! from_variant {
    ($variant:ident, $ty:ty) => {
        impl From<$ty> for Statement {
            fn from(value: $ty) -> Self {
                Statement::$variant(value)
            }
        }
    };
    (boxed $variant:ident, $ty:ty) => {
        impl From<$ty> for Statement {
            fn from(value: $ty) -> Self {
                Statement::$variant(Box::new(value))
            }
        }
    };
}

from_variant!(Cast, CastStatement);
from_variant!(Print, PrintStatement);
from_variant!(Input, InputStatement);
from_variant!(Assignment, AssignmentStatement);
from_variant!(Declaration, DeclarationStatement);
from_variant!(Conditional, ConditionalStatement);
from_variant!(Switch, SwitchStatement);
from_variant!(Break, BreakStatement);
from_variant!(Return, ReturnStatement);
from_variant!(boxed Loop, LoopStatement);
from_variant!(Deallocation, DeallocationStatement);
from_variant!(boxed FunctionDefinition, FunctionDefinition);
from_variant!(Expression, ExpressionStatement);
from_variant!(boxed ArrayDefinition, ArrayDefinitionStatement);
