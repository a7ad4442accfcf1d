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

//! The abstract syntax tree produced by the LOLCODE parser.
//!
//! Every node owns its children exclusively — the tree has no cycles and no shared
//! sub-trees, so freeing the [`Program`] root frees every descendant exactly once.

mod block;
mod constant;
mod expression;
mod identifier;
mod node;
mod program;
mod statement;
mod ty;

pub use block::Block;
pub use constant::Constant;
pub use expression::{Arity, CallExpression, CastExpression, Expression, OperatorExpression, OperatorKind};
pub use identifier::{Identifier, IdentifierKind};
pub use node::Node;
pub use program::Program;
pub use statement::{
    ArrayDefinitionStatement, AssignmentStatement, BreakStatement, CastStatement, ConditionalStatement,
    DeallocationStatement, DeclarationInit, DeclarationStatement, ExpressionStatement, FunctionDefinition,
    InputStatement, LoopGuard, LoopStatement, LoopUpdate, PrintStatement, ReturnStatement, Statement,
    SwitchStatement,
};
pub use ty::TypeTag;

#[cfg(test)]
mod tests {
    use super::*;
    use lolcode_span::{with_session_globals, Span, Symbol};

    fn span() -> Span {
        Span::new(Symbol::intern("test.lol"), 1)
    }

    #[test]
    fn declaration_exclusivity_is_structural() {
        with_session_globals(|| {
            let decl = DeclarationStatement {
                scope: Identifier::direct(Symbol::intern("I"), span()),
                target: Identifier::direct(Symbol::intern("VAR"), span()),
                init: DeclarationInit::Expr(Expression::Constant(Constant::Integer(42, span()))),
                span: span(),
            };
            // There is no way to additionally populate an init-type or parent-ident:
            // `DeclarationInit` is a single field, so at most one alternative can ever
            // be active.
            match decl.init {
                DeclarationInit::Expr(_) => {}
                _ => panic!("expected Expr variant"),
            }
        });
    }

    #[test]
    fn conditional_guards_and_blocks_stay_paired() {
        with_session_globals(|| {
            let empty_block = Block { statements: vec![], span: span() };
            let cond = ConditionalStatement {
                yes: empty_block.clone(),
                elifs: vec![
                    (Expression::Constant(Constant::Boolean(true, span())), empty_block.clone()),
                    (Expression::Constant(Constant::Boolean(false, span())), empty_block.clone()),
                ],
                no: None,
                span: span(),
            };
            assert_eq!(cond.elifs.len(), 2);
        });
    }

    #[test]
    fn identifier_slot_chain_displays_nested() {
        with_session_globals(|| {
            let inner = Identifier::direct(Symbol::intern("IDX"), span());
            let outer = Identifier::direct(Symbol::intern("BUCKET"), span()).with_slot(inner);
            assert_eq!(outer.to_string(), "BUCKET'Z IDX");
        });
    }

    #[test]
    fn program_round_trips_through_display() {
        with_session_globals(|| {
            let program = Program {
                version: Some("1.2".to_string()),
                block: Block { statements: vec![], span: span() },
                span: span(),
            };
            assert_eq!(program.to_string(), "HAI 1.2\nKTHXBYE\n");
        });
    }
}
