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

use super::context::ParserContext;
use crate::tokenizer::Token;
use lolcode_ast::{Arity, CallExpression, CastExpression, Expression, Identifier, OperatorExpression, OperatorKind};
use lolcode_errors::{ParserError, Result};
use lolcode_span::Span;

impl ParserContext {
    /// `true` for any token that can begin an expression; used by the statement
    /// dispatcher and by `VISIBLE`'s argument list, which has no separator between
    /// arguments so the parser has to ask "is there another one?" directly.
    pub(super) fn can_start_expression(&self) -> bool {
        matches!(
            self.token.token,
            Token::Maek
                | Token::Int(_)
                | Token::Float(_)
                | Token::Str(_)
                | Token::Boolean(_)
                | Token::It
                | Token::Operator(_)
                | Token::Ident(_)
                | Token::Srs
        )
    }

    /// Dispatches on the current token to build one of the six expression forms: cast,
    /// constant, identifier, call, operator, or the implicit `IT`.
    pub fn parse_expression(&mut self) -> Result<Expression> {
        let span = self.span();
        match self.token.token.clone() {
            Token::Maek => self.parse_cast_expression(),
            Token::Int(_) | Token::Float(_) | Token::Boolean(_) | Token::Str(_) => {
                Ok(Expression::Constant(self.parse_constant()?))
            }
            Token::It => {
                self.bump();
                Ok(Expression::Implicit(span))
            }
            Token::Operator(op) => self.parse_operator_expression(op, span),
            Token::Ident(_) | Token::Srs => self.parse_identifier_or_call(),
            other => Err(ParserError::unexpected(other, "an expression", span)),
        }
    }

    fn parse_cast_expression(&mut self) -> Result<Expression> {
        let span = self.span();
        self.expect(Token::Maek)?;
        let value = Box::new(self.parse_expression()?);
        self.expect(Token::A)?;
        let ty = self.parse_type_tag()?;
        Ok(Expression::Cast(CastExpression { value, ty, span }))
    }

    /// An identifier standing alone is an `Identifier` expression; the same leading
    /// identifier followed by `IZ` is instead the start of a call. Since `parse_identifier`
    /// fully consumes the scope identifier (including any `'Z` chain) before this check
    /// runs, no backtracking is needed — the next token alone disambiguates.
    fn parse_identifier_or_call(&mut self) -> Result<Expression> {
        let span = self.span();
        let scope = self.parse_identifier()?;
        if self.accept(&Token::Iz).is_some() {
            Ok(Expression::Call(Box::new(self.parse_call_tail(scope, span)?)))
        } else {
            Ok(Expression::Identifier(scope))
        }
    }

    /// Parses `<name> [YR <arg> (AN YR <arg>)*] MKAY`, the part of a call that follows
    /// `<scope> IZ`. Shared between the expression parser and the statement parser's
    /// identifier-led dispatch, since a call used as a statement and a call nested
    /// inside a larger expression have identical tails.
    pub(super) fn parse_call_tail(&mut self, scope: Identifier, span: Span) -> Result<CallExpression> {
        let name = self.parse_identifier()?;
        let mut args = Vec::new();
        if self.accept(&Token::Yr).is_some() {
            args.push(self.parse_expression()?);
            while self.accept(&Token::An).is_some() {
                self.expect(Token::Yr)?;
                args.push(self.parse_expression()?);
            }
        }
        self.expect(Token::Mkay)?;
        Ok(CallExpression { scope, name, args, span })
    }

    /// Parses the operand list following an operator keyword. Unary takes exactly one
    /// operand, binary takes two joined by `AN`, and n-ary takes a mandatory first
    /// operand followed by zero or more operands joined by `AN`, always closing
    /// with `MKAY` — the one case in the grammar where a missing terminator is a
    /// first-class failure scenario.
    fn parse_operator_expression(&mut self, op: OperatorKind, span: Span) -> Result<Expression> {
        self.bump();
        let mut operands = Vec::new();
        match op.arity() {
            Arity::Unary => operands.push(self.parse_expression()?),
            Arity::Binary => {
                operands.push(self.parse_expression()?);
                self.accept(&Token::An);
                operands.push(self.parse_expression()?);
            }
            Arity::NAry => {
                operands.push(self.parse_expression()?);
                loop {
                    self.accept(&Token::An);
                    if !self.can_start_expression() {
                        break;
                    }
                    operands.push(self.parse_expression()?);
                }
                self.expect(Token::Mkay)?;
            }
        }
        Ok(Expression::Operator(OperatorExpression { op, operands, span }))
    }
}
