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
use lolcode_ast::{Constant, Identifier, TypeTag};
use lolcode_errors::{ParserError, Result};

impl ParserContext {
    /// Dispatches on the current token to produce an integer, float, boolean, or
    /// string constant. `NOOB` and `BUKKIT` are type tags and the array-definition
    /// keyword respectively here, never leaf constants — this parser never produces
    /// `Constant::Nil`/`Constant::Array` itself.
    pub fn parse_constant(&mut self) -> Result<Constant> {
        let span = self.span();
        match self.token.token.clone() {
            Token::Int(value) => {
                self.bump();
                Ok(Constant::Integer(value, span))
            }
            Token::Float(value) => {
                self.bump();
                Ok(Constant::Float(value, span))
            }
            Token::Boolean(value) => {
                self.bump();
                Ok(Constant::Boolean(value, span))
            }
            Token::Str(value) => {
                self.bump();
                Ok(Constant::String(value, span))
            }
            other => Err(ParserError::unexpected(other, "a constant", span)),
        }
    }

    pub fn parse_type_tag(&mut self) -> Result<TypeTag> {
        let span = self.span();
        match self.token.token.clone() {
            Token::TypeTag(ty) => {
                self.bump();
                Ok(ty)
            }
            other => Err(ParserError::unexpected(other, "a type name", span)),
        }
    }

    /// Parses a direct name or `SRS <expr>` indirect identifier, then chases any
    /// following `'Z <slot>` accesses, which nest to the right: `A'Z B'Z C` parses as
    /// `A` sloted by (`B` sloted by `C`).
    pub fn parse_identifier(&mut self) -> Result<Identifier> {
        let span = self.span();
        let base = match self.token.token.clone() {
            Token::Ident(name) => {
                self.bump();
                Identifier::direct(name, span)
            }
            Token::Srs => {
                self.bump();
                let expr = self.parse_expression()?;
                Identifier::indirect(expr, span)
            }
            other => return Err(ParserError::unexpected(other, "an identifier", span)),
        };
        if self.accept(&Token::SlotOf).is_some() {
            let slot = self.parse_identifier()?;
            Ok(base.with_slot(slot))
        } else {
            Ok(base)
        }
    }
}
