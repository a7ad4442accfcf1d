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
use lolcode_ast::Program;
use lolcode_errors::{ParserError, Result};

impl ParserContext {
    /// `HAI <version> NEWLINE`, a block, then `KTHXBYE NEWLINE` or end of file.
    ///
    /// The version token is recorded verbatim via its own `Display` rendering and
    /// never validated — see the parser's open question about the `HAI` header.
    pub fn parse_program(&mut self) -> Result<Program> {
        let span = self.span();
        self.expect(Token::Hai)?;
        let version = if self.token.token != Token::Newline && self.token.token != Token::Eof {
            Some(self.bump().token.to_string())
        } else {
            None
        };
        if !self.at_eof() {
            self.expect(Token::Newline)?;
        }
        self.skip_newlines();
        let block = self.parse_block(&[Token::Kthxbye], None)?;
        if self.accept(&Token::Kthxbye).is_some() {
            if !self.at_eof() {
                self.expect(Token::Newline)?;
            }
            self.skip_newlines();
        }
        if !self.at_eof() {
            return Err(ParserError::unexpected(self.token.token.clone(), "end of file", self.span()));
        }
        Ok(Program { version, block, span })
    }
}

#[cfg(test)]
mod tests {
    use crate::tokenizer::tokenize;
    use lolcode_span::{with_session_globals, Symbol};

    use super::ParserContext;

    fn parse(source: &str) -> lolcode_ast::Program {
        with_session_globals(|| {
            let file = Symbol::intern("test.lol");
            let tokens = tokenize(source, file).unwrap();
            ParserContext::new(tokens).parse_program().unwrap()
        })
    }

    #[test]
    fn minimal_program() {
        let program = parse("HAI 1.2\nKTHXBYE\n");
        assert_eq!(program.version.as_deref(), Some("1.2"));
        assert!(program.block.statements.is_empty());
    }

    #[test]
    fn print_with_bang_suppresses_newline() {
        let program = parse("HAI 1.2\nVISIBLE \"HELLO\"!\nKTHXBYE\n");
        match &program.block.statements[0] {
            lolcode_ast::Statement::Print(p) => assert!(p.suppress_newline),
            other => panic!("expected a print statement, got {other:?}"),
        }
    }

    #[test]
    fn declaration_with_expression_init() {
        let program = parse("HAI 1.2\nI HAS A VAR ITZ 5\nKTHXBYE\n");
        match &program.block.statements[0] {
            lolcode_ast::Statement::Declaration(d) => {
                assert!(matches!(d.init, lolcode_ast::DeclarationInit::Expr(_)));
            }
            other => panic!("expected a declaration statement, got {other:?}"),
        }
    }

    #[test]
    fn if_elseif_else() {
        let program = parse(
            "HAI 1.2\nO RLY?\nYA RLY\nVISIBLE 1\nMEBBE WIN\nVISIBLE 2\nNO WAI\nVISIBLE 3\nOIC\nKTHXBYE\n",
        );
        match &program.block.statements[0] {
            lolcode_ast::Statement::Conditional(c) => {
                assert_eq!(c.elifs.len(), 1);
                assert!(c.no.is_some());
            }
            other => panic!("expected a conditional statement, got {other:?}"),
        }
    }

    #[test]
    fn loop_name_mismatch_is_fatal() {
        with_session_globals(|| {
            let file = Symbol::intern("test.lol");
            let tokens = tokenize("HAI 1.2\nIM IN YR LOOP\nIM OUTTA YR OTHER\nKTHXBYE\n", file).unwrap();
            let err = ParserContext::new(tokens).parse_program().unwrap_err();
            assert!(matches!(err, lolcode_errors::ParserError::LoopNameMismatch { .. }));
        });
    }

    #[test]
    fn loop_name_mismatch_cites_the_closing_line_not_the_opening_line() {
        with_session_globals(|| {
            let file = Symbol::intern("test.lol");
            let tokens = tokenize(
                "HAI 1.2\nIM IN YR LOOP\nVISIBLE 1\nVISIBLE 2\nIM OUTTA YR OTHER\nKTHXBYE\n",
                file,
            )
            .unwrap();
            let err = ParserContext::new(tokens).parse_program().unwrap_err();
            match err {
                lolcode_errors::ParserError::LoopNameMismatch { span, .. } => assert_eq!(span.line, 5),
                other => panic!("expected a loop name mismatch, got {other:?}"),
            }
        });
    }

    #[test]
    fn nary_operator_missing_mkay_is_fatal() {
        with_session_globals(|| {
            let file = Symbol::intern("test.lol");
            let tokens = tokenize("HAI 1.2\nVISIBLE SMOOSH \"A\" AN \"B\"\nKTHXBYE\n", file).unwrap();
            let err = ParserContext::new(tokens).parse_program().unwrap_err();
            assert!(matches!(err, lolcode_errors::ParserError::UnexpectedToken { .. }));
        });
    }

    #[test]
    fn program_round_trips_structurally() {
        with_session_globals(|| {
            let file = Symbol::intern("test.lol");
            let source = "HAI 1.2\nI HAS A VAR ITZ 5\nVISIBLE VAR\nKTHXBYE\n";
            let first = ParserContext::new(tokenize(source, file).unwrap()).parse_program().unwrap();
            let rendered = first.to_string();
            let second = ParserContext::new(tokenize(&rendered, file).unwrap()).parse_program().unwrap();
            assert_eq!(first.block.statements.len(), second.block.statements.len());
            assert_eq!(first.to_string(), second.to_string());
        });
    }
}
