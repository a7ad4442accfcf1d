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

use crate::tokenizer::{SpannedToken, Token};
use lolcode_errors::{ParserError, Result};
use lolcode_span::Span;

/// The token cursor every other parser layer is built on.
///
/// Holds the remaining tokens reversed so advancing is an O(1) `Vec::pop`, grounded
/// directly on `leo-parser`'s `ParserContext`. `token` is always the token the cursor is
/// currently positioned at; `prev_span` is the span of the token just consumed, which
/// statement/expression productions use to compute a node's overall span.
pub struct ParserContext {
    tokens: Vec<SpannedToken>,
    pub token: SpannedToken,
    pub prev_span: Span,
}

impl ParserContext {
    pub fn new(mut tokens: Vec<SpannedToken>) -> Self {
        tokens.reverse();
        let first = tokens.pop().unwrap_or_else(SpannedToken::dummy);
        let prev_span = first.span;
        ParserContext { tokens, token: first, prev_span }
    }

    pub fn peek(&self) -> &Token {
        &self.token.token
    }

    pub fn span(&self) -> Span {
        self.token.span
    }

    /// Looks `n` tokens ahead without consuming; `peek_nth(0)` is the same as `peek()`.
    /// Past the end of the stream this returns [`Token::Eof`] rather than panicking, so
    /// call sites don't need to special-case running off the end of a malformed input.
    pub fn peek_nth(&self, n: usize) -> &Token {
        if n == 0 {
            return self.peek();
        }
        self.tokens.iter().rev().nth(n - 1).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    /// Consumes the current token and returns it, advancing the cursor by one.
    pub fn bump(&mut self) -> SpannedToken {
        let next = self.tokens.pop().unwrap_or_else(SpannedToken::dummy);
        tracing::trace!(token = %self.token.token, span = %self.token.span, "bump");
        self.prev_span = self.token.span;
        std::mem::replace(&mut self.token, next)
    }

    /// Consumes the current token if it equals `expected`, returning it; leaves the
    /// cursor untouched otherwise.
    pub fn accept(&mut self, expected: &Token) -> Option<SpannedToken> {
        if &self.token.token == expected {
            Some(self.bump())
        } else {
            None
        }
    }

    /// Consumes the current token if it equals `expected`; raises `UnexpectedToken`
    /// otherwise. This is the primitive every `require_*` leaf helper bottoms out in.
    pub fn expect(&mut self, expected: Token) -> Result<SpannedToken> {
        if self.token.token == expected {
            Ok(self.bump())
        } else {
            Err(ParserError::unexpected(self.token.token.clone(), expected, self.token.span))
        }
    }

    pub fn at_eof(&self) -> bool {
        self.token.token == Token::Eof
    }

    /// Skips zero or more blank-line `NEWLINE` tokens. Block-level statement parsing
    /// calls this between statements so stray blank lines never produce empty
    /// statements, without the lexer having to collapse them itself.
    pub fn skip_newlines(&mut self) {
        while self.token.token == Token::Newline {
            self.bump();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lolcode_span::{with_session_globals, Symbol};

    fn ctx(tokens: Vec<Token>) -> ParserContext {
        let span = Span::new(Symbol::intern("test.lol"), 1);
        ParserContext::new(tokens.into_iter().map(|token| SpannedToken { token, span }).collect())
    }

    #[test]
    fn bump_advances_in_order() {
        with_session_globals(|| {
            let mut p = ctx(vec![Token::Hai, Token::Kthxbye, Token::Eof]);
            assert_eq!(p.bump().token, Token::Hai);
            assert_eq!(p.bump().token, Token::Kthxbye);
            assert!(p.at_eof());
        });
    }

    #[test]
    fn peek_nth_looks_ahead_without_consuming() {
        with_session_globals(|| {
            let p = ctx(vec![Token::Hai, Token::Kthxbye, Token::Eof]);
            assert_eq!(p.peek(), &Token::Hai);
            assert_eq!(p.peek_nth(1), &Token::Kthxbye);
            assert_eq!(p.peek_nth(1), &Token::Kthxbye);
        });
    }

    #[test]
    fn expect_mismatch_reports_expected_and_actual() {
        with_session_globals(|| {
            let mut p = ctx(vec![Token::Kthxbye, Token::Eof]);
            let err = p.expect(Token::Hai).unwrap_err();
            assert_eq!(err.to_string(), "test.lol:1: expected HAI but got KTHXBYE");
        });
    }
}
