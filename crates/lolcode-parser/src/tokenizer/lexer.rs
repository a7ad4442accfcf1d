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

use super::token::{SpannedToken, Token};
use lolcode_ast::TypeTag;
use lolcode_errors::{ParserError, Result};
use lolcode_span::{Span, Symbol};
use std::iter::Peekable;
use std::str::Chars;

/// Scans LOLCODE source text into the token stream `lolcode_parser::parser` consumes.
///
/// This is the one piece of the crate that sits outside the specified parser core: the
/// parser treats its output contract (kind, payload, file, line) as given, exactly as if
/// it arrived from an external tokenizer. It is bundled here, rather than published
/// separately, the same way `leo-parser` bundles its own `tokenizer` module.
pub struct Lexer<'a> {
    file: Symbol,
    line: u32,
    chars: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: Symbol) -> Self {
        Lexer { file, line: 1, chars: source.chars().peekable() }
    }

    /// Scans the whole input into a token stream terminated by a single [`Token::Eof`].
    pub fn tokenize(mut self) -> Result<Vec<SpannedToken>> {
        let mut tokens = Vec::new();
        loop {
            let span = self.span();
            let token = self.next_token()?;
            let is_eof = token == Token::Eof;
            tokens.push(SpannedToken { token, span });
            if is_eof {
                return Ok(tokens);
            }
        }
    }

    fn span(&self) -> Span {
        Span::new(self.file, self.line)
    }

    fn skip_inline_whitespace(&mut self) {
        while matches!(self.chars.peek(), Some(c) if (*c != '\n') && (c.is_whitespace() || *c == ',')) {
            self.chars.next();
        }
    }

    /// Eats a run of `[A-Za-z][A-Za-z0-9]*`, plus an immediately following `?` (so
    /// `RLY?` and `WTF?` scan as one word), without touching the Lexer's own cursor.
    /// Case is preserved verbatim — identifiers are case-sensitive, so only keyword
    /// matching (never identifier text) uppercases the result.
    fn eat_word_raw(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
        chars.peek().filter(|c| c.is_ascii_alphabetic())?;
        let mut word: String = std::iter::from_fn(|| chars.next_if(|c| c.is_ascii_alphanumeric())).collect();
        if chars.peek() == Some(&'?') {
            chars.next();
            word.push('?');
        }
        Some(word)
    }

    /// Looks ahead `n` words past the current cursor without consuming anything,
    /// upper-cased for keyword matching.
    fn peek_words(&self, n: usize) -> Vec<String> {
        let mut clone = self.chars.clone();
        let mut words = Vec::with_capacity(n);
        for _ in 0..n {
            while matches!(clone.peek(), Some(c) if (*c != '\n') && (c.is_whitespace() || *c == ',')) {
                clone.next();
            }
            match Self::eat_word_raw(&mut clone) {
                Some(word) => words.push(word.to_ascii_uppercase()),
                None => break,
            }
        }
        words
    }

    /// Consumes `count` more words (used once a compound keyword match has decided how
    /// many of the peeked words belong to it).
    fn advance_words(&mut self, count: usize) {
        for _ in 0..count {
            self.skip_inline_whitespace();
            Self::eat_word_raw(&mut self.chars);
        }
    }

    fn skip_line_comment(&mut self) {
        while matches!(self.chars.peek(), Some(c) if *c != '\n') {
            self.chars.next();
        }
    }

    fn skip_block_comment(&mut self) -> Result<()> {
        loop {
            while matches!(self.chars.peek(), Some(c) if *c != '\n') {
                self.chars.next();
            }
            match self.chars.peek() {
                None => return Err(ParserError::unclosed("OBTW comment", "TLDR", self.span())),
                Some('\n') => {
                    self.chars.next();
                    self.line += 1;
                }
                _ => unreachable!(),
            }
            if self.peek_words(1).first().map(String::as_str) == Some("TLDR") {
                self.advance_words(1);
                return Ok(());
            }
        }
    }

    fn next_token(&mut self) -> Result<Token> {
        loop {
            self.skip_inline_whitespace();
            match self.chars.peek().copied() {
                None => return Ok(Token::Eof),
                Some('\n') => {
                    self.chars.next();
                    self.line += 1;
                    return Ok(Token::Newline);
                }
                Some('!') => {
                    self.chars.next();
                    return Ok(Token::Bang);
                }
                Some('"') => return self.lex_string(),
                Some('\'') => return self.lex_slot(),
                Some(c) if c == '-' || c.is_ascii_digit() => return self.lex_number(),
                Some(c) if c.is_ascii_alphabetic() => {
                    if let Some(tok) = self.lex_word()? {
                        return Ok(tok);
                    }
                    // A comment was consumed; loop around for the next real token.
                }
                Some(c) => return Err(ParserError::unexpected(c, "a token", self.span())),
            }
        }
    }

    /// Returns `None` when the word scanned was `BTW`/`OBTW` and has already been
    /// skipped as a comment, so the caller should keep looking for a token.
    fn lex_word(&mut self) -> Result<Option<Token>> {
        let raw = Self::eat_word_raw(&mut self.chars).expect("caller checked is_ascii_alphabetic");
        let first = raw.to_ascii_uppercase();

        if first == "BTW" {
            self.skip_line_comment();
            return Ok(None);
        }
        if first == "OBTW" {
            self.skip_block_comment()?;
            return Ok(None);
        }

        let rest = self.peek_words(3);
        if let Some((token, consumed)) = match_compound(&first, &rest) {
            self.advance_words(consumed);
            return Ok(Some(token));
        }
        if let Some(token) = match_single(&first) {
            return Ok(Some(token));
        }
        Ok(Some(Token::Ident(Symbol::intern(&raw))))
    }

    fn lex_number(&mut self) -> Result<Token> {
        let mut text = String::new();
        if self.chars.peek() == Some(&'-') {
            text.push('-');
            self.chars.next();
        }
        text.extend(std::iter::from_fn(|| self.chars.next_if(|c| c.is_ascii_digit())));
        if self.chars.peek() == Some(&'.') {
            text.push('.');
            self.chars.next();
            text.extend(std::iter::from_fn(|| self.chars.next_if(|c| c.is_ascii_digit())));
            let value: f32 = text
                .parse()
                .map_err(|_| ParserError::malformed(format!("`{text}` is not a valid NUMBAR literal"), self.span()))?;
            return Ok(Token::Float(value));
        }
        let value: i64 = text
            .parse()
            .map_err(|_| ParserError::malformed(format!("`{text}` is not a valid NUMBR literal"), self.span()))?;
        Ok(Token::Int(value))
    }

    fn lex_slot(&mut self) -> Result<Token> {
        let span = self.span();
        self.chars.next(); // the `'`
        match self.chars.next() {
            Some('Z') | Some('z') => Ok(Token::SlotOf),
            Some(c) => Err(ParserError::unexpected(format!("'{c}"), "'Z", span)),
            None => Err(ParserError::unclosed("identifier slot", "Z", span)),
        }
    }

    fn lex_string(&mut self) -> Result<Token> {
        let span = self.span();
        self.chars.next(); // opening quote
        let mut value = String::new();
        loop {
            match self.chars.next() {
                None | Some('\n') => return Err(ParserError::unclosed("YARN literal", "\"", span)),
                Some('"') => return Ok(Token::Str(value)),
                Some(':') => value.push(self.lex_string_escape(span)?),
                Some(c) => value.push(c),
            }
        }
    }

    fn lex_string_escape(&mut self, string_start: Span) -> Result<char> {
        match self.chars.next() {
            Some(')') => Ok('\n'),
            Some('>') => Ok('\t'),
            Some('o') => Ok('\u{7}'),
            Some('"') => Ok('"'),
            Some(':') => Ok(':'),
            Some(c) => Err(ParserError::malformed(format!("unknown string escape `:{c}`"), string_start)),
            None => Err(ParserError::unclosed("YARN literal", "\"", string_start)),
        }
    }
}

/// Tries to match a compound (multi-word) keyword starting at `first`, consulting up to
/// three already-peeked words that follow it. Returns the token and how many of `rest`
/// belong to it. Ordering within this function doesn't matter for correctness (each
/// arm's pattern is unambiguous on `first`), but longer phrases are checked before any
/// single-word fallback in [`Lexer::lex_word`], satisfying the longest-match policy.
fn match_compound(first: &str, rest: &[String]) -> Option<(Token, usize)> {
    let r0 = rest.first().map(String::as_str);
    let r1 = rest.get(1).map(String::as_str);
    let r2 = rest.get(2).map(String::as_str);
    match (first, r0, r1, r2) {
        ("IF", Some("U"), Some("SAY"), Some("SO")) => Some((Token::IfUSaySo, 3)),
        ("IM", Some("IN"), Some("YR"), _) => Some((Token::ImInYr, 2)),
        ("IM", Some("OUTTA"), Some("YR"), _) => Some((Token::ImOuttaYr, 2)),
        ("IM", Some("LIEK"), _, _) => Some((Token::ImLiek, 1)),
        ("O", Some("HAI"), Some("IM"), _) => Some((Token::OHaiIm, 2)),
        ("O", Some("RLY?"), _, _) => Some((Token::ORly, 1)),
        ("IS", Some("NOW"), Some("A"), _) => Some((Token::IsNowA, 2)),
        ("ITZ", Some("LIEK"), Some("A"), _) => Some((Token::ItzLiekA, 2)),
        ("ITZ", Some("A"), _, _) => Some((Token::ItzA, 1)),
        ("HAS", Some("A"), _, _) => Some((Token::HasA, 1)),
        ("R", Some("NOOB"), _, _) => Some((Token::RNoob, 1)),
        ("FOUND", Some("YR"), _, _) => Some((Token::FoundYr, 1)),
        ("YA", Some("RLY"), _, _) => Some((Token::YaRly, 1)),
        ("NO", Some("WAI"), _, _) => Some((Token::NoWai, 1)),
        ("HOW", Some("IZ"), _, _) => Some((Token::HowIz, 1)),
        ("SUM", Some("OF"), _, _) => Some((Token::Operator(lolcode_ast::OperatorKind::Add), 1)),
        ("DIFF", Some("OF"), _, _) => Some((Token::Operator(lolcode_ast::OperatorKind::Sub), 1)),
        ("PRODUKT", Some("OF"), _, _) => Some((Token::Operator(lolcode_ast::OperatorKind::Mult), 1)),
        ("QUOSHUNT", Some("OF"), _, _) => Some((Token::Operator(lolcode_ast::OperatorKind::Div), 1)),
        ("MOD", Some("OF"), _, _) => Some((Token::Operator(lolcode_ast::OperatorKind::Mod), 1)),
        ("BIGGR", Some("OF"), _, _) => Some((Token::Operator(lolcode_ast::OperatorKind::Max), 1)),
        ("SMALLR", Some("OF"), _, _) => Some((Token::Operator(lolcode_ast::OperatorKind::Min), 1)),
        ("BOTH", Some("SAEM"), _, _) => Some((Token::Operator(lolcode_ast::OperatorKind::Eq), 1)),
        ("BOTH", Some("OF"), _, _) => Some((Token::Operator(lolcode_ast::OperatorKind::And), 1)),
        ("EITHER", Some("OF"), _, _) => Some((Token::Operator(lolcode_ast::OperatorKind::Or), 1)),
        ("WON", Some("OF"), _, _) => Some((Token::Operator(lolcode_ast::OperatorKind::Xor), 1)),
        ("ALL", Some("OF"), _, _) => Some((Token::Operator(lolcode_ast::OperatorKind::AllOf), 1)),
        ("ANY", Some("OF"), _, _) => Some((Token::Operator(lolcode_ast::OperatorKind::AnyOf), 1)),
        _ => None,
    }
}

fn match_single(word: &str) -> Option<Token> {
    Some(match word {
        "HAI" => Token::Hai,
        "KTHXBYE" => Token::Kthxbye,
        "IT" => Token::It,
        "ITZ" => Token::Itz,
        "R" => Token::R,
        "MAEK" => Token::Maek,
        "A" => Token::A,
        "NOOB" => Token::TypeTag(TypeTag::Noob),
        "TROOF" => Token::TypeTag(TypeTag::Troof),
        "NUMBR" => Token::TypeTag(TypeTag::Numbr),
        "NUMBAR" => Token::TypeTag(TypeTag::Numbar),
        "YARN" => Token::TypeTag(TypeTag::Yarn),
        "VISIBLE" => Token::Visible,
        "GIMMEH" => Token::Gimmeh,
        "AN" => Token::An,
        "MKAY" => Token::Mkay,
        "SRS" => Token::Srs,
        "OIC" => Token::Oic,
        "MEBBE" => Token::Mebbe,
        "WTF?" => Token::Wtf,
        "OMG" => Token::Omg,
        "OMGWTF" => Token::Omgwtf,
        "GTFO" => Token::Gtfo,
        "YR" => Token::Yr,
        "UPPIN" => Token::Uppin,
        "NERFIN" => Token::Nerfin,
        "TIL" => Token::Til,
        "WILE" => Token::Wile,
        "IZ" => Token::Iz,
        "KTHX" => Token::Kthx,
        "NOT" => Token::Operator(lolcode_ast::OperatorKind::Not),
        "DIFFRINT" => Token::Operator(lolcode_ast::OperatorKind::Neq),
        "SMOOSH" => Token::Operator(lolcode_ast::OperatorKind::Concat),
        "WIN" => Token::Boolean(true),
        "FAIL" => Token::Boolean(false),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lolcode_span::with_session_globals;

    fn tokens(source: &str) -> Vec<Token> {
        with_session_globals(|| {
            let file = Symbol::intern("test.lol");
            Lexer::new(source, file).tokenize().unwrap().into_iter().map(|t| t.token).collect()
        })
    }

    #[test]
    fn lexes_minimal_program() {
        assert_eq!(
            tokens("HAI 1.2\nKTHXBYE\n"),
            vec![Token::Hai, Token::Float(1.2), Token::Newline, Token::Kthxbye, Token::Newline, Token::Eof]
        );
    }

    #[test]
    fn longest_match_prefers_r_noob_over_r() {
        assert_eq!(tokens("VAR R NOOB\n")[1], Token::Ident(Symbol::intern("VAR")));
        assert_eq!(tokens("VAR R NOOB\n")[2], Token::RNoob);
    }

    #[test]
    fn longest_match_prefers_itz_liek_a_over_itz_a_over_itz() {
        let t = tokens("I HAS A X ITZ LIEK A Y\n");
        assert!(t.contains(&Token::ItzLiekA));
        let t = tokens("I HAS A X ITZ A NUMBR\n");
        assert!(t.contains(&Token::ItzA));
        let t = tokens("I HAS A X ITZ 5\n");
        assert!(t.contains(&Token::Itz));
    }

    #[test]
    fn identifiers_are_case_sensitive_but_keywords_are_not() {
        let t = tokens("myVar r nooB\n");
        assert_eq!(t[0], Token::Ident(Symbol::intern("myVar")));
        assert_eq!(t[1], Token::RNoob);
    }

    #[test]
    fn negative_and_float_literals() {
        assert_eq!(tokens("-5\n")[0], Token::Int(-5));
        assert_eq!(tokens("-5.5\n")[0], Token::Float(-5.5));
    }

    #[test]
    fn string_escapes() {
        let t = tokens("\"line:)tab:>quote:\"end\"\n");
        assert_eq!(t[0], Token::Str("line\ntab\tquote\"end".to_string()));
    }

    #[test]
    fn line_comment_is_skipped_without_eating_the_newline() {
        let t = tokens("VISIBLE 1 BTW this is noise\nVISIBLE 2\n");
        assert_eq!(t[0], Token::Visible);
        assert_eq!(t[1], Token::Int(1));
        assert_eq!(t[2], Token::Newline);
        assert_eq!(t[3], Token::Visible);
    }

    #[test]
    fn block_comment_spans_multiple_lines() {
        let t = tokens("VISIBLE 1\nOBTW\nblah\nblah\nTLDR\nVISIBLE 2\n");
        assert_eq!(t.iter().filter(|tok| **tok == Token::Visible).count(), 2);
    }
}
