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

//! Recursive-descent parser for LOLCODE: turns source text into a [`lolcode_ast::Program`].
//!
//! The crate is organized leaves-first: [`tokenizer`] produces the token stream,
//! [`parser`] consumes it through a token cursor, leaf parsers, an expression parser, a
//! statement parser, and finally the program assembler in that order.

pub mod parser;
pub mod tokenizer;

use lolcode_errors::Handler;
use lolcode_span::{with_session_globals, Symbol};
use parser::ParserContext;

/// Parses one LOLCODE source file.
///
/// `file` is used only for diagnostics (it becomes the `<file>` in every error's
/// `<file>:<line>: ...` rendering). On success returns the parsed [`lolcode_ast::Program`];
/// on the first fatal error, reports it through `handler` and returns `None` — there is
/// no error recovery, matching the parser's single-error-per-parse contract.
pub fn parse(source: &str, file: &str, handler: &Handler) -> Option<lolcode_ast::Program> {
    with_session_globals(|| {
        let file = Symbol::intern(file);
        let result = tokenizer::tokenize(source, file).and_then(|tokens| ParserContext::new(tokens).parse_program());
        match result {
            Ok(program) => Some(program),
            Err(err) => {
                handler.emit_err(&err);
                None
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lolcode_errors::{BufferSink, Handler};

    #[test]
    fn parse_reports_through_the_supplied_handler_on_failure() {
        let handler = Handler::new(Box::new(BufferSink::default()));
        let program = parse("HAI 1.2\nIM IN YR LOOP\nIM OUTTA YR OTHER\nKTHXBYE\n", "prog.lol", &handler);
        assert!(program.is_none());
        assert!(handler.has_errors());
    }

    #[test]
    fn parse_succeeds_on_a_minimal_program() {
        let handler = Handler::stderr();
        let program = parse("HAI 1.2\nKTHXBYE\n", "prog.lol", &handler);
        assert!(program.is_some());
        assert!(!handler.has_errors());
    }
}
