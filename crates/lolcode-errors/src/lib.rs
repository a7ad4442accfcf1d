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

//! Diagnostic types and the emission sink shared by the LOLCODE parser.

mod emitter;
mod error;

pub use emitter::{BufferSink, DiagnosticSink, Handler, StderrSink};
pub use error::{ParserError, Result};

#[cfg(test)]
mod tests {
    use super::*;
    use lolcode_span::{with_session_globals, Span, Symbol};

    #[test]
    fn unexpected_token_message_matches_contract() {
        with_session_globals(|| {
            let span = Span::new(Symbol::intern("prog.lol"), 4);
            let err = ParserError::unexpected("NEWLINE", "MKAY", span);
            assert_eq!(err.to_string(), "prog.lol:4: expected MKAY but got NEWLINE");
        });
    }

    #[test]
    fn handler_counts_and_forwards_to_sink() {
        with_session_globals(|| {
            let span = Span::new(Symbol::intern("prog.lol"), 1);
            let handler = Handler::new(Box::new(BufferSink::default()));
            handler.emit_err(&ParserError::unexpected("EOF", "KTHXBYE", span));
            assert!(handler.has_errors());
            assert_eq!(handler.error_count(), 1);
        });
    }
}
