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

use lolcode_span::Span;
use std::fmt;

/// The four fatal error kinds the parser can raise, per the taxonomy the parser is
/// specified against. Every kind is fatal: there is no parse-error recovery, so
/// [`crate::Handler::emit_err`] is called at most once per parse.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    /// A `require` (or equivalent) call saw a token that didn't match what the grammar
    /// production expected at that position.
    #[error("{span}: expected {expected} but got {actual}")]
    UnexpectedToken { expected: String, actual: String, span: Span },

    /// End of file was reached while a block or statement was still waiting on its
    /// closing keyword.
    #[error("{span}: unclosed {construct}, reached end of file before `{terminator}`")]
    UnclosedConstruct { construct: &'static str, terminator: &'static str, span: Span },

    /// `IM IN YR <name> ... IM OUTTA YR <other>` where `name != other`.
    #[error("{span}: loop closed as `{closing}` but opened as `{opening}`")]
    LoopNameMismatch { opening: String, closing: String, span: Span },

    /// A construct was syntactically complete but violates a structural rule the
    /// grammar alone doesn't enforce (e.g. a declaration with two initializers).
    #[error("{span}: {reason}")]
    MalformedConstruct { reason: String, span: Span },

    /// Node allocation failed while building the tree.
    #[error("{span}: out of memory")]
    OutOfMemory { span: Span },
}

impl ParserError {
    pub fn span(&self) -> Span {
        match self {
            ParserError::UnexpectedToken { span, .. }
            | ParserError::UnclosedConstruct { span, .. }
            | ParserError::LoopNameMismatch { span, .. }
            | ParserError::MalformedConstruct { span, .. }
            | ParserError::OutOfMemory { span, .. } => *span,
        }
    }

    /// Builds an [`ParserError::UnexpectedToken`] from whatever the caller has on hand;
    /// `expected` and `actual` only need to implement [`fmt::Display`].
    pub fn unexpected(actual: impl fmt::Display, expected: impl fmt::Display, span: Span) -> Self {
        ParserError::UnexpectedToken { expected: expected.to_string(), actual: actual.to_string(), span }
    }

    pub fn unclosed(construct: &'static str, terminator: &'static str, span: Span) -> Self {
        ParserError::UnclosedConstruct { construct, terminator, span }
    }

    pub fn loop_name_mismatch(opening: impl Into<String>, closing: impl Into<String>, span: Span) -> Self {
        ParserError::LoopNameMismatch { opening: opening.into(), closing: closing.into(), span }
    }

    pub fn malformed(reason: impl Into<String>, span: Span) -> Self {
        ParserError::MalformedConstruct { reason: reason.into(), span }
    }

    pub fn out_of_memory(span: Span) -> Self {
        ParserError::OutOfMemory { span }
    }
}

pub type Result<T> = std::result::Result<T, ParserError>;
