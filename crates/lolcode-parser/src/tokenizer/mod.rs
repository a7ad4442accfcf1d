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

//! Turns LOLCODE source text into the token stream the parser consumes.
//!
//! This module is the one part of the crate not named as a layer in the parser's own
//! five-layer design: the parser's token cursor treats "a token stream exists" as given,
//! exactly as it would if tokens arrived from an external scanner. `tokenize` is the
//! seam between program text and that contract.

mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{SpannedToken, Token};

use lolcode_errors::Result;
use lolcode_span::Symbol;

/// Scans `source` (attributed to `file` for diagnostics) into a token stream ending in
/// a single [`Token::Eof`]. Must run inside a [`lolcode_span::with_session_globals`]
/// scope, since both `file` interning and any `Token::Ident` symbols it produces borrow
/// from the active interner.
pub fn tokenize(source: &str, file: Symbol) -> Result<Vec<SpannedToken>> {
    Lexer::new(source, file).tokenize()
}
