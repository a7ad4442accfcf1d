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

//! The recursive-descent layers built on top of [`context::ParserContext`]: leaf
//! parsers, the expression parser, the statement parser, and the program assembler.
//! Each layer is an `impl ParserContext` block in its own file, the same way
//! `leo-parser::parser` splits `expression.rs`/`statement.rs`/`file.rs` apart while
//! sharing one context type.

mod context;
mod expression;
mod leaf;
mod program;
mod statement;

pub use context::ParserContext;
