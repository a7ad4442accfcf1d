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

/// A node in the parse tree.
///
/// Every statement, expression, identifier, and constant carries the source span of its
/// first token, which is how the parser satisfies the line-fidelity property: any
/// diagnostic or downstream error can point back at the line that produced a node.
pub trait Node: std::fmt::Debug + std::fmt::Display + Clone {
    fn span(&self) -> Span;
    fn set_span(&mut self, span: Span);
}

/// Implements [`Node`] for a struct with a `span: Span` field.
#[macro_export]
macro_rules! simple_node_impl {
    ($ty:ty) => {
        impl $crate::Node for $ty {
            fn span(&self) -> lolcode_span::Span {
                self.span
            }

            fn set_span(&mut self, span: lolcode_span::Span) {
                self.span = span;
            }
        }
    };
}
