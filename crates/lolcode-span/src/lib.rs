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

//! Source file and line tracking shared by the LOLCODE AST and parser.

mod span;
mod symbol;

pub use span::Span;
pub use symbol::{with_session_globals, Symbol};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_round_trips() {
        with_session_globals(|| {
            let a = Symbol::intern("VAR");
            let b = Symbol::intern("VAR");
            assert_eq!(a, b);
            assert_eq!(a.as_str(), "VAR");
        });
    }

    #[test]
    fn distinct_strings_get_distinct_symbols() {
        with_session_globals(|| {
            let a = Symbol::intern("I");
            let b = Symbol::intern("IT");
            assert_ne!(a, b);
        });
    }

    #[test]
    fn span_add_keeps_earliest_line() {
        with_session_globals(|| {
            let file = Symbol::intern("prog.lol");
            let early = Span::new(file, 3);
            let late = Span::new(file, 9);
            assert_eq!((early + late).line, 3);
            assert_eq!((late + early).line, 3);
        });
    }
}
