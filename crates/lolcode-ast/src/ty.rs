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

use std::fmt;

/// The closed set of LOLCODE type tags, as produced by the leaf type-tag parser.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TypeTag {
    Noob,
    Troof,
    Numbr,
    Numbar,
    Yarn,
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TypeTag::Noob => "NOOB",
            TypeTag::Troof => "TROOF",
            TypeTag::Numbr => "NUMBR",
            TypeTag::Numbar => "NUMBAR",
            TypeTag::Yarn => "YARN",
        };
        f.write_str(s)
    }
}
