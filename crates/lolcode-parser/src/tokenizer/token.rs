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

use lolcode_ast::{OperatorKind, TypeTag};
use lolcode_span::{Span, Symbol};
use std::fmt;

/// One classified lexical unit.
///
/// Compound keywords that the grammar always treats as a unit (`HAS A`, `ITZ A`,
/// `R NOOB`, `IM IN YR`, ...) are their own variants, produced by the tokenizer's
/// longest-match policy (spec.md §4.4) so the parser never has to re-merge tokens.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    // Literals.
    Int(i64),
    Float(f32),
    Str(String),
    Boolean(bool),
    Ident(Symbol),

    // Structural.
    Newline,
    Eof,

    // Program assembler.
    Hai,
    Kthxbye,

    // Implicit variable.
    It,

    // Declaration.
    HasA,
    Itz,
    ItzA,
    ItzLiekA,

    // Assignment / deallocation.
    R,
    RNoob,

    // Cast.
    IsNowA,
    Maek,
    A,
    TypeTag(TypeTag),

    // I/O.
    Visible,
    Gimmeh,
    Bang,

    // Operators and their separators.
    Operator(OperatorKind),
    An,
    Mkay,

    // Identifiers.
    Srs,
    SlotOf,

    // If/then/else.
    ORly,
    YaRly,
    Mebbe,
    NoWai,
    Oic,

    // Switch.
    Wtf,
    Omg,
    Omgwtf,

    // Break / return.
    Gtfo,
    FoundYr,
    Yr,

    // Loop.
    ImInYr,
    ImOuttaYr,
    Uppin,
    Nerfin,
    Til,
    Wile,

    // Function definition and call.
    HowIz,
    Iz,
    IfUSaySo,

    // Alternate array definition.
    OHaiIm,
    ImLiek,
    Kthx,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Int(v) => write!(f, "{v}"),
            Token::Float(v) => write!(f, "{v}"),
            Token::Str(v) => write!(f, "{v:?}"),
            Token::Boolean(true) => f.write_str("WIN"),
            Token::Boolean(false) => f.write_str("FAIL"),
            Token::Ident(name) => write!(f, "{name}"),
            Token::Newline => f.write_str("NEWLINE"),
            Token::Eof => f.write_str("EOF"),
            Token::Hai => f.write_str("HAI"),
            Token::Kthxbye => f.write_str("KTHXBYE"),
            Token::It => f.write_str("IT"),
            Token::HasA => f.write_str("HAS A"),
            Token::Itz => f.write_str("ITZ"),
            Token::ItzA => f.write_str("ITZ A"),
            Token::ItzLiekA => f.write_str("ITZ LIEK A"),
            Token::R => f.write_str("R"),
            Token::RNoob => f.write_str("R NOOB"),
            Token::IsNowA => f.write_str("IS NOW A"),
            Token::Maek => f.write_str("MAEK"),
            Token::A => f.write_str("A"),
            Token::TypeTag(ty) => write!(f, "{ty}"),
            Token::Visible => f.write_str("VISIBLE"),
            Token::Gimmeh => f.write_str("GIMMEH"),
            Token::Bang => f.write_str("!"),
            Token::Operator(op) => write!(f, "{op}"),
            Token::An => f.write_str("AN"),
            Token::Mkay => f.write_str("MKAY"),
            Token::Srs => f.write_str("SRS"),
            Token::SlotOf => f.write_str("'Z"),
            Token::ORly => f.write_str("O RLY?"),
            Token::YaRly => f.write_str("YA RLY"),
            Token::Mebbe => f.write_str("MEBBE"),
            Token::NoWai => f.write_str("NO WAI"),
            Token::Oic => f.write_str("OIC"),
            Token::Wtf => f.write_str("WTF?"),
            Token::Omg => f.write_str("OMG"),
            Token::Omgwtf => f.write_str("OMGWTF"),
            Token::Gtfo => f.write_str("GTFO"),
            Token::FoundYr => f.write_str("FOUND YR"),
            Token::Yr => f.write_str("YR"),
            Token::ImInYr => f.write_str("IM IN YR"),
            Token::ImOuttaYr => f.write_str("IM OUTTA YR"),
            Token::Uppin => f.write_str("UPPIN"),
            Token::Nerfin => f.write_str("NERFIN"),
            Token::Til => f.write_str("TIL"),
            Token::Wile => f.write_str("WILE"),
            Token::HowIz => f.write_str("HOW IZ"),
            Token::Iz => f.write_str("IZ"),
            Token::IfUSaySo => f.write_str("IF U SAY SO"),
            Token::OHaiIm => f.write_str("O HAI IM"),
            Token::ImLiek => f.write_str("IM LIEK"),
            Token::Kthx => f.write_str("KTHX"),
        }
    }
}

/// A [`Token`] tagged with the source location of its first character.
#[derive(Clone, Debug, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

impl SpannedToken {
    pub fn dummy() -> Self {
        SpannedToken { token: Token::Eof, span: Span::dummy() }
    }
}

impl fmt::Display for SpannedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token)
    }
}
