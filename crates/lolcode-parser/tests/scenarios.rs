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

//! End-to-end coverage of the six concrete scenarios and the structural round-trip
//! property, driven entirely through the public `lolcode_parser::parse` entry point
//! rather than any internal parser type.

use lolcode_ast::{DeclarationInit, Statement};
use lolcode_errors::{BufferSink, Handler};

fn parse_ok(source: &str) -> lolcode_ast::Program {
    let handler = Handler::new(Box::new(BufferSink::default()));
    let program = lolcode_parser::parse(source, "scenario.lol", &handler);
    assert!(!handler.has_errors(), "unexpected parse failure for: {source}");
    program.expect("parse_ok called on a source that failed to parse")
}

#[test]
fn minimal_program() {
    let program = parse_ok("HAI 1.2\nKTHXBYE\n");
    assert_eq!(program.version.as_deref(), Some("1.2"));
    assert!(program.block.statements.is_empty());
}

#[test]
fn print_with_bang_suppresses_trailing_newline() {
    let program = parse_ok("HAI 1.2\nVISIBLE \"HELLO WORLD\"!\nKTHXBYE\n");
    match &program.block.statements[0] {
        Statement::Print(p) => {
            assert!(p.suppress_newline);
            assert_eq!(p.args.len(), 1);
        }
        other => panic!("expected a print statement, got {other:?}"),
    }
}

#[test]
fn declaration_with_expression_initializer() {
    let program = parse_ok("HAI 1.2\nI HAS A AGE ITZ 10\nKTHXBYE\n");
    match &program.block.statements[0] {
        Statement::Declaration(d) => assert!(matches!(d.init, DeclarationInit::Expr(_))),
        other => panic!("expected a declaration statement, got {other:?}"),
    }
}

#[test]
fn if_elseif_else_chain() {
    let source = "HAI 1.2\n\
O RLY?\n\
YA RLY\n\
VISIBLE 1\n\
MEBBE FAIL\n\
VISIBLE 2\n\
NO WAI\n\
VISIBLE 3\n\
OIC\n\
KTHXBYE\n";
    let program = parse_ok(source);
    match &program.block.statements[0] {
        Statement::Conditional(c) => {
            assert_eq!(c.elifs.len(), 1);
            assert!(c.no.is_some());
        }
        other => panic!("expected a conditional statement, got {other:?}"),
    }
}

#[test]
fn loop_name_mismatch_fails() {
    let source = "HAI 1.2\nIM IN YR OUTER\nIM OUTTA YR INNER\nKTHXBYE\n";
    let handler = Handler::new(Box::new(BufferSink::default()));
    let program = lolcode_parser::parse(source, "scenario.lol", &handler);
    assert!(program.is_none());
    assert_eq!(handler.error_count(), 1);
}

#[test]
fn nary_operator_missing_mkay_fails() {
    let source = "HAI 1.2\nVISIBLE ALL OF WIN AN FAIL\nKTHXBYE\n";
    let handler = Handler::new(Box::new(BufferSink::default()));
    let program = lolcode_parser::parse(source, "scenario.lol", &handler);
    assert!(program.is_none());
    assert_eq!(handler.error_count(), 1);
}

#[test]
fn structural_round_trip_through_display() {
    let source = "HAI 1.2\nI HAS A X ITZ 1\nIM IN YR LOOP UPPIN YR X TIL BOTH SAEM X AN 10\nVISIBLE X\nIM OUTTA YR LOOP\nKTHXBYE\n";
    let first = parse_ok(source);
    let rendered = first.to_string();
    let second = parse_ok(&rendered);
    assert_eq!(first.block.statements.len(), second.block.statements.len());
    assert_eq!(rendered, second.to_string());
}
