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

use crate::ParserError;
use std::cell::{Cell, RefCell};

/// Where a [`Handler`] writes formatted diagnostics.
///
/// The parser never writes to `stderr` directly; it goes through this trait so callers
/// (tests, an LSP, a REPL) can capture diagnostics instead of a global stream.
pub trait DiagnosticSink {
    fn emit(&mut self, message: &str);
}

/// The default sink: writes one line to the process's standard error stream, verbatim —
/// this is the sink that has to reproduce the documented wire format exactly, so it adds
/// no prefix or coloring of its own.
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn emit(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

/// A sink that only accumulates messages, for tests that want to assert on diagnostic
/// text without touching `stderr`.
#[derive(Default)]
pub struct BufferSink {
    pub messages: Vec<String>,
}

impl DiagnosticSink for BufferSink {
    fn emit(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}

/// Collaborator the parser reports fatal errors through.
///
/// Exactly one error is ever emitted per parse, since the parser halts at the first
/// one, but the handler still counts emissions so callers can assert `has_errors()`.
pub struct Handler {
    sink: RefCell<Box<dyn DiagnosticSink>>,
    error_count: Cell<usize>,
}

impl Handler {
    pub fn new(sink: Box<dyn DiagnosticSink>) -> Self {
        Handler { sink: RefCell::new(sink), error_count: Cell::new(0) }
    }

    /// A handler that writes to `stderr`, matching the parser's documented output contract.
    pub fn stderr() -> Self {
        Self::new(Box::new(StderrSink))
    }

    pub fn emit_err(&self, err: &ParserError) {
        self.error_count.set(self.error_count.get() + 1);
        self.sink.borrow_mut().emit(&err.to_string());
    }

    pub fn has_errors(&self) -> bool {
        self.error_count.get() > 0
    }

    pub fn error_count(&self) -> usize {
        self.error_count.get()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::stderr()
    }
}
