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

//! Interned strings used for identifier names and source file names.

use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use std::cell::RefCell;
use std::fmt;

#[derive(Default)]
struct Interner {
    strings: IndexSet<&'static str, FxBuildHasher>,
}

impl Interner {
    fn intern(&mut self, string: &str) -> u32 {
        if let Some(idx) = self.strings.get_index_of(string) {
            return idx as u32;
        }
        // Leaked for the lifetime of the interning session; reclaimed when the process exits.
        let leaked: &'static str = Box::leak(string.to_owned().into_boxed_str());
        let (idx, _) = self.strings.insert_full(leaked);
        idx as u32
    }

    fn get(&self, idx: u32) -> &'static str {
        self.strings.get_index(idx as usize).copied().expect("symbol index out of range")
    }
}

scoped_tls::scoped_thread_local!(static INTERNER: RefCell<Interner>);

/// Runs `f` with a fresh symbol-interning session active on the current thread.
///
/// All [`Symbol::intern`] calls made (directly or transitively) while `f` runs resolve
/// against the same table. Parsing a program should happen inside one such session.
pub fn with_session_globals<R>(f: impl FnOnce() -> R) -> R {
    INTERNER.set(&RefCell::new(Interner::default()), f)
}

/// An interned string: names of identifiers, source files, and keyword text.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

impl Symbol {
    /// Interns `string`, returning a `Symbol` that compares and hashes in O(1).
    ///
    /// # Panics
    ///
    /// Panics if called outside a [`with_session_globals`] scope.
    pub fn intern(string: &str) -> Self {
        INTERNER.with(|interner| Symbol(interner.borrow_mut().intern(string)))
    }

    /// Returns the original string for this symbol.
    pub fn as_str(self) -> &'static str {
        INTERNER.with(|interner| interner.borrow().get(self.0))
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl serde::Serialize for Symbol {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Symbol {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Symbol::intern(&s))
    }
}
