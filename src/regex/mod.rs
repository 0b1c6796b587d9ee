// src/regex/mod.rs
//! Restricted regular expressions compiled straight into an [`Automaton`].
//!
//! Supported syntax: printable ASCII literals, `.`, postfix `?` `*` `+`, and
//! one level of `( ... | ... )` grouping.

pub mod compile;
pub mod error;
pub mod matcher;
mod merge;

use std::fmt;

pub use compile::{ALPHABET_LEN, END_OF_INPUT, START, compile};
pub use error::CompileError;
pub use matcher::{equivalent, is_match};

use crate::fsm::{Automaton, State};

/// A compiled pattern together with its automaton.
#[derive(Clone)]
pub struct Regex {
    pattern: Box<[u8]>,
    fsm: Automaton,
    start: State,
}

impl Regex {
    pub fn new(pattern: impl AsRef<[u8]>) -> Result<Self, CompileError> {
        let pattern = pattern.as_ref();
        let (fsm, start) = compile(pattern)?;
        Ok(Self {
            pattern: pattern.into(),
            fsm,
            start,
        })
    }

    pub fn is_match(&self, text: impl AsRef<[u8]>) -> bool {
        is_match(&self.fsm, self.start, text.as_ref())
    }

    /// True when both patterns accept exactly the same inputs.
    pub fn equivalent(&self, other: &Regex) -> bool {
        equivalent(&self.fsm, self.start, &other.fsm, other.start)
    }

    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    pub fn automaton(&self) -> &Automaton {
        &self.fsm
    }

    pub fn start(&self) -> State {
        self.start
    }
}

impl fmt::Debug for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Regex")
            .field("pattern", &String::from_utf8_lossy(&self.pattern))
            .field("states", &self.fsm.len())
            .field("start", &self.start)
            .finish()
    }
}
