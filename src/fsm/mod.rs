// src/fsm/mod.rs
//! Dense transition table with a single current-state cursor.
//!
//! Every state owns one column holding a target for each symbol of the
//! alphabet. Columns are zero-filled on creation, so an unset transition
//! leads to state 0.

pub mod io;

use std::{fmt, ops::Range};

use serde::{Deserialize, Serialize};

pub type State = u32;
pub type Symbol = u32;

/// Target of every transition that was never written.
pub const TRAP: State = 0;

/// One state's outgoing transitions plus its accept marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub next: Box<[State]>,
    pub accepting: bool,
}

impl Column {
    fn empty(alphabet_len: usize) -> Self {
        Self {
            next: vec![TRAP; alphabet_len].into_boxed_slice(),
            accepting: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    alphabet_len: usize,
    columns: Vec<Column>,
    current: State,
}

impl Automaton {
    pub fn new(alphabet_len: usize) -> Self {
        assert!(alphabet_len > 0, "alphabet must not be empty");
        Self {
            alphabet_len,
            columns: Vec::new(),
            current: TRAP,
        }
    }

    pub(crate) fn from_columns(alphabet_len: usize, columns: Vec<Column>) -> Self {
        debug_assert!(columns.iter().all(|c| c.next.len() == alphabet_len));
        Self {
            alphabet_len,
            columns,
            current: TRAP,
        }
    }

    #[inline]
    pub fn alphabet_len(&self) -> usize {
        self.alphabet_len
    }

    /// Number of states created so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    #[inline]
    pub fn current(&self) -> State {
        self.current
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Appends an all-trap, non-accepting state and returns its index.
    pub fn create_state(&mut self) -> State {
        let id = State::try_from(self.columns.len()).expect("state index overflows u32");
        self.columns.push(Column::empty(self.alphabet_len));
        id
    }

    #[inline]
    fn check(&self, state: State, symbol: Symbol) {
        assert!(
            (state as usize) < self.columns.len(),
            "state {state} out of range (have {} states)",
            self.columns.len()
        );
        assert!(
            (symbol as usize) < self.alphabet_len,
            "symbol {symbol} outside alphabet of {}",
            self.alphabet_len
        );
    }

    pub fn set_transition(&mut self, state: State, symbol: Symbol, target: State) {
        self.check(state, symbol);
        self.columns[state as usize].next[symbol as usize] = target;
    }

    #[inline]
    pub fn transition(&self, state: State, symbol: Symbol) -> State {
        self.check(state, symbol);
        self.columns[state as usize].next[symbol as usize]
    }

    /// All targets of `state`, indexed by symbol.
    pub fn column(&self, state: State) -> &[State] {
        assert!(
            (state as usize) < self.columns.len(),
            "state {state} out of range (have {} states)",
            self.columns.len()
        );
        &self.columns[state as usize].next
    }

    pub fn is_accepting(&self, state: State) -> bool {
        self.columns
            .get(state as usize)
            .is_some_and(|c| c.accepting)
    }

    pub fn set_accepting(&mut self, state: State, accepting: bool) {
        assert!((state as usize) < self.columns.len(), "state {state} out of range");
        self.columns[state as usize].accepting = accepting;
    }

    pub fn reset(&mut self, start: State) {
        assert!((start as usize) < self.columns.len(), "start {start} out of range");
        self.current = start;
    }

    /// Advances the cursor by one symbol and returns the new current state.
    pub fn fire(&mut self, symbol: Symbol) -> State {
        let next = self.transition(self.current, symbol);
        log::trace!("fire {symbol}: {} -> {next}", self.current);
        self.current = next;
        next
    }

    /// Appends a copy of the contiguous run `range` and returns the index of
    /// its first state.
    ///
    /// Targets that fall inside `range` are relabelled by the distance between
    /// the copy and the original, so the copy is wired to itself exactly as
    /// the original run is. Targets outside `range` are kept verbatim.
    pub fn copy_states(&mut self, range: Range<State>) -> State {
        assert!(
            range.start <= range.end && range.end as usize <= self.columns.len(),
            "copy range {range:?} out of bounds (have {} states)",
            self.columns.len()
        );
        let base = State::try_from(self.columns.len()).expect("state index overflows u32");
        let offset = base - range.start;
        self.columns.reserve((range.end - range.start) as usize);
        for src in range.clone() {
            let mut col = self.columns[src as usize].clone();
            for t in col.next.iter_mut() {
                let target = *t;
                if range.contains(&target) {
                    *t = target + offset;
                }
            }
            self.columns.push(col);
        }
        log::debug!(
            "copied states {}..{} to {}..{}",
            range.start,
            range.end,
            base,
            base + (range.end - range.start)
        );
        base
    }

    /// Renders the table as symbol rows by state columns.
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "fsm:")?;
        for row in 0..self.alphabet_len {
            write!(f, "{row:3}: ")?;
            for (j, col) in self.columns.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", col.next[row])?;
            }
            writeln!(f)?;
        }
        write!(f, "acc: ")?;
        for (j, col) in self.columns.iter().enumerate() {
            if j > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", col.accepting as u8)?;
        }
        writeln!(f)
    }
}
