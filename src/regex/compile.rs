// src/regex/compile.rs
// Single-pass translation of a pattern straight into a dense automaton table.
//
// Construction tracks a *frontier*: the states the next atom hangs off. Each
// atom reserves its target state first and then writes an edge from every
// frontier state to it. Quantifiers only reshape the frontier (`?`), add
// loop-back edges (`*`), or copy the last atom before looping it (`+`).
// An edge landing on a cell that already leads elsewhere goes to a merged
// state for both targets (see `merge`).

use std::ops::RangeInclusive;

use super::{error::CompileError, merge::Merges};
use crate::fsm::{Automaton, State, Symbol, TRAP};

/// Symbols `0..=126`; 0 is the end-of-input event.
pub const ALPHABET_LEN: usize = 127;
pub const END_OF_INPUT: Symbol = 0;
/// Entry state of every compiled pattern.
pub const START: State = 1;

const PRINTABLE: RangeInclusive<Symbol> = 32..=126;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edge {
    symbol: Symbol,
    target: State,
}

/// The most recently completed sub-pattern: a literal, `.` or a whole group.
#[derive(Debug, Clone)]
struct Anchor {
    /// Frontier the sub-pattern was attached to.
    entry: Vec<State>,
    /// First state the sub-pattern created; its states run to the end of the table.
    first: State,
    /// Edges written out of `entry` while compiling the sub-pattern.
    edges: Vec<Edge>,
    /// Frontier right after the sub-pattern.
    exit: Vec<State>,
}

impl Anchor {
    /// True when the sub-pattern can match the empty string.
    fn nullable(&self) -> bool {
        self.exit.iter().any(|s| self.entry.contains(s))
    }
}

#[derive(Debug)]
struct ParseState {
    frontier: Vec<State>,
    anchor: Option<Anchor>,
    special_allowed: bool,
    pending_optional: bool,
}

impl ParseState {
    fn new(start: State) -> Self {
        Self {
            frontier: vec![start],
            anchor: None,
            special_allowed: false,
            pending_optional: false,
        }
    }
}

fn union(a: &[State], b: &[State]) -> Vec<State> {
    let mut out = a.to_vec();
    for &s in b {
        if !out.contains(&s) {
            out.push(s);
        }
    }
    out
}

struct Compiler<'p> {
    pattern: &'p [u8],
    pos: usize,
    fsm: Automaton,
    merges: Merges,
    /// Entry states of the open group and the edges written out of them.
    entry_log: Option<(Vec<State>, Vec<Edge>)>,
}

/// Compiles `pattern` into a fresh automaton and returns it with its entry
/// state.
///
/// Grammar:
///
/// ```text
/// pattern := expr*
/// expr    := (literal | '.' | group) postfix?
/// group   := '(' branch ('|' branch)* ')'
/// branch  := expr*
/// postfix := '?' | '*' | '+'
/// ```
///
/// Groups do not nest. Only grammar violations fail; overlapping paths such
/// as `.*a` or `(ab|ac)` share merged states.
pub fn compile(pattern: &[u8]) -> Result<(Automaton, State), CompileError> {
    let mut fsm = Automaton::new(ALPHABET_LEN);
    let trap = fsm.create_state();
    let start = fsm.create_state();
    debug_assert_eq!((trap, start), (TRAP, START));

    let mut compiler = Compiler {
        pattern,
        pos: 0,
        fsm,
        merges: Merges::default(),
        entry_log: None,
    };
    let mut st = ParseState::new(start);
    compiler.branch(&mut st, false)?;
    Ok(compiler.finish(&st.frontier))
}

impl Compiler<'_> {
    #[inline]
    fn peek(&self) -> Option<u8> {
        self.pattern.get(self.pos).copied()
    }

    /// Writes `from --symbol--> to`, merging with whatever the cell held.
    fn connect(&mut self, from: State, symbol: Symbol, to: State) {
        debug_assert_ne!(from, TRAP, "trap state must stay absorbing");
        if let Some((states, edges)) = &mut self.entry_log {
            let edge = Edge { symbol, target: to };
            if states.contains(&from) && !edges.contains(&edge) {
                edges.push(edge);
            }
        }
        self.merges.connect(&mut self.fsm, from, symbol, to);
    }

    /// Compiles `expr*` until end of pattern, or until `|`/`)` when inside a group.
    fn branch(&mut self, st: &mut ParseState, in_group: bool) -> Result<(), CompileError> {
        while let Some(b) = self.peek() {
            let at = self.pos;
            match b {
                b')' | b'|' if in_group => return Ok(()),
                b')' => return Err(CompileError::UnmatchedParen { at }),
                b'|' => return Err(CompileError::AlternationOutsideGroup { at }),
                b'(' if in_group => return Err(CompileError::NestedGroup { at }),
                b'(' => self.group(st)?,
                b'.' => {
                    if st.pending_optional {
                        return Err(CompileError::WildcardAfterOptional { at });
                    }
                    self.atom(st, PRINTABLE);
                }
                b'?' | b'*' | b'+' => self.postfix(st, b)?,
                _ if PRINTABLE.contains(&Symbol::from(b)) => {
                    let sym = Symbol::from(b);
                    self.atom(st, sym..=sym);
                }
                byte => return Err(CompileError::InvalidByte { byte, at }),
            }
        }
        Ok(())
    }

    /// A single literal (one symbol) or wildcard (all printable symbols).
    fn atom(&mut self, st: &mut ParseState, symbols: RangeInclusive<Symbol>) {
        let entry = std::mem::take(&mut st.frontier);
        let target = self.fsm.create_state();
        for &from in &entry {
            for symbol in symbols.clone() {
                self.connect(from, symbol, target);
            }
        }
        log::debug!(
            "atom {:?} at {}: {:?} -> {target}",
            self.peek().map(char::from),
            self.pos,
            entry
        );

        let edges = symbols.map(|symbol| Edge { symbol, target }).collect();
        st.anchor = Some(Anchor {
            entry,
            first: target,
            edges,
            exit: vec![target],
        });
        st.frontier = vec![target];
        st.special_allowed = true;
        st.pending_optional = false;
        self.pos += 1;
    }

    fn group(&mut self, st: &mut ParseState) -> Result<(), CompileError> {
        let open = self.pos;
        self.pos += 1;

        let entry = st.frontier.clone();
        let first = self.fsm.len() as State;
        // A `?` right before the group still counts for each branch's first atom.
        let after_optional = st.pending_optional;
        self.entry_log = Some((entry.clone(), Vec::new()));

        // Every branch starts from the same entry frontier.
        let mut exit = Vec::new();
        loop {
            st.frontier = entry.clone();
            st.special_allowed = false;
            st.pending_optional = after_optional;
            self.branch(st, true)?;
            exit = union(&exit, &st.frontier);
            match self.peek() {
                Some(b'|') => self.pos += 1,
                Some(b')') => {
                    self.pos += 1;
                    break;
                }
                _ => return Err(CompileError::UnclosedGroup { at: open }),
            }
        }

        let edges = self.entry_log.take().map(|(_, edges)| edges).unwrap_or_default();
        log::debug!(
            "group {open}..{}: entry {entry:?}, exit {exit:?}, {} entry edges",
            self.pos,
            edges.len()
        );
        st.frontier = exit.clone();
        st.anchor = Some(Anchor {
            entry,
            first,
            edges,
            exit,
        });
        st.special_allowed = true;
        st.pending_optional = false;
        Ok(())
    }

    fn postfix(&mut self, st: &mut ParseState, op: u8) -> Result<(), CompileError> {
        let dangling = CompileError::DanglingQuantifier {
            op: char::from(op),
            at: self.pos,
        };
        if !st.special_allowed {
            return Err(dangling);
        }
        let Some(anchor) = st.anchor.take() else {
            return Err(dangling);
        };

        match op {
            b'?' => {
                st.frontier = union(&anchor.entry, &anchor.exit);
                st.anchor = Some(anchor);
            }
            b'+' if !anchor.nullable() => {
                let copy = self.repeat_once(&anchor);
                self.loop_back(&copy);
                st.frontier = union(&anchor.exit, &copy.exit);
                st.anchor = Some(copy);
            }
            // `*`, and `+` over something that already matches empty.
            _ => {
                self.loop_back(&anchor);
                st.frontier = union(&anchor.entry, &anchor.exit);
                st.anchor = Some(anchor);
            }
        }
        log::debug!(
            "postfix {:?} at {}: frontier {:?}",
            char::from(op),
            self.pos,
            st.frontier
        );

        st.special_allowed = false;
        st.pending_optional = op == b'?';
        self.pos += 1;
        Ok(())
    }

    /// Sends every exit of `anchor` back into the sub-pattern along its entry edges.
    fn loop_back(&mut self, anchor: &Anchor) {
        for &from in &anchor.exit {
            for e in &anchor.edges {
                self.connect(from, e.symbol, e.target);
            }
        }
    }

    /// Appends a copy of `anchor`'s states and chains it after the original.
    /// Returns the anchor describing the copy.
    fn repeat_once(&mut self, anchor: &Anchor) -> Anchor {
        let end = self.fsm.len() as State;
        debug_assert!(anchor.exit.iter().all(|&s| (anchor.first..end).contains(&s)));

        let base = self.fsm.copy_states(anchor.first..end);
        self.merges.after_copy(&mut self.fsm, anchor.first..end, base);
        let offset = base - anchor.first;
        let edges: Vec<Edge> = anchor
            .edges
            .iter()
            .map(|e| Edge {
                symbol: e.symbol,
                target: e.target + offset,
            })
            .collect();
        for &from in &anchor.exit {
            for e in &edges {
                self.connect(from, e.symbol, e.target);
            }
        }

        Anchor {
            entry: anchor.exit.clone(),
            first: base,
            edges,
            exit: anchor.exit.iter().map(|&s| s + offset).collect(),
        }
    }

    /// Materialises the accept state and hangs it off every state the
    /// pattern may end in, on the end-of-input symbol.
    fn finish(mut self, frontier: &[State]) -> (Automaton, State) {
        let accept = self.fsm.create_state();
        self.fsm.set_accepting(accept, true);
        for &f in frontier {
            self.connect(f, END_OF_INPUT, accept);
        }
        log::debug!(
            "compiled {:?} into {} states (accept = {accept})",
            String::from_utf8_lossy(self.pattern),
            self.fsm.len()
        );
        log::trace!("{}", self.fsm);
        self.fsm.reset(START);
        (self.fsm, START)
    }
}
