// src/regex/merge.rs
//! Merged states: one table state standing for several plain states at once.
//!
//! When an edge is written onto a cell that already leads somewhere else, the
//! cell is pointed at the merged state for both targets instead. A merged
//! state's column always equals the union of its members' columns, each cell
//! resolved to the merged state of its own target set, so the table stays
//! deterministic and is still walked with a single cursor.

use std::ops::Range;

use hashbrown::HashMap;

use crate::fsm::{Automaton, State, Symbol, TRAP};

#[derive(Debug, Default)]
pub(crate) struct Merges {
    /// Sorted plain members of every merged state.
    members: HashMap<State, Vec<State>>,
    by_members: HashMap<Vec<State>, State>,
    /// Merged states each plain state is a member of.
    containers: HashMap<State, Vec<State>>,
    /// Merged states whose columns still have to be filled in.
    pending: Vec<State>,
}

impl Merges {
    pub(crate) fn is_merged(&self, state: State) -> bool {
        self.members.contains_key(&state)
    }

    fn expand_into(&self, state: State, out: &mut Vec<State>) {
        match self.members.get(&state) {
            Some(members) => out.extend_from_slice(members),
            None => out.push(state),
        }
    }

    fn register(&mut self, merged: State, set: Vec<State>) {
        for &m in &set {
            self.containers.entry(m).or_default().push(merged);
        }
        self.members.insert(merged, set.clone());
        self.by_members.insert(set, merged);
    }

    /// The state standing for `set`, creating a merged state the first time a
    /// set of two or more shows up.
    fn state_for(&mut self, fsm: &mut Automaton, mut set: Vec<State>) -> State {
        set.sort_unstable();
        set.dedup();
        match set.as_slice() {
            [] => return TRAP,
            [one] => return *one,
            _ => {}
        }
        if let Some(&merged) = self.by_members.get(&set) {
            return merged;
        }
        let merged = fsm.create_state();
        log::trace!("merged state {merged} = {set:?}");
        self.register(merged, set);
        self.pending.push(merged);
        merged
    }

    /// Union of what `members` lead to on `symbol`, as plain states.
    fn targets(&self, fsm: &Automaton, members: &[State], symbol: Symbol) -> Vec<State> {
        let mut set = Vec::new();
        for &m in members {
            let t = fsm.transition(m, symbol);
            if t != TRAP {
                self.expand_into(t, &mut set);
            }
        }
        set
    }

    fn refresh(&mut self, fsm: &mut Automaton, merged: State, symbol: Symbol) {
        let members = self.members.get(&merged).cloned().unwrap_or_default();
        let set = self.targets(fsm, &members, symbol);
        let target = self.state_for(fsm, set);
        fsm.set_transition(merged, symbol, target);
    }

    fn settle(&mut self, fsm: &mut Automaton) {
        while let Some(merged) = self.pending.pop() {
            let accepting = self.members[&merged].iter().any(|&m| fsm.is_accepting(m));
            fsm.set_accepting(merged, accepting);
            for symbol in 0..fsm.alphabet_len() as Symbol {
                self.refresh(fsm, merged, symbol);
            }
        }
    }

    /// Writes `from --symbol--> to`. An existing different target is merged
    /// with `to`, and every merged state containing `from` follows the write.
    pub(crate) fn connect(&mut self, fsm: &mut Automaton, from: State, symbol: Symbol, to: State) {
        debug_assert!(!self.is_merged(from), "edges are only written from plain states");
        let mut set = Vec::new();
        let existing = fsm.transition(from, symbol);
        if existing != TRAP {
            self.expand_into(existing, &mut set);
        }
        self.expand_into(to, &mut set);
        let target = self.state_for(fsm, set);
        fsm.set_transition(from, symbol, target);

        let containers = self.containers.get(&from).cloned().unwrap_or_default();
        for merged in containers {
            self.refresh(fsm, merged, symbol);
        }
        self.settle(fsm);
    }

    /// Repairs the copy that [`Automaton::copy_states`] appended at `base` for
    /// `range`.
    ///
    /// The plain copy relabels targets by offset, which is right for plain
    /// states but not for merged ones: a merged state in `range` may have
    /// members outside it. Copies of merged states are re-registered under
    /// their relabelled member sets and their columns recomputed, and plain
    /// copies are pointed at them.
    pub(crate) fn after_copy(&mut self, fsm: &mut Automaton, range: Range<State>, base: State) {
        let offset = base - range.start;
        let relabel = |set: &[State]| -> Vec<State> {
            set.iter()
                .map(|&m| if range.contains(&m) { m + offset } else { m })
                .collect()
        };

        for s in range.clone() {
            let Some(members) = self.members.get(&s) else { continue };
            let mut set = relabel(members);
            set.sort_unstable();
            if !self.by_members.contains_key(&set) {
                self.register(s + offset, set);
                self.pending.push(s + offset);
            }
        }

        for s in range.clone() {
            if self.is_merged(s) {
                continue;
            }
            for symbol in 0..fsm.alphabet_len() as Symbol {
                let t = fsm.transition(s, symbol);
                let Some(members) = self.members.get(&t) else { continue };
                let set = relabel(members);
                let target = self.state_for(fsm, set);
                fsm.set_transition(s + offset, symbol, target);
            }
        }
        self.settle(fsm);
    }
}
