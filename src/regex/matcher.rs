// src/regex/matcher.rs
use std::collections::VecDeque;

use hashbrown::HashSet;

use super::compile::END_OF_INPUT;
use crate::fsm::{Automaton, State, Symbol, TRAP};

/// Runs `text` through a compiled automaton starting at `start`.
///
/// Input is consumed until it runs out or the cursor traps. Leftover input
/// rejects. If the last state is not accepting itself, the end-of-input
/// symbol is fired once and its target decides.
pub fn is_match(fsm: &Automaton, start: State, text: &[u8]) -> bool {
    if let Some(at) = text
        .iter()
        .position(|&b| Symbol::from(b) == END_OF_INPUT || usize::from(b) >= fsm.alphabet_len())
    {
        log::debug!("byte 0x{:02X} at {at} is outside the alphabet", text[at]);
        return false;
    }

    let mut state = start;
    let mut rest = text;
    while let Some((&b, tail)) = rest.split_first() {
        if state == TRAP || fsm.is_accepting(state) {
            break;
        }
        state = fsm.transition(state, Symbol::from(b));
        log::trace!("{:?} -> {state}", char::from(b));
        rest = tail;
    }

    if state == TRAP || !rest.is_empty() {
        return false;
    }
    if fsm.is_accepting(state) {
        return true;
    }
    fsm.is_accepting(fsm.transition(state, END_OF_INPUT))
}

/// True when the end-of-input step from `state` accepts.
#[inline]
fn accepts_at_end(fsm: &Automaton, state: State) -> bool {
    state != TRAP
        && (fsm.is_accepting(state) || fsm.is_accepting(fsm.transition(state, END_OF_INPUT)))
}

/// Checks whether two compiled automata accept the same language by walking
/// their product over every input symbol.
pub fn equivalent(a: &Automaton, start_a: State, b: &Automaton, start_b: State) -> bool {
    if a.alphabet_len() != b.alphabet_len() {
        return false;
    }
    let n_symbols = a.alphabet_len() as Symbol;

    let mut seen: HashSet<(State, State)> = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert((start_a, start_b));
    queue.push_back((start_a, start_b));

    while let Some((x, y)) = queue.pop_front() {
        if accepts_at_end(a, x) != accepts_at_end(b, y) {
            log::debug!("automata diverge at pair ({x}, {y})");
            return false;
        }
        for sym in (END_OF_INPUT + 1)..n_symbols {
            let pair = (a.transition(x, sym), b.transition(y, sym));
            if seen.insert(pair) {
                queue.push_back(pair);
            }
        }
    }
    true
}
