// src/dev/turnstile.rs
// Coin-operated turnstile: two states, two events.

use crate::fsm::{Automaton, State, Symbol};

pub const LOCKED: State = 0;
pub const UNLOCKED: State = 1;

pub const STATE_NAMES: [&str; 2] = ["Locked", "Unlocked"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Event {
    Coin = 0,
    Push = 1,
}

impl Event {
    pub const COUNT: usize = 2;

    #[inline]
    pub fn symbol(self) -> Symbol {
        self as Symbol
    }
}

/// One line of turnstile input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Event(Event),
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "coin" => Some(Command::Event(Event::Coin)),
            "push" => Some(Command::Event(Event::Push)),
            "quit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// A coin always unlocks and a push always locks, whatever the current state.
pub fn build_turnstile() -> Automaton {
    let mut fsm = Automaton::new(Event::COUNT);
    for _ in STATE_NAMES {
        let state = fsm.create_state();
        fsm.set_transition(state, Event::Coin.symbol(), UNLOCKED);
        fsm.set_transition(state, Event::Push.symbol(), LOCKED);
    }
    fsm.reset(LOCKED);
    fsm
}

pub fn state_name(state: State) -> &'static str {
    STATE_NAMES.get(state as usize).copied().unwrap_or("?")
}
