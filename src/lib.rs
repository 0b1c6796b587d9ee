// src/lib.rs
//! Dense-table finite-state automata and a small regex compiler built on them.

pub mod dev;
pub mod fsm;
pub mod regex;
