// src/dev/mod.rs
//! Helpers shared by the binaries and the integration tests.

pub mod cases;
pub mod generator;
pub mod turnstile;
