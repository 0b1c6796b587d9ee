// src/bin/turnstile.rs
// Drive the two-state turnstile from stdin, one command per line:
//   coin | push | quit

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use densefsm::dev::turnstile::{Command, build_turnstile, state_name};

fn main() -> Result<()> {
    env_logger::init();

    let mut fsm = build_turnstile();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", state_name(fsm.current()))?;

    for line in io::stdin().lock().lines() {
        let line = line.context("read stdin")?;
        match Command::parse(&line) {
            Some(Command::Quit) => break,
            Some(Command::Event(ev)) => {
                let state = fsm.fire(ev.symbol());
                writeln!(out, "{}", state_name(state))?;
            }
            None => writeln!(out, "Unknown command {:?}", line.trim())?,
        }
    }
    Ok(())
}
