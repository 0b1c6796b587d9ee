// src/main.rs
// Usage:
//   densefsm <pattern> [text ...]     # match each text argument
//   densefsm <pattern>                # match each line of stdin
// RUST_LOG=debug prints the compiled table.

use std::io::{self, BufRead};

use anyhow::{Context, Result, anyhow};
use densefsm::regex::Regex;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let pattern = args
        .next()
        .ok_or_else(|| anyhow!("usage: densefsm <pattern> [text ...]"))?;
    let re = Regex::new(&pattern).with_context(|| format!("failed to compile {pattern:?}"))?;
    log::debug!("{re:?}\n{}", re.automaton());

    let texts: Vec<String> = args.collect();
    if texts.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("read stdin")?;
            report(&re, &line);
        }
    } else {
        for text in &texts {
            report(&re, text);
        }
    }
    Ok(())
}

fn report(re: &Regex, text: &str) {
    let verdict = if re.is_match(text) { "match" } else { "no match" };
    println!("{text:?}: {verdict}");
}
