// src/bin/gen_table.rs
// Compile a pattern and write its transition table to JSON.
// Usage:
//   cargo run --bin gen_table -- '<pattern>'                 # writes tables/table.json
//   cargo run --bin gen_table -- '<pattern>' /path/out.json

use std::{env, fs, path::Path};

use anyhow::{Context, Result, anyhow};
use densefsm::{fsm::io::save_table_json, regex::compile};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let pattern = args
        .next()
        .ok_or_else(|| anyhow!("usage: gen_table <pattern> [out.json]"))?;
    let out = args
        .next()
        .unwrap_or_else(|| "tables/table.json".to_string());
    let out_path = Path::new(&out);

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    println!("[gen_table] compiling {pattern:?}…");
    let (fsm, start) =
        compile(pattern.as_bytes()).with_context(|| format!("failed to compile {pattern:?}"))?;
    let accepting = fsm.columns().iter().filter(|c| c.accepting).count();
    println!(
        "[gen_table] {} states x {} symbols, {} accepting, start = {}",
        fsm.len(),
        fsm.alphabet_len(),
        accepting,
        start
    );

    save_table_json(out_path, &fsm, start)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    println!("[gen_table] wrote {}", out_path.display());
    Ok(())
}
