// src/bin/check_cases.rs
// Compile and match a table of (pattern, text, expected) cases.
//   - default: the built-in cases
//   - CHECK_CASES=<file.json>   cases from {"cases":[{"pattern","text","expected"}...]}
//   - CHECK_DUMP=1              print every compiled table, not only failures
// Exits with status 1 on the first failing case (in table order).

use std::{env, fs, time::Instant};

use anyhow::{Context, Result};
use densefsm::dev::cases::{Case, Outcome, builtin_cases, load_cases_json_bytes, run_case};
use rayon::prelude::*;

fn load_cases() -> Result<(Vec<Case>, String)> {
    match env::var("CHECK_CASES") {
        Ok(path) => {
            let data = fs::read(&path).with_context(|| format!("read {path}"))?;
            let cases = load_cases_json_bytes(&data).map_err(anyhow::Error::msg)?;
            Ok((cases, format!("file:{path}")))
        }
        Err(_) => Ok((builtin_cases(), "builtin".to_string())),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let (cases, label) = load_cases()?;
    let dump_all = env::var("CHECK_DUMP").is_ok_and(|v| v != "0");

    let t0 = Instant::now();
    let outcomes: Vec<Outcome> = cases.par_iter().map(run_case).collect();
    let ms = t0.elapsed().as_secs_f64() * 1e3;

    let total = cases.len();
    for (i, (case, outcome)) in cases.iter().zip(&outcomes).enumerate() {
        if dump_all {
            if let Some(regex) = outcome.regex() {
                println!("{}", regex.automaton());
            }
        }
        print!(
            "({}/{}) {:?} ~ {:?}: ",
            i + 1,
            total,
            case.pattern,
            case.text
        );
        match outcome {
            Outcome::Pass(_) => println!("Success!"),
            Outcome::Mismatch { actual, regex } => {
                println!("Failed!");
                println!("Expected {} but got {}", case.expected, actual);
                eprintln!("{}", regex.automaton());
                std::process::exit(1);
            }
            Outcome::CompileFailed(e) => {
                println!("Failed!");
                println!("Failed to compile regex: {e}");
                std::process::exit(1);
            }
        }
    }

    println!(
        "[check_cases] {label}: {} cases passed in {ms:.3} ms",
        outcomes.iter().filter(|o| o.passed()).count()
    );
    Ok(())
}
