// src/dev/cases.rs
// (pattern, text, expected) tables for the batch driver and the tests.

use serde::{Deserialize, Serialize};

use crate::regex::{CompileError, Regex};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub pattern: String,
    pub text: String,
    pub expected: bool,
}

impl Case {
    pub fn new(pattern: &str, text: &str, expected: bool) -> Self {
        Self {
            pattern: pattern.to_string(),
            text: text.to_string(),
            expected,
        }
    }
}

/// Result of one case. Compiled cases keep their [`Regex`] so callers can
/// dump the table without compiling again.
#[derive(Debug)]
pub enum Outcome {
    Pass(Regex),
    Mismatch { actual: bool, regex: Regex },
    CompileFailed(CompileError),
}

impl Outcome {
    pub fn passed(&self) -> bool {
        matches!(self, Outcome::Pass(_))
    }

    pub fn regex(&self) -> Option<&Regex> {
        match self {
            Outcome::Pass(regex) | Outcome::Mismatch { regex, .. } => Some(regex),
            Outcome::CompileFailed(_) => None,
        }
    }
}

#[derive(Deserialize)]
struct CaseFile {
    cases: Vec<Case>,
}

/// Compiles the case's pattern and matches its text.
pub fn run_case(case: &Case) -> Outcome {
    let regex = match Regex::new(&case.pattern) {
        Ok(regex) => regex,
        Err(e) => return Outcome::CompileFailed(e),
    };
    let actual = regex.is_match(&case.text);
    if actual == case.expected {
        Outcome::Pass(regex)
    } else {
        Outcome::Mismatch { actual, regex }
    }
}

/// Accepts either `{"cases": [...]}` or a bare array of cases.
pub fn load_cases_json_bytes(data: &[u8]) -> Result<Vec<Case>, String> {
    if let Ok(file) = serde_json::from_slice::<CaseFile>(data) {
        return Ok(file.cases);
    }
    serde_json::from_slice::<Vec<Case>>(data)
        .map_err(|e| format!("Failed to parse cases JSON: {e}"))
}

pub fn builtin_cases() -> Vec<Case> {
    let table: &[(&str, &str, bool)] = &[
        ("abc", "abc", true),
        ("abc", "ab", false),
        ("abc", "abd", false),
        ("abc?", "abc", true),
        ("abc?", "ab", true),
        ("abc?", "abcd", false),
        ("a*", "", true),
        ("a*", "a", true),
        ("a*", "aaaaa", true),
        ("a*", "b", false),
        ("a*bc", "abc", true),
        ("a*bc", "bbc", false),
        ("a*bc", "aaaaabc", true),
        ("a*bc", "aaaaac", false),
        ("a+", "a", true),
        ("a+", "aaaaa", true),
        ("a+", "", false),
        ("a+", "ab", false),
        ("a+bc", "abc", true),
        ("a+bc", "bc", false),
        ("a+bc", "aaaaabc", true),
        ("a+bc", "aaaaac", false),
        ("(ab)+c", "abc", true),
        ("(ab)+c", "abababc", true),
        ("(ab)+c", "ac", false),
        ("(ab)+c", "bc", false),
        ("(ab)*c", "c", true),
        ("(ab)*c", "abc", true),
        ("(ab)*c", "ac", false),
        ("(ab)?c", "abc", true),
        ("(ab)?c", "c", true),
        ("(ab)?c", "ac", false),
        ("a.c", "abc", true),
        ("a.c", "a c", true),
        ("a.c", "ac", false),
        ("(ab|cd)e", "abe", true),
        ("(ab|cd)e", "cde", true),
        ("(ab|cd)e", "ace", false),
    ];
    table
        .iter()
        .map(|&(p, t, e)| Case::new(p, t, e))
        .collect()
}
