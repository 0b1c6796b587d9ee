//! End-to-end compile + match tests.

use densefsm::{
    dev::cases::{Case, Outcome, builtin_cases, run_case},
    regex::Regex,
};

fn check(pattern: &str, yes: &[&str], no: &[&str]) {
    let re = Regex::new(pattern).unwrap_or_else(|e| panic!("{pattern:?} failed to compile: {e}"));
    for t in yes {
        assert!(
            re.is_match(t),
            "{pattern:?} should match {t:?}\n{}",
            re.automaton()
        );
    }
    for t in no {
        assert!(
            !re.is_match(t),
            "{pattern:?} should not match {t:?}\n{}",
            re.automaton()
        );
    }
}

#[test]
fn builtin_cases_pass() {
    for case in builtin_cases() {
        let outcome = run_case(&case);
        assert!(outcome.passed(), "{case:?}: {outcome:?}");
    }
}

#[test]
fn outcomes_keep_the_compiled_regex() {
    let pass = run_case(&Case::new("a+b", "aab", true));
    assert!(pass.passed());
    assert_eq!(pass.regex().map(|re| re.pattern()), Some(&b"a+b"[..]));

    let Outcome::Mismatch { actual, regex } = run_case(&Case::new("a+b", "b", true)) else {
        panic!("expected a mismatch");
    };
    assert!(!actual);
    assert!(regex.automaton().dump().starts_with("fsm:\n"));

    let failed = run_case(&Case::new("(a", "a", true));
    assert!(matches!(failed, Outcome::CompileFailed(_)));
    assert!(failed.regex().is_none());
}

#[test]
fn literal_matches_exactly() {
    check("abc", &["abc"], &["ab", "abd", "abcd", "", "xabc"]);
}

#[test]
fn empty_pattern_matches_only_empty_text() {
    check("", &[""], &["a", " "]);
}

#[test]
fn trailing_optional() {
    check("abc?", &["abc", "ab"], &["abcd", "a", "abcc"]);
}

#[test]
fn leading_and_inner_optional() {
    check("a?bc", &["abc", "bc"], &["aabc", "ac"]);
    check("ab?c", &["abc", "ac"], &["abbc", "ab"]);
}

#[test]
fn star_single_atom() {
    check("a*", &["", "a", "aaaaa"], &["b", "ab"]);
    check("a*bc", &["abc", "aaaaabc", "bc"], &["bbc", "aaaaac"]);
}

#[test]
fn plus_single_atom() {
    check("a+", &["a", "aaaaa"], &["", "ab", "b"]);
    check("a+bc", &["abc", "aaaaabc"], &["bc", "aaaaac"]);
}

#[test]
fn wildcard() {
    check("a.c", &["abc", "a.c", "a~c"], &["ac", "abbc"]);
    check(".*", &["", "anything at all"], &[]);
    check("x.+", &["xy", "xyz"], &["x"]);
}

#[test]
fn group_plus() {
    check("(ab)+c", &["abc", "abababc"], &["ac", "bc", "c", "abac"]);
}

#[test]
fn group_star() {
    check("(ab)*c", &["c", "abc", "ababc"], &["ac", "bc", "abab"]);
}

#[test]
fn group_optional() {
    check("(ab)?c", &["abc", "c"], &["ac", "ababc"]);
}

#[test]
fn alternation() {
    check("(ab|cd)e", &["abe", "cde"], &["ace", "e", "abcde"]);
    check("x(a|b|c)y", &["xay", "xby", "xcy"], &["xy", "xdy"]);
}

#[test]
fn quantified_alternation_loops_through_every_branch() {
    check("(ab|cd)*e", &["e", "abe", "cdabcde"], &["ace", "abc"]);
    check("(ab|cd)+", &["ab", "cd", "abcdab"], &["", "abc", "ac"]);
}

#[test]
fn empty_branch_makes_group_optional() {
    check("(ab|)c", &["abc", "c"], &["ac"]);
    check("(a|)+b", &["b", "ab", "aaab"], &["aa"]);
}

#[test]
fn optional_inside_group() {
    check("(ab?)+", &["a", "ab", "aab", "abab"], &["", "b", "abb"]);
}

#[test]
fn bytes_outside_alphabet_reject() {
    let re = Regex::new("a*").unwrap();
    assert!(!re.is_match([b'a', 0]));
    assert!(!re.is_match([b'a', 200]));
    assert!(!re.is_match("\n"));
}

#[test]
fn regex_accessors() {
    let re = Regex::new("ab").unwrap();
    assert_eq!(re.pattern(), b"ab");
    assert_eq!(re.start(), densefsm::regex::START);
    // trap, start, one state per literal, accept
    assert_eq!(re.automaton().len(), 5);
}

#[test]
fn wildcard_loop_before_literal() {
    check(".*a", &["a", "xa", "aa", "baba", "a a"], &["", "ab", "b", "aab"]);
    check(".*x", &["x", "abcx", "xx"], &["", "xa"]);
    check("x.*y", &["xy", "xay", "xyy", "xyxy"], &["x", "y", "yx", "xyz"]);
}

#[test]
fn optional_before_same_literal() {
    check("a?a", &["a", "aa"], &["", "aaa", "b"]);
}

#[test]
fn loop_before_same_literal() {
    check("a*a", &["a", "aa", "aaaa"], &["", "b", "ab"]);
    check("a*ab", &["ab", "aab", "aaaab"], &["", "a", "b", "aba"]);
    check("a+a", &["aa", "aaa"], &["", "a", "ab"]);
}

#[test]
fn branches_sharing_a_prefix() {
    check("(ab|ac)", &["ab", "ac"], &["a", "", "abc", "bc"]);
    check("(ab|ac)+", &["ab", "acab", "abacab"], &["", "a", "aba", "abc"]);
    check("(a|ab)c", &["ac", "abc"], &["c", "abbc", "ab"]);
}

#[test]
fn quantified_group_before_shared_literal() {
    check("(a|b)*b", &["b", "ab", "bb", "abab", "aab"], &["", "a", "ba", "abba"]);
    check("a*(ab)*", &["", "a", "aa", "ab", "aab", "abab"], &["aba", "abaa", "b"]);
}
