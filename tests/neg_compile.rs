//! Patterns that must fail to compile (compile returns Err).

use densefsm::regex::{CompileError, compile};

fn err(pattern: &str) -> CompileError {
    match compile(pattern.as_bytes()) {
        Ok((fsm, _)) => panic!("{pattern:?} should not compile\n{fsm}"),
        Err(e) => e,
    }
}

#[test]
fn nested_group() {
    assert_eq!(err("(a(b)c)"), CompileError::NestedGroup { at: 2 });
}

#[test]
fn unclosed_group() {
    assert_eq!(err("ab(cd"), CompileError::UnclosedGroup { at: 2 });
    assert_eq!(err("(a|b"), CompileError::UnclosedGroup { at: 0 });
}

#[test]
fn unmatched_paren() {
    assert_eq!(err("ab)"), CompileError::UnmatchedParen { at: 2 });
}

#[test]
fn alternation_outside_group() {
    assert_eq!(err("a|b"), CompileError::AlternationOutsideGroup { at: 1 });
}

#[test]
fn quantifier_without_atom() {
    assert_eq!(err("*a"), CompileError::DanglingQuantifier { op: '*', at: 0 });
    assert_eq!(err("+"), CompileError::DanglingQuantifier { op: '+', at: 0 });
    assert_eq!(err("(?a)"), CompileError::DanglingQuantifier { op: '?', at: 1 });
    assert_eq!(err("(a|*)"), CompileError::DanglingQuantifier { op: '*', at: 3 });
}

#[test]
fn stacked_quantifiers() {
    assert_eq!(err("a**"), CompileError::DanglingQuantifier { op: '*', at: 2 });
    assert_eq!(err("a?+"), CompileError::DanglingQuantifier { op: '+', at: 2 });
    assert_eq!(err("a+?"), CompileError::DanglingQuantifier { op: '?', at: 2 });
}

#[test]
fn wildcard_after_optional() {
    assert_eq!(err("a?."), CompileError::WildcardAfterOptional { at: 2 });
}

#[test]
fn wildcard_opening_group_after_optional() {
    assert_eq!(err("a?(.)"), CompileError::WildcardAfterOptional { at: 3 });
    assert_eq!(err("(a)?(.)"), CompileError::WildcardAfterOptional { at: 5 });
    assert_eq!(err("a?(b|.c)"), CompileError::WildcardAfterOptional { at: 5 });
    // Once an atom has been read the `?` no longer applies.
    for ok in ["a?(b.)", "a?b.", "a?(b|c)."] {
        assert!(compile(ok.as_bytes()).is_ok(), "{ok:?}");
    }
}

#[test]
fn non_printable_byte() {
    assert_eq!(err("a\tb"), CompileError::InvalidByte { byte: b'\t', at: 1 });
    assert!(matches!(
        compile(&[b'a', 0xC3, 0xA9]),
        Err(CompileError::InvalidByte { byte: 0xC3, at: 1 })
    ));
}

#[test]
fn errors_render() {
    assert_eq!(err("(a(b)c)").to_string(), "nested group at 2");
    assert_eq!(
        err("a?.").to_string(),
        "`.` at 2 cannot follow a pending `?`"
    );
}
