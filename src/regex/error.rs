// src/regex/error.rs
use thiserror::Error;

/// Why a pattern failed to compile. Every variant carries the byte offset
/// into the pattern where the problem was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("`{op}` at {at} has no atom to repeat")]
    DanglingQuantifier { op: char, at: usize },
    #[error("`.` at {at} cannot follow a pending `?`")]
    WildcardAfterOptional { at: usize },
    #[error("nested group at {at}")]
    NestedGroup { at: usize },
    #[error("group opened at {at} is never closed")]
    UnclosedGroup { at: usize },
    #[error("unmatched `)` at {at}")]
    UnmatchedParen { at: usize },
    #[error("`|` at {at} outside a group")]
    AlternationOutsideGroup { at: usize },
    #[error("byte 0x{byte:02X} at {at} is not a printable ASCII symbol")]
    InvalidByte { byte: u8, at: usize },
}
