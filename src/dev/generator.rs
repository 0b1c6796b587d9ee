// src/dev/generator.rs
// Seeded random inputs for property-style checks.

use rand::Rng;

/// Random text of exactly `len` bytes drawn from `alphabet`.
pub fn gen_text<R: Rng>(rng: &mut R, alphabet: &[u8], len: usize) -> Vec<u8> {
    assert!(!alphabet.is_empty(), "alphabet must not be empty");
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}

/// Random printable text (bytes `32..=126`) excluding regex metacharacters,
/// usable verbatim as a literal-only pattern.
pub fn gen_literal<R: Rng>(rng: &mut R, max_len: usize) -> Vec<u8> {
    let len = rng.random_range(0..=max_len);
    (0..len)
        .map(|_| loop {
            let b = rng.random_range(32u8..=126);
            if !matches!(b, b'.' | b'?' | b'*' | b'+' | b'(' | b')' | b'|') {
                break b;
            }
        })
        .collect()
}
