//! Join code generation for games.
//!
//! Join codes are short, human-shareable handles for a game: 10 characters
//! from Crockford's Base32 alphabet. They are not unique by construction;
//! the registry rejects and redraws collisions.

use rand::Rng;

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ"; // no I, L, O, U
pub const JOIN_CODE_LEN: usize = 10;

/// Generate a random join code using the thread-local CSPRNG.
pub fn generate_join_code() -> String {
    let mut rng = rand::rng();
    (0..JOIN_CODE_LEN)
        .map(|_| CROCKFORD[rng.random_range(0..CROCKFORD.len())] as char)
        .collect()
}

/// Normalise user input: uppercase, with the Crockford aliases folded
/// (`I`/`L` read as `1`, `O` as `0`).
pub fn normalize_join_code(input: &str) -> String {
    input
        .trim()
        .chars()
        .map(|c| match c.to_ascii_uppercase() {
            'I' | 'L' => '1',
            'O' => '0',
            other => other,
        })
        .collect()
}
