//! RNG seed derivation utilities for deterministic dealing.
//!
//! Every game owns a base seed; each round's deal uses a seed derived from it
//! so a game can be replayed exactly from `(game seed, round)`.

/// Derive a seed for dealing cards in a round.
///
/// # Arguments
///
/// * `game_seed` - Base RNG seed of the game
/// * `round_no` - Round number (1-based)
///
/// # Returns
///
/// Derived seed that is unique per (game, round) combination.
pub fn derive_dealing_seed(game_seed: u64, round_no: u32) -> u64 {
    game_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}

/// Fresh base seed for a new game from the thread-local OS-seeded RNG.
pub fn random_game_seed() -> u64 {
    rand::random::<u64>()
}
