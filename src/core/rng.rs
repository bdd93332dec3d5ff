//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Injected**: move handlers take any `RandomSource`, never ambient randomness
//! - **Deterministic**: same seed produces identical dice and draws
//! - **Forkable**: create independent branches (one per simulated game)
//! - **Serializable**: O(1) state capture and restore for replay
//!
//! ```
//! use swirled_out::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let die = rng.roll_d6();
//! assert!((1..=6).contains(&die));
//!
//! // Same seed, same sequence
//! let mut again = GameRng::new(42);
//! assert_eq!(again.roll_d6(), die);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::VecDeque;

/// Source of randomness consumed by the move handlers.
///
/// The engine only ever asks for two things: a die roll and a uniform
/// permutation of candidate indices. Everything else is built on top.
pub trait RandomSource {
    /// Roll one six-sided die. Must return a value in `1..=6`.
    fn roll_d6(&mut self) -> u8;

    /// Uniformly permute `indices` in place.
    fn shuffle_indices(&mut self, indices: &mut [usize]);

    /// Pick one index in `0..len` by shuffling the candidates and taking
    /// the first. Returns `None` when `len == 0`.
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        let mut indices: SmallVec<[usize; 32]> = (0..len).collect();
        self.shuffle_indices(&mut indices);
        indices.first().copied()
    }
}

/// Seeded ChaCha8 source for live games and simulations.
#[derive(Clone, Debug)]
pub struct GameRng {
    chacha: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

/// Golden-ratio stride between fork seeds.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            chacha: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent generator, e.g. one per simulated game.
    ///
    /// The n-th fork of a given seed is always the same.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// Uniform value in `0..n`. `n` must be non-zero.
    pub fn below(&mut self, n: usize) -> usize {
        self.chacha.gen_range(0..n)
    }

    /// Capture the stream position.
    #[must_use]
    pub fn snapshot(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.chacha.get_word_pos(),
            fork_counter: self.forks,
        }
    }

    /// Rebuild a generator at a captured position.
    #[must_use]
    pub fn restore(saved: &GameRngState) -> Self {
        let mut chacha = ChaCha8Rng::seed_from_u64(saved.seed);
        chacha.set_word_pos(saved.word_pos);
        Self {
            chacha,
            seed: saved.seed,
            forks: saved.fork_counter,
        }
    }
}

impl RandomSource for GameRng {
    fn roll_d6(&mut self) -> u8 {
        self.chacha.gen_range(1..=6)
    }

    fn shuffle_indices(&mut self, indices: &mut [usize]) {
        indices.shuffle(&mut self.chacha);
    }
}

/// Replays a recorded sequence of dice and picks.
///
/// Dice come from the queue (clamped to `1..=6`), then fall back to 1.
/// Each queued pick moves that slot to the front of the next shuffle;
/// with no pick queued the order is left as is.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    dice: VecDeque<u8>,
    picks: VecDeque<usize>,
}

impl ScriptedRandom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue dice faces.
    #[must_use]
    pub fn with_dice(mut self, dice: impl IntoIterator<Item = u8>) -> Self {
        self.dice.extend(dice);
        self
    }

    /// Queue candidate slots for upcoming shuffles.
    #[must_use]
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn roll_d6(&mut self) -> u8 {
        self.dice.pop_front().unwrap_or(1).clamp(1, 6)
    }

    fn shuffle_indices(&mut self, indices: &mut [usize]) {
        if let Some(pick) = self.picks.pop_front() {
            if pick < indices.len() {
                indices.swap(0, pick);
            }
        }
    }
}

/// Saved `GameRng` position. Stored next to a state snapshot so a
/// replay continues with the same dice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position; capture does not depend on how far the stream ran.
    pub word_pos: u128,
    pub fork_counter: u64,
}
