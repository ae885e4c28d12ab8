//! Injected random sources for deterministic generation and combat.
//!
//! Every random decision in `game-core` is drawn from a caller-supplied
//! [`RngSource`]. There is no ambient generator: the same seed always yields
//! the same island and the same combat rounds, which is what makes sessions
//! replayable and tests exact.
//!
//! # Determinism
//!
//! All implementations must be deterministic: given the same seed (or the same
//! scripted values) they must produce the same sequence of draws.

/// Source of pseudo-random draws.
///
/// Only [`RngSource::next_u32`] is required; the remaining helpers are derived
/// from it so every implementation consumes draws identically.
pub trait RngSource {
    /// Next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }

    /// Uniform draw in `[0, 100)`.
    ///
    /// Used by percentage checks such as hit and critical rolls, which compare
    /// with a strict `<` so that a draw equal to the threshold fails.
    fn roll_percent(&mut self) -> f64 {
        self.next_unit() * 100.0
    }

    /// Generate a value in `[min, max]` inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (u64::from(self.next_u32()) % span) as u32
    }

    /// Returns `true` with probability `p` (clamped to `[0, 1]`).
    fn chance(&mut self, p: f64) -> bool {
        self.next_unit() < p.clamp(0.0, 1.0)
    }

    /// Index in `[0, len)`; `None` when `len` is zero.
    fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.range(0, (len - 1) as u32) as usize)
    }
}

impl<R: RngSource + ?Sized> RngSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces same output
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a seed.
    ///
    /// The seed is stepped once so that small seeds (0, 1, 2...) do not start
    /// from nearly identical states.
    pub fn seeded(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed.wrapping_add(Self::INCREMENT)),
        }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Default for PcgRng {
    fn default() -> Self {
        Self::seeded(0)
    }
}

impl RngSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

/// Replays a fixed list of unit draws in `[0, 1)`, cycling when exhausted.
///
/// Lets callers pin exact hit, critical and encounter rolls. Raw `next_u32`
/// values are derived from the same unit draws so range picks stay aligned.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedRng {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    /// Creates a scripted source from unit draws. Values are clamped into `[0, 1)`.
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        let draws: Vec<f64> = draws
            .into_iter()
            .map(|d| d.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { draws, cursor: 0 }
    }

    /// Scripted source expressed as percentage rolls in `[0, 100)`.
    pub fn from_percents(percents: impl IntoIterator<Item = f64>) -> Self {
        Self::new(percents.into_iter().map(|p| p / 100.0))
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    fn next_draw(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let draw = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        draw
    }
}

impl RngSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_draw() * (f64::from(u32::MAX) + 1.0)) as u32
    }

    fn next_unit(&mut self) -> f64 {
        self.next_draw()
    }
}

/// Independent random streams derived from one session seed.
pub mod stream {
    /// Terrain generation stream.
    pub const TERRAIN: u32 = 0;
    /// Encounter rolls, enemy selection and combat draws.
    pub const SESSION: u32 = 1;
}

/// Compute a deterministic seed from a base seed and a nonce.
///
/// # Arguments
///
/// * `game_seed` - Base seed set at session start (for replay/determinism)
/// * `nonce` - Generation counter (increments on every restart)
/// * `context` - Stream identifier, see [`stream`]
pub fn compute_seed(game_seed: u64, nonce: u64, context: u32) -> u64 {
    // SplitMix64 / FxHash multipliers
    let mut hash = game_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
