use tracing::debug;

use crate::uniform::{self, f64_from_u32};
use crate::Result;

/// Multipliers applied to `history[0..4]`, newest output first.
const WEIGHTS: [u64; 4] = [5115, 1776, 1492, 2111111111];

/// Multiplier of the seed recurrence that fills the history.
const SEED_MULT: u32 = 29943829;
/// Draws discarded after seeding.
const WARM_UP: usize = 19;

/// A Mother-of-All multiply-with-carry generator.
///
/// `history[0..4]` holds the last four outputs, newest first, and `history[4]`
/// holds the carry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MotherGenerator {
    pub(crate) history: [u32; 5],
}

impl MotherGenerator {
    /// Constructs a generator seeded with a single word.
    pub fn new(seed: u32) -> Self {
        let mut mother = MotherGenerator { history: [0; 5] };
        mother.init(seed);
        mother
    }

    /// Re-seeds the generator. The same seed always produces the same
    /// sequence.
    pub fn init(&mut self, seed: u32) {
        debug!(seed, "seeding mother generator");
        // A zero word is always followed by 0xffffffff, so the history is
        // never all zero.
        let mut s = seed;
        for x in &mut self.history {
            s = s.wrapping_mul(SEED_MULT).wrapping_sub(1);
            *x = s;
        }
        for _ in 0..WARM_UP {
            self.next_u32();
        }
    }

    /// Returns 32 random bits.
    pub fn next_u32(&mut self) -> u32 {
        let x = &mut self.history;
        let sum = WEIGHTS
            .iter()
            .zip(&x[..4])
            .map(|(&w, &h)| w * u64::from(h))
            .sum::<u64>()
            + u64::from(x[4]);
        x.copy_within(0..3, 1);
        x[4] = (sum >> 32) as u32;
        x[0] = sum as u32;
        x[0]
    }

    /// Returns a uniform float in `[0, 1)` with 32 bits of resolution.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64_from_u32(self.next_u32())
    }

    /// Returns an integer in `min..=max`, with frequencies accurate to one part
    /// in 2^32. The frequencies are exact when `max - min + 1` is a power of
    /// two.
    pub fn biased_range(&mut self, min: i32, max: i32) -> Result<i32> {
        let interval = uniform::interval(min, max)?;
        Ok(uniform::biased_range(self.next_f64(), interval, min, max))
    }

    /// Reports whether `history` is a fixed point of the recurrence: all zero,
    /// or all ones with a carry one less than the sum of the weights.
    pub(crate) fn is_degenerate(history: &[u32; 5]) -> bool {
        let max_carry = (WEIGHTS.iter().sum::<u64>() - 1) as u32;
        *history == [0; 5] || *history == [u32::MAX, u32::MAX, u32::MAX, u32::MAX, max_carry]
    }

    pub fn history(&self) -> &[u32; 5] {
        &self.history
    }
}
