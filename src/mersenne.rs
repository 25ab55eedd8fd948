use tracing::{debug, trace};

use crate::uniform::{self, f64_from_u32};
use crate::{Error, Result};

/// Degree of recurrence, the number of words in the state.
pub const N: usize = 624;
/// Middle word offset.
pub const M: usize = 397;

const MATRIX_A: u32 = 0x9908b0df;
const UPPER_MASK: u32 = 0x80000000;
const LOWER_MASK: u32 = 0x7fffffff;

/// Seed used to prepare the state before a seed array is folded in.
const ARRAY_SEED: u32 = 19650218;

/// An MT19937 Mersenne Twister.
///
/// Two generators are equal when they will produce the same sequence; the
/// memo kept by [`exact_range`](MersenneTwister::exact_range) is ignored.
#[derive(Clone, Debug)]
pub struct MersenneTwister {
    pub(crate) state: Box<[u32; N]>,
    pub(crate) index: usize,
    rejection: Option<Rejection>,
}

/// Memo for [`MersenneTwister::exact_range`], keyed by the interval size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Rejection {
    interval: u64,
    /// The largest multiple of `interval` that is at most 2^32.
    limit: u64,
}

impl MersenneTwister {
    /// Constructs a generator seeded with a single word.
    pub fn new(seed: u32) -> Self {
        let mut mt = MersenneTwister {
            state: Box::new([0; N]),
            index: N,
            rejection: None,
        };
        mt.init(seed);
        mt
    }

    /// Constructs a generator seeded with every bit of `seeds`.
    pub fn from_seeds(seeds: &[u32]) -> Result<Self> {
        let mut mt = MersenneTwister::from_parts(Box::new([0; N]), N);
        mt.init_by_array(seeds)?;
        Ok(mt)
    }

    pub(crate) fn from_parts(state: Box<[u32; N]>, index: usize) -> Self {
        MersenneTwister {
            state,
            index,
            rejection: None,
        }
    }

    /// Re-seeds the generator. The same seed always produces the same
    /// sequence.
    pub fn init(&mut self, seed: u32) {
        debug!(seed, "seeding mersenne twister");
        let state = &mut *self.state;
        state[0] = seed;
        for i in 1..N {
            let prev = state[i - 1];
            state[i] = (prev ^ (prev >> 30))
                .wrapping_mul(1812433253)
                .wrapping_add(i as u32);
        }
        self.index = N;
        self.rejection = None;
    }

    /// Re-seeds the generator with more than 32 bits of entropy. All bits of
    /// `seeds` influence the sequence.
    pub fn init_by_array(&mut self, seeds: &[u32]) -> Result<()> {
        if seeds.is_empty() {
            return Err(Error::EmptySeeds);
        }
        debug!(len = seeds.len(), "seeding mersenne twister by array");
        self.init(ARRAY_SEED);

        let state = &mut *self.state;
        let (mut i, mut j) = (1, 0);
        for _ in 0..N.max(seeds.len()) {
            let prev = state[i - 1];
            state[i] = (state[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1664525))
                .wrapping_add(seeds[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= N {
                state[0] = state[N - 1];
                i = 1;
            }
            if j >= seeds.len() {
                j = 0;
            }
        }
        for _ in 0..N - 1 {
            let prev = state[i - 1];
            state[i] = (state[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1566083941))
                .wrapping_sub(i as u32);
            i += 1;
            if i >= N {
                state[0] = state[N - 1];
                i = 1;
            }
        }
        // MSB is 1, assuring a non-zero initial state.
        state[0] = 0x80000000;
        self.index = N;
        Ok(())
    }

    /// Returns 32 random bits.
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let y = self.state[self.index];
        self.index += 1;
        MersenneTwister::temper(y)
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

    /// Returns an integer in `min..=max` with exactly equal frequencies, by
    /// rejecting draws that would bias the result.
    pub fn exact_range(&mut self, min: i32, max: i32) -> Result<i32> {
        let interval = uniform::interval(min, max)?;
        let limit = match self.rejection {
            Some(r) if r.interval == interval => r.limit,
            _ => {
                let limit = (1u64 << 32) / interval * interval;
                self.rejection = Some(Rejection { interval, limit });
                limit
            }
        };
        loop {
            let x = u64::from(self.next_u32());
            if x < limit {
                return Ok((i64::from(min) + (x % interval) as i64) as i32);
            }
            trace!(x, limit, "rejected draw");
        }
    }

    /// Regenerates all `N` words of the state.
    fn twist(&mut self) {
        trace!("regenerating mersenne twister block");
        let state = &mut *self.state;
        for k in 0..N - M {
            let y = (state[k] & UPPER_MASK) | (state[k + 1] & LOWER_MASK);
            state[k] = state[k + M] ^ (y >> 1) ^ mag(y);
        }
        for k in N - M..N - 1 {
            let y = (state[k] & UPPER_MASK) | (state[k + 1] & LOWER_MASK);
            state[k] = state[k - (N - M)] ^ (y >> 1) ^ mag(y);
        }
        let y = (state[N - 1] & UPPER_MASK) | (state[0] & LOWER_MASK);
        state[N - 1] = state[M - 1] ^ (y >> 1) ^ mag(y);
        self.index = 0;
    }

    /// Applies the tempering transform to a state word.
    #[inline]
    pub fn temper(mut y: u32) -> u32 {
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c5680;
        y ^= (y << 15) & 0xefc60000;
        y ^= y >> 18;
        y
    }

    /// Reports whether `state` leads to an output of zero forever. The twist
    /// only reads the top bit of `state[0]`, so its low bits do not help.
    pub(crate) fn is_degenerate(state: &[u32; N]) -> bool {
        state[0] & UPPER_MASK == 0 && state[1..].iter().all(|&x| x == 0)
    }

    /// The state words, in the order they will be tempered.
    pub fn state(&self) -> &[u32; N] {
        &self.state
    }
}

impl PartialEq for MersenneTwister {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.state == other.state
    }
}

impl Eq for MersenneTwister {}

#[inline]
fn mag(y: u32) -> u32 {
    if y & 1 == 0 {
        0
    } else {
        MATRIX_A
    }
}
