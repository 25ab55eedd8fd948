//! Uniform pseudorandom number generators: the MT19937 [Mersenne Twister](http://www.math.sci.hiroshima-u.ac.jp/m-mat/MT/emt.html)
//! and the Mother-of-All multiply-with-carry generator.
//!
//! Both produce 32 random bits at a time, uniform floats in `[0, 1)` and
//! integers in a closed range. [`MersenneTwister`] additionally supports
//! seeding with more than 32 bits and an exact, rejection-sampled integer
//! range. Neither is suitable for cryptography, and an instance must not be
//! shared between threads without external locking.

mod error;
mod mersenne;
mod mother;
#[cfg(feature = "rand_core")]
mod rng_core;
mod snapshot;
pub mod uniform;

pub use error::*;
pub use mersenne::*;
pub use mother::*;
pub use snapshot::*;
