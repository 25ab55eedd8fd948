//! [`rand_core`] integration, so the generators can drive the `rand` ecosystem.

use rand_core::{impls, Error, RngCore, SeedableRng};

use crate::{MersenneTwister, MotherGenerator};

macro_rules! impl_rng[($($ty:ty),*) => {$(
    impl RngCore for $ty {
        #[inline]
        fn next_u32(&mut self) -> u32 {
            <$ty>::next_u32(self)
        }

        #[inline]
        fn next_u64(&mut self) -> u64 {
            impls::next_u64_via_u32(self)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            impls::fill_bytes_via_next(self, dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    /// The seed is a little-endian 32-bit word.
    impl SeedableRng for $ty {
        type Seed = [u8; 4];

        fn from_seed(seed: Self::Seed) -> Self {
            <$ty>::new(u32::from_le_bytes(seed))
        }
    }
)*}];

impl_rng!(MersenneTwister, MotherGenerator);
