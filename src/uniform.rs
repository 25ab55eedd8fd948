//! Conversions from raw 32-bit words to uniform floats and integers, shared by
//! both generators.

use crate::{Error, Result};

const TWO_POW_32: f64 = 4294967296.0;

/// Maps a word to `[0, 1)` with 32 bits of resolution.
///
/// On IEEE-754 targets this is bit-identical to loading the word into the top
/// of the mantissa of a double in `[1, 2)` and subtracting 1.
#[inline]
pub fn f64_from_u32(x: u32) -> f64 {
    f64::from(x) * (1.0 / TWO_POW_32)
}

/// Returns the number of values in `min..=max`, which is in `1..=2^32`.
#[inline]
pub(crate) fn interval(min: i32, max: i32) -> Result<u64> {
    if max < min {
        return Err(Error::InvertedRange { min, max });
    }
    Ok((i64::from(max) - i64::from(min) + 1) as u64)
}

/// Scales a uniform float in `[0, 1)` onto `min..=max`, where `interval` is
/// the result of [`interval`] for the same bounds.
///
/// The frequencies of the outputs differ by up to one part in 2^32, unless the
/// interval is a power of two.
#[inline]
pub(crate) fn biased_range(f: f64, interval: u64, min: i32, max: i32) -> i32 {
    let r = (f * interval as f64).floor() as i64 + i64::from(min);
    r.min(i64::from(max)) as i32
}
