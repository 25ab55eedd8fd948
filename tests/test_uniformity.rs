//! Frequency tests for the float and integer outputs.

use randomc::{MersenneTwister, MotherGenerator};

fn chi_square(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

#[test]
fn test_exact_range_chi_square() {
    let mut mt = MersenneTwister::new(2024);
    let mut counts = [0u64; 3];
    for _ in 0..3_000_000 {
        let x = mt.exact_range(0, 2).unwrap();
        counts[x as usize] += 1;
    }
    // 99% critical value for 2 degrees of freedom.
    let chi = chi_square(&counts);
    assert!(chi < 9.21, "chi-square {chi} for {counts:?}");
}

#[test]
fn test_exact_range_from_seed_array() {
    let mut mt = MersenneTwister::from_seeds(&[2024, 1, 2]).unwrap();
    let mut counts = [0u64; 10];
    for _ in 0..100_000 {
        let x = mt.exact_range(10, 19).unwrap();
        counts[(x - 10) as usize] += 1;
    }
    // 99% critical value for 9 degrees of freedom.
    let chi = chi_square(&counts);
    assert!(chi < 21.67, "chi-square {chi} for {counts:?}");
}

#[test]
fn test_biased_range_chi_square() {
    let mut mt = MersenneTwister::new(2024);
    let mut mother = MotherGenerator::new(2024);
    let mut mt_counts = [0u64; 6];
    let mut mother_counts = [0u64; 6];
    for _ in 0..600_000 {
        mt_counts[(mt.biased_range(1, 6).unwrap() - 1) as usize] += 1;
        mother_counts[(mother.biased_range(1, 6).unwrap() - 1) as usize] += 1;
    }
    // 99% critical value for 5 degrees of freedom.
    for counts in [mt_counts, mother_counts] {
        let chi = chi_square(&counts);
        assert!(chi < 15.09, "chi-square {chi} for {counts:?}");
    }
}

#[test]
fn test_biased_power_of_two_has_no_rounding() {
    // For an interval of 2^k, the biased mapping selects the top k bits of
    // the word, so every value has exactly 2^(32-k) preimages.
    let mut mt = MersenneTwister::new(11);
    let mut raw = MersenneTwister::new(11);
    let mut mother = MotherGenerator::new(11);
    let mut mother_raw = MotherGenerator::new(11);
    for _ in 0..10_000 {
        assert_eq!(mt.biased_range(0, 3).unwrap(), (raw.next_u32() >> 30) as i32);
        assert_eq!(
            mother.biased_range(-128, 127).unwrap(),
            (mother_raw.next_u32() >> 24) as i32 - 128,
        );
    }
}

#[test]
fn test_float_bounds() {
    let mut mt = MersenneTwister::new(5);
    let mut mother = MotherGenerator::new(5);
    for _ in 0..100_000 {
        let f = mt.next_f64();
        assert!((0.0..1.0).contains(&f), "{f} outside [0, 1)");
        let f = mother.next_f64();
        assert!((0.0..1.0).contains(&f), "{f} outside [0, 1)");
    }
}

#[test]
fn test_float_mean() {
    let mut mt = MersenneTwister::new(5);
    let n = 200_000;
    let mean = (0..n).map(|_| mt.next_f64()).sum::<f64>() / n as f64;
    assert!((mean - 0.5).abs() < 0.005, "mean {mean}");
}
