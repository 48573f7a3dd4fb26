//! # Range Sampler
//!
//! Unbiased pseudo-random integer draws over a half-open interval.
//!
//! Taking `source % span` skews small values whenever the span does not
//! divide the source range evenly. The sampler here avoids that by rejection:
//! the 31-bit source range is partitioned into `span` equal-size bins, draws
//! falling into the leftover remainder are discarded, and an accepted draw is
//! mapped onto `[min, max)` by integer division.

use rand::rngs::StdRng;
use rand::RngCore;

/// Number of values the underlying source produces (31 uniform bits).
const SOURCE_RANGE: u64 = 1 << 31;

/// Returns a uniform pseudo-random integer in `[min, max)`.
///
/// If `min == max` the interval is degenerate and `max` is returned; this is
/// defined behavior, not an error. Assumes `0 <= min <= max < 2^31`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use warren::generation::sample;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let v = sample(&mut rng, 2, 9);
/// assert!((2..9).contains(&v));
/// assert_eq!(sample(&mut rng, 5, 5), 5);
/// ```
pub fn sample(rng: &mut StdRng, min: i32, max: i32) -> i32 {
    debug_assert!(0 <= min && min <= max);

    if min == max {
        return max;
    }

    let num_bins = (max - min) as u64;
    let bin_size = SOURCE_RANGE / num_bins;
    let defect = SOURCE_RANGE % num_bins;

    loop {
        // Top bit dropped so the draw is uniform over [0, 2^31)
        let x = (rng.next_u32() >> 1) as u64;
        if x < SOURCE_RANGE - defect {
            return (x / bin_size) as i32 + min;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_sample_stays_in_interval() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let v = sample(&mut rng, 3, 17);
            assert!((3..17).contains(&v));
        }
    }

    #[test]
    fn test_sample_degenerate_interval_returns_max() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(sample(&mut rng, 0, 0), 0);
        assert_eq!(sample(&mut rng, 9, 9), 9);
    }

    #[test]
    fn test_sample_single_value_interval() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(sample(&mut rng, 4, 5), 4);
        }
    }

    #[test]
    fn test_sample_reaches_both_ends() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 5];
        for _ in 0..1_000 {
            seen[sample(&mut rng, 0, 5) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "all of [0, 5) should occur: {:?}", seen);
    }

    #[test]
    fn test_sample_large_span() {
        let mut rng = StdRng::seed_from_u64(99);
        let max = i32::MAX;
        for _ in 0..1_000 {
            let v = sample(&mut rng, 0, max);
            assert!((0..max).contains(&v));
        }
    }
}
