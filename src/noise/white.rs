//! White noise generator implementation.

use crate::{Signal, Time};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A deterministic white noise generator.
///
/// White noise has equal power across all frequencies. The value at `t` is
/// uniformly distributed in `[-1.0, 1.0]` and is drawn from a generator
/// seeded by the noise seed and `t`, so the same seed evaluated at the same
/// offset always yields the same value. Two generators with different seeds
/// are uncorrelated.
///
/// # Examples
///
/// ```
/// use wavecraft::{Signal, Time, WhiteNoise};
///
/// let noise = WhiteNoise::new(42);
/// let t = Time::from_millis(3);
/// assert_eq!(noise.at(t), noise.at(t));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhiteNoise {
    seed: u64,
}

impl WhiteNoise {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for WhiteNoise {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Signal for WhiteNoise {
    fn at(&self, t: Time) -> f64 {
        let key = self
            .seed
            .wrapping_mul(0x9E37_79B9_7F4A_7C15)
            .wrapping_add(t.as_nanos() as u64);
        StdRng::seed_from_u64(key).gen_range(-1.0..=1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_range() {
        let noise = WhiteNoise::new(7);
        for i in 0..10_000 {
            let sample = noise.at(Time::from_micros(i * 23));
            assert!((-1.0..=1.0).contains(&sample));
        }
    }

    #[test]
    fn test_randomness() {
        let noise = WhiteNoise::default();
        let samples: Vec<f64> = (0..100).map(|i| noise.at(Time::from_nanos(i))).collect();
        let first = samples[0];
        assert!(
            !samples.iter().all(|&s| s == first),
            "White noise should produce varying samples"
        );
    }

    #[test]
    fn test_repeatable() {
        let a = WhiteNoise::new(99);
        let b = WhiteNoise::new(99);
        for i in 0..100 {
            let t = Time::from_micros(i * 41);
            assert_eq!(a.at(t), b.at(t));
        }
    }

    #[test]
    fn test_seeds_differ() {
        let a = WhiteNoise::new(1);
        let b = WhiteNoise::new(2);
        let differing = (0..100)
            .filter(|&i| a.at(Time::from_nanos(i)) != b.at(Time::from_nanos(i)))
            .count();
        assert!(differing > 90);
    }
}
