//! Randomness used by the reveal scheduler.

use crate::error::{GameError, Result};

/// Source of uniform floats in `[0, 1)`. Everything random in a round goes
/// through this trait so the scheduler can be driven deterministically.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Random integer in `[min, max]`, both ends inclusive.
    fn random_integer(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        // f64 span so the full u32 range does not overflow
        let span = (max - min) as f64 + 1.0;
        let offset = (self.next_f64() * span).floor() as u32;
        min + offset.min(max - min)
    }
}

/// xorshift64* generator. Not cryptographically secure; plenty for picking holes.
#[derive(Clone, Debug)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    pub fn seeded(seed: u64) -> Self {
        // Zero is a fixed point of xorshift.
        let state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self { state }
    }

    /// Seed from the platform entropy source (`crypto.getRandomValues` in the browser).
    pub fn from_entropy() -> Result<Self> {
        let mut buf = [0u8; 8];
        getrandom::getrandom(&mut buf).map_err(GameError::Entropy)?;
        Ok(Self::seeded(u64::from_le_bytes(buf)))
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

impl RandomSource for Xorshift64 {
    fn next_f64(&mut self) -> f64 {
        // Top 53 bits -> exactly representable mantissa.
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_f64(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_floats_stay_in_unit_interval() {
        let mut rng = Xorshift64::seeded(42);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "{v} out of range");
        }
    }

    #[test]
    fn test_zero_seed_still_moves() {
        let mut rng = Xorshift64::seeded(0);
        let a = rng.next_u64();
        let b = rng.next_u64();
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Xorshift64::seeded(7);
        let mut b = Xorshift64::seeded(7);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_random_integer_bounds() {
        assert_eq!(Fixed(0.0).random_integer(600, 1200), 600);
        assert_eq!(Fixed(0.999_999_9).random_integer(600, 1200), 1200);
        assert_eq!(Fixed(0.5).random_integer(0, 10), 5);
        assert_eq!(Fixed(0.5).random_integer(5, 5), 5);
        assert_eq!(Fixed(0.5).random_integer(9, 3), 9);
    }

    #[test]
    fn test_random_integer_full_range() {
        assert_eq!(Fixed(0.0).random_integer(0, u32::MAX), 0);
        assert_eq!(Fixed(0.5).random_integer(0, u32::MAX), 1 << 31);
        assert_eq!(Fixed(1.0 - f64::EPSILON).random_integer(0, u32::MAX), u32::MAX);
        assert_eq!(Fixed(1.0 - f64::EPSILON).random_integer(1, u32::MAX), u32::MAX);
    }

    #[test]
    fn test_random_integer_covers_range() {
        let mut rng = Xorshift64::seeded(1234);
        let mut seen = [false; 11];
        for _ in 0..5_000 {
            let v = rng.random_integer(10, 20);
            assert!((10..=20).contains(&v));
            seen[(v - 10) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_from_entropy() {
        let mut rng = Xorshift64::from_entropy().unwrap();
        assert!((0.0..1.0).contains(&rng.next_f64()));
    }
}
