//! Name-keyed pseudo-random filler for companies nothing else knows about.
//!
//! This is a placeholder for real enrichment data and is not a security
//! relevant random source. The only guarantee is reproducibility: the same
//! name (ignoring case) always yields the same draws, in the same order, for
//! a given build.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a over the bytes of `key`.
pub fn fnv1a(key: &[u8]) -> u64 {
    key.iter().fold(FNV_OFFSET, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}

pub struct SeededStream {
    rng: StdRng,
}

impl SeededStream {
    pub fn for_name(name: &str) -> Self {
        let key = name.trim().to_lowercase();
        Self {
            rng: StdRng::seed_from_u64(fnv1a(key.as_bytes())),
        }
    }

    pub fn int(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.gen_range(range)
    }

    /// Six monthly growth figures, each within `range`.
    pub fn growth(&mut self, range: RangeInclusive<u8>) -> [u8; 6] {
        let mut stats = [0u8; 6];
        for slot in stats.iter_mut() {
            *slot = self.rng.gen_range(range.clone());
        }
        stats
    }

    /// A rating in [2.5, 4.0] with one decimal.
    pub fn rating(&mut self) -> f32 {
        self.rng.gen_range(25u8..=40) as f32 / 10.0
    }

    pub fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_reference_values() {
        assert_eq!(fnv1a(b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a(b"a"), 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn test_same_name_same_draws() {
        let mut first = SeededStream::for_name("Acme Widgets");
        let mut second = SeededStream::for_name("  acme widgets ");
        assert_eq!(first.int(35..=65), second.int(35..=65));
        assert_eq!(first.growth(20..=70), second.growth(20..=70));
        assert_eq!(first.coin(), second.coin());
    }

    #[test]
    fn test_draws_stay_in_range() {
        let mut stream = SeededStream::for_name("Range Check Ltd");
        for _ in 0..200 {
            let rating = stream.rating();
            assert!((2.5..=4.0).contains(&rating));
            assert!(stream.growth(5..=20).iter().all(|g| (5..=20).contains(g)));
        }
    }
}
