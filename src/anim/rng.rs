//! Seedable uniform random number generation
//!
//! Three-word combined generator from Numerical Recipes (3rd ed., "Ran"):
//! a 64-bit LCG, a 64-bit xorshift, and a 32-bit multiply-with-carry,
//! combined into one output word per draw. Period ~3.138e57. The whole
//! animation (traversal order included) is a pure function of the one seed
//! this generator is given at startup.

use crate::error::Error;

/// LCG multiplier for the `u` word
const LCG_MUL: u64 = 2862933555777941757;
/// LCG increment for the `u` word
const LCG_ADD: u64 = 7046029254386353087;
/// Multiply-with-carry multiplier for the `w` word
const MWC_MUL: u64 = 4294957665;
/// Initial value of the `v` word before seeding
const V_INIT: u64 = 4101842887655102017;
/// 2^-64 as a decimal constant; scales a full 64-bit draw into [0,1)
const INV_2_64: f64 = 5.42101086242752217e-20;

/// Deterministic combined generator. State is never all-zero after seeding.
#[derive(Debug, Clone)]
pub struct Ran {
    u: u64,
    v: u64,
    w: u64,
}

impl Ran {
    /// Seed deterministically. Same seed, same infinite output sequence.
    ///
    /// The three words are initialized in sequence, cross-mixing each with
    /// the previous state and discarding one warm-up draw per word, which
    /// avoids short cycles and correlated low bits for small seeds.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = Self {
            u: 0,
            v: V_INIT,
            w: 1,
        };
        rng.u = seed ^ rng.v;
        let _ = rng.next_u64();
        rng.v = rng.u;
        let _ = rng.next_u64();
        rng.w = rng.v;
        let _ = rng.next_u64();
        rng
    }

    /// Seed from the system entropy source (8 bytes).
    ///
    /// Fails with [`Error::EntropyUnavailable`] when the source cannot be
    /// read; the process must not start the frame loop unseeded.
    pub fn from_entropy() -> Result<Self, Error> {
        let mut bytes = [0u8; 8];
        getrandom::fill(&mut bytes)?;
        Ok(Self::from_seed(u64::from_le_bytes(bytes)))
    }

    /// Next uniformly-distributed 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.u = self.u.wrapping_mul(LCG_MUL).wrapping_add(LCG_ADD);
        self.v ^= self.v >> 17;
        self.v ^= self.v << 31;
        self.v ^= self.v >> 8;
        self.w = MWC_MUL.wrapping_mul(self.w & 0xffff_ffff) + (self.w >> 32);
        let mut x = self.u ^ (self.u << 21);
        x ^= x >> 35;
        x ^= x << 4;
        x.wrapping_add(self.v) ^ self.w
    }

    /// Next uniformly-distributed 32-bit value (low bits of `next_u64`).
    pub fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    /// Uniform integer in `[a, b)`, free of modulo bias.
    ///
    /// Draws below `2^32 mod limit` are rejected so every residue is equally
    /// likely. `b > a` is a precondition; violating it is a caller bug.
    pub fn int_range(&mut self, a: i32, b: i32) -> i32 {
        assert!(b > a, "invalid range [{a}, {b}) for int_range");
        let limit = (i64::from(b) - i64::from(a)) as u64;
        let reject_below = (1u64 << 32) % limit;
        loop {
            let i = u64::from(self.next_u32());
            if i >= reject_below {
                return (i64::from(a) + (i % limit) as i64) as i32;
            }
        }
    }

    /// Uniform double in `[0, 1)`.
    pub fn unit_f64(&mut self) -> f64 {
        INV_2_64 * self.next_u64() as f64
    }

    /// Uniform double in `[a, b)`.
    pub fn f64_range(&mut self, a: f64, b: f64) -> f64 {
        a + self.unit_f64() * (b - a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Reference outputs computed from the published recurrence.
    const SEED_42_U64: [u64; 5] = [
        2235175048639730301,
        6425562075534813739,
        3657314841840734556,
        9434979886461576346,
        1943253282200294373,
    ];

    #[test]
    fn test_golden_vectors_seed_42() {
        let mut rng = Ran::from_seed(42);
        for expected in SEED_42_U64 {
            assert_eq!(rng.next_u64(), expected);
        }
    }

    #[test]
    fn test_golden_vectors_other_seeds() {
        let mut rng = Ran::from_seed(0);
        assert_eq!(rng.next_u64(), 1454121425012434822);
        assert_eq!(rng.next_u64(), 1060667887419232322);

        let mut rng = Ran::from_seed(12345);
        assert_eq!(rng.next_u64(), 16199849379344951119);
        assert_eq!(rng.next_u64(), 17329134056577114601);
    }

    #[test]
    fn test_determinism() {
        let mut a = Ran::from_seed(99999);
        let mut b = Ran::from_seed(99999);
        for _ in 0..1000 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_u32_narrows_u64() {
        // Low bits of the first 64-bit draw for seed 42
        let mut rng = Ran::from_seed(42);
        assert_eq!(rng.next_u32(), SEED_42_U64[0] as u32);
        assert_eq!(rng.next_u32(), SEED_42_U64[1] as u32);
        assert_eq!(Ran::from_seed(42).next_u32(), 1090310781);
    }

    #[test]
    fn test_int_range_golden() {
        let mut rng = Ran::from_seed(42);
        let draws: Vec<i32> = (0..8).map(|_| rng.int_range(0, 10)).collect();
        assert_eq!(draws, [1, 1, 8, 2, 1, 9, 0, 7]);
    }

    #[test]
    fn test_unit_f64_bounds_and_value() {
        let mut rng = Ran::from_seed(42);
        let x = rng.unit_f64();
        assert!((x - 0.12116908218102942).abs() < 1e-15);
        for _ in 0..10_000 {
            let x = rng.unit_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_int_range_uniformity_chi_square() {
        // 10 bins, 100k draws, fixed seed. Critical value for 9 degrees of
        // freedom at p=0.001 is 27.88; anything near that indicates a biased
        // residue mapping.
        let mut rng = Ran::from_seed(7);
        let mut bins = [0u32; 10];
        let n = 100_000;
        for _ in 0..n {
            bins[rng.int_range(0, 10) as usize] += 1;
        }
        let expected = n as f64 / 10.0;
        let chi2: f64 = bins
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();
        assert!(chi2 < 27.88, "chi-square statistic too large: {chi2}");
    }

    #[test]
    #[should_panic(expected = "invalid range")]
    fn test_int_range_rejects_empty_range() {
        let mut rng = Ran::from_seed(1);
        let _ = rng.int_range(5, 5);
    }

    proptest! {
        #[test]
        fn prop_int_range_stays_in_bounds(
            seed in any::<u64>(),
            a in -10_000i32..10_000,
            span in 1i32..10_000,
        ) {
            let mut rng = Ran::from_seed(seed);
            let b = a + span;
            for _ in 0..50 {
                let x = rng.int_range(a, b);
                prop_assert!(x >= a && x < b);
            }
        }

        #[test]
        fn prop_f64_range_stays_in_bounds(seed in any::<u64>()) {
            let mut rng = Ran::from_seed(seed);
            let x = rng.f64_range(-3.5, 12.25);
            prop_assert!((-3.5..12.25).contains(&x));
        }
    }
}
