use num_bigint::BigUint;
use num_traits::Zero;
use rand_chacha::rand_core::RngCore;

/// Sample a uniform integer in `[0, bound)`.
///
/// Rejection sampling over exactly `bound.bits()` random bits: every draw
/// below the bound is equally likely, and the acceptance probability is at
/// least one half per attempt. `bound` must be nonzero.
pub(crate) fn uniform_below<R: RngCore>(rng: &mut R, bound: &BigUint) -> BigUint {
    debug_assert!(!bound.is_zero(), "uniform_below requires a nonzero bound");

    let bits = bound.bits();
    // Bit counts are bounded by the bound's byte length in memory.
    let len = usize::try_from(bits.div_ceil(8)).unwrap_or(usize::MAX);
    let top_mask: u8 = match bits % 8 {
        0 => 0xFF,
        partial => (1u8 << partial) - 1,
    };

    let mut buf = vec![0u8; len];
    loop {
        rng.fill_bytes(&mut buf);
        if let Some(top) = buf.last_mut() {
            *top &= top_mask;
        }

        let candidate = BigUint::from_bytes_le(&buf);
        if &candidate < bound {
            return candidate;
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::ToPrimitive;
    use rand_chacha::{ChaCha20Rng, rand_core::SeedableRng};

    #[test]
    fn draws_stay_below_the_bound() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let bound = BigUint::from(1000u32);
        for _ in 0..2000 {
            assert!(uniform_below(&mut rng, &bound) < bound);
        }
    }

    #[test]
    fn bound_of_one_always_draws_zero() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let bound = BigUint::from(1u32);
        for _ in 0..100 {
            assert!(uniform_below(&mut rng, &bound).is_zero());
        }
    }

    #[test]
    fn every_value_below_a_small_bound_is_reachable() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let bound = BigUint::from(6u32);
        let mut seen = [0u32; 6];
        for _ in 0..6000 {
            let draw = uniform_below(&mut rng, &bound);
            let slot = draw.to_usize().expect("draw is below 6");
            seen[slot] += 1;
        }

        // Expected count is 1000 per value; five sigma is roughly 145.
        for count in seen {
            assert!((850..=1150).contains(&count), "skewed draw count {count}");
        }
    }

    #[test]
    fn wide_bounds_exercise_the_partial_top_byte() {
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        // 2^70 + 1 has a 7-bit partial top byte.
        let bound = (BigUint::from(1u32) << 70u32) + BigUint::from(1u32);
        for _ in 0..200 {
            assert!(uniform_below(&mut rng, &bound) < bound);
        }
    }
}
