use rand::Rng;

use crate::{SCALAR_SIZE, ScalarField};

/// Helper trait for sampling random field elements.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl RandomField for ScalarField {
    /// Rejection sampling over 32-byte strings: candidates `>= n` or equal
    /// to zero are redrawn, so the result is uniform over `[1, n)`.
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; SCALAR_SIZE];
        loop {
            rng.fill_bytes(&mut bytes);
            if let Ok(scalar) = ScalarField::from_be_bytes(&bytes) {
                if !scalar.is_zero() {
                    return scalar;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    /// Yields a fixed byte pattern for the first `overflow` draws, then counts up.
    struct ScriptedRng {
        overflow: usize,
        calls: usize,
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }

        fn next_u64(&mut self) -> u64 {
            let mut buf = [0u8; 8];
            self.fill_bytes(&mut buf);
            u64::from_le_bytes(buf)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.calls += 1;
            if self.calls <= self.overflow {
                dest.fill(0xff);
            } else {
                dest.fill(0);
                if let Some(last) = dest.last_mut() {
                    *last = self.calls as u8;
                }
            }
        }
    }

    #[test]
    fn test_random_is_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..64 {
            let s = ScalarField::random(&mut rng);
            assert!(!s.is_zero());
            assert!(s.as_biguint() < ScalarField::order());
        }
    }

    #[test]
    fn test_random_is_seed_deterministic() {
        let a = ScalarField::random(&mut StdRng::seed_from_u64(7));
        let b = ScalarField::random(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_rejects_overflowing_draws() {
        let mut rng = ScriptedRng {
            overflow: 3,
            calls: 0,
        };
        let s = ScalarField::random(&mut rng);
        assert_eq!(rng.calls, 4);
        assert_eq!(s, ScalarField::from_u64(4));
    }
}
