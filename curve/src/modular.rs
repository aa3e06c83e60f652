//! Modular reduction and inversion over arbitrary-precision integers.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use crate::errors::CurveError;

/// Reduces `a` into the canonical range `[0, n)`.
///
/// This is Euclidean reduction: a negative `a` maps to `n - (|a| mod n)`
/// rather than to a negative remainder.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn reduce(a: &BigInt, n: &BigUint) -> BigUint {
    let modulus = BigInt::from(n.clone());
    let mut r = a % &modulus;
    if r.sign() == Sign::Minus {
        r += &modulus;
    }
    r.into_parts().1
}

/// Computes `a^-1 mod n` with the extended Euclidean algorithm.
///
/// Returns [`CurveError::NoInverse`] when `gcd(a, n) != 1`.
///
/// # Example
///
/// ```
/// use curve::modular::invert;
/// use curve::BigUint;
///
/// let inv = invert(&BigUint::from(3u32), &BigUint::from(7u32)).unwrap();
/// assert_eq!(inv, BigUint::from(5u32));
/// ```
pub fn invert(a: &BigUint, n: &BigUint) -> Result<BigUint, CurveError> {
    let (mut t, mut new_t) = (BigInt::zero(), BigInt::one());
    let (mut r, mut new_r) = (BigInt::from(n.clone()), BigInt::from(a % n));

    while !new_r.is_zero() {
        let quotient = &r / &new_r;
        let next_t = &t - &quotient * &new_t;
        t = std::mem::replace(&mut new_t, next_t);
        let next_r = &r - &quotient * &new_r;
        r = std::mem::replace(&mut new_r, next_r);
    }

    if !r.is_one() {
        return Err(CurveError::NoInverse);
    }

    Ok(reduce(&t, n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScalarField;

    #[test]
    fn test_reduce_negative() {
        let n = BigUint::from(7u32);
        assert_eq!(reduce(&BigInt::from(-1), &n), BigUint::from(6u32));
        assert_eq!(reduce(&BigInt::from(-7), &n), BigUint::zero());
        assert_eq!(reduce(&BigInt::from(-15), &n), BigUint::from(6u32));
    }

    #[test]
    fn test_reduce_positive() {
        let n = BigUint::from(7u32);
        assert_eq!(reduce(&BigInt::from(0), &n), BigUint::zero());
        assert_eq!(reduce(&BigInt::from(6), &n), BigUint::from(6u32));
        assert_eq!(reduce(&BigInt::from(22), &n), BigUint::one());
    }

    #[test]
    fn test_invert_small_prime() {
        let n = BigUint::from(7u32);
        for a in 1u32..7 {
            let inv = invert(&BigUint::from(a), &n).expect("invertible");
            assert_eq!((BigUint::from(a) * inv) % &n, BigUint::one());
        }
    }

    #[test]
    fn test_invert_zero_fails() {
        let n = BigUint::from(7u32);
        assert_eq!(invert(&BigUint::zero(), &n), Err(CurveError::NoInverse));
        assert_eq!(invert(&BigUint::from(14u32), &n), Err(CurveError::NoInverse));
    }

    #[test]
    fn test_invert_shared_factor_fails() {
        let n = BigUint::from(8u32);
        assert_eq!(invert(&BigUint::from(4u32), &n), Err(CurveError::NoInverse));
        assert_eq!(invert(&BigUint::from(3u32), &n), Ok(BigUint::from(3u32)));
    }

    #[test]
    fn test_invert_group_order() {
        let n = ScalarField::order();
        let a = n - BigUint::from(2u32);
        let inv = invert(&a, n).expect("invertible");
        assert_eq!((a * inv) % n, BigUint::one());
    }
}
