//! Scalar field of secp256k1. n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141
//!
//! Elements are arbitrary-precision integers always held in canonical form,
//! i.e. in `[0, n)`. Every arithmetic operation reduces its result.

use core::ops::{Add, Mul, Neg, Sub};
use std::sync::LazyLock;

use k256::elliptic_curve::PrimeField;
use k256::{FieldBytes, Scalar};
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::codec::{self, SCALAR_SIZE};
use crate::errors::CurveError;
use crate::modular;

/// Group order `n` as big-endian bytes.
pub const ORDER_BYTES: [u8; SCALAR_SIZE] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

static ORDER: LazyLock<BigUint> = LazyLock::new(|| codec::decode_be(&ORDER_BYTES));

/// Scalar field element for the curve.
///
/// Serializes as its fixed 32-byte big-endian encoding; deserialization
/// rejects values that are not below the group order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[u8; 32]", into = "[u8; 32]")]
pub struct ScalarField(BigUint);

impl ScalarField {
    /// The group order `n`.
    pub fn order() -> &'static BigUint {
        &ORDER
    }

    /// Creates an element from any non-negative integer, reducing it mod `n`.
    pub fn new(value: BigUint) -> Self {
        Self(value % Self::order())
    }

    /// Creates an element from a signed integer using Euclidean reduction.
    pub fn from_bigint(value: &BigInt) -> Self {
        Self(modular::reduce(value, Self::order()))
    }

    #[inline]
    pub fn from_u64(value: u64) -> Self {
        Self::new(BigUint::from(value))
    }

    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Decodes a 32-byte big-endian value, rejecting anything `>= n`.
    pub fn from_be_bytes(bytes: &[u8; SCALAR_SIZE]) -> Result<Self, CurveError> {
        let value = codec::decode_be(bytes);
        if &value >= Self::order() {
            return Err(CurveError::ScalarOutOfRange);
        }
        Ok(Self(value))
    }

    /// Decodes a big-endian value of any length and reduces it mod `n`.
    pub fn from_be_bytes_reduced(bytes: &[u8]) -> Self {
        Self::new(codec::decode_be(bytes))
    }

    /// Encodes the element as 32 big-endian bytes.
    pub fn to_be_bytes(&self) -> [u8; SCALAR_SIZE] {
        codec::pad_be(&self.0)
    }

    #[inline]
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiplicative inverse mod `n`; fails for zero.
    pub fn invert(&self) -> Result<Self, CurveError> {
        modular::invert(&self.0, Self::order()).map(Self)
    }

    /// Converts into the point-arithmetic backend's scalar type.
    pub(crate) fn to_k256(&self) -> Scalar {
        let repr = FieldBytes::from(self.to_be_bytes());
        // Canonical by construction, so the fallback is unreachable.
        Option::<Scalar>::from(Scalar::from_repr(repr)).unwrap_or(Scalar::ZERO)
    }
}

impl TryFrom<[u8; SCALAR_SIZE]> for ScalarField {
    type Error = CurveError;

    fn try_from(bytes: [u8; SCALAR_SIZE]) -> Result<Self, Self::Error> {
        Self::from_be_bytes(&bytes)
    }
}

impl From<ScalarField> for [u8; SCALAR_SIZE] {
    fn from(scalar: ScalarField) -> Self {
        scalar.to_be_bytes()
    }
}

impl Add<&ScalarField> for &ScalarField {
    type Output = ScalarField;

    #[inline]
    fn add(self, rhs: &ScalarField) -> ScalarField {
        ScalarField::new(&self.0 + &rhs.0)
    }
}

impl Sub<&ScalarField> for &ScalarField {
    type Output = ScalarField;

    #[inline]
    fn sub(self, rhs: &ScalarField) -> ScalarField {
        ScalarField::from_bigint(&(BigInt::from(self.0.clone()) - BigInt::from(rhs.0.clone())))
    }
}

impl Mul<&ScalarField> for &ScalarField {
    type Output = ScalarField;

    #[inline]
    fn mul(self, rhs: &ScalarField) -> ScalarField {
        ScalarField::new(&self.0 * &rhs.0)
    }
}

impl Neg for &ScalarField {
    type Output = ScalarField;

    #[inline]
    fn neg(self) -> ScalarField {
        ScalarField::zero().sub(self)
    }
}

impl Neg for ScalarField {
    type Output = ScalarField;

    #[inline]
    fn neg(self) -> ScalarField {
        -&self
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<ScalarField> for ScalarField {
            type Output = ScalarField;

            #[inline]
            fn $method(self, rhs: ScalarField) -> ScalarField {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&ScalarField> for ScalarField {
            type Output = ScalarField;

            #[inline]
            fn $method(self, rhs: &ScalarField) -> ScalarField {
                (&self).$method(rhs)
            }
        }

        impl $imp<ScalarField> for &ScalarField {
            type Output = ScalarField;

            #[inline]
            fn $method(self, rhs: ScalarField) -> ScalarField {
                self.$method(&rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

#[cfg(test)]
mod tests {
    use super::*;

    fn n_minus(k: u64) -> ScalarField {
        ScalarField::new(ScalarField::order() - BigUint::from(k))
    }

    #[test]
    fn test_order_bytes_match_order() {
        assert_eq!(ScalarField::order().to_bytes_be(), ORDER_BYTES.to_vec());
        assert_eq!(ScalarField::order().bits(), 256);
    }

    #[test]
    fn test_add_wraps() {
        let a = n_minus(1);
        let b = ScalarField::from_u64(2);
        assert_eq!(a + b, ScalarField::from_u64(1));
    }

    #[test]
    fn test_sub_wraps() {
        let a = ScalarField::from_u64(1);
        let b = ScalarField::from_u64(3);
        assert_eq!(&a - &b, n_minus(2));
        assert_eq!(b - a, ScalarField::from_u64(2));
    }

    #[test]
    fn test_neg() {
        assert_eq!(-ScalarField::from_u64(5), n_minus(5));
        assert_eq!(-ScalarField::zero(), ScalarField::zero());
    }

    #[test]
    fn test_mul_and_invert() {
        let a = ScalarField::from_u64(123_456_789);
        let inv = a.invert().expect("invertible");
        assert_eq!(&a * &inv, ScalarField::from_u64(1));
        assert_eq!(ScalarField::zero().invert(), Err(CurveError::NoInverse));
    }

    #[test]
    fn test_from_be_bytes_checked() {
        assert_eq!(
            ScalarField::from_be_bytes(&ORDER_BYTES),
            Err(CurveError::ScalarOutOfRange)
        );
        assert_eq!(
            ScalarField::from_be_bytes(&[0xff; SCALAR_SIZE]),
            Err(CurveError::ScalarOutOfRange)
        );

        let below = n_minus(1).to_be_bytes();
        assert_eq!(ScalarField::from_be_bytes(&below), Ok(n_minus(1)));
    }

    #[test]
    fn test_from_be_bytes_reduced() {
        assert!(ScalarField::from_be_bytes_reduced(&ORDER_BYTES).is_zero());

        let mut wide = vec![0u8; 8];
        wide.extend_from_slice(&[0, 0, 0, 9]);
        assert_eq!(
            ScalarField::from_be_bytes_reduced(&wide),
            ScalarField::from_u64(9)
        );
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let good = bincode::serialize(&ScalarField::from_u64(7)).expect("serialize");
        let decoded: ScalarField = bincode::deserialize(&good).expect("deserialize");
        assert_eq!(decoded, ScalarField::from_u64(7));

        let bad = bincode::serialize(&ORDER_BYTES).expect("serialize");
        assert!(bincode::deserialize::<ScalarField>(&bad).is_err());
    }

    #[test]
    fn test_to_k256_matches_encoding() {
        let a = ScalarField::from_u64(42);
        assert_eq!(a.to_k256(), Scalar::from(42u64));
    }
}
