//! Affine points and their compressed SEC1 encoding.

use core::ops::Add;

use k256::elliptic_curve::point::AffineCoordinates;
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::{AffinePoint, EncodedPoint};
use num_bigint::BigUint;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{CurveError, Group, Projective, ScalarField};

/// Size of a compressed point: one parity prefix byte plus the x-coordinate.
pub const COMPRESSED_SIZE: usize = 33;

/// A secp256k1 point in affine coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Affine {
    inner: AffinePoint,
}

impl Affine {
    /// The point at infinity (group identity).
    pub const INFINITY: Self = Self {
        inner: AffinePoint::IDENTITY,
    };

    #[inline]
    pub fn generator() -> Self {
        Self::from_k256(AffinePoint::GENERATOR)
    }

    /// Computes `scalar * G`.
    #[inline]
    pub fn mul_generator(scalar: &ScalarField) -> Self {
        Projective::mul_generator(scalar).to_affine()
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.inner == AffinePoint::IDENTITY
    }

    /// The x-coordinate as an integer in `[0, p)`. Zero for the point at infinity.
    pub fn x_coordinate(&self) -> BigUint {
        BigUint::from_bytes_be(&self.inner.x())
    }

    /// Compressed SEC1 encoding: `0x02 | 0x03` followed by the 32-byte x-coordinate.
    ///
    /// The point at infinity has no compressed form and encodes as all zeros,
    /// which [`Affine::from_compressed`] rejects.
    pub fn to_compressed(&self) -> [u8; COMPRESSED_SIZE] {
        let encoded = self.inner.to_encoded_point(true);
        let mut out = [0u8; COMPRESSED_SIZE];
        if let Ok(bytes) = <[u8; COMPRESSED_SIZE]>::try_from(encoded.as_bytes()) {
            out = bytes;
        }
        out
    }

    /// Decodes a compressed point, checking the prefix and that it lies on the curve.
    pub fn from_compressed(bytes: &[u8]) -> Result<Self, CurveError> {
        if bytes.len() != COMPRESSED_SIZE || !matches!(bytes[0], 0x02 | 0x03) {
            return Err(CurveError::InvalidEncoding);
        }
        let encoded = EncodedPoint::from_bytes(bytes).map_err(|_| CurveError::InvalidEncoding)?;
        Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
            .map(Self::from_k256)
            .ok_or(CurveError::InvalidEncoding)
    }

    #[inline]
    pub(crate) fn from_k256(inner: AffinePoint) -> Self {
        Self { inner }
    }

    #[inline]
    pub(crate) fn to_k256(self) -> AffinePoint {
        self.inner
    }
}

impl From<Projective> for Affine {
    #[inline]
    fn from(point: Projective) -> Self {
        point.to_affine()
    }
}

impl Add for Affine {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        (Projective::from(self) + Projective::from(rhs)).to_affine()
    }
}

impl Serialize for Affine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_compressed().to_vec().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Affine {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        Affine::from_compressed(&bytes).map_err(D::Error::custom)
    }
}
