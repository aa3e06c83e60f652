//! Projective points, the working representation for curve arithmetic.

use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use k256::ProjectivePoint;

use crate::{Affine, Group, ScalarField};

/// A secp256k1 point in projective coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Projective {
    inner: ProjectivePoint,
}

impl Projective {
    /// Normalises to affine coordinates.
    #[inline]
    pub fn to_affine(&self) -> Affine {
        Affine::from_k256(self.inner.to_affine())
    }

    #[inline]
    pub(crate) fn from_k256(inner: ProjectivePoint) -> Self {
        Self { inner }
    }
}

impl Group for Projective {
    type Scalar = ScalarField;

    #[inline]
    fn identity() -> Self {
        Self::from_k256(ProjectivePoint::IDENTITY)
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.inner == ProjectivePoint::IDENTITY
    }

    #[inline]
    fn generator() -> Self {
        Self::from_k256(ProjectivePoint::GENERATOR)
    }

    #[inline]
    fn double(&self) -> Self {
        Self::from_k256(self.inner.double())
    }

    #[inline]
    fn scalar_mul(&self, scalar: &ScalarField) -> Self {
        Self::from_k256(self.inner * scalar.to_k256())
    }
}

impl From<Affine> for Projective {
    #[inline]
    fn from(point: Affine) -> Self {
        Self::from_k256(ProjectivePoint::from(point.to_k256()))
    }
}

impl Add for Projective {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_k256(self.inner + rhs.inner)
    }
}

impl AddAssign for Projective {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.inner += rhs.inner;
    }
}

impl Sub for Projective {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_k256(self.inner - rhs.inner)
    }
}

impl SubAssign for Projective {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.inner -= rhs.inner;
    }
}

impl Neg for Projective {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_k256(-self.inner)
    }
}
