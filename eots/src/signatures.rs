//! Signature type and the nonce commitment shared by signing and verification.

use curve::{Affine, CurveError, ScalarField};
use serde::{Deserialize, Serialize};

use crate::constants::{COMPONENT_SIZE, SIG_SIZE};

/// An EOTS signature: the pair `(r, s)`, each a 32-byte big-endian scalar.
///
/// The components are kept as raw bytes so that a signature received from
/// elsewhere can be represented even when `r` or `s` is out of range; such
/// signatures simply fail verification.
///
/// # Structure
///
/// For a valid signature over digest `h` with private key `x` and nonce `k`:
/// - `r = x(k * G) mod n`
/// - `s = k^-1 * (h + r * x) mod n`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    /// The x-coordinate of the nonce point, reduced mod n
    pub r: [u8; COMPONENT_SIZE],
    /// The response scalar
    pub s: [u8; COMPONENT_SIZE],
}

impl Signature {
    #[inline]
    pub const fn new(r: [u8; COMPONENT_SIZE], s: [u8; COMPONENT_SIZE]) -> Self {
        Self { r, s }
    }

    /// Serializes as `r || s`.
    pub fn to_bytes(&self) -> [u8; SIG_SIZE] {
        let mut out = [0u8; SIG_SIZE];
        out[..COMPONENT_SIZE].copy_from_slice(&self.r);
        out[COMPONENT_SIZE..].copy_from_slice(&self.s);
        out
    }

    /// Parses `r || s`. No range checks are applied.
    pub fn from_bytes(bytes: &[u8; SIG_SIZE]) -> Self {
        let mut r = [0u8; COMPONENT_SIZE];
        let mut s = [0u8; COMPONENT_SIZE];
        r.copy_from_slice(&bytes[..COMPONENT_SIZE]);
        s.copy_from_slice(&bytes[COMPONENT_SIZE..]);
        Self { r, s }
    }

    /// Decodes both components, requiring each to be in `[1, n-1]`.
    pub(crate) fn scalars(&self) -> Option<(ScalarField, ScalarField)> {
        let r = ScalarField::from_be_bytes(&self.r).ok()?;
        let s = ScalarField::from_be_bytes(&self.s).ok()?;
        if r.is_zero() || s.is_zero() {
            return None;
        }
        Some((r, s))
    }
}

/// Reduces the x-coordinate of a nonce point into the scalar field.
///
/// Returns [`CurveError::InvalidEncoding`] for the point at infinity, which has
/// no x-coordinate.
pub(crate) fn point_to_r(point: &Affine) -> Result<ScalarField, CurveError> {
    if point.is_infinity() {
        return Err(CurveError::InvalidEncoding);
    }
    Ok(ScalarField::new(point.x_coordinate()))
}
