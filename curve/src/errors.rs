//! Error types for curve and scalar operations.

use thiserror::Error;

/// Errors raised by scalar arithmetic, scalar encoding and point decoding.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// The value shares a factor with the modulus (for a prime order this
    /// means the value is zero modulo `n`).
    #[error("value has no inverse modulo the group order")]
    NoInverse,

    /// A big-endian integer needs more bytes than the fixed encoding width.
    #[error("value does not fit in {0} bytes")]
    ScalarOverflow(usize),

    /// A decoded scalar is not below the group order.
    #[error("scalar is not below the group order")]
    ScalarOutOfRange,

    /// Bytes are not a valid compressed SEC1 encoding of a curve point.
    #[error("invalid compressed point encoding")]
    InvalidEncoding,
}
