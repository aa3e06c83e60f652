//! Error types for the EOTS signature scheme.

use curve::CurveError;
use thiserror::Error;

/// Errors that can occur while decoding inputs, signing or extracting keys.
///
/// Verification never produces one of these: it only answers `true` or `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EotsError {
    /// A hex field has the wrong number of characters.
    #[error("{field}: expected {expected} hex characters, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A hex field contains a character outside `[0-9a-fA-F]`.
    #[error("{field}: contains non-hex characters")]
    InvalidHex { field: &'static str },

    /// The private key is zero or not below the group order.
    #[error("private key must be in [1, n-1]")]
    InvalidPrivateKey,

    /// The public key is not a compressed encoding of a point on the curve.
    #[error("public key is not a valid compressed curve point")]
    InvalidPublicKey,

    /// The nonce is zero or not below the group order.
    #[error("nonce must be in [1, n-1]")]
    InvalidNonce,

    /// The nonce point's x-coordinate reduced to zero.
    #[error("nonce point has an x-coordinate of zero modulo n")]
    InvalidR,

    /// The computed `s` was zero.
    #[error("signature scalar s is zero")]
    InvalidSignature,

    /// The two signatures were produced with different nonces.
    #[error(
        "signatures do not share a nonce; extraction only works when the same k signed two digests"
    )]
    NonceMismatch,

    /// The two signatures are byte-for-byte the same.
    #[error("signatures are identical")]
    IdenticalSignatures,

    /// The `s` components, or the two digests, are equal modulo `n`.
    #[error("signatures are degenerate: s or digest values are equal modulo n")]
    DegenerateSignatures,

    /// An underlying scalar operation failed (for example, no inverse exists).
    #[error(transparent)]
    Curve(#[from] CurveError),
}
