//! Constants used in the EOTS signature scheme implementation.

/// Size of a serialized public verifying key in bytes.
///
/// A verifying key is a compressed secp256k1 point: one parity prefix byte
/// followed by the 32-byte x-coordinate.
pub const PK_SIZE: usize = curve::COMPRESSED_SIZE;

/// Size of a serialized secret signing key in bytes.
pub const SK_SIZE: usize = curve::SCALAR_SIZE;

/// Size of a message digest in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Size of an explicit signing nonce in bytes.
pub const NONCE_SIZE: usize = curve::SCALAR_SIZE;

/// Size of one signature component (`r` or `s`) in bytes.
pub const COMPONENT_SIZE: usize = curve::SCALAR_SIZE;

/// Size of a serialized signature in bytes.
///
/// A signature consists of:
/// - The scalar r (32 bytes)
/// - The scalar s (32 bytes)
/// Total: 64 bytes
pub const SIG_SIZE: usize = 2 * COMPONENT_SIZE;
