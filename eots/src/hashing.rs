//! Message digests and signing nonces.

use curve::{RandomField, ScalarField};
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::{DIGEST_SIZE, NONCE_SIZE};
use crate::errors::EotsError;
use crate::keys::SigningKey;

/// A 32-byte message digest.
///
/// Any value is accepted; the scheme does not care where it came from. Use
/// [`hash_message`] to derive one from arbitrary bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageDigest([u8; DIGEST_SIZE]);

impl MessageDigest {
    #[inline]
    pub const fn from_bytes(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// The digest as an integer reduced mod `n`.
    pub(crate) fn to_scalar(&self) -> ScalarField {
        ScalarField::from_be_bytes_reduced(&self.0)
    }
}

impl From<[u8; DIGEST_SIZE]> for MessageDigest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }
}

/// Hashes an arbitrary message with SHA-256.
///
/// # Example
///
/// ```
/// use eots::hash_message;
///
/// let digest = hash_message(b"");
/// assert_eq!(digest.as_bytes()[..4], [0xe3, 0xb0, 0xc4, 0x42]);
/// ```
pub fn hash_message(msg: &[u8]) -> MessageDigest {
    MessageDigest(to_array(&Sha256::digest(msg)))
}

fn to_array(hash: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut out = [0u8; DIGEST_SIZE];
    out.copy_from_slice(hash);
    out
}

/// An ephemeral signing nonce `k`.
///
/// Holds the raw 32 bytes as supplied; the range `[1, n-1]` is checked when
/// the nonce is used to sign. Signing two different digests with the same
/// key and nonce reveals the key through [`crate::extract`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nonce([u8; NONCE_SIZE]);

impl Nonce {
    #[inline]
    pub const fn from_bytes(bytes: [u8; NONCE_SIZE]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.0
    }

    /// Samples a uniformly random nonce in `[1, n-1]`.
    pub fn random<R: Rng + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        Self(ScalarField::random(rng).to_be_bytes())
    }

    /// Deterministic nonce: `SHA-256(private_key || digest)`.
    ///
    /// The same key and digest always give the same nonce, and therefore the
    /// same signature.
    pub fn derive(key: &SigningKey, digest: &MessageDigest) -> Self {
        let hash = Sha256::new()
            .chain_update(key.to_bytes())
            .chain_update(digest.as_bytes())
            .finalize();
        Self(to_array(&hash))
    }

    /// The nonce as a scalar, rejecting zero and values `>= n`.
    pub(crate) fn to_scalar(&self) -> Result<ScalarField, EotsError> {
        let k = ScalarField::from_be_bytes(&self.0).map_err(|_| EotsError::InvalidNonce)?;
        if k.is_zero() {
            return Err(EotsError::InvalidNonce);
        }
        Ok(k)
    }
}

impl From<[u8; NONCE_SIZE]> for Nonce {
    fn from(bytes: [u8; NONCE_SIZE]) -> Self {
        Self(bytes)
    }
}
