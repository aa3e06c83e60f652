//! Signing and verifying keys for the EOTS signature scheme.

use core::fmt;

use curve::{Affine, RandomField, ScalarField, double_scalar_mul_basepoint};
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{PK_SIZE, SK_SIZE};
use crate::errors::EotsError;
use crate::hashing::{MessageDigest, Nonce};
use crate::signatures::{Signature, point_to_r};

/// A secret signing key for creating EOTS signatures.
///
/// The signing key is a scalar `x` in `[1, n-1]`. Anyone holding two
/// signatures made with the same nonce over different digests can recover it.
///
/// # Example
///
/// ```
/// use eots::SigningKey;
///
/// let mut rng = rand::rng();
/// let signing_key = SigningKey::random(&mut rng);
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u8; 32]", into = "[u8; 32]")]
pub struct SigningKey {
    scalar: ScalarField,
}

/// A public verifying key for verifying EOTS signatures.
///
/// The verifying key is the curve point `x * G`, encoded in compressed form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyingKey {
    point: Affine,
}

impl SigningKey {
    /// Generates a random signing key using the provided random number generator.
    ///
    /// Candidates are drawn as 32 random bytes and redrawn until they fall in
    /// `[1, n-1]`, so the key is uniform without modulo bias.
    pub fn random<R: Rng + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        Self {
            scalar: ScalarField::random(rng),
        }
    }

    /// Parses a 32-byte big-endian private key.
    pub fn from_bytes(bytes: &[u8; SK_SIZE]) -> Result<Self, EotsError> {
        let scalar = ScalarField::from_be_bytes(bytes).map_err(|_| EotsError::InvalidPrivateKey)?;
        if scalar.is_zero() {
            return Err(EotsError::InvalidPrivateKey);
        }
        Ok(Self { scalar })
    }

    pub fn to_bytes(&self) -> [u8; SK_SIZE] {
        self.scalar.to_be_bytes()
    }

    /// Derives the public verifying key `G * x`.
    pub fn verifying_key(&self) -> VerifyingKey {
        VerifyingKey {
            point: Affine::mul_generator(&self.scalar),
        }
    }

    /// Signs a message digest.
    ///
    /// 1. Use `nonce` verbatim if given, otherwise derive `k = SHA-256(x || h)`
    /// 2. Check `k` is in `[1, n-1]`
    /// 3. Compute `r = x(k * G) mod n`
    /// 4. Compute `s = k^-1 * (h + r * x) mod n`
    /// 5. Return signature `(r, s)`
    ///
    /// Signing two different digests with the same explicit nonce leaks the
    /// key through [`crate::extract`].
    ///
    /// # Errors
    ///
    /// - [`EotsError::InvalidNonce`] if `k` is zero or not below `n`
    /// - [`EotsError::InvalidR`] if `r` is zero
    /// - [`EotsError::InvalidSignature`] if `s` is zero
    ///
    /// # Example
    ///
    /// ```
    /// use eots::{SigningKey, hash_message};
    ///
    /// let mut rng = rand::rng();
    /// let signing_key = SigningKey::random(&mut rng);
    /// let digest = hash_message(b"hello");
    /// let signature = signing_key.sign(&digest, None).expect("signing failed");
    /// assert!(signing_key.verifying_key().verify(&digest, &signature));
    /// ```
    pub fn sign(&self, digest: &MessageDigest, nonce: Option<&Nonce>) -> Result<Signature, EotsError> {
        let explicit = nonce.is_some();
        let nonce = nonce
            .copied()
            .unwrap_or_else(|| Nonce::derive(self, digest));
        let k = nonce.to_scalar()?;

        let r = point_to_r(&Affine::mul_generator(&k)).map_err(|_| EotsError::InvalidR)?;
        if r.is_zero() {
            return Err(EotsError::InvalidR);
        }

        let h = digest.to_scalar();
        let s = k.invert()? * (h + &r * &self.scalar);
        if s.is_zero() {
            return Err(EotsError::InvalidSignature);
        }

        debug!(explicit_nonce = explicit, "signed digest");
        Ok(Signature::new(r.to_be_bytes(), s.to_be_bytes()))
    }

    pub(crate) fn from_scalar(scalar: ScalarField) -> Result<Self, EotsError> {
        if scalar.is_zero() {
            return Err(EotsError::InvalidPrivateKey);
        }
        Ok(Self { scalar })
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}

impl TryFrom<[u8; SK_SIZE]> for SigningKey {
    type Error = EotsError;

    fn try_from(bytes: [u8; SK_SIZE]) -> Result<Self, Self::Error> {
        Self::from_bytes(&bytes)
    }
}

impl From<SigningKey> for [u8; SK_SIZE] {
    fn from(key: SigningKey) -> Self {
        key.to_bytes()
    }
}

impl VerifyingKey {
    /// Parses a 33-byte compressed public key.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EotsError> {
        let point = Affine::from_compressed(bytes).map_err(|_| EotsError::InvalidPublicKey)?;
        Ok(Self { point })
    }

    pub fn to_bytes(&self) -> [u8; PK_SIZE] {
        self.point.to_compressed()
    }

    /// Verifies a signature on a digest using this verifying key.
    ///
    /// With `w = s^-1 mod n`, accepts iff the x-coordinate of
    /// `(h * w) * G + (r * w) * pk`, reduced mod `n`, equals `r`.
    ///
    /// Never fails: out-of-range components (`0` or `>= n`) and any
    /// degenerate intermediate result yield `false`.
    pub fn verify(&self, digest: &MessageDigest, sig: &Signature) -> bool {
        let Some((r, s)) = sig.scalars() else {
            debug!("signature component out of range");
            return false;
        };
        let Ok(w) = s.invert() else {
            return false;
        };

        let u1 = digest.to_scalar() * &w;
        let u2 = &r * &w;
        let point = double_scalar_mul_basepoint(&u1, &u2, &self.point).to_affine();

        match point_to_r(&point) {
            Ok(x) => x == r,
            Err(_) => {
                debug!("verification point is the identity");
                false
            }
        }
    }
}

impl From<&SigningKey> for VerifyingKey {
    /// Converts a reference to a signing key into a verifying key.
    ///
    /// This is equivalent to calling `signing_key.verifying_key()`.
    fn from(sk: &SigningKey) -> Self {
        sk.verifying_key()
    }
}

/// Generates a fresh key pair.
///
/// # Example
///
/// ```
/// let (signing_key, verifying_key) = eots::generate_key_pair(&mut rand::rng());
/// assert_eq!(signing_key.verifying_key(), verifying_key);
/// ```
pub fn generate_key_pair<R: Rng + CryptoRng + ?Sized>(rng: &mut R) -> (SigningKey, VerifyingKey) {
    let sk = SigningKey::random(rng);
    let vk = sk.verifying_key();
    (sk, vk)
}
