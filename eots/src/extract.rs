//! Private key recovery from two signatures that share a nonce.

use curve::ScalarField;
use tracing::{debug, warn};

use crate::errors::EotsError;
use crate::hashing::MessageDigest;
use crate::keys::SigningKey;
use crate::signatures::Signature;

/// Recovers the signing key from two signatures made with the same nonce.
///
/// Both signatures satisfy `s_i * k = h_i + r * x (mod n)`. Solving the two
/// equations for the unknowns gives:
/// - `k = (h1 - h2) / (s1 - s2) mod n`
/// - `x = (s1 * k - h1) / r mod n`
///
/// # Errors
///
/// Checked in this order:
/// - [`EotsError::NonceMismatch`] if `r1 != r2`
/// - [`EotsError::IdenticalSignatures`] if `s1 == s2`
/// - [`EotsError::DegenerateSignatures`] if `s1 - s2 ≡ 0 (mod n)` or
///   `h1 - h2 ≡ 0 (mod n)` (the recovered nonce would be zero)
/// - [`EotsError::Curve`] if `r` has no inverse
/// - [`EotsError::InvalidPrivateKey`] if the recovered key is zero
///
/// # Example
///
/// ```
/// use eots::{Nonce, SigningKey, extract, hash_message};
///
/// let mut rng = rand::rng();
/// let signing_key = SigningKey::random(&mut rng);
/// let nonce = Nonce::random(&mut rng);
///
/// let (h1, h2) = (hash_message(b"vote A"), hash_message(b"vote B"));
/// let sig1 = signing_key.sign(&h1, Some(&nonce)).unwrap();
/// let sig2 = signing_key.sign(&h2, Some(&nonce)).unwrap();
///
/// let recovered = extract(&sig1, &sig2, &h1, &h2).unwrap();
/// assert_eq!(recovered, signing_key);
/// ```
pub fn extract(
    sig1: &Signature,
    sig2: &Signature,
    digest1: &MessageDigest,
    digest2: &MessageDigest,
) -> Result<SigningKey, EotsError> {
    if sig1.r != sig2.r {
        debug!("signatures carry different nonce commitments");
        return Err(EotsError::NonceMismatch);
    }
    if sig1.s == sig2.s {
        debug!("signatures are identical");
        return Err(EotsError::IdenticalSignatures);
    }

    let r = ScalarField::from_be_bytes_reduced(&sig1.r);
    let s1 = ScalarField::from_be_bytes_reduced(&sig1.s);
    let s2 = ScalarField::from_be_bytes_reduced(&sig2.s);
    let h1 = digest1.to_scalar();
    let h2 = digest2.to_scalar();

    let s_diff = &s1 - &s2;
    if s_diff.is_zero() {
        return Err(EotsError::DegenerateSignatures);
    }
    let h_diff = &h1 - &h2;
    if h_diff.is_zero() {
        return Err(EotsError::DegenerateSignatures);
    }

    let k = h_diff * s_diff.invert()?;
    let x = (s1 * &k - h1) * r.invert()?;

    let key = SigningKey::from_scalar(x)?;
    warn!("recovered private key from nonce reuse");
    Ok(key)
}
