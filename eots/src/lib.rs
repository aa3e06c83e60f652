//! Extractable one-time signatures (EOTS) over secp256k1.
//!
//! The signing equation is ordinary ECDSA. What makes the scheme "extractable"
//! is the opposite of normal nonce hygiene: signing two different digests with
//! the same key and the same nonce lets anyone holding both signatures recover
//! the private key with [`extract`]. This makes equivocation punishable.
//!
//! # Overview
//!
//! - [`generate_key_pair`] draws a uniform private key and its public point
//! - [`SigningKey::sign`] signs a 32-byte digest with an explicit or derived nonce
//! - [`VerifyingKey::verify`] checks a signature and only ever returns a `bool`
//! - [`extract`] recovers the private key from two signatures that share a nonce
//!
//! Every operation is a pure function of its inputs.
//!
//! # Example
//!
//! ```
//! use eots::{Nonce, extract, generate_key_pair, hash_message};
//!
//! let mut rng = rand::rng();
//! let (signing_key, verifying_key) = generate_key_pair(&mut rng);
//!
//! // Sign two different messages with the same nonce
//! let nonce = Nonce::random(&mut rng);
//! let h1 = hash_message(b"block 100 is A");
//! let h2 = hash_message(b"block 100 is B");
//! let sig1 = signing_key.sign(&h1, Some(&nonce)).expect("signing failed");
//! let sig2 = signing_key.sign(&h2, Some(&nonce)).expect("signing failed");
//!
//! // Both verify
//! assert!(verifying_key.verify(&h1, &sig1));
//! assert!(verifying_key.verify(&h2, &sig2));
//!
//! // And together they reveal the key
//! let recovered = extract(&sig1, &sig2, &h1, &h2).expect("extraction failed");
//! assert_eq!(recovered, signing_key);
//! ```
//!
//! # Security Considerations
//!
//! - Use a cryptographically secure random number generator for keys
//! - Reusing a nonce across two digests reveals the signing key, by construction
//! - Without an explicit nonce, the nonce is `SHA-256(key || digest)`, so
//!   re-signing the same digest is deterministic and safe

pub mod hex;

mod constants;
mod errors;
mod extract;
mod hashing;
mod keys;
mod signatures;


pub use constants::{COMPONENT_SIZE, DIGEST_SIZE, NONCE_SIZE, PK_SIZE, SIG_SIZE, SK_SIZE};
pub use curve::CurveError;
pub use errors::EotsError;
pub use extract::extract;
pub use hashing::{MessageDigest, Nonce, hash_message};
pub use keys::{SigningKey, VerifyingKey, generate_key_pair};
pub use signatures::Signature;

/// Signs `digest` with `key`. See [`SigningKey::sign`].
pub fn sign(
    key: &SigningKey,
    digest: &MessageDigest,
    nonce: Option<&Nonce>,
) -> Result<Signature, EotsError> {
    key.sign(digest, nonce)
}

/// Verifies `sig` over `digest` against `key`. See [`VerifyingKey::verify`].
pub fn verify(key: &VerifyingKey, digest: &MessageDigest, sig: &Signature) -> bool {
    key.verify(digest, sig)
}
