//! Hex encoding at the crate boundary.
//!
//! Every key, digest, nonce and signature component is exchanged as exactly
//! 64 hex characters; a compressed public key is 66. Inputs are decoded once
//! here into fixed-width byte arrays, so nothing past this module handles
//! strings.

use crate::constants::{COMPONENT_SIZE, DIGEST_SIZE, NONCE_SIZE, PK_SIZE, SK_SIZE};
use crate::errors::EotsError;
use crate::hashing::{MessageDigest, Nonce};
use crate::keys::{SigningKey, VerifyingKey};
use crate::signatures::Signature;

/// Converts bytes to a lower-case hexadecimal string.
pub fn encode(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        hex.push_str(&format!("{byte:02x}"));
    }
    hex
}

/// Decodes exactly `N` bytes of hex, stripping surrounding whitespace and an
/// optional `0x`/`0X` prefix. `field` names the input in any error.
pub fn decode<const N: usize>(field: &'static str, text: &str) -> Result<[u8; N], EotsError> {
    let text = text.trim();
    let text = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let actual = text.chars().count();
    if actual != N * 2 {
        return Err(EotsError::InvalidLength {
            field,
            expected: N * 2,
            actual,
        });
    }
    if !text.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(EotsError::InvalidHex { field });
    }

    let mut out = [0u8; N];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&text[2 * i..2 * i + 2], 16)
            .map_err(|_| EotsError::InvalidHex { field })?;
    }
    Ok(out)
}

pub fn signing_key(text: &str) -> Result<SigningKey, EotsError> {
    SigningKey::from_bytes(&decode::<SK_SIZE>("private key", text)?)
}

pub fn verifying_key(text: &str) -> Result<VerifyingKey, EotsError> {
    VerifyingKey::from_bytes(&decode::<PK_SIZE>("public key", text)?)
}

pub fn digest(text: &str) -> Result<MessageDigest, EotsError> {
    decode::<DIGEST_SIZE>("digest", text).map(MessageDigest::from_bytes)
}

pub fn nonce(text: &str) -> Result<Nonce, EotsError> {
    decode::<NONCE_SIZE>("nonce", text).map(Nonce::from_bytes)
}

pub fn signature(r: &str, s: &str) -> Result<Signature, EotsError> {
    Ok(Signature::new(
        decode::<COMPONENT_SIZE>("r", r)?,
        decode::<COMPONENT_SIZE>("s", s)?,
    ))
}
