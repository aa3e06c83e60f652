//! Fixed-width big-endian conversion between bytes and integers.

use num_bigint::BigUint;

use crate::errors::CurveError;

/// Width of an encoded scalar in bytes.
pub const SCALAR_SIZE: usize = 32;

/// Interprets `bytes` as a big-endian unsigned integer.
pub fn decode_be(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Encodes `value` as exactly [`SCALAR_SIZE`] big-endian bytes, left-padded
/// with zeros.
pub fn encode_be(value: &BigUint) -> Result<[u8; SCALAR_SIZE], CurveError> {
    if value.bits() > (SCALAR_SIZE * 8) as u64 {
        return Err(CurveError::ScalarOverflow(SCALAR_SIZE));
    }
    Ok(pad_be(value))
}

// Caller guarantees `value < 2^256`.
pub(crate) fn pad_be(value: &BigUint) -> [u8; SCALAR_SIZE] {
    let bytes = value.to_bytes_be();
    let mut out = [0u8; SCALAR_SIZE];
    out[SCALAR_SIZE - bytes.len()..].copy_from_slice(&bytes);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_pads_small_values() {
        let out = encode_be(&BigUint::from(0x0102u32)).expect("fits");
        assert_eq!(out[..30], [0u8; 30]);
        assert_eq!(out[30..], [0x01, 0x02]);
    }

    #[test]
    fn test_encode_zero() {
        assert_eq!(encode_be(&BigUint::from(0u32)), Ok([0u8; SCALAR_SIZE]));
    }

    #[test]
    fn test_encode_max_width() {
        let max = decode_be(&[0xff; SCALAR_SIZE]);
        assert_eq!(encode_be(&max), Ok([0xff; SCALAR_SIZE]));
    }

    #[test]
    fn test_encode_overflow() {
        let too_big = BigUint::from(1u32) << 256;
        assert_eq!(
            encode_be(&too_big),
            Err(CurveError::ScalarOverflow(SCALAR_SIZE))
        );
    }

    #[test]
    fn test_decode_ignores_leading_zeros() {
        assert_eq!(decode_be(&[0, 0, 0, 5]), BigUint::from(5u32));
        assert_eq!(decode_be(&[]), BigUint::from(0u32));
    }
}
