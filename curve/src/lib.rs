//! Elliptic curve group and scalar arithmetic for secp256k1.
//!
//! Point arithmetic is delegated to the `k256` crate and exposed through the
//! [`Affine`] and [`Projective`] wrappers. Scalars are arbitrary-precision
//! integers kept in the canonical range `[0, n)` where `n` is the group order;
//! reduction and inversion are implemented in [`modular`] and byte conversion
//! in [`codec`].

pub mod codec;
pub mod modular;

mod affine;
mod errors;
mod group;
mod msm;
mod projective;
mod random;
mod scalarfield;

pub use affine::{Affine, COMPRESSED_SIZE};
pub use codec::SCALAR_SIZE;
pub use errors::CurveError;
pub use group::Group;
pub use msm::double_scalar_mul_basepoint;
pub use num_bigint::{BigInt, BigUint};
pub use projective::Projective;
pub use random::RandomField;
pub use scalarfield::{ORDER_BYTES, ScalarField};
