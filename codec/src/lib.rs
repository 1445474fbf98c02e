//! Strict decoding of pairing and curve arithmetic inputs.
//!
//! The input of a call is an untrusted, big-endian byte string describing a
//! prime field, its extension towers, short Weierstrass curves over them and
//! group elements. This crate turns such bytes into the typed values of
//! [`arith`], rejecting every malformed or unsupported encoding with one of
//! the three [`arith::Error`] kinds.
//!
//! # Encoding
//!
//! - Integers are big-endian with an explicit one-byte length prefix read
//!   before the payload.
//! - Field elements use exactly the modulus byte length and must be reduced.
//! - Loop parameters are dense: their top byte may not be zero. Group
//!   orders and scalars are not dense checked.
//! - Tags (curve family, twist, sign, boolean) are single bytes.
//!
//! # Example
//!
//! ```
//! use codec::{decode_prime_field, decode_weierstrass_curve, Deserializer};
//!
//! // modulus 103, a = 0, b = 7, group order 97
//! let input = [103, 0, 7, 1, 97];
//! let mut d = Deserializer::new(&input);
//!
//! let field = decode_prime_field::<4>(&mut d, 1).expect("modulus");
//! let curve = decode_weierstrass_curve(&mut d, &field, 1, true).expect("curve");
//! assert_eq!(curve.order_len(), 1);
//! assert!(d.ended());
//! ```
//!
//! # Validation policy
//!
//! Checks that need field arithmetic (non-residues, on-curve and subgroup
//! membership) take a [`ValidationPolicy`]. Only [`ValidationPolicy::Strict`]
//! is meant for real inputs; the permissive policy exists for fuzzing.

pub mod constants;
mod curves;
mod deserializer;
mod errors;
mod fields;
mod policy;
mod primitives;

#[cfg(test)]
mod tests;

pub use curves::{
    decode_curve_point, decode_group_order, decode_group_order_length, decode_points,
    decode_scalar, decode_weierstrass_curve,
};
pub use deserializer::Deserializer;
pub use fields::{
    decode_extension2, decode_extension3, decode_fp, decode_modulus, decode_non_residue,
    decode_prime_field, FieldDecoder,
};
pub use policy::ValidationPolicy;
pub use primitives::{
    decode_boolean, decode_loop_scalar_with_bit_limit, decode_modulus_byte_len,
    decode_pairing_curve_type, decode_sign, decode_twist_type, num_limbs_for_modulus_byte_len,
    num_units_for_group_order_length, CurveType, Sign, TwistType,
};
