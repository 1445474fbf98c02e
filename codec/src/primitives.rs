//! Enumerated tags, length prefixes and loop scalars.

use arith::{DynBigInt, Result};
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::deserializer::Deserializer;
use crate::errors::{input_err, unknown_parameter_err};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    Plus,
    Minus,
}

/// Curve family selected by the leading tag of a pairing call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveType {
    Bls12,
    Bn,
    Mnt4,
    Mnt6,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TwistType {
    M,
    D,
}

pub fn decode_sign(d: &mut Deserializer<'_>) -> Result<Sign> {
    match d.byte("sign encoding")? {
        SIGN_PLUS => Ok(Sign::Plus),
        SIGN_MINUS => Ok(Sign::Minus),
        _ => Err(unknown_parameter_err("Unknown parameter sign")),
    }
}

pub fn decode_boolean(d: &mut Deserializer<'_>) -> Result<bool> {
    match d.byte("boolean encoding")? {
        BOOLEAN_FALSE => Ok(false),
        BOOLEAN_TRUE => Ok(true),
        _ => Err(unknown_parameter_err("Unknown boolean value")),
    }
}

pub fn decode_pairing_curve_type(d: &mut Deserializer<'_>) -> Result<CurveType> {
    match d.byte("curve type")? {
        BLS12 => Ok(CurveType::Bls12),
        BN => Ok(CurveType::Bn),
        MNT4 => Ok(CurveType::Mnt4),
        MNT6 => Ok(CurveType::Mnt6),
        _ => Err(unknown_parameter_err("Unknown curve type")),
    }
}

pub fn decode_twist_type(d: &mut Deserializer<'_>) -> Result<TwistType> {
    match d.byte("twist type")? {
        TWIST_TYPE_M => Ok(TwistType::M),
        TWIST_TYPE_D => Ok(TwistType::D),
        _ => Err(unknown_parameter_err("Unknown twist type supplied")),
    }
}

/// One byte holding the byte length of the modulus.
pub fn decode_modulus_byte_len(d: &mut Deserializer<'_>) -> Result<usize> {
    let len = d.byte("modulus length")?;
    if len == 0 {
        return Err(input_err("Modulus length is zero"));
    }

    Ok(len as usize)
}

/// Limb count used to hold a modulus of `byte_len` bytes. Short moduli are
/// padded up to `NUM_LIMBS_MIN` limbs.
pub fn num_limbs_for_modulus_byte_len(byte_len: usize) -> Result<usize> {
    if byte_len == 0 {
        return Err(input_err("Modulus length is zero"));
    }

    let limbs = byte_len.div_ceil(8).max(NUM_LIMBS_MIN);
    if limbs > NUM_LIMBS_MAX {
        return Err(input_err("Modulus is too large"));
    }

    Ok(limbs)
}

/// Limb count of a group order of `byte_len` bytes.
pub fn num_units_for_group_order_length(byte_len: usize) -> Result<usize> {
    let units = byte_len.div_ceil(8);
    if units < NUM_GROUP_LIMBS_MIN {
        return Err(input_err("Group order length is zero"));
    }
    if units > NUM_GROUP_LIMBS_MAX {
        return Err(input_err("Group order is too large"));
    }

    Ok(units)
}

/// Length-prefixed, densely encoded scalar of at most `bit_limit` bits, as
/// used for the loop parameters of the pairing drivers.
pub fn decode_loop_scalar_with_bit_limit(d: &mut Deserializer<'_>, bit_limit: usize) -> Result<DynBigInt> {
    let len = d.byte("loop parameter scalar length")? as usize;
    if len == 0 {
        return Err(input_err("Loop parameter scalar length is zero"));
    }
    if len > bit_limit.div_ceil(8) {
        return Err(input_err("Scalar is too large for bit length"));
    }

    let scalar = d.dyn_number(len, true, "loop parameter scalar")?;
    if scalar.num_bits() as usize > bit_limit {
        return Err(input_err("Number of bits for scalar is too large"));
    }

    Ok(scalar)
}
