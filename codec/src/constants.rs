//! Wire constants of the byte encoding.

/// Curve family tag for BLS12 curves.
pub const BLS12: u8 = 0x01;

/// Curve family tag for Barreto-Naehrig curves.
pub const BN: u8 = 0x02;

/// Curve family tag for MNT4 curves.
pub const MNT4: u8 = 0x03;

/// Curve family tag for MNT6 curves.
pub const MNT6: u8 = 0x04;

/// Twist tag: the twist isomorphism multiplies by the non-residue.
pub const TWIST_TYPE_M: u8 = 0x01;

/// Twist tag: the twist isomorphism divides by the non-residue.
pub const TWIST_TYPE_D: u8 = 0x02;

/// Sign tag of a positive loop parameter.
pub const SIGN_PLUS: u8 = 0x00;

/// Sign tag of a negative loop parameter.
pub const SIGN_MINUS: u8 = 0x01;

pub const BOOLEAN_FALSE: u8 = 0x00;
pub const BOOLEAN_TRUE: u8 = 0x01;

/// Largest accepted byte length of a group order.
pub const MAX_GROUP_BYTE_LEN: usize = 128;

/// Bounds on the number of 64-bit limbs of the base field modulus.
///
/// Moduli shorter than `NUM_LIMBS_MIN` limbs are handled with
/// `NUM_LIMBS_MIN` limbs.
pub const NUM_LIMBS_MIN: usize = 4;
pub const NUM_LIMBS_MAX: usize = 16;

/// Bounds on the number of 64-bit limbs of a group order.
pub const NUM_GROUP_LIMBS_MIN: usize = 1;
pub const NUM_GROUP_LIMBS_MAX: usize = 16;
