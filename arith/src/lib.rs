//! Arithmetic core for pairing-friendly curves whose parameters arrive at
//! runtime.
//!
//! This crate provides fixed and variable width big integers, prime fields
//! with a runtime modulus, the quadratic and cubic extension towers used by
//! pairings together with their Frobenius coefficients, windowed and NAF
//! exponentiation, and short Weierstrass curve points. Every element keeps a
//! reference to the field it belongs to.

mod dyn_repr;
mod errors;
mod exp;
pub mod extension_towers;
mod field;
mod fp;
mod naf;
mod random;
mod repr;
mod traits;
mod weierstrass;

pub use dyn_repr::DynBigInt;
pub use errors::{Error, Result};
pub use exp::{calculate_window_table, WindowExpBase};
pub use extension_towers::{
    Extension2, Extension2Over2, Extension2Over3, Extension3, Fp2, Fp3, Fp4, Fp6, FpM2,
    FrobeniusPrecomputation, QuadraticTower,
};
pub use field::PrimeField;
pub use fp::Fp;
pub use naf::{into_ternary_wnaf, into_wnaf};
pub use random::RandomElement;
pub use repr::{adc, mac_with_carry, mul_with_carry, sbb, BigInt, BitIterator};
pub use traits::{Exponentiable, FieldElement};
pub use weierstrass::{CurvePoint, WeierstrassCurve};
