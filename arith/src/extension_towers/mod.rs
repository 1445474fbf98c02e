//! Quadratic and cubic extensions of a prime field, and the degree 4 and 6
//! towers built on top of them.
//!
//! Every extension is defined by a non-residue `β` of the field below it and
//! carries a table of Frobenius coefficients `β^((q^i - 1) / D)`, filled in
//! only when the extension is built with `needs_frobenius`.

mod common;
pub mod fp2;
pub mod fp3;
pub mod fp4;
pub mod fp6;
pub mod fpm2;

pub use common::{calc_frobenius_factor, calc_frobenius_power, FrobeniusPrecomputation};
pub use fp2::{Extension2, Fp2};
pub use fp3::{Extension3, Fp3};
pub use fp4::{Extension2Over2, Fp4};
pub use fp6::{Extension2Over3, Fp6};
pub use fpm2::{FpM2, QuadraticTower};
