//! Error kinds shared by the arithmetic core and the decoder.

use thiserror::Error;

/// Errors that abort a decode or compute call.
///
/// None of them is recoverable locally: the caller is expected to propagate
/// the error and discard any partial state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed or insufficient input.
    ///
    /// This covers an exhausted byte stream, a non-canonical leading zero
    /// byte, an even or too small modulus, a zero group order or pair count,
    /// a point that fails the on-curve or subgroup check, and an overflowing
    /// scalar subtraction.
    #[error("invalid input: {0}")]
    Input(String),

    /// Well-formed but unsupported parameters.
    ///
    /// Raised for unknown tags, a non-residue that is actually a residue, a
    /// modulus that breaks the Frobenius divisibility precondition, and curve
    /// shapes a curve family does not support.
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),

    /// A value that must be nonzero by construction is zero.
    #[error("unexpected zero: {0}")]
    UnexpectedZero(String),
}

impl Error {
    pub fn input<M: Into<String>>(msg: M) -> Self {
        Error::Input(msg.into())
    }

    pub fn unknown_parameter<M: Into<String>>(msg: M) -> Self {
        Error::UnknownParameter(msg.into())
    }

    pub fn unexpected_zero<M: Into<String>>(msg: M) -> Self {
        Error::UnexpectedZero(msg.into())
    }
}

pub type Result<T> = core::result::Result<T, Error>;
