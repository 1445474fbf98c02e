//! Constructors for decoding failures.
//!
//! Every rejection goes through here so that it is logged once at `debug`
//! level before it is returned.

use arith::Error;
use tracing::debug;

pub(crate) fn input_err<M: Into<String>>(msg: M) -> Error {
    let err = Error::input(msg);
    debug!(%err, "rejecting input");
    err
}

pub(crate) fn unknown_parameter_err<M: Into<String>>(msg: M) -> Error {
    let err = Error::unknown_parameter(msg);
    debug!(%err, "rejecting input");
    err
}

pub(crate) fn unexpected_zero_err<M: Into<String>>(msg: M) -> Error {
    let err = Error::unexpected_zero(msg);
    debug!(%err, "rejecting input");
    err
}
