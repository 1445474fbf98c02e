//! Strictness of the validators.

use arith::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// How validators treat inputs that are well formed but mathematically
/// invalid: a non-residue that is a residue, a point off its curve, or a
/// point outside the declared subgroup.
///
/// `Permissive` only exists so fuzzers can reach the arithmetic with such
/// inputs. Every other check stays in force under both policies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationPolicy {
    #[default]
    Strict,
    Permissive,
}

impl ValidationPolicy {
    #[inline]
    pub fn is_strict(&self) -> bool {
        matches!(self, ValidationPolicy::Strict)
    }

    /// Returns `err` when the check failed under `Strict`. Under
    /// `Permissive` the failure is logged and accepted.
    pub(crate) fn enforce(&self, passed: bool, err: impl FnOnce() -> Error) -> Result<()> {
        if passed {
            return Ok(());
        }

        let err = err();
        if self.is_strict() {
            return Err(err);
        }

        warn!(%err, "accepting invalid input under permissive policy");
        Ok(())
    }
}
