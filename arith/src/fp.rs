use core::fmt::{self, Debug, Display, Formatter};

use crate::dyn_repr::DynBigInt;
use crate::errors::{Error, Result};
use crate::field::PrimeField;
use crate::repr::BigInt;
use crate::traits::{Exponentiable, FieldElement};

/// Element of a [`PrimeField`], stored in Montgomery form.
#[derive(Copy, Clone)]
pub struct Fp<'a, const N: usize> {
    repr: BigInt<N>,
    field: &'a PrimeField<N>,
}

impl<'a, const N: usize> Fp<'a, N> {
    pub fn zero(field: &'a PrimeField<N>) -> Self {
        Fp {
            repr: BigInt::ZERO,
            field,
        }
    }

    pub fn one(field: &'a PrimeField<N>) -> Self {
        Fp {
            repr: *field.mont_r(),
            field,
        }
    }

    /// Interprets a canonical value, rejecting anything not below the modulus.
    pub fn from_repr(repr: BigInt<N>, field: &'a PrimeField<N>) -> Result<Self> {
        if repr >= *field.modulus() {
            return Err(Error::input("Value is not a field element"));
        }
        Ok(Fp {
            repr: field.mont_mul(&repr, field.mont_r2()),
            field,
        })
    }

    pub fn from_u64(value: u64, field: &'a PrimeField<N>) -> Result<Self> {
        Self::from_repr(BigInt::from_u64(value), field)
    }

    /// Canonical value in `[0, q)`.
    pub fn into_repr(&self) -> BigInt<N> {
        self.field.mont_mul(&self.repr, &BigInt::one())
    }

    #[inline]
    pub fn field(&self) -> &'a PrimeField<N> {
        self.field
    }
}

impl<const N: usize> Exponentiable for Fp<'_, N> {
    #[inline]
    fn square(&mut self) {
        self.repr = self.field.mont_mul(&self.repr, &self.repr);
    }

    #[inline]
    fn mul_assign(&mut self, other: &Self) {
        self.repr = self.field.mont_mul(&self.repr, &other.repr);
    }
}

impl<const N: usize> FieldElement for Fp<'_, N> {
    fn zero_like(&self) -> Self {
        Fp::zero(self.field)
    }

    fn one_like(&self) -> Self {
        Fp::one(self.field)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.repr.is_zero()
    }

    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.field.add_mod(&mut self.repr, &other.repr);
    }

    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        self.field.sub_mod(&mut self.repr, &other.repr);
    }

    #[inline]
    fn double(&mut self) {
        let copy = self.repr;
        self.field.add_mod(&mut self.repr, &copy);
    }

    #[inline]
    fn negate(&mut self) {
        self.field.neg_mod(&mut self.repr);
    }

    // Fermat: a^(q - 2)
    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let mut exp = *self.field.modulus();
        exp.sub_noborrow(&BigInt::from_u64(2));
        Some(self.pow(exp.as_limbs()))
    }

    #[inline]
    fn frobenius_map(&mut self, _power: usize) {}

    fn field_size(&self) -> DynBigInt {
        self.field.size()
    }
}

impl<const N: usize> PartialEq for Fp<'_, N> {
    fn eq(&self, other: &Self) -> bool {
        self.repr == other.repr
    }
}

impl<const N: usize> Eq for Fp<'_, N> {}

impl<const N: usize> Display for Fp<'_, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.into_repr())
    }
}

impl<const N: usize> Debug for Fp<'_, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fp({})", self)
    }
}
