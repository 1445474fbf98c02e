use core::fmt::{self, Debug, Formatter};

use tracing::trace;

use super::common::calc_frobenius_factor;
use crate::dyn_repr::DynBigInt;
use crate::errors::Result;
use crate::field::PrimeField;
use crate::fp::Fp;
use crate::traits::{Exponentiable, FieldElement};

/// Quadratic extension `Fp[u] / (u^2 - β)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extension2<'a, const N: usize> {
    field: &'a PrimeField<N>,
    non_residue: Fp<'a, N>,
    frobenius_coeffs_c1: [Fp<'a, N>; 2],
    frobenius_calculated: bool,
}

impl<'a, const N: usize> Extension2<'a, N> {
    /// Builds the extension over the field of `non_residue`. Frobenius
    /// coefficients are only computed when `needs_frobenius` is set.
    pub fn new(non_residue: Fp<'a, N>, needs_frobenius: bool) -> Result<Self> {
        let field = non_residue.field();
        let zero = Fp::zero(field);
        let mut extension = Extension2 {
            field,
            non_residue,
            frobenius_coeffs_c1: [zero; 2],
            frobenius_calculated: false,
        };

        if needs_frobenius {
            trace!(degree = 2, "computing frobenius coefficients");
            let f_0 = Fp::one(field);
            let f_1 = calc_frobenius_factor(&non_residue, field.modulus().as_limbs(), 1, 2, "Fp2")?;
            extension.frobenius_coeffs_c1 = [f_0, f_1];
            extension.frobenius_calculated = true;
        }

        Ok(extension)
    }

    #[inline]
    pub fn field(&self) -> &'a PrimeField<N> {
        self.field
    }

    #[inline]
    pub fn non_residue(&self) -> &Fp<'a, N> {
        &self.non_residue
    }

    pub fn frobenius_coeffs_c1(&self) -> &[Fp<'a, N>; 2] {
        &self.frobenius_coeffs_c1
    }

    pub fn frobenius_calculated(&self) -> bool {
        self.frobenius_calculated
    }

    /// Multiplies a base field element by `β`.
    #[inline]
    pub fn mul_by_nonresidue(&self, el: &mut Fp<'a, N>) {
        el.mul_assign(&self.non_residue);
    }
}

/// `c0 + c1 * u`
#[derive(Copy, Clone)]
pub struct Fp2<'a, const N: usize> {
    pub c0: Fp<'a, N>,
    pub c1: Fp<'a, N>,
    extension: &'a Extension2<'a, N>,
}

impl<'a, const N: usize> Fp2<'a, N> {
    pub fn new(c0: Fp<'a, N>, c1: Fp<'a, N>, extension: &'a Extension2<'a, N>) -> Self {
        Fp2 { c0, c1, extension }
    }

    pub fn zero(extension: &'a Extension2<'a, N>) -> Self {
        let zero = Fp::zero(extension.field);
        Fp2::new(zero, zero, extension)
    }

    pub fn one(extension: &'a Extension2<'a, N>) -> Self {
        Fp2::new(Fp::one(extension.field), Fp::zero(extension.field), extension)
    }

    #[inline]
    pub fn extension(&self) -> &'a Extension2<'a, N> {
        self.extension
    }

    pub fn conjugate(&mut self) {
        self.c1.negate();
    }

    pub fn mul_by_fp(&mut self, el: &Fp<'a, N>) {
        self.c0.mul_assign(el);
        self.c1.mul_assign(el);
    }

    /// `c0^2 - β c1^2`
    pub fn norm(&self) -> Fp<'a, N> {
        let mut t0 = self.c0;
        t0.square();
        let mut t1 = self.c1;
        t1.square();
        self.extension.mul_by_nonresidue(&mut t1);
        t0.sub_assign(&t1);
        t0
    }
}

impl<const N: usize> Exponentiable for Fp2<'_, N> {
    fn square(&mut self) {
        let mut v0 = self.c0;
        v0.sub_assign(&self.c1);
        let mut v3 = self.c1;
        self.extension.mul_by_nonresidue(&mut v3);
        v3.negate();
        v3.add_assign(&self.c0);
        let mut v2 = self.c0;
        v2.mul_assign(&self.c1);
        v0.mul_assign(&v3);
        v0.add_assign(&v2);

        self.c1 = v2;
        self.c1.double();
        self.c0 = v0;
        self.extension.mul_by_nonresidue(&mut v2);
        self.c0.add_assign(&v2);
    }

    fn mul_assign(&mut self, other: &Self) {
        // Karatsuba
        let mut v0 = self.c0;
        v0.mul_assign(&other.c0);
        let mut v1 = self.c1;
        v1.mul_assign(&other.c1);

        self.c1.add_assign(&self.c0);
        let mut t = other.c0;
        t.add_assign(&other.c1);
        self.c1.mul_assign(&t);
        self.c1.sub_assign(&v0);
        self.c1.sub_assign(&v1);

        self.c0 = v0;
        self.extension.mul_by_nonresidue(&mut v1);
        self.c0.add_assign(&v1);
    }
}

impl<const N: usize> FieldElement for Fp2<'_, N> {
    fn zero_like(&self) -> Self {
        Fp2::zero(self.extension)
    }

    fn one_like(&self) -> Self {
        Fp2::one(self.extension)
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    fn add_assign(&mut self, other: &Self) {
        self.c0.add_assign(&other.c0);
        self.c1.add_assign(&other.c1);
    }

    fn sub_assign(&mut self, other: &Self) {
        self.c0.sub_assign(&other.c0);
        self.c1.sub_assign(&other.c1);
    }

    fn double(&mut self) {
        self.c0.double();
        self.c1.double();
    }

    fn negate(&mut self) {
        self.c0.negate();
        self.c1.negate();
    }

    fn inverse(&self) -> Option<Self> {
        let t = self.norm().inverse()?;
        let mut c0 = self.c0;
        c0.mul_assign(&t);
        let mut c1 = self.c1;
        c1.mul_assign(&t);
        c1.negate();
        Some(Fp2::new(c0, c1, self.extension))
    }

    fn frobenius_map(&mut self, power: usize) {
        assert!(self.extension.frobenius_calculated, "Fp2 frobenius coefficients are not calculated");
        self.c1.mul_assign(&self.extension.frobenius_coeffs_c1[power % 2]);
    }

    fn field_size(&self) -> DynBigInt {
        let q = self.extension.field.size();
        q.mul(q.as_limbs())
    }
}

impl<const N: usize> PartialEq for Fp2<'_, N> {
    fn eq(&self, other: &Self) -> bool {
        self.c0 == other.c0 && self.c1 == other.c1
    }
}

impl<const N: usize> Eq for Fp2<'_, N> {}

impl<const N: usize> Debug for Fp2<'_, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fp2({} + {}*u)", self.c0, self.c1)
    }
}
