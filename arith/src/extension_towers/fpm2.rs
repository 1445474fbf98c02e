//! Generic quadratic extension `B[w] / (w^2 - u)` over an extension `B`
//! whose generator is `u`.
//!
//! Multiplying a `B` element by the non-residue `u` only rotates its
//! coordinates and scales one of them by the base non-residue, so the tower
//! supplies that operation together with its Frobenius coefficients.

use core::fmt::{self, Debug, Formatter};

use crate::dyn_repr::DynBigInt;
use crate::naf::into_ternary_wnaf;
use crate::traits::{Exponentiable, FieldElement};

pub trait QuadraticTower {
    type Base: FieldElement;

    /// Absolute degree of the tower over the prime field.
    const DEGREE: usize;

    /// Frobenius powers the coefficient table covers.
    const FROBENIUS_POWERS: [usize; 2];

    fn base_zero(&self) -> Self::Base;
    fn base_one(&self) -> Self::Base;

    /// Multiplies `el` by `u`.
    fn mul_base_by_nonresidue(&self, el: &mut Self::Base);

    fn frobenius_calculated(&self) -> bool;

    /// Scales `el` by the Frobenius coefficient of slot `power % DEGREE`.
    fn mul_by_frobenius_coeff(&self, el: &mut Self::Base, power: usize);
}

/// `c0 + c1 * w`
pub struct FpM2<'a, T: QuadraticTower> {
    pub c0: T::Base,
    pub c1: T::Base,
    tower: &'a T,
}

impl<'a, T: QuadraticTower> FpM2<'a, T> {
    pub fn new(c0: T::Base, c1: T::Base, tower: &'a T) -> Self {
        FpM2 { c0, c1, tower }
    }

    pub fn zero(tower: &'a T) -> Self {
        FpM2::new(tower.base_zero(), tower.base_zero(), tower)
    }

    pub fn one(tower: &'a T) -> Self {
        FpM2::new(tower.base_one(), tower.base_zero(), tower)
    }

    #[inline]
    pub fn tower(&self) -> &'a T {
        self.tower
    }

    /// `c0 - c1 * w`. For elements of norm one this is the inverse.
    pub fn conjugate(&mut self) {
        self.c1.negate();
    }

    /// Multiplies a base element by `u`.
    pub fn mul_by_nonresidue(&self, el: &mut T::Base) {
        self.tower.mul_base_by_nonresidue(el);
    }

    /// Exponentiation for elements of the cyclotomic subgroup, using the
    /// conjugate in place of the inverse for negative NAF digits.
    pub fn cyclotomic_exp(&self, exp: &[u64]) -> Self {
        let mut res = self.one_like();
        let mut self_inverse = self.clone();
        self_inverse.conjugate();

        let mut found_nonzero = false;
        for &digit in into_ternary_wnaf(exp).iter().rev() {
            if found_nonzero {
                res.square();
            }

            if digit != 0 {
                found_nonzero = true;
                if digit > 0 {
                    res.mul_assign(self);
                } else {
                    res.mul_assign(&self_inverse);
                }
            }
        }

        res
    }
}

impl<T: QuadraticTower> Clone for FpM2<'_, T> {
    fn clone(&self) -> Self {
        FpM2 {
            c0: self.c0.clone(),
            c1: self.c1.clone(),
            tower: self.tower,
        }
    }
}

impl<T: QuadraticTower> Exponentiable for FpM2<'_, T> {
    fn square(&mut self) {
        // complex squaring
        let mut v0 = self.c0.clone();
        v0.sub_assign(&self.c1);
        let mut v3 = self.c1.clone();
        self.tower.mul_base_by_nonresidue(&mut v3);
        v3.negate();
        v3.add_assign(&self.c0);
        let mut v2 = self.c0.clone();
        v2.mul_assign(&self.c1);
        v0.mul_assign(&v3);
        v0.add_assign(&v2);

        self.c1 = v2.clone();
        self.c1.double();
        self.tower.mul_base_by_nonresidue(&mut v2);
        v0.add_assign(&v2);
        self.c0 = v0;
    }

    fn mul_assign(&mut self, other: &Self) {
        let mut v0 = self.c0.clone();
        v0.mul_assign(&other.c0);
        let mut v1 = self.c1.clone();
        v1.mul_assign(&other.c1);

        self.c1.add_assign(&self.c0);
        let mut t = other.c0.clone();
        t.add_assign(&other.c1);
        self.c1.mul_assign(&t);
        self.c1.sub_assign(&v0);
        self.c1.sub_assign(&v1);

        self.tower.mul_base_by_nonresidue(&mut v1);
        v0.add_assign(&v1);
        self.c0 = v0;
    }
}

impl<T: QuadraticTower> FieldElement for FpM2<'_, T> {
    fn zero_like(&self) -> Self {
        FpM2::new(self.c0.zero_like(), self.c0.zero_like(), self.tower)
    }

    fn one_like(&self) -> Self {
        FpM2::new(self.c0.one_like(), self.c0.zero_like(), self.tower)
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

    // (c0 + c1 w)^-1 = (c0 - c1 w) / (c0^2 - u c1^2)
    fn inverse(&self) -> Option<Self> {
        let mut t0 = self.c0.clone();
        t0.square();
        let mut t1 = self.c1.clone();
        t1.square();
        self.tower.mul_base_by_nonresidue(&mut t1);
        t0.sub_assign(&t1);
        let t = t0.inverse()?;

        let mut c0 = self.c0.clone();
        c0.mul_assign(&t);
        let mut c1 = self.c1.clone();
        c1.mul_assign(&t);
        c1.negate();

        Some(FpM2::new(c0, c1, self.tower))
    }

    fn frobenius_map(&mut self, power: usize) {
        assert!(self.tower.frobenius_calculated(), "tower frobenius coefficients are not calculated");
        if !T::FROBENIUS_POWERS.contains(&power) {
            unreachable!("can not reach power {}", power);
        }
        self.c0.frobenius_map(power);
        self.c1.frobenius_map(power);
        self.tower.mul_by_frobenius_coeff(&mut self.c1, power);
    }

    fn field_size(&self) -> DynBigInt {
        let base = self.c0.field_size();
        base.mul(base.as_limbs())
    }
}

impl<T: QuadraticTower> PartialEq for FpM2<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.c0 == other.c0 && self.c1 == other.c1
    }
}

impl<T: QuadraticTower> Debug for FpM2<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FpM2({:?} + {:?}*w)", self.c0, self.c1)
    }
}
