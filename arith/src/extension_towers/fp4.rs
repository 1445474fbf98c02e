use tracing::trace;

use super::common::{calc_frobenius_factor, FrobeniusPrecomputation};
use super::fp2::{Extension2, Fp2};
use super::fpm2::{FpM2, QuadraticTower};
use crate::errors::Result;
use crate::fp::Fp;
use crate::traits::Exponentiable;

/// Degree 4 tower `Fp2[w] / (w^2 - u)`, so `w^4 = β`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extension2Over2<'a, const N: usize> {
    base: &'a Extension2<'a, N>,
    frobenius_coeffs_c1: [Fp<'a, N>; 4],
    frobenius_calculated: bool,
}

pub type Fp4<'a, const N: usize> = FpM2<'a, Extension2Over2<'a, N>>;

impl<'a, const N: usize> Extension2Over2<'a, N> {
    /// Table `[1, β^((q-1)/4), β^((q^2-1)/4), 0]`, computed directly.
    pub fn new(base: &'a Extension2<'a, N>, needs_frobenius: bool) -> Result<Self> {
        let mut extension = Self::empty(base);

        if needs_frobenius {
            trace!(degree = 4, "computing frobenius coefficients");
            let field = base.field();
            let modulus = field.modulus().as_limbs();
            let non_residue = base.non_residue();

            let f_0 = Fp::one(field);
            let f_1 = calc_frobenius_factor(non_residue, modulus, 1, 4, "Fp4")?;
            let f_2 = calc_frobenius_factor(non_residue, modulus, 2, 4, "Fp4")?;
            let f_3 = Fp::zero(field);

            extension.frobenius_coeffs_c1 = [f_0, f_1, f_2, f_3];
            extension.frobenius_calculated = true;
        }

        Ok(extension)
    }

    /// Same table as [`Extension2Over2::new`], derived from a shared
    /// precomputation for the divisor 4.
    pub fn from_precomputation(
        base: &'a Extension2<'a, N>,
        precomputation: &FrobeniusPrecomputation<Fp<'a, N>, 4>,
        needs_frobenius: bool,
    ) -> Self {
        let mut extension = Self::empty(base);

        if needs_frobenius {
            let field = base.field();
            let f_0 = Fp::one(field);
            // slot i holds β^((q^i - 1)/4), so slot 1 is f_1
            let f_1 = precomputation.elements[1];
            let mut f_2 = f_1;
            f_2.square();
            let f_3 = Fp::zero(field);

            extension.frobenius_coeffs_c1 = [f_0, f_1, f_2, f_3];
            extension.frobenius_calculated = true;
        }

        extension
    }

    fn empty(base: &'a Extension2<'a, N>) -> Self {
        Extension2Over2 {
            base,
            frobenius_coeffs_c1: [Fp::zero(base.field()); 4],
            frobenius_calculated: false,
        }
    }

    #[inline]
    pub fn base(&self) -> &'a Extension2<'a, N> {
        self.base
    }

    pub fn frobenius_coeffs_c1(&self) -> &[Fp<'a, N>; 4] {
        &self.frobenius_coeffs_c1
    }
}

impl<'a, const N: usize> QuadraticTower for Extension2Over2<'a, N> {
    type Base = Fp2<'a, N>;

    const DEGREE: usize = 4;
    const FROBENIUS_POWERS: [usize; 2] = [1, 2];

    fn base_zero(&self) -> Fp2<'a, N> {
        Fp2::zero(self.base)
    }

    fn base_one(&self) -> Fp2<'a, N> {
        Fp2::one(self.base)
    }

    // (c0 + c1 u) u = β c1 + c0 u
    fn mul_base_by_nonresidue(&self, el: &mut Fp2<'a, N>) {
        let mut e0 = el.c1;
        el.c1 = el.c0;
        self.base.mul_by_nonresidue(&mut e0);
        el.c0 = e0;
    }

    fn frobenius_calculated(&self) -> bool {
        self.frobenius_calculated
    }

    fn mul_by_frobenius_coeff(&self, el: &mut Fp2<'a, N>, power: usize) {
        el.mul_by_fp(&self.frobenius_coeffs_c1[power % Self::DEGREE]);
    }
}
