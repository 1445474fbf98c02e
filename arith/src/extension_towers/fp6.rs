use tracing::trace;

use super::common::{calc_frobenius_factor, FrobeniusPrecomputation};
use super::fp3::{Extension3, Fp3};
use super::fpm2::{FpM2, QuadraticTower};
use crate::errors::Result;
use crate::fp::Fp;
use crate::traits::FieldElement;

/// Degree 6 tower `Fp3[w] / (w^2 - u)`, so `w^6 = β`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extension2Over3<'a, const N: usize> {
    base: &'a Extension3<'a, N>,
    frobenius_coeffs_c1: [Fp<'a, N>; 6],
    frobenius_calculated: bool,
}

pub type Fp6<'a, const N: usize> = FpM2<'a, Extension2Over3<'a, N>>;

impl<'a, const N: usize> Extension2Over3<'a, N> {
    /// Table `[1, β^((q-1)/6), 0, β^((q^3-1)/6), 0, 0]`. Only the slots used
    /// by powers 1 and 3 are filled.
    pub fn new(base: &'a Extension3<'a, N>, needs_frobenius: bool) -> Result<Self> {
        let mut extension = Self::empty(base);

        if needs_frobenius {
            trace!(degree = 6, "computing frobenius coefficients");
            let field = base.field();
            let modulus = field.modulus().as_limbs();
            let non_residue = base.non_residue();
            let zero = Fp::zero(field);

            let f_0 = Fp::one(field);
            let f_1 = calc_frobenius_factor(non_residue, modulus, 1, 6, "Fp6_2")?;
            let f_3 = calc_frobenius_factor(non_residue, modulus, 3, 6, "Fp6_2")?;

            extension.frobenius_coeffs_c1 = [f_0, f_1, zero, f_3, zero, zero];
            extension.frobenius_calculated = true;
        }

        Ok(extension)
    }

    pub fn from_precomputation(
        base: &'a Extension3<'a, N>,
        precomputation: &FrobeniusPrecomputation<Fp<'a, N>, 6>,
        needs_frobenius: bool,
    ) -> Self {
        let mut extension = Self::empty(base);

        if needs_frobenius {
            let field = base.field();
            let zero = Fp::zero(field);
            let f_0 = Fp::one(field);
            // slot i holds β^((q^i - 1)/6), so slot 1 is f_1
            let f_1 = precomputation.elements[1];
            let f_3 = f_1.pow(&[3]);

            extension.frobenius_coeffs_c1 = [f_0, f_1, zero, f_3, zero, zero];
            extension.frobenius_calculated = true;
        }

        extension
    }

    fn empty(base: &'a Extension3<'a, N>) -> Self {
        Extension2Over3 {
            base,
            frobenius_coeffs_c1: [Fp::zero(base.field()); 6],
            frobenius_calculated: false,
        }
    }

    #[inline]
    pub fn base(&self) -> &'a Extension3<'a, N> {
        self.base
    }

    pub fn frobenius_coeffs_c1(&self) -> &[Fp<'a, N>; 6] {
        &self.frobenius_coeffs_c1
    }
}

impl<'a, const N: usize> QuadraticTower for Extension2Over3<'a, N> {
    type Base = Fp3<'a, N>;

    const DEGREE: usize = 6;
    const FROBENIUS_POWERS: [usize; 2] = [1, 3];

    fn base_zero(&self) -> Fp3<'a, N> {
        Fp3::zero(self.base)
    }

    fn base_one(&self) -> Fp3<'a, N> {
        Fp3::one(self.base)
    }

    // (c0 + c1 u + c2 u^2) u = β c2 + c0 u + c1 u^2
    fn mul_base_by_nonresidue(&self, el: &mut Fp3<'a, N>) {
        let mut c0 = el.c2;
        el.c2 = el.c1;
        el.c1 = el.c0;
        self.base.mul_by_nonresidue(&mut c0);
        el.c0 = c0;
    }

    fn frobenius_calculated(&self) -> bool {
        self.frobenius_calculated
    }

    fn mul_by_frobenius_coeff(&self, el: &mut Fp3<'a, N>, power: usize) {
        el.mul_by_fp(&self.frobenius_coeffs_c1[power % Self::DEGREE]);
    }
}
