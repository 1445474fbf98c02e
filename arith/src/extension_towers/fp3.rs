use core::fmt::{self, Debug, Formatter};

use tracing::trace;

use super::common::calc_frobenius_factor;
use crate::dyn_repr::DynBigInt;
use crate::errors::Result;
use crate::field::PrimeField;
use crate::fp::Fp;
use crate::traits::{Exponentiable, FieldElement};

/// Cubic extension `Fp[u] / (u^3 - β)`. Frobenius coefficients exist only
/// for `q = 1 mod 3`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extension3<'a, const N: usize> {
    field: &'a PrimeField<N>,
    non_residue: Fp<'a, N>,
    frobenius_coeffs_c1: [Fp<'a, N>; 3],
    frobenius_coeffs_c2: [Fp<'a, N>; 3],
    frobenius_calculated: bool,
}

impl<'a, const N: usize> Extension3<'a, N> {
    pub fn new(non_residue: Fp<'a, N>, needs_frobenius: bool) -> Result<Self> {
        let field = non_residue.field();
        let zero = Fp::zero(field);
        let mut extension = Extension3 {
            field,
            non_residue,
            frobenius_coeffs_c1: [zero; 3],
            frobenius_coeffs_c2: [zero; 3],
            frobenius_calculated: false,
        };

        if needs_frobenius {
            trace!(degree = 3, "computing frobenius coefficients");
            let modulus = field.modulus().as_limbs();
            let f_0 = Fp::one(field);
            let f_1 = calc_frobenius_factor(&non_residue, modulus, 1, 3, "Fp3")?;
            let f_2 = calc_frobenius_factor(&non_residue, modulus, 2, 3, "Fp3")?;

            let c1 = [f_0, f_1, f_2];
            let mut c2 = c1;
            for f in c2.iter_mut() {
                f.square();
            }

            extension.frobenius_coeffs_c1 = c1;
            extension.frobenius_coeffs_c2 = c2;
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

    pub fn frobenius_coeffs_c1(&self) -> &[Fp<'a, N>; 3] {
        &self.frobenius_coeffs_c1
    }

    pub fn frobenius_coeffs_c2(&self) -> &[Fp<'a, N>; 3] {
        &self.frobenius_coeffs_c2
    }

    pub fn frobenius_calculated(&self) -> bool {
        self.frobenius_calculated
    }

    #[inline]
    pub fn mul_by_nonresidue(&self, el: &mut Fp<'a, N>) {
        el.mul_assign(&self.non_residue);
    }
}

/// `c0 + c1 * u + c2 * u^2`
#[derive(Copy, Clone)]
pub struct Fp3<'a, const N: usize> {
    pub c0: Fp<'a, N>,
    pub c1: Fp<'a, N>,
    pub c2: Fp<'a, N>,
    extension: &'a Extension3<'a, N>,
}

impl<'a, const N: usize> Fp3<'a, N> {
    pub fn new(c0: Fp<'a, N>, c1: Fp<'a, N>, c2: Fp<'a, N>, extension: &'a Extension3<'a, N>) -> Self {
        Fp3 { c0, c1, c2, extension }
    }

    pub fn zero(extension: &'a Extension3<'a, N>) -> Self {
        let zero = Fp::zero(extension.field);
        Fp3::new(zero, zero, zero, extension)
    }

    pub fn one(extension: &'a Extension3<'a, N>) -> Self {
        let zero = Fp::zero(extension.field);
        Fp3::new(Fp::one(extension.field), zero, zero, extension)
    }

    #[inline]
    pub fn extension(&self) -> &'a Extension3<'a, N> {
        self.extension
    }

    pub fn mul_by_fp(&mut self, el: &Fp<'a, N>) {
        self.c0.mul_assign(el);
        self.c1.mul_assign(el);
        self.c2.mul_assign(el);
    }
}

impl<const N: usize> Exponentiable for Fp3<'_, N> {
    // Chung-Hasan SQR2
    fn square(&mut self) {
        let mut s0 = self.c0;
        s0.square();
        let mut s1 = self.c0;
        s1.mul_assign(&self.c1);
        s1.double();
        let mut s2 = self.c0;
        s2.sub_assign(&self.c1);
        s2.add_assign(&self.c2);
        s2.square();
        let mut s3 = self.c1;
        s3.mul_assign(&self.c2);
        s3.double();
        let mut s4 = self.c2;
        s4.square();

        self.c0 = s3;
        self.extension.mul_by_nonresidue(&mut self.c0);
        self.c0.add_assign(&s0);

        self.c1 = s4;
        self.extension.mul_by_nonresidue(&mut self.c1);
        self.c1.add_assign(&s1);

        self.c2 = s1;
        self.c2.add_assign(&s2);
        self.c2.add_assign(&s3);
        self.c2.sub_assign(&s0);
        self.c2.sub_assign(&s4);
    }

    fn mul_assign(&mut self, other: &Self) {
        let (a, b, c) = (self.c0, self.c1, self.c2);
        let (d, e, f) = (other.c0, other.c1, other.c2);

        let mut ad = a;
        ad.mul_assign(&d);
        let mut be = b;
        be.mul_assign(&e);
        let mut cf = c;
        cf.mul_assign(&f);

        // x = bf + ce
        let mut x = b;
        x.add_assign(&c);
        let mut t = e;
        t.add_assign(&f);
        x.mul_assign(&t);
        x.sub_assign(&be);
        x.sub_assign(&cf);

        // y = ae + bd
        let mut y = a;
        y.add_assign(&b);
        let mut t = d;
        t.add_assign(&e);
        y.mul_assign(&t);
        y.sub_assign(&ad);
        y.sub_assign(&be);

        // z = af + be + cd
        let mut z = a;
        z.add_assign(&c);
        let mut t = d;
        t.add_assign(&f);
        z.mul_assign(&t);
        z.sub_assign(&ad);
        z.add_assign(&be);
        z.sub_assign(&cf);

        self.extension.mul_by_nonresidue(&mut x);
        self.c0 = ad;
        self.c0.add_assign(&x);

        self.extension.mul_by_nonresidue(&mut cf);
        self.c1 = y;
        self.c1.add_assign(&cf);

        self.c2 = z;
    }
}

impl<const N: usize> FieldElement for Fp3<'_, N> {
    fn zero_like(&self) -> Self {
        Fp3::zero(self.extension)
    }

    fn one_like(&self) -> Self {
        Fp3::one(self.extension)
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    fn add_assign(&mut self, other: &Self) {
        self.c0.add_assign(&other.c0);
        self.c1.add_assign(&other.c1);
        self.c2.add_assign(&other.c2);
    }

    fn sub_assign(&mut self, other: &Self) {
        self.c0.sub_assign(&other.c0);
        self.c1.sub_assign(&other.c1);
        self.c2.sub_assign(&other.c2);
    }

    fn double(&mut self) {
        self.c0.double();
        self.c1.double();
        self.c2.double();
    }

    fn negate(&mut self) {
        self.c0.negate();
        self.c1.negate();
        self.c2.negate();
    }

    fn inverse(&self) -> Option<Self> {
        let mut t0 = self.c0;
        t0.square();
        let mut t1 = self.c1;
        t1.square();
        let mut t2 = self.c2;
        t2.square();
        let mut t3 = self.c0;
        t3.mul_assign(&self.c1);
        let mut t4 = self.c0;
        t4.mul_assign(&self.c2);
        let mut t5 = self.c1;
        t5.mul_assign(&self.c2);

        // s0 = t0 - β t5
        self.extension.mul_by_nonresidue(&mut t5);
        let mut s0 = t0;
        s0.sub_assign(&t5);

        // s1 = β t2 - t3
        let mut s1 = t2;
        self.extension.mul_by_nonresidue(&mut s1);
        s1.sub_assign(&t3);

        // s2 = t1 - t4
        let mut s2 = t1;
        s2.sub_assign(&t4);

        let mut a1 = self.c0;
        a1.mul_assign(&s0);
        let mut a2 = self.c2;
        a2.mul_assign(&s1);
        self.extension.mul_by_nonresidue(&mut a2);
        let mut a3 = self.c1;
        a3.mul_assign(&s2);
        self.extension.mul_by_nonresidue(&mut a3);
        a1.add_assign(&a2);
        a1.add_assign(&a3);

        let t6 = a1.inverse()?;
        s0.mul_assign(&t6);
        s1.mul_assign(&t6);
        s2.mul_assign(&t6);

        Some(Fp3::new(s0, s1, s2, self.extension))
    }

    fn frobenius_map(&mut self, power: usize) {
        assert!(self.extension.frobenius_calculated, "Fp3 frobenius coefficients are not calculated");
        self.c1.mul_assign(&self.extension.frobenius_coeffs_c1[power % 3]);
        self.c2.mul_assign(&self.extension.frobenius_coeffs_c2[power % 3]);
    }

    fn field_size(&self) -> DynBigInt {
        let q = self.extension.field.modulus().as_limbs();
        super::common::modulus_power(q, 3)
    }
}

impl<const N: usize> PartialEq for Fp3<'_, N> {
    fn eq(&self, other: &Self) -> bool {
        self.c0 == other.c0 && self.c1 == other.c1 && self.c2 == other.c2
    }
}

impl<const N: usize> Eq for Fp3<'_, N> {}

impl<const N: usize> Debug for Fp3<'_, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fp3({} + {}*u + {}*u^2)", self.c0, self.c1, self.c2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::random::RandomElement;
    use crate::repr::BigInt;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const Q1: u64 = 0xfffffffffffffee9;

    fn naive_mul<'a>(a: &Fp3<'a, 1>, b: &Fp3<'a, 1>) -> Fp3<'a, 1> {
        let beta = *a.extension().non_residue();
        let x = [a.c0, a.c1, a.c2];
        let y = [b.c0, b.c1, b.c2];
        let mut out = [Fp::zero(beta.field()); 3];
        for i in 0..3 {
            for j in 0..3 {
                let mut t = x[i];
                t.mul_assign(&y[j]);
                if i + j >= 3 {
                    t.mul_assign(&beta);
                }
                out[(i + j) % 3].add_assign(&t);
            }
        }
        Fp3::new(out[0], out[1], out[2], a.extension())
    }

    #[test]
    fn test_mul_and_square_match_schoolbook() {
        let field = PrimeField::new(BigInt::<1>::from_u64(Q1)).unwrap();
        let ext = Extension3::new(Fp::from_u64(5, &field).unwrap(), true).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..20 {
            let a = Fp3::random(&ext, &mut rng);
            let b = Fp3::random(&ext, &mut rng);

            let mut ab = a;
            ab.mul_assign(&b);
            assert_eq!(ab, naive_mul(&a, &b));

            let mut sq = a;
            sq.square();
            assert_eq!(sq, naive_mul(&a, &a));

            let mut check = a.inverse().unwrap();
            check.mul_assign(&a);
            assert!(check.is_one());
        }
        assert!(Fp3::zero(&ext).inverse().is_none());
    }

    #[test]
    fn test_frobenius_is_q_power() {
        let field = PrimeField::new(BigInt::<1>::from_u64(Q1)).unwrap();
        let ext = Extension3::new(Fp::from_u64(5, &field).unwrap(), true).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let a = Fp3::random(&ext, &mut rng);

        let mut frob = a;
        frob.frobenius_map(1);
        assert_eq!(frob, a.pow(&[Q1]));

        let mut frob2 = a;
        frob2.frobenius_map(2);
        let q2 = DynBigInt::from_u64(Q1).mul(&[Q1]);
        assert_eq!(frob2, a.pow(q2.as_limbs()));

        let mut frob3 = a;
        frob3.frobenius_map(3);
        assert_eq!(frob3, a);
    }

    #[test]
    fn test_modulus_must_be_one_mod_three() {
        // 11 = 2 mod 3
        let field = PrimeField::new(BigInt::<1>::from_u64(11)).unwrap();
        let beta = Fp::from_u64(2, &field).unwrap();
        assert_eq!(
            Extension3::new(beta, true),
            Err(Error::unknown_parameter("Failed to calculate Frobenius coeffs for Fp3"))
        );
        assert!(Extension3::new(beta, false).is_ok());
    }

    #[test]
    fn test_cube_non_residue_detection() {
        let field = PrimeField::new(BigInt::<1>::from_u64(Q1)).unwrap();
        let ext = Extension3::new(Fp::from_u64(5, &field).unwrap(), false).unwrap();
        let one = Fp3::one(&ext);
        assert_eq!(one.field_size(), DynBigInt::from_u64(Q1).mul(&[Q1]).mul(&[Q1]));

        let u = Fp3::new(Fp::zero(&field), Fp::one(&field), Fp::zero(&field), &ext);
        assert!(u.is_non_nth_root(3));
        let mut u3 = u;
        u3.square();
        u3.mul_assign(&u);
        assert_eq!(u3, Fp3::new(*ext.non_residue(), Fp::zero(&field), Fp::zero(&field), &ext));
    }
}
