//! Prime field with a modulus chosen at runtime.
//!
//! Elements live in Montgomery form with `R = 2^(64 * N)`. The constants are
//! derived once when the field is built and shared by reference with every
//! element and extension built on top of it.

use crate::dyn_repr::DynBigInt;
use crate::errors::{Error, Result};
use crate::repr::{adc, mac_with_carry, BigInt};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField<const N: usize> {
    modulus: BigInt<N>,
    /// `R mod q`, the Montgomery form of one
    mont_r: BigInt<N>,
    /// `R^2 mod q`, used to enter Montgomery form
    mont_r2: BigInt<N>,
    /// `-q^{-1} mod 2^64`
    mont_inv: u64,
}

impl<const N: usize> PrimeField<N> {
    /// Builds the field, rejecting a modulus that is zero, even or below 3.
    pub fn new(modulus: BigInt<N>) -> Result<Self> {
        if modulus.is_zero() {
            return Err(Error::unexpected_zero("Modulus can not be zero"));
        }
        if modulus.is_even() {
            return Err(Error::input("Modulus is even"));
        }
        if modulus < BigInt::from_u64(3) {
            return Err(Error::input("Modulus is less than 3"));
        }

        let mut mont_r = BigInt::one();
        for _ in 0..64 * N {
            double_mod(&mut mont_r, &modulus);
        }
        let mut mont_r2 = mont_r;
        for _ in 0..64 * N {
            double_mod(&mut mont_r2, &modulus);
        }

        let mut inv = 1u64;
        for _ in 0..63 {
            inv = inv.wrapping_mul(inv);
            inv = inv.wrapping_mul(modulus.0[0]);
        }

        Ok(PrimeField {
            modulus,
            mont_r,
            mont_r2,
            mont_inv: inv.wrapping_neg(),
        })
    }

    #[inline]
    pub fn modulus(&self) -> &BigInt<N> {
        &self.modulus
    }

    /// Number of elements of the field.
    pub fn size(&self) -> DynBigInt {
        DynBigInt::from_fixed(&self.modulus)
    }

    #[inline]
    pub(crate) fn mont_r(&self) -> &BigInt<N> {
        &self.mont_r
    }

    #[inline]
    pub(crate) fn mont_r2(&self) -> &BigInt<N> {
        &self.mont_r2
    }

    /// Montgomery product `a * b * R^{-1} mod q` of two reduced values.
    pub(crate) fn mont_mul(&self, a: &BigInt<N>, b: &BigInt<N>) -> BigInt<N> {
        let q = &self.modulus.0;
        let mut t = [0u64; N];
        let mut t_hi = 0u64;

        for &b_i in b.0.iter() {
            let mut carry = 0;
            for j in 0..N {
                t[j] = mac_with_carry(t[j], a.0[j], b_i, &mut carry);
            }
            let mut overflow = 0;
            t_hi = adc(t_hi, carry, &mut overflow);

            let m = t[0].wrapping_mul(self.mont_inv);
            let mut carry = 0;
            mac_with_carry(t[0], m, q[0], &mut carry);
            for j in 1..N {
                t[j - 1] = mac_with_carry(t[j], m, q[j], &mut carry);
            }
            let mut top = 0;
            t[N - 1] = adc(t_hi, carry, &mut top);
            t_hi = overflow + top;
        }

        let mut result = BigInt(t);
        if t_hi != 0 || result >= self.modulus {
            result.sub_noborrow(&self.modulus);
        }
        result
    }

    pub(crate) fn add_mod(&self, a: &mut BigInt<N>, b: &BigInt<N>) {
        let carry = a.add_nocarry(b);
        if carry || *a >= self.modulus {
            a.sub_noborrow(&self.modulus);
        }
    }

    pub(crate) fn sub_mod(&self, a: &mut BigInt<N>, b: &BigInt<N>) {
        if a.sub_noborrow(b) {
            a.add_nocarry(&self.modulus);
        }
    }

    pub(crate) fn neg_mod(&self, a: &mut BigInt<N>) {
        if !a.is_zero() {
            let mut tmp = self.modulus;
            tmp.sub_noborrow(a);
            *a = tmp;
        }
    }
}

fn double_mod<const N: usize>(a: &mut BigInt<N>, modulus: &BigInt<N>) {
    let copy = *a;
    let carry = a.add_nocarry(&copy);
    if carry || *a >= *modulus {
        a.sub_noborrow(modulus);
    }
}
