use core::fmt::Debug;

use crate::dyn_repr::DynBigInt;
use crate::repr::BitIterator;

/// An element of a multiplicative monoid: enough structure for
/// square-and-multiply exponentiation.
pub trait Exponentiable: Clone {
    fn square(&mut self);
    fn mul_assign(&mut self, other: &Self);
}

/// Element of a prime field or of an extension tower over it.
///
/// Elements carry a reference to the field they belong to, so the additive
/// and multiplicative identities are produced from an existing element.
pub trait FieldElement: Exponentiable + PartialEq + Debug {
    fn zero_like(&self) -> Self;
    fn one_like(&self) -> Self;

    fn is_zero(&self) -> bool;

    fn is_one(&self) -> bool {
        *self == self.one_like()
    }

    fn add_assign(&mut self, other: &Self);
    fn sub_assign(&mut self, other: &Self);
    fn double(&mut self);
    fn negate(&mut self);

    /// `None` for zero.
    fn inverse(&self) -> Option<Self>;

    /// Raises to `q^power`, where `q` is the characteristic.
    fn frobenius_map(&mut self, power: usize);

    /// Number of elements of the field this element lives in.
    fn field_size(&self) -> DynBigInt;

    /// Square-and-multiply from the most significant set bit of `exp`.
    fn pow(&self, exp: &[u64]) -> Self {
        let mut res = self.one_like();
        let mut found_one = false;

        for bit in BitIterator::new(exp).rev() {
            if found_one {
                res.square();
            } else {
                found_one = bit;
            }

            if bit {
                res.mul_assign(self);
            }
        }

        res
    }

    /// True if the element is nonzero and has no `n`-th root in its field.
    ///
    /// With `g = gcd(n, size - 1)`, an element `x` is an `n`-th power exactly
    /// when `x^((size - 1) / g) == 1`.
    fn is_non_nth_root(&self, n: u64) -> bool {
        if self.is_zero() || n == 0 {
            return false;
        }

        let mut order = self.field_size();
        if order.sub_scalar(1).is_err() {
            return false;
        }

        let (_, rem) = order.div_rem_u64(n);
        let g = gcd(n, rem);
        let (power, _) = order.div_rem_u64(g);

        !self.pow(power.as_limbs()).is_one()
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
