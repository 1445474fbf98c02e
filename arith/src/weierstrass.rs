//! Short Weierstrass curves `y^2 = x^3 + a x + b` over any tower field, with
//! points kept in Jacobian coordinates `(X : Y : Z)`, `x = X / Z^2`,
//! `y = Y / Z^3`. The identity has `Z = 0`.

use core::fmt::{self, Debug, Formatter};

use crate::dyn_repr::DynBigInt;
use crate::errors::{Error, Result};
use crate::naf::into_wnaf;
use crate::traits::FieldElement;

/// Window used by [`CurvePoint::mul`].
const MUL_WINDOW: u32 = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct WeierstrassCurve<F> {
    a: F,
    b: F,
    subgroup_order: DynBigInt,
    order_len: usize,
}

impl<F: FieldElement> WeierstrassCurve<F> {
    /// Fails for `b == 0`, which the arithmetic here does not support.
    pub fn new(a: F, b: F, subgroup_order: DynBigInt, order_len: usize) -> Result<Self> {
        if b.is_zero() {
            return Err(Error::unknown_parameter("curve shape is not supported"));
        }

        Ok(WeierstrassCurve {
            a,
            b,
            subgroup_order,
            order_len,
        })
    }

    #[inline]
    pub fn a(&self) -> &F {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &F {
        &self.b
    }

    #[inline]
    pub fn subgroup_order(&self) -> &DynBigInt {
        &self.subgroup_order
    }

    /// Byte length of encoded scalars for this curve.
    #[inline]
    pub fn order_len(&self) -> usize {
        self.order_len
    }
}

#[derive(Clone)]
pub struct CurvePoint<F> {
    x: F,
    y: F,
    z: F,
}

impl<F: FieldElement> CurvePoint<F> {
    /// Affine point. `(0, 0)` is the encoding of the identity.
    pub fn point(x: F, y: F) -> Self {
        let z = if x.is_zero() && y.is_zero() {
            x.zero_like()
        } else {
            x.one_like()
        };
        CurvePoint { x, y, z }
    }

    pub fn zero(curve: &WeierstrassCurve<F>) -> Self {
        CurvePoint {
            x: curve.b.zero_like(),
            y: curve.b.one_like(),
            z: curve.b.zero_like(),
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.z.is_zero()
    }

    fn identity_like(&self) -> Self {
        CurvePoint {
            x: self.x.zero_like(),
            y: self.x.one_like(),
            z: self.x.zero_like(),
        }
    }

    /// `Y^2 = X^3 + a X Z^4 + b Z^6`. The identity is on every curve.
    pub fn check_on_curve(&self, curve: &WeierstrassCurve<F>) -> bool {
        if self.is_zero() {
            return true;
        }

        let mut z2 = self.z.clone();
        z2.square();
        let mut z4 = z2.clone();
        z4.square();
        let mut z6 = z4.clone();
        z6.mul_assign(&z2);

        let mut lhs = self.y.clone();
        lhs.square();

        let mut rhs = self.x.clone();
        rhs.square();
        rhs.mul_assign(&self.x);

        let mut ax = curve.a.clone();
        ax.mul_assign(&self.x);
        ax.mul_assign(&z4);
        rhs.add_assign(&ax);

        let mut bz = curve.b.clone();
        bz.mul_assign(&z6);
        rhs.add_assign(&bz);

        lhs == rhs
    }

    /// `order * P == 0` for the curve's declared subgroup order.
    pub fn check_correct_subgroup(&self, curve: &WeierstrassCurve<F>) -> bool {
        self.mul(curve.subgroup_order.as_limbs(), curve).is_zero()
    }

    pub fn negate(&mut self) {
        self.y.negate();
    }

    /// dbl-2007-bl
    pub fn double(&self, curve: &WeierstrassCurve<F>) -> Self {
        if self.is_zero() {
            return self.clone();
        }

        let mut xx = self.x.clone();
        xx.square();
        let mut yy = self.y.clone();
        yy.square();
        let mut yyyy = yy.clone();
        yyyy.square();
        let mut zz = self.z.clone();
        zz.square();

        // s = 2 ((x + yy)^2 - xx - yyyy)
        let mut s = self.x.clone();
        s.add_assign(&yy);
        s.square();
        s.sub_assign(&xx);
        s.sub_assign(&yyyy);
        s.double();

        // m = 3 xx + a zz^2
        let mut m = xx.clone();
        m.double();
        m.add_assign(&xx);
        if !curve.a.is_zero() {
            let mut azz = zz.clone();
            azz.square();
            azz.mul_assign(&curve.a);
            m.add_assign(&azz);
        }

        // x3 = m^2 - 2 s
        let mut x3 = m.clone();
        x3.square();
        x3.sub_assign(&s);
        x3.sub_assign(&s);

        // y3 = m (s - x3) - 8 yyyy
        let mut y3 = s;
        y3.sub_assign(&x3);
        y3.mul_assign(&m);
        let mut eight_yyyy = yyyy;
        eight_yyyy.double();
        eight_yyyy.double();
        eight_yyyy.double();
        y3.sub_assign(&eight_yyyy);

        // z3 = (y + z)^2 - yy - zz
        let mut z3 = self.y.clone();
        z3.add_assign(&self.z);
        z3.square();
        z3.sub_assign(&yy);
        z3.sub_assign(&zz);

        CurvePoint { x: x3, y: y3, z: z3 }
    }

    /// add-2007-bl
    pub fn add(&self, other: &Self, curve: &WeierstrassCurve<F>) -> Self {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }

        let mut z1z1 = self.z.clone();
        z1z1.square();
        let mut z2z2 = other.z.clone();
        z2z2.square();

        let mut u1 = self.x.clone();
        u1.mul_assign(&z2z2);
        let mut u2 = other.x.clone();
        u2.mul_assign(&z1z1);

        let mut s1 = self.y.clone();
        s1.mul_assign(&other.z);
        s1.mul_assign(&z2z2);
        let mut s2 = other.y.clone();
        s2.mul_assign(&self.z);
        s2.mul_assign(&z1z1);

        if u1 == u2 {
            if s1 == s2 {
                return self.double(curve);
            }
            return self.identity_like();
        }

        // h = u2 - u1, i = (2h)^2, j = h i
        let mut h = u2;
        h.sub_assign(&u1);
        let mut i = h.clone();
        i.double();
        i.square();
        let mut j = h.clone();
        j.mul_assign(&i);

        // r = 2 (s2 - s1), v = u1 i
        let mut r = s2;
        r.sub_assign(&s1);
        r.double();
        let mut v = u1;
        v.mul_assign(&i);

        // x3 = r^2 - j - 2 v
        let mut x3 = r.clone();
        x3.square();
        x3.sub_assign(&j);
        x3.sub_assign(&v);
        x3.sub_assign(&v);

        // y3 = r (v - x3) - 2 s1 j
        let mut y3 = v;
        y3.sub_assign(&x3);
        y3.mul_assign(&r);
        s1.mul_assign(&j);
        s1.double();
        y3.sub_assign(&s1);

        // z3 = ((z1 + z2)^2 - z1z1 - z2z2) h
        let mut z3 = self.z.clone();
        z3.add_assign(&other.z);
        z3.square();
        z3.sub_assign(&z1z1);
        z3.sub_assign(&z2z2);
        z3.mul_assign(&h);

        CurvePoint { x: x3, y: y3, z: z3 }
    }

    /// Scalar multiplication over a width-4 NAF of `scalar`.
    pub fn mul(&self, scalar: &[u64], curve: &WeierstrassCurve<F>) -> Self {
        if self.is_zero() {
            return self.clone();
        }

        // odd multiples P, 3P, 5P, 7P
        let table_size = 1usize << (MUL_WINDOW - 2);
        let double = self.double(curve);
        let mut table = Vec::with_capacity(table_size);
        table.push(self.clone());
        for i in 1..table_size {
            let next = table[i - 1].add(&double, curve);
            table.push(next);
        }

        let mut res = self.identity_like();
        for &digit in into_wnaf(scalar, MUL_WINDOW).iter().rev() {
            res = res.double(curve);
            if digit > 0 {
                res = res.add(&table[(digit >> 1) as usize], curve);
            } else if digit < 0 {
                let mut neg = table[(-digit >> 1) as usize].clone();
                neg.negate();
                res = res.add(&neg, curve);
            }
        }

        res
    }

    /// Normalizes to `Z = 1`, or to the identity.
    pub fn into_affine(&self) -> Self {
        let Some(z_inv) = self.z.inverse() else {
            return self.identity_like();
        };

        let mut z_inv2 = z_inv.clone();
        z_inv2.square();
        let mut z_inv3 = z_inv2.clone();
        z_inv3.mul_assign(&z_inv);

        let mut x = self.x.clone();
        x.mul_assign(&z_inv2);
        let mut y = self.y.clone();
        y.mul_assign(&z_inv3);

        CurvePoint {
            x,
            y,
            z: self.z.one_like(),
        }
    }

    /// Affine `(x, y)`, with `(0, 0)` for the identity.
    pub fn into_xy(&self) -> (F, F) {
        if self.is_zero() {
            return (self.x.zero_like(), self.x.zero_like());
        }
        let affine = self.into_affine();
        (affine.x, affine.y)
    }
}

impl<F: FieldElement> PartialEq for CurvePoint<F> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_zero() || other.is_zero() {
            return self.is_zero() && other.is_zero();
        }

        let mut z1z1 = self.z.clone();
        z1z1.square();
        let mut z2z2 = other.z.clone();
        z2z2.square();

        // x1 z2^2 == x2 z1^2
        let mut lhs = self.x.clone();
        lhs.mul_assign(&z2z2);
        let mut rhs = other.x.clone();
        rhs.mul_assign(&z1z1);
        if lhs != rhs {
            return false;
        }

        // y1 z2^3 == y2 z1^3
        let mut lhs = self.y.clone();
        lhs.mul_assign(&z2z2);
        lhs.mul_assign(&other.z);
        let mut rhs = other.y.clone();
        rhs.mul_assign(&z1z1);
        rhs.mul_assign(&self.z);
        lhs == rhs
    }
}

impl<F: FieldElement> Debug for CurvePoint<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "CurvePoint(Infinity)");
        }
        let (x, y) = self.into_xy();
        write!(f, "CurvePoint(x={:?}, y={:?})", x, y)
    }
}
