//! Fixed-width big integers and the limb primitives shared by every
//! representation in the crate.
//!
//! Limbs are stored least significant first. Nothing in this module wraps
//! silently: operations that can leave the `N`-limb range either report the
//! carry to the caller or fail with [`Error::Input`].

use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};

use num_bigint::BigUint;

use crate::errors::{Error, Result};

/// Calculate `a + b + carry`, returning the sum and updating the carry.
#[inline(always)]
pub fn adc(a: u64, b: u64, carry: &mut u64) -> u64 {
    let tmp = (a as u128) + (b as u128) + (*carry as u128);
    *carry = (tmp >> 64) as u64;
    tmp as u64
}

/// Calculate `a - b - borrow`, returning the difference and updating the borrow.
#[inline(always)]
pub fn sbb(a: u64, b: u64, borrow: &mut u64) -> u64 {
    let tmp = (1u128 << 64) + (a as u128) - (b as u128) - (*borrow as u128);
    *borrow = if tmp >> 64 == 0 { 1 } else { 0 };
    tmp as u64
}

/// Calculate `a * b + carry`, returning the low limb and setting the carry to
/// the high limb.
#[inline(always)]
pub fn mul_with_carry(a: u64, b: u64, carry: &mut u64) -> u64 {
    let tmp = (a as u128) * (b as u128) + (*carry as u128);
    *carry = (tmp >> 64) as u64;
    tmp as u64
}

/// Calculate `a + b * c + carry`. Cannot overflow 128 bits.
#[inline(always)]
pub fn mac_with_carry(a: u64, b: u64, c: u64, carry: &mut u64) -> u64 {
    let tmp = (a as u128) + (b as u128) * (c as u128) + (*carry as u128);
    *carry = (tmp >> 64) as u64;
    tmp as u64
}

pub fn is_zero(repr: &[u64]) -> bool {
    repr.iter().all(|&limb| limb == 0)
}

pub fn is_odd(repr: &[u64]) -> bool {
    repr.first().map_or(false, |&limb| limb & 1 == 1)
}

/// `a >= b` for numbers of possibly different limb counts.
pub fn greater_or_equal(a: &[u64], b: &[u64]) -> bool {
    compare(a, b) != Ordering::Less
}

pub fn compare(a: &[u64], b: &[u64]) -> Ordering {
    if b.len() > a.len() && !is_zero(&b[a.len()..]) {
        return Ordering::Less;
    }
    if a.len() > b.len() && !is_zero(&a[b.len()..]) {
        return Ordering::Greater;
    }

    let common = a.len().min(b.len());
    for i in (0..common).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    Ordering::Equal
}

pub fn num_bits(repr: &[u64]) -> u32 {
    let mut bits = 64 * repr.len() as u32;
    for &limb in repr.iter().rev() {
        if limb == 0 {
            bits -= 64;
        } else {
            bits -= limb.leading_zeros();
            break;
        }
    }

    bits
}

pub fn hamming_weight(repr: &[u64]) -> u32 {
    repr.iter().map(|limb| limb.count_ones()).sum()
}

/// Shift right by `shift` bits, `0 < shift < 64`.
pub fn right_shift(repr: &mut [u64], shift: u32) {
    debug_assert!(shift > 0 && shift < 64);
    let len = repr.len();
    if len == 0 {
        return;
    }
    for i in 0..len - 1 {
        repr[i] = (repr[i] >> shift) | (repr[i + 1] << (64 - shift));
    }
    repr[len - 1] >>= shift;
}

/// Adds a single limb, returning the carry out of the top limb.
pub fn add_nocarry(repr: &mut [u64], value: u64) -> u64 {
    let mut carry = value;
    for limb in repr.iter_mut() {
        if carry == 0 {
            break;
        }
        *limb = adc(*limb, 0, &mut carry);
    }
    carry
}

/// Subtracts a single limb, returning the borrow out of the top limb.
pub fn sub_noborrow(repr: &mut [u64], value: u64) -> u64 {
    let Some((first, rest)) = repr.split_first_mut() else {
        return u64::from(value != 0);
    };
    let mut borrow = 0;
    *first = sbb(*first, value, &mut borrow);
    for limb in rest.iter_mut() {
        if borrow == 0 {
            break;
        }
        *limb = sbb(*limb, 0, &mut borrow);
    }
    borrow
}

/// Iterates the bits of a limb slice, least significant first.
///
/// Reverse it to walk from the most significant bit down.
#[derive(Clone, Debug)]
pub struct BitIterator<'a> {
    limbs: &'a [u64],
    front: usize,
    back: usize,
}

impl<'a> BitIterator<'a> {
    pub fn new(limbs: &'a [u64]) -> Self {
        BitIterator {
            limbs,
            front: 0,
            back: limbs.len() * 64,
        }
    }

    #[inline]
    fn bit(&self, n: usize) -> bool {
        (self.limbs[n / 64] >> (n % 64)) & 1 == 1
    }
}

impl Iterator for BitIterator<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.front == self.back {
            return None;
        }
        let bit = self.bit(self.front);
        self.front += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for BitIterator<'_> {
    fn next_back(&mut self) -> Option<bool> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.bit(self.back))
    }
}

impl ExactSizeIterator for BitIterator<'_> {}

/// Unsigned integer of exactly `N` 64-bit limbs.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct BigInt<const N: usize>(pub(crate) [u64; N]);

impl<const N: usize> BigInt<N> {
    pub const ZERO: Self = BigInt([0u64; N]);

    pub const NUM_LIMBS: usize = N;

    pub const fn from_limbs(limbs: [u64; N]) -> Self {
        BigInt(limbs)
    }

    pub fn from_u64(value: u64) -> Self {
        let mut limbs = [0u64; N];
        limbs[0] = value;
        BigInt(limbs)
    }

    pub fn one() -> Self {
        Self::from_u64(1)
    }

    #[inline]
    pub fn as_limbs(&self) -> &[u64] {
        &self.0
    }

    #[inline]
    pub fn as_mut_limbs(&mut self) -> &mut [u64] {
        &mut self.0
    }

    pub fn into_limbs(self) -> [u64; N] {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        is_zero(&self.0)
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        is_odd(&self.0)
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    pub fn num_bits(&self) -> u32 {
        num_bits(&self.0)
    }

    pub fn hamming_weight(&self) -> u32 {
        hamming_weight(&self.0)
    }

    /// Adds `other` in place and returns whether the top limb overflowed.
    pub fn add_nocarry(&mut self, other: &Self) -> bool {
        let mut carry = 0;
        for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
            *a = adc(*a, *b, &mut carry);
        }
        carry != 0
    }

    /// Subtracts `other` in place and returns whether it borrowed.
    pub fn sub_noborrow(&mut self, other: &Self) -> bool {
        let mut borrow = 0;
        for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
            *a = sbb(*a, *b, &mut borrow);
        }
        borrow != 0
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        let mut result = *self;
        if result.add_nocarry(other) {
            return Err(Error::input("overflowing addition"));
        }
        Ok(result)
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        let mut result = *self;
        if result.sub_noborrow(other) {
            return Err(Error::input("overflowing subtraction"));
        }
        Ok(result)
    }

    /// Full product of `self` and `other`, which must fit into `M` limbs.
    pub fn checked_mul<const K: usize, const M: usize>(&self, other: &BigInt<K>) -> Result<BigInt<M>> {
        let mut wide = vec![0u64; N + K];
        for (i, &a) in self.0.iter().enumerate() {
            let mut carry = 0;
            for (j, &b) in other.0.iter().enumerate() {
                wide[i + j] = mac_with_carry(wide[i + j], a, b, &mut carry);
            }
            wide[i + K] = carry;
        }
        narrow_into(&wide).ok_or_else(|| Error::input("multiplication overflows the target width"))
    }

    /// Converts into a representation with `M` limbs. Widening always
    /// succeeds; narrowing fails if any dropped limb is nonzero.
    pub fn resize<const M: usize>(&self) -> Result<BigInt<M>> {
        narrow_into(&self.0).ok_or_else(|| Error::input("value does not fit the target width"))
    }

    pub fn div2(&mut self) {
        right_shift(&mut self.0, 1);
    }

    /// Shifts right by `n < 64` bits.
    pub fn shr(&mut self, n: u32) {
        if n > 0 {
            right_shift(&mut self.0, n);
        }
    }

    pub fn as_biguint(&self) -> BigUint {
        limbs_to_biguint(&self.0)
    }

    pub fn from_biguint(value: &BigUint) -> Result<Self> {
        narrow_into(&value.to_u64_digits()).ok_or_else(|| Error::input("value does not fit the target width"))
    }
}

fn narrow_into<const M: usize>(limbs: &[u64]) -> Option<BigInt<M>> {
    if limbs.len() > M && !is_zero(&limbs[M..]) {
        return None;
    }
    let mut result = [0u64; M];
    let len = limbs.len().min(M);
    result[..len].copy_from_slice(&limbs[..len]);
    Some(BigInt(result))
}

pub(crate) fn limbs_to_biguint(limbs: &[u64]) -> BigUint {
    let mut bytes = Vec::with_capacity(limbs.len() * 8);
    for &limb in limbs {
        bytes.extend_from_slice(&limb.to_le_bytes());
    }
    BigUint::from_bytes_le(&bytes)
}

impl<const N: usize> PartialOrd for BigInt<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Ord for BigInt<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(&self.0, &other.0)
    }
}

impl<const N: usize> From<u64> for BigInt<N> {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl<const N: usize> Display for BigInt<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for limb in self.0.iter().rev() {
            write!(f, "{:016x}", limb)?;
        }
        Ok(())
    }
}

impl<const N: usize> Debug for BigInt<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_bigint<const N: usize>(rng: &mut StdRng) -> BigInt<N> {
        let mut limbs = [0u64; N];
        for limb in limbs.iter_mut() {
            *limb = rng.random();
        }
        BigInt(limbs)
    }

    #[test]
    fn test_limb_primitives() {
        let mut carry = 0;
        assert_eq!(adc(u64::MAX, 1, &mut carry), 0);
        assert_eq!(carry, 1);
        assert_eq!(adc(u64::MAX, u64::MAX, &mut carry), u64::MAX);
        assert_eq!(carry, 1);

        let mut borrow = 0;
        assert_eq!(sbb(0, 1, &mut borrow), u64::MAX);
        assert_eq!(borrow, 1);
        assert_eq!(sbb(5, 3, &mut borrow), 1);
        assert_eq!(borrow, 0);

        let mut carry = 7;
        assert_eq!(mul_with_carry(u64::MAX, u64::MAX, &mut carry), 8);
        assert_eq!(carry, u64::MAX - 1);
    }

    #[test]
    fn test_compare_with_extra_limbs() {
        assert!(greater_or_equal(&[5, 0, 0], &[5]));
        assert!(greater_or_equal(&[5], &[5, 0]));
        assert!(!greater_or_equal(&[5], &[0, 1]));
        assert!(greater_or_equal(&[0, 1], &[u64::MAX]));
        assert_eq!(compare(&[1, 2], &[2, 1]), Ordering::Greater);
        assert_eq!(compare(&[], &[0, 0]), Ordering::Equal);
    }

    #[test]
    fn test_num_bits_and_weight() {
        assert_eq!(num_bits(&[0, 0]), 0);
        assert_eq!(num_bits(&[1]), 1);
        assert_eq!(num_bits(&[0, 1]), 65);
        assert_eq!(num_bits(&[u64::MAX, u64::MAX]), 128);
        assert_eq!(BigInt::<2>::from_limbs([0xff, 0x1]).num_bits(), 65);
        assert_eq!(hamming_weight(&[0xff, 0x1, 0]), 9);
    }

    #[test]
    fn test_right_shift_crosses_limbs() {
        let mut repr = [0, 1];
        right_shift(&mut repr, 1);
        assert_eq!(repr, [1 << 63, 0]);

        let mut x = BigInt::<2>::from_limbs([0xf0, 0xf]);
        x.shr(4);
        assert_eq!(x, BigInt::from_limbs([0xf00000000000000f, 0]));
    }

    #[test]
    fn test_single_limb_add_sub() {
        let mut repr = [u64::MAX, u64::MAX];
        assert_eq!(add_nocarry(&mut repr, 1), 1);
        assert_eq!(repr, [0, 0]);
        assert_eq!(sub_noborrow(&mut repr, 1), 1);
        assert_eq!(repr, [u64::MAX, u64::MAX]);
        assert_eq!(sub_noborrow(&mut [], 1), 1);
    }

    #[test]
    fn test_checked_arithmetic_never_truncates() {
        let max = BigInt::<2>::from_limbs([u64::MAX, u64::MAX]);
        assert!(max.checked_add(&BigInt::one()).is_err());
        assert!(BigInt::<2>::ZERO.checked_sub(&BigInt::one()).is_err());

        let wide: Result<BigInt<4>> = max.checked_mul(&max);
        let expected = max.as_biguint() * max.as_biguint();
        assert_eq!(wide.unwrap().as_biguint(), expected);

        let narrow: Result<BigInt<3>> = max.checked_mul(&max);
        assert!(matches!(narrow, Err(Error::Input(_))));

        assert!(max.resize::<1>().is_err());
        assert_eq!(
            BigInt::<3>::from_u64(9).resize::<1>().unwrap(),
            BigInt::from_u64(9)
        );
    }

    #[test]
    fn test_arithmetic_against_biguint() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let a = random_bigint::<3>(&mut rng);
            let b = random_bigint::<3>(&mut rng);

            let product: BigInt<6> = a.checked_mul(&b).unwrap();
            assert_eq!(product.as_biguint(), a.as_biguint() * b.as_biguint());

            let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
            assert_eq!(
                hi.checked_sub(&lo).unwrap().as_biguint(),
                hi.as_biguint() - lo.as_biguint()
            );
            assert_eq!(a.cmp(&b), a.as_biguint().cmp(&b.as_biguint()));
        }
    }

    #[test]
    fn test_bit_iterator_both_directions() {
        let limbs = [0b1011u64, 1];
        let forward: Vec<bool> = BitIterator::new(&limbs).take(5).collect();
        assert_eq!(forward, vec![true, true, false, true, false]);

        let mut backward = BitIterator::new(&limbs).rev();
        assert_eq!(backward.len(), 128);
        for _ in 0..63 {
            assert_eq!(backward.next(), Some(false));
        }
        assert_eq!(backward.next(), Some(true));
    }

    #[test]
    fn test_biguint_round_trip() {
        let x = BigInt::<2>::from_limbs([0x0123456789abcdef, 0xfedcba9876543210]);
        assert_eq!(BigInt::<2>::from_biguint(&x.as_biguint()).unwrap(), x);
        assert!(BigInt::<1>::from_biguint(&x.as_biguint()).is_err());
        assert_eq!(x.to_string(), "0xfedcba98765432100123456789abcdef");
    }
}
