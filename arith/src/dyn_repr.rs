//! Variable-width big integers for scalars, group orders and the powers of
//! the modulus needed during Frobenius precomputation.

use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};

use num_bigint::BigUint;

use crate::errors::{Error, Result};
use crate::repr::{self, adc, mac_with_carry, mul_with_carry, sbb, BigInt};

/// Unsigned integer whose limb count is decided at runtime.
///
/// Two values compare equal when they represent the same number, whatever
/// their limb counts.
#[derive(Clone, Default)]
pub struct DynBigInt(Vec<u64>);

impl DynBigInt {
    /// Zero with enough limbs to hold `byte_len` bytes.
    pub fn with_byte_len(byte_len: usize) -> Self {
        DynBigInt(vec![0u64; byte_len.div_ceil(8)])
    }

    pub fn from_limbs(limbs: Vec<u64>) -> Self {
        DynBigInt(limbs)
    }

    pub fn from_u64(value: u64) -> Self {
        DynBigInt(vec![value])
    }

    pub fn from_fixed<const N: usize>(value: &BigInt<N>) -> Self {
        DynBigInt(value.as_limbs().to_vec())
    }

    /// Narrows into a fixed-width integer, failing if the value needs more
    /// than `N` limbs.
    pub fn to_fixed<const N: usize>(&self) -> Result<BigInt<N>> {
        let len = self.0.len().min(N);
        if !repr::is_zero(&self.0[len..]) {
            return Err(Error::input("value does not fit the target width"));
        }
        let mut limbs = [0u64; N];
        limbs[..len].copy_from_slice(&self.0[..len]);
        Ok(BigInt::from_limbs(limbs))
    }

    #[inline]
    pub fn as_limbs(&self) -> &[u64] {
        &self.0
    }

    #[inline]
    pub fn as_mut_limbs(&mut self) -> &mut [u64] {
        &mut self.0
    }

    pub fn num_limbs(&self) -> usize {
        self.0.len()
    }

    pub fn is_zero(&self) -> bool {
        repr::is_zero(&self.0)
    }

    pub fn is_odd(&self) -> bool {
        repr::is_odd(&self.0)
    }

    pub fn num_bits(&self) -> u32 {
        repr::num_bits(&self.0)
    }

    pub fn hamming_weight(&self) -> u32 {
        repr::hamming_weight(&self.0)
    }

    pub fn greater_or_equal(&self, other: &Self) -> bool {
        repr::greater_or_equal(&self.0, &other.0)
    }

    pub fn div2(&mut self) {
        repr::right_shift(&mut self.0, 1);
    }

    /// Shifts right by `shift < 64` bits.
    pub fn right_shift(&mut self, shift: u32) {
        if shift > 0 {
            repr::right_shift(&mut self.0, shift);
        }
    }

    /// Adds a limb, growing by one limb if the top limb carries.
    pub fn add_scalar(&mut self, value: u64) {
        let Some(first) = self.0.first_mut() else {
            self.0.push(value);
            return;
        };
        let mut carry = 0;
        *first = adc(*first, value, &mut carry);

        let mut i = 1;
        while carry > 0 {
            if i >= self.0.len() {
                self.0.push(carry);
                break;
            }
            self.0[i] = adc(self.0[i], 0, &mut carry);
            i += 1;
        }
    }

    /// Subtracts a limb. A result below zero is rejected and leaves `self`
    /// in an unspecified state.
    pub fn sub_scalar(&mut self, value: u64) -> Result<()> {
        let Some(first) = self.0.first_mut() else {
            return Err(Error::input("overflowing subtraction"));
        };
        let mut borrow = 0;
        *first = sbb(*first, value, &mut borrow);

        let mut i = 1;
        while borrow > 0 {
            if i >= self.0.len() {
                return Err(Error::input("overflowing subtraction"));
            }
            self.0[i] = sbb(self.0[i], 0, &mut borrow);
            i += 1;
        }
        Ok(())
    }

    /// Multiplies by a limb, growing by one limb on carry.
    pub fn mul_scalar(&mut self, scalar: u64) {
        let mut carry = 0;
        for limb in self.0.iter_mut() {
            *limb = mul_with_carry(*limb, scalar, &mut carry);
        }
        if carry > 0 {
            self.0.push(carry);
        }
    }

    /// Full product. The result has `self.len() + other.len()` limbs.
    pub fn mul(&self, other: &[u64]) -> DynBigInt {
        let mut wide = vec![0u64; self.0.len() + other.len()];
        for (i, &a) in self.0.iter().enumerate() {
            let mut carry = 0;
            for (j, &b) in other.iter().enumerate() {
                wide[i + j] = mac_with_carry(wide[i + j], a, b, &mut carry);
            }
            wide[i + other.len()] = carry;
        }
        DynBigInt(wide)
    }

    /// Quotient and remainder of division by a single nonzero limb.
    pub fn div_rem_u64(&self, divisor: u64) -> (DynBigInt, u64) {
        assert!(divisor != 0, "division by zero");
        let mut quotient = vec![0u64; self.0.len()];
        let mut rem = 0u128;
        for (q, &limb) in quotient.iter_mut().zip(self.0.iter()).rev() {
            let acc = (rem << 64) | limb as u128;
            *q = (acc / divisor as u128) as u64;
            rem = acc % divisor as u128;
        }
        (DynBigInt(quotient), rem as u64)
    }

    pub fn as_biguint(&self) -> BigUint {
        repr::limbs_to_biguint(&self.0)
    }

    pub fn from_biguint(value: &BigUint) -> Self {
        DynBigInt(value.to_u64_digits())
    }
}

impl PartialEq for DynBigInt {
    fn eq(&self, other: &Self) -> bool {
        repr::compare(&self.0, &other.0) == Ordering::Equal
    }
}

impl Eq for DynBigInt {}

impl PartialOrd for DynBigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DynBigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        repr::compare(&self.0, &other.0)
    }
}

impl Display for DynBigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.as_biguint())
    }
}

impl Debug for DynBigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "DynBigInt({}, {} limbs)", self, self.0.len())
    }
}
