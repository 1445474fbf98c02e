//! Signed-digit (NAF / wNAF) encodings of nonnegative integers.
//!
//! Digits are produced least significant first and satisfy
//! `value == Σ digit_i * 2^i`. Only odd digits are nonzero.

use crate::repr::{add_nocarry, is_odd, is_zero, right_shift, sub_noborrow};

/// Ternary (window 1) NAF: every digit is `-1`, `0` or `1`, and no two
/// adjacent digits are nonzero.
pub fn into_ternary_wnaf(repr: &[u64]) -> Vec<i8> {
    const WINDOW: u32 = 1;
    const MIDPOINT: i64 = 1 << WINDOW;
    const MASK: u64 = (1 << (WINDOW + 1)) - 1;

    let mut res = Vec::new();
    if repr.is_empty() {
        return res;
    }
    res.reserve(repr.len() * 64 + 2);

    // one spare limb so that rounding up the top limb cannot overflow
    let mut e = repr.to_vec();
    e.push(0);

    while !is_zero(&e) {
        let mut z = 0i64;
        if is_odd(&e) {
            z = MIDPOINT - (e[0] & MASK) as i64;
            if z > 0 {
                sub_noborrow(&mut e, z as u64);
            } else {
                add_nocarry(&mut e, (-z) as u64);
            }
        }
        right_shift(&mut e, 1);
        res.push(z as i8);
    }

    res
}

/// Width-`window` NAF. Nonzero digits are odd and lie in
/// `(-2^(window-1), 2^(window-1)]`.
pub fn into_wnaf(repr: &[u64], window: u32) -> Vec<i64> {
    assert!(window > 0 && window < 63, "unsupported wNAF window {}", window);

    let mut res = Vec::new();
    if repr.is_empty() {
        return res;
    }
    res.reserve(repr.len() * 64 + 2);

    let max = 1i64 << window;
    let midpoint = 1i64 << (window - 1);
    let modulus_mask = (1u64 << window) - 1;

    let mut e = repr.to_vec();
    e.push(0);

    while !is_zero(&e) {
        let mut z = 0i64;
        if is_odd(&e) {
            z = (e[0] & modulus_mask) as i64;
            if z > midpoint {
                z -= max;
                add_nocarry(&mut e, (-z) as u64);
            } else {
                sub_noborrow(&mut e, z as u64);
            }
        }
        right_shift(&mut e, 1);
        res.push(z);
    }

    res
}
