//! Fixed-base windowed exponentiation.

use crate::repr::BitIterator;
use crate::traits::Exponentiable;

/// Odd powers `[g, g^3, g^5, ...]`, `2^(window-1)` entries.
pub fn calculate_window_table<E: Exponentiable>(base: &E, window: u32) -> Vec<E> {
    let size = 1usize << (window - 1);
    let mut table = Vec::with_capacity(size);

    let mut acc = base.clone();
    let mut square = base.clone();
    square.square();
    table.push(acc.clone());

    for _ in 1..size {
        acc.mul_assign(&square);
        table.push(acc.clone());
    }

    table
}

/// Precomputed odd powers of a base, reused across many exponents.
#[derive(Clone, Debug)]
pub struct WindowExpBase<E> {
    window_size: u32,
    one: E,
    bases: Vec<E>,
}

impl<E: Exponentiable> WindowExpBase<E> {
    pub fn new(base: &E, one: E, window: u32) -> Self {
        assert!(window > 0 && window < 64, "unsupported window size {}", window);
        WindowExpBase {
            window_size: window,
            one,
            bases: calculate_window_table(base, window),
        }
    }

    pub fn window_size(&self) -> u32 {
        self.window_size
    }

    /// Splits `scalar` into digits, least significant first. Each zero bit
    /// below a window is its own zero digit; a window starts at a set bit
    /// and spans `window_size` bits, so its value is odd. Trailing zero
    /// digits are dropped.
    pub fn windows(&self, scalar: &[u64]) -> Vec<u64> {
        let mut result = Vec::new();
        let mut found_beginning = false;
        let mut w = 0u64;
        let mut bit_count = 0u32;

        for bit in BitIterator::new(scalar) {
            if bit {
                found_beginning = true;
                w |= 1u64 << bit_count;
                bit_count += 1;
            } else if found_beginning {
                bit_count += 1;
            } else {
                result.push(0);
                continue;
            }

            if bit_count == self.window_size {
                result.push(w);
                w = 0;
                found_beginning = false;
                bit_count = 0;
            }
        }

        // incomplete top window
        if w != 0 {
            result.push(w);
        }

        while result.last() == Some(&0) {
            result.pop();
        }

        result
    }

    pub fn exponentiate(&self, scalar: &[u64]) -> E {
        let mut res = self.one.clone();
        let mut found_nonzero = false;

        for &w in self.windows(scalar).iter().rev() {
            if w == 0 {
                if found_nonzero {
                    res.square();
                }
                continue;
            }

            found_nonzero = true;
            for _ in 0..self.window_size {
                res.square();
            }
            res.mul_assign(&self.bases[(w >> 1) as usize]);
        }

        res
    }
}
