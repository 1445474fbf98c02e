//! Cursor over an untrusted, immutable byte buffer.

use arith::{BigInt, DynBigInt, Result};

use crate::errors::input_err;

/// Reads big-endian values front to back. The cursor only moves forward;
/// once it reaches the end every further read fails.
#[derive(Clone, Debug)]
pub struct Deserializer<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Deserializer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Deserializer { input, pos: 0 }
    }

    /// Reads one byte. `what` names the value in the error message.
    pub fn byte(&mut self, what: &str) -> Result<u8> {
        let b = self.peek_byte(what)?;
        self.pos += 1;
        Ok(b)
    }

    pub fn peek_byte(&self, what: &str) -> Result<u8> {
        self.input
            .get(self.pos)
            .copied()
            .ok_or_else(|| input_err(format!("Input is not long enough to get {}", what)))
    }

    /// Skips `len` bytes.
    pub fn advance(&mut self, len: usize, what: &str) -> Result<()> {
        self.take(len, what).map(|_| ())
    }

    /// Reads `byte_len` bytes into a fixed-width integer. Fails if the value
    /// could not fit `N` limbs.
    pub fn number<const N: usize>(&mut self, byte_len: usize, what: &str) -> Result<BigInt<N>> {
        if byte_len > 8 * N {
            return Err(input_err(format!(
                "Encoding of {} is longer than {} limbs",
                what, N
            )));
        }

        let bytes = self.take(byte_len, what)?;
        let mut limbs = [0u64; N];
        fill_limbs(bytes, &mut limbs);

        Ok(BigInt::from_limbs(limbs))
    }

    /// Reads `byte_len` bytes into a variable-width integer with just enough
    /// limbs. With `check_dense` a zero leading byte is rejected.
    pub fn dyn_number(&mut self, byte_len: usize, check_dense: bool, what: &str) -> Result<DynBigInt> {
        if check_dense && byte_len > 0 && self.peek_byte(what)? == 0 {
            return Err(input_err(format!("top byte of {} is zero", what)));
        }

        let bytes = self.take(byte_len, what)?;
        let mut value = DynBigInt::with_byte_len(byte_len);
        fill_limbs(bytes, value.as_mut_limbs());

        Ok(value)
    }

    #[inline]
    pub fn ended(&self) -> bool {
        self.pos == self.input.len()
    }

    /// Unread part of the buffer.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    fn take(&mut self, len: usize, what: &str) -> Result<&'a [u8]> {
        if self.input.len() - self.pos < len {
            return Err(input_err(format!("Input is not long enough to get {}", what)));
        }

        let bytes = &self.input[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }
}

/// Big-endian bytes into little-endian limbs. `limbs` must be wide enough.
fn fill_limbs(bytes: &[u8], limbs: &mut [u64]) {
    for (i, &b) in bytes.iter().rev().enumerate() {
        limbs[i / 8] |= (b as u64) << (8 * (i % 8));
    }
}
