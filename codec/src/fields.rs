//! Moduli, field elements and extension non-residues.

use arith::{
    BigInt, Extension2, Extension3, FieldElement, Fp, Fp2, Fp3, PrimeField, Result,
};
use tracing::trace;

use crate::deserializer::Deserializer;
use crate::errors::{input_err, unexpected_zero_err, unknown_parameter_err};
use crate::policy::ValidationPolicy;

/// Reads a modulus of `byte_len` bytes. The encoding must be canonical and
/// the value an odd number of at least 3.
pub fn decode_modulus<const N: usize>(d: &mut Deserializer<'_>, byte_len: usize) -> Result<BigInt<N>> {
    if d.peek_byte("modulus")? == 0 {
        return Err(input_err("In modulus encoding highest byte is zero"));
    }

    let modulus: BigInt<N> = d.number(byte_len, "modulus")?;
    if modulus.is_zero() {
        return Err(unexpected_zero_err("Modulus can not be zero"));
    }
    if modulus.is_even() {
        return Err(input_err("Modulus is even"));
    }
    if modulus < BigInt::from_u64(3) {
        return Err(input_err("Modulus is less than 3"));
    }

    Ok(modulus)
}

pub fn decode_prime_field<const N: usize>(d: &mut Deserializer<'_>, byte_len: usize) -> Result<PrimeField<N>> {
    let modulus = decode_modulus::<N>(d, byte_len)?;
    trace!(byte_len, "decoded modulus");
    PrimeField::new(modulus)
}

/// Base field element of `mod_byte_len` bytes. Values that are not reduced
/// are rejected.
pub fn decode_fp<'a, const N: usize>(
    d: &mut Deserializer<'_>,
    mod_byte_len: usize,
    field: &'a PrimeField<N>,
) -> Result<Fp<'a, N>> {
    let repr = d.number::<N>(mod_byte_len, "field element")?;
    Fp::from_repr(repr, field).map_err(|_| input_err("Value is not a field element"))
}

/// A field whose elements can be read off the wire, one base field
/// coordinate after another.
pub trait FieldDecoder<'a> {
    type Element: FieldElement;

    fn decode_element(&'a self, mod_byte_len: usize, d: &mut Deserializer<'_>) -> Result<Self::Element>;
}

impl<'a, const N: usize> FieldDecoder<'a> for PrimeField<N> {
    type Element = Fp<'a, N>;

    fn decode_element(&'a self, mod_byte_len: usize, d: &mut Deserializer<'_>) -> Result<Fp<'a, N>> {
        decode_fp(d, mod_byte_len, self)
    }
}

impl<'a, const N: usize> FieldDecoder<'a> for Extension2<'a, N> {
    type Element = Fp2<'a, N>;

    fn decode_element(&'a self, mod_byte_len: usize, d: &mut Deserializer<'_>) -> Result<Fp2<'a, N>> {
        let c0 = decode_fp(d, mod_byte_len, self.field())?;
        let c1 = decode_fp(d, mod_byte_len, self.field())?;
        Ok(Fp2::new(c0, c1, self))
    }
}

impl<'a, const N: usize> FieldDecoder<'a> for Extension3<'a, N> {
    type Element = Fp3<'a, N>;

    fn decode_element(&'a self, mod_byte_len: usize, d: &mut Deserializer<'_>) -> Result<Fp3<'a, N>> {
        let c0 = decode_fp(d, mod_byte_len, self.field())?;
        let c1 = decode_fp(d, mod_byte_len, self.field())?;
        let c2 = decode_fp(d, mod_byte_len, self.field())?;
        Ok(Fp3::new(c0, c1, c2, self))
    }
}

/// Non-residue for an extension of `degree` over `field`. It must be
/// nonzero and must not be a `degree`-th power; the latter is only enforced
/// under the strict policy.
pub fn decode_non_residue<'a, F: FieldDecoder<'a>>(
    d: &mut Deserializer<'_>,
    field: &'a F,
    mod_byte_len: usize,
    degree: u64,
    policy: ValidationPolicy,
) -> Result<F::Element> {
    let non_residue = field.decode_element(mod_byte_len, d)?;
    if non_residue.is_zero() {
        return Err(unexpected_zero_err(format!(
            "Fp{} non-residue can not be zero",
            degree
        )));
    }

    policy.enforce(non_residue.is_non_nth_root(degree), || {
        unknown_parameter_err(format!(
            "Non-residue for Fp{} is actually a residue",
            degree
        ))
    })?;

    Ok(non_residue)
}

/// Quadratic extension over `field` with a non-residue read from `d`.
pub fn decode_extension2<'a, const N: usize>(
    d: &mut Deserializer<'_>,
    field: &'a PrimeField<N>,
    mod_byte_len: usize,
    needs_frobenius: bool,
    policy: ValidationPolicy,
) -> Result<Extension2<'a, N>> {
    let non_residue = decode_non_residue(d, field, mod_byte_len, 2, policy)?;
    Extension2::new(non_residue, needs_frobenius)
}

/// Cubic extension over `field` with a non-residue read from `d`.
pub fn decode_extension3<'a, const N: usize>(
    d: &mut Deserializer<'_>,
    field: &'a PrimeField<N>,
    mod_byte_len: usize,
    needs_frobenius: bool,
    policy: ValidationPolicy,
) -> Result<Extension3<'a, N>> {
    let non_residue = decode_non_residue(d, field, mod_byte_len, 3, policy)?;
    Extension3::new(non_residue, needs_frobenius)
}
