use tracing::trace;

use crate::dyn_repr::DynBigInt;
use crate::errors::{Error, Result};
use crate::traits::FieldElement;

/// `q^power` at full precision.
pub(crate) fn modulus_power(modulus: &[u64], power: usize) -> DynBigInt {
    let mut acc = DynBigInt::from_u64(1);
    for _ in 0..power {
        acc = acc.mul(modulus);
    }
    acc
}

/// Exponent `(q_power - 1) / div` of a Frobenius coefficient.
///
/// Fails with `UnknownParameter` when the division is not exact, which means
/// the modulus does not admit the requested extension.
pub fn calc_frobenius_power(q_power: &DynBigInt, div: u64, name: &str) -> Result<DynBigInt> {
    let err = || Error::unknown_parameter(format!("Failed to calculate Frobenius coeffs for {}", name));

    let mut power = q_power.clone();
    power.sub_scalar(1).map_err(|_| err())?;

    let (quotient, rem) = power.div_rem_u64(div);
    if rem != 0 {
        return Err(err());
    }

    Ok(quotient)
}

/// `non_residue^((q^power - 1) / div)`.
pub fn calc_frobenius_factor<F: FieldElement>(
    non_residue: &F,
    modulus: &[u64],
    power: usize,
    div: u64,
    name: &str,
) -> Result<F> {
    let q_power = modulus_power(modulus, power);
    let exp = calc_frobenius_power(&q_power, div, name)?;
    Ok(non_residue.pow(exp.as_limbs()))
}

/// Table of `non_residue^((q^i - 1) / div)` for `i in 0..EXT`.
///
/// Built once and shared by several towers over the same base field. Either
/// every slot is computed or construction fails.
#[derive(Clone, Debug, PartialEq)]
pub struct FrobeniusPrecomputation<F, const EXT: usize> {
    pub elements: [F; EXT],
}

impl<F: FieldElement, const EXT: usize> FrobeniusPrecomputation<F, EXT> {
    pub fn new(non_residue: &F, modulus: &[u64], div: u64) -> Result<Self> {
        trace!(slots = EXT, div, "frobenius precomputation");

        let mut exponents = Vec::with_capacity(EXT);
        let mut q_power = DynBigInt::from_u64(1);
        for i in 0..EXT {
            let exp = calc_frobenius_power(&q_power, div, "precomputation").map_err(|_| {
                Error::unknown_parameter(format!(
                    "Failed to make Frobenius precomputation, modulus is not 1 mod {}",
                    div
                ))
            })?;
            exponents.push(exp);
            if i + 1 != EXT {
                q_power = q_power.mul(modulus);
            }
        }

        let elements = core::array::from_fn(|i| non_residue.pow(exponents[i].as_limbs()));

        Ok(FrobeniusPrecomputation { elements })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::PrimeField;
    use crate::fp::Fp;
    use crate::repr::BigInt;
    use crate::traits::Exponentiable;

    const Q1: u64 = 0xfffffffffffffee9;

    #[test]
    fn test_modulus_power_does_not_truncate() {
        let q = [u64::MAX, u64::MAX];
        let cube = modulus_power(&q, 3);
        let expected = DynBigInt::from_limbs(q.to_vec()).as_biguint().pow(3);
        assert_eq!(cube.as_biguint(), expected);
        assert_eq!(modulus_power(&q, 0), DynBigInt::from_u64(1));
    }

    #[test]
    fn test_frobenius_power_requires_exact_division() {
        let q = DynBigInt::from_u64(13);
        assert_eq!(calc_frobenius_power(&q, 4, "Fp4").unwrap(), DynBigInt::from_u64(3));
        assert_eq!(
            calc_frobenius_power(&DynBigInt::from_u64(11), 4, "Fp4"),
            Err(Error::unknown_parameter("Failed to calculate Frobenius coeffs for Fp4"))
        );
    }

    #[test]
    fn test_precomputation_table() {
        let field = PrimeField::new(BigInt::<1>::from_u64(Q1)).unwrap();
        let beta = Fp::from_u64(5, &field).unwrap();
        let precomp = FrobeniusPrecomputation::<_, 4>::new(&beta, &[Q1], 4).unwrap();

        assert!(precomp.elements[0].is_one());
        for i in 1..4 {
            let exp = calc_frobenius_power(&modulus_power(&[Q1], i), 4, "Fp4").unwrap();
            assert_eq!(precomp.elements[i], beta.pow(exp.as_limbs()));
        }
        // β^((q^2 - 1)/4) = (β^((q - 1)/4))^2 since the factor lies in Fp
        let mut f1_squared = precomp.elements[1];
        f1_squared.square();
        assert_eq!(precomp.elements[2], f1_squared);
    }

    #[test]
    fn test_precomputation_rejects_modulus() {
        // 11 = 3 mod 4
        let field = PrimeField::new(BigInt::<1>::from_u64(11)).unwrap();
        let beta = Fp::from_u64(2, &field).unwrap();
        assert_eq!(
            FrobeniusPrecomputation::<_, 4>::new(&beta, &[11], 4),
            Err(Error::unknown_parameter(
                "Failed to make Frobenius precomputation, modulus is not 1 mod 4"
            ))
        );
    }
}
