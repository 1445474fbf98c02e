use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::extension_towers::{Extension2, Extension2Over2, Extension2Over3, Extension3, Fp2, Fp3, Fp4, Fp6};
use crate::field::PrimeField;
use crate::fp::Fp;
use crate::repr::BigInt;

/// Helper trait for sampling uniformly random elements of a runtime field.
pub trait RandomElement<'a>: Sized {
    type Field;

    fn random<R: Rng + ?Sized>(field: &'a Self::Field, rng: &mut R) -> Self;
}

impl<'a, const N: usize> RandomElement<'a> for Fp<'a, N> {
    type Field = PrimeField<N>;

    /// Rejection sampling below the modulus.
    fn random<R: Rng + ?Sized>(field: &'a PrimeField<N>, rng: &mut R) -> Self {
        let bits = field.modulus().num_bits();
        loop {
            let mut limbs = [0u64; N];
            for (i, limb) in limbs.iter_mut().enumerate() {
                let low = 64 * i as u32;
                if low >= bits {
                    break;
                }
                *limb = StandardUniform.sample(rng);
                if bits - low < 64 {
                    *limb &= (1u64 << (bits - low)) - 1;
                }
            }

            if let Ok(el) = Fp::from_repr(BigInt::from_limbs(limbs), field) {
                return el;
            }
        }
    }
}

impl<'a, const N: usize> RandomElement<'a> for Fp2<'a, N> {
    type Field = Extension2<'a, N>;

    fn random<R: Rng + ?Sized>(extension: &'a Extension2<'a, N>, rng: &mut R) -> Self {
        let field = extension.field();
        Fp2::new(Fp::random(field, rng), Fp::random(field, rng), extension)
    }
}

impl<'a, const N: usize> RandomElement<'a> for Fp3<'a, N> {
    type Field = Extension3<'a, N>;

    fn random<R: Rng + ?Sized>(extension: &'a Extension3<'a, N>, rng: &mut R) -> Self {
        let field = extension.field();
        Fp3::new(
            Fp::random(field, rng),
            Fp::random(field, rng),
            Fp::random(field, rng),
            extension,
        )
    }
}

impl<'a, const N: usize> RandomElement<'a> for Fp4<'a, N> {
    type Field = Extension2Over2<'a, N>;

    fn random<R: Rng + ?Sized>(extension: &'a Extension2Over2<'a, N>, rng: &mut R) -> Self {
        let base = extension.base();
        Fp4::new(Fp2::random(base, rng), Fp2::random(base, rng), extension)
    }
}

impl<'a, const N: usize> RandomElement<'a> for Fp6<'a, N> {
    type Field = Extension2Over3<'a, N>;

    fn random<R: Rng + ?Sized>(extension: &'a Extension2Over3<'a, N>, rng: &mut R) -> Self {
        let base = extension.base();
        Fp6::new(Fp3::random(base, rng), Fp3::random(base, rng), extension)
    }
}
