use arith::{BigInt, Exponentiable, Extension2, Extension2Over2, FieldElement, Fp, Fp2, Fp4, PrimeField};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// BN254 base field
const MODULUS: [u64; 4] = [
    0x3c208c16d87cfd47,
    0x97816a916871ca8d,
    0xb85045b68181585d,
    0x30644e72e131a029,
];

// 2^64 - 279
const SMALL_MODULUS: u64 = 0xfffffffffffffee9;

fn bench_fp_mul(c: &mut Criterion) {
    let field = PrimeField::new(BigInt::from_limbs(MODULUS)).unwrap();
    c.bench_function("fp256_mul", |bencher| {
        let a = Fp::from_u64(123456789, &field).unwrap();
        let b = Fp::from_u64(987654321, &field).unwrap();
        bencher.iter(|| {
            let mut x = black_box(a);
            x.mul_assign(black_box(&b));
            x
        })
    });
}

fn bench_fp2_mul(c: &mut Criterion) {
    let field = PrimeField::new(BigInt::from_limbs(MODULUS)).unwrap();
    let mut minus_one = Fp::one(&field);
    minus_one.negate();
    let ext2 = Extension2::new(minus_one, false).unwrap();

    c.bench_function("fp2_256_mul", |bencher| {
        let a = Fp2::new(Fp::from_u64(1, &field).unwrap(), Fp::from_u64(2, &field).unwrap(), &ext2);
        let b = Fp2::new(Fp::from_u64(3, &field).unwrap(), Fp::from_u64(4, &field).unwrap(), &ext2);
        bencher.iter(|| {
            let mut x = black_box(a);
            x.mul_assign(black_box(&b));
            x
        })
    });
}

fn bench_fp4_mul(c: &mut Criterion) {
    let field = PrimeField::new(BigInt::<1>::from_u64(SMALL_MODULUS)).unwrap();
    let ext2 = Extension2::new(Fp::from_u64(5, &field).unwrap(), false).unwrap();
    let ext4 = Extension2Over2::new(&ext2, false).unwrap();

    c.bench_function("fp4_64_mul", |bencher| {
        let two = Fp::from_u64(2, &field).unwrap();
        let seven = Fp::from_u64(7, &field).unwrap();
        let a = Fp4::new(Fp2::new(two, seven, &ext2), Fp2::new(seven, two, &ext2), &ext4);
        let b = Fp4::new(Fp2::new(seven, seven, &ext2), Fp2::new(two, two, &ext2), &ext4);
        bencher.iter(|| {
            let mut x = black_box(&a).clone();
            x.mul_assign(black_box(&b));
            x
        })
    });
}

criterion_group!(benches, bench_fp_mul, bench_fp2_mul, bench_fp4_mul);
criterion_main!(benches);
