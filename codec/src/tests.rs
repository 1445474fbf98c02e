use super::*;
use arith::{
    BigInt, CurvePoint, DynBigInt, Error, Exponentiable, Extension2, FieldElement, Fp, Fp2,
    PrimeField, WeierstrassCurve,
};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

const BN_Q: [u64; 4] = [
    0x3c208c16d87cfd47,
    0x97816a916871ca8d,
    0xb85045b68181585d,
    0x30644e72e131a029,
];

const BN_R: [u64; 4] = [
    0x43e1f593f0000001,
    0x2833e84879b97091,
    0xb85045b68181585d,
    0x30644e72e131a029,
];

// |x| of BN254, 63 bits
const BN_X: u64 = 0x44e992b44a6909f1;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Big-endian encoding padded to `len` bytes.
fn encode(value: &BigUint, len: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    assert!(bytes.len() <= len);
    let mut out = vec![0u8; len - bytes.len()];
    out.extend(bytes);
    out
}

fn encode_u64(value: u64) -> Vec<u8> {
    encode(&BigUint::from(value), 32)
}

fn bn_field() -> PrimeField<4> {
    PrimeField::new(BigInt::from_limbs(BN_Q)).unwrap()
}

fn g1_curve(field: &PrimeField<4>, order: DynBigInt) -> WeierstrassCurve<Fp<'_, 4>> {
    let order_len = 32;
    WeierstrassCurve::new(Fp::zero(field), Fp::from_u64(3, field).unwrap(), order, order_len).unwrap()
}

/// `y^2 = x^3 + b` over Fp2 with `b` chosen so that `((1, 1), (2, 3))` is on
/// the curve.
fn g2_curve<'a>(extension: &'a Extension2<'a, 4>) -> WeierstrassCurve<Fp2<'a, 4>> {
    let (x, y) = g2_point_coords(extension);
    let mut b = y;
    b.square();
    let mut x3 = x;
    x3.square();
    x3.mul_assign(&x);
    b.sub_assign(&x3);

    WeierstrassCurve::new(Fp2::zero(extension), b, DynBigInt::from_u64(1), 1).unwrap()
}

fn g2_point_coords<'a>(extension: &'a Extension2<'a, 4>) -> (Fp2<'a, 4>, Fp2<'a, 4>) {
    let field = extension.field();
    let fp = |v| Fp::from_u64(v, field).unwrap();
    (
        Fp2::new(fp(1), fp(1), extension),
        Fp2::new(fp(2), fp(3), extension),
    )
}

fn minus_one(field: &PrimeField<4>) -> Fp<'_, 4> {
    let mut el = Fp::one(field);
    el.negate();
    el
}

fn g2_point_bytes() -> Vec<u8> {
    [1u64, 1, 2, 3].iter().flat_map(|&v| encode_u64(v)).collect()
}

#[test]
fn test_number_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);

    for len in 1..=32usize {
        let bytes: Vec<u8> = (0..len).map(|_| rng.random()).collect();
        let expected = BigUint::from_bytes_be(&bytes);

        let mut d = Deserializer::new(&bytes);
        let value: BigInt<4> = d.number(len, "value").unwrap();
        assert_eq!(value.as_biguint(), expected);
        assert!(d.ended());

        let mut d = Deserializer::new(&bytes);
        let value = d.dyn_number(len, false, "value").unwrap();
        assert_eq!(value.as_biguint(), expected);
    }
}

#[test]
fn test_canonical_encoding_rejection() {
    init_tracing();

    // padded modulus
    let mut input = vec![0u8];
    input.extend(encode(&BigInt::from_limbs(BN_Q).as_biguint(), 32));
    let mut d = Deserializer::new(&input);
    assert_eq!(
        decode_prime_field::<4>(&mut d, 33).err(),
        Some(Error::input("In modulus encoding highest byte is zero"))
    );

    // even modulus
    let mut d = Deserializer::new(&[0x04]);
    assert!(matches!(decode_modulus::<4>(&mut d, 1), Err(Error::Input(_))));

    // padded loop scalar
    let mut input = vec![9u8, 0x00];
    input.extend(BN_X.to_be_bytes());
    let mut d = Deserializer::new(&input);
    assert!(matches!(
        decode_loop_scalar_with_bit_limit(&mut d, 128),
        Err(Error::Input(_))
    ));

    // a padded group order is fine
    let mut input = vec![9u8, 0x00];
    input.extend(7u64.to_be_bytes());
    let mut d = Deserializer::new(&input);
    let len = decode_group_order_length(&mut d).unwrap();
    assert_eq!(decode_group_order(&mut d, len).unwrap(), DynBigInt::from_u64(7));
}

#[test]
fn test_decode_call_header() {
    init_tracing();

    let q = BigInt::from_limbs(BN_Q).as_biguint();
    let r = BigInt::from_limbs(BN_R).as_biguint();

    let mut input = vec![constants::BN, 32];
    input.extend(encode(&q, 32));
    // a, b, order
    input.extend(encode_u64(0));
    input.extend(encode_u64(3));
    input.push(32);
    input.extend(encode(&r, 32));
    // Fp2 non-residue -1
    input.extend(encode(&(q.clone() - 1u32), 32));
    input.push(constants::TWIST_TYPE_D);
    input.push(8);
    input.extend(BN_X.to_be_bytes());
    input.push(constants::SIGN_PLUS);

    let mut d = Deserializer::new(&input);
    assert_eq!(decode_pairing_curve_type(&mut d).unwrap(), CurveType::Bn);

    let mod_len = decode_modulus_byte_len(&mut d).unwrap();
    assert_eq!(num_limbs_for_modulus_byte_len(mod_len).unwrap(), 4);
    let field = decode_prime_field::<4>(&mut d, mod_len).unwrap();

    let curve = decode_weierstrass_curve(&mut d, &field, mod_len, true).unwrap();
    assert_eq!(curve.subgroup_order(), &DynBigInt::from_fixed(&BigInt::from_limbs(BN_R)));
    assert_eq!(num_units_for_group_order_length(curve.order_len()).unwrap(), 4);

    let extension = decode_extension2(&mut d, &field, mod_len, true, ValidationPolicy::Strict).unwrap();
    assert_eq!(*extension.non_residue(), minus_one(&field));
    assert!(extension.frobenius_calculated());

    assert_eq!(decode_twist_type(&mut d).unwrap(), TwistType::D);
    let x = decode_loop_scalar_with_bit_limit(&mut d, 64).unwrap();
    assert_eq!(x, DynBigInt::from_u64(BN_X));
    assert_eq!(decode_sign(&mut d).unwrap(), Sign::Plus);
    assert!(d.ended());
}

#[test]
fn test_decode_points_drops_identity_pairs() {
    init_tracing();

    let field = bn_field();
    let extension = Extension2::new(minus_one(&field), false).unwrap();
    let g1 = g1_curve(&field, DynBigInt::from_fixed(&BigInt::from_limbs(BN_R)));
    let g2 = g2_curve(&extension);

    let mut input = vec![3u8];
    // identity on G1
    input.push(1);
    input.extend(vec![0u8; 64]);
    input.push(0);
    input.extend(g2_point_bytes());
    // two regular points
    input.push(1);
    input.extend(encode_u64(1));
    input.extend(encode_u64(2));
    input.push(0);
    input.extend(g2_point_bytes());
    // identity on G2
    input.push(1);
    input.extend(encode_u64(1));
    input.extend(encode_u64(2));
    input.push(0);
    input.extend(vec![0u8; 128]);

    let mut d = Deserializer::new(&input);
    let pairs = decode_points(&mut d, 32, &field, &g1, &extension, &g2, ValidationPolicy::Strict).unwrap();
    assert!(d.ended());
    assert_eq!(pairs.len(), 1);

    let (p, q) = &pairs[0];
    assert_eq!(*p, CurvePoint::point(Fp::one(&field), Fp::from_u64(2, &field).unwrap()));
    let (x, y) = g2_point_coords(&extension);
    assert_eq!(*q, CurvePoint::point(x, y));
}

#[test]
fn test_subgroup_check_follows_flag() {
    init_tracing();

    let field = bn_field();
    let extension = Extension2::new(minus_one(&field), false).unwrap();
    // (1, 2) does not have order 7
    let g1 = g1_curve(&field, DynBigInt::from_u64(7));
    let g2 = g2_curve(&extension);

    let encode_pair = |flag: u8| {
        let mut input = vec![1u8, flag];
        input.extend(encode_u64(1));
        input.extend(encode_u64(2));
        input.push(0);
        input.extend(g2_point_bytes());
        input
    };

    let input = encode_pair(0);
    let mut d = Deserializer::new(&input);
    let pairs = decode_points(&mut d, 32, &field, &g1, &extension, &g2, ValidationPolicy::Strict).unwrap();
    assert_eq!(pairs.len(), 1);

    let input = encode_pair(1);
    let mut d = Deserializer::new(&input);
    assert_eq!(
        decode_points(&mut d, 32, &field, &g1, &extension, &g2, ValidationPolicy::Strict).err(),
        Some(Error::input("G1 or G2 point is not in the expected subgroup"))
    );

    let mut d = Deserializer::new(&input);
    let pairs = decode_points(&mut d, 32, &field, &g1, &extension, &g2, ValidationPolicy::Permissive).unwrap();
    assert_eq!(pairs.len(), 1);
}

#[test]
fn test_pair_is_read_before_subgroup_checks() {
    let field = bn_field();
    let extension = Extension2::new(minus_one(&field), false).unwrap();
    let g1 = g1_curve(&field, DynBigInt::from_u64(7));
    let g2 = g2_curve(&extension);

    // flagged G1 outside the order 7 subgroup, then an invalid G2 flag
    let mut input = vec![1u8, 1];
    input.extend(encode_u64(1));
    input.extend(encode_u64(2));
    input.push(2);
    input.extend(g2_point_bytes());

    let mut d = Deserializer::new(&input);
    assert_eq!(
        decode_points(&mut d, 32, &field, &g1, &extension, &g2, ValidationPolicy::Strict).err(),
        Some(Error::unknown_parameter("Unknown boolean value"))
    );

    // truncated G2 is reported before the G1 subgroup failure
    let mut input = vec![1u8, 1];
    input.extend(encode_u64(1));
    input.extend(encode_u64(2));
    input.push(0);
    input.extend(encode_u64(1));
    let mut d = Deserializer::new(&input);
    assert!(matches!(
        decode_points(&mut d, 32, &field, &g1, &extension, &g2, ValidationPolicy::Strict),
        Err(Error::Input(msg)) if msg.starts_with("Input is not long enough")
    ));
}

#[test]
fn test_decode_points_rejections() {
    let field = bn_field();
    let extension = Extension2::new(minus_one(&field), false).unwrap();
    let g1 = g1_curve(&field, DynBigInt::from_fixed(&BigInt::from_limbs(BN_R)));
    let g2 = g2_curve(&extension);

    let mut d = Deserializer::new(&[0u8]);
    assert_eq!(
        decode_points(&mut d, 32, &field, &g1, &extension, &g2, ValidationPolicy::Strict).err(),
        Some(Error::input("Zero pairs encoded"))
    );

    // off-curve G2 point
    let mut input = vec![1u8, 1];
    input.extend(encode_u64(1));
    input.extend(encode_u64(2));
    input.push(0);
    input.extend([1u64, 1, 2, 4].iter().flat_map(|&v| encode_u64(v)));
    let mut d = Deserializer::new(&input);
    assert_eq!(
        decode_points(&mut d, 32, &field, &g1, &extension, &g2, ValidationPolicy::Strict).err(),
        Some(Error::input("Point is not on curve"))
    );

    // bad flag
    let mut input = vec![1u8, 2];
    input.extend(vec![0u8; 64]);
    let mut d = Deserializer::new(&input);
    assert!(matches!(
        decode_points(&mut d, 32, &field, &g1, &extension, &g2, ValidationPolicy::Strict),
        Err(Error::UnknownParameter(_))
    ));

    // truncated second pair
    let mut input = vec![2u8, 1];
    input.extend(encode_u64(1));
    input.extend(encode_u64(2));
    input.push(0);
    input.extend(g2_point_bytes());
    input.push(1);
    let mut d = Deserializer::new(&input);
    assert!(matches!(
        decode_points(&mut d, 32, &field, &g1, &extension, &g2, ValidationPolicy::Strict),
        Err(Error::Input(_))
    ));
}

#[test]
fn test_scalar_multiplication_input() {
    let field = bn_field();
    let g1 = g1_curve(&field, DynBigInt::from_fixed(&BigInt::from_limbs(BN_R)));

    let mut input = encode_u64(1);
    input.extend(encode_u64(2));
    input.extend(encode_u64(5));

    let mut d = Deserializer::new(&input);
    let p = decode_curve_point(&mut d, &field, 32, &g1, ValidationPolicy::Strict).unwrap();
    let k = decode_scalar(&mut d, &g1).unwrap();
    assert!(d.ended());

    let mut expected = p.clone();
    for _ in 0..4 {
        expected = expected.add(&p, &g1);
    }
    assert_eq!(p.mul(k.as_limbs(), &g1), expected);
}

#[test]
fn test_enum_serialization() {
    for ty in [CurveType::Bls12, CurveType::Bn, CurveType::Mnt4, CurveType::Mnt6] {
        let bytes = bincode::serialize(&ty).unwrap();
        assert_eq!(bincode::deserialize::<CurveType>(&bytes).unwrap(), ty);
    }

    let bytes = bincode::serialize(&(TwistType::M, Sign::Minus, ValidationPolicy::Strict)).unwrap();
    let decoded: (TwistType, Sign, ValidationPolicy) = bincode::deserialize(&bytes).unwrap();
    assert_eq!(decoded, (TwistType::M, Sign::Minus, ValidationPolicy::Strict));
}
