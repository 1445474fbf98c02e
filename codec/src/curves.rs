//! Curve parameters, points and point pairs.

use arith::{CurvePoint, DynBigInt, FieldElement, Result, WeierstrassCurve};
use tracing::debug;

use crate::constants::MAX_GROUP_BYTE_LEN;
use crate::deserializer::Deserializer;
use crate::errors::{input_err, unknown_parameter_err};
use crate::fields::FieldDecoder;
use crate::policy::ValidationPolicy;
use crate::primitives::decode_boolean;

pub fn decode_group_order_length(d: &mut Deserializer<'_>) -> Result<usize> {
    let len = d.byte("group order length")? as usize;
    if len == 0 {
        return Err(input_err("Group order length is zero"));
    }
    if len > MAX_GROUP_BYTE_LEN {
        return Err(input_err("Group order length is too large"));
    }

    Ok(len)
}

/// Group order of `byte_len` bytes. Leading zero bytes are allowed.
pub fn decode_group_order(d: &mut Deserializer<'_>, byte_len: usize) -> Result<DynBigInt> {
    let order = d.dyn_number(byte_len, false, "group order")?;
    if order.is_zero() {
        return Err(input_err("Group order is zero"));
    }

    Ok(order)
}

/// Reads `a`, `b`, the group order length and the group order. Curve
/// families with `a = 0` pass `a_must_be_zero`.
pub fn decode_weierstrass_curve<'a, F: FieldDecoder<'a>>(
    d: &mut Deserializer<'_>,
    field: &'a F,
    mod_byte_len: usize,
    a_must_be_zero: bool,
) -> Result<WeierstrassCurve<F::Element>> {
    let a = field.decode_element(mod_byte_len, d)?;
    let b = field.decode_element(mod_byte_len, d)?;

    if a_must_be_zero && !a.is_zero() {
        return Err(unknown_parameter_err("A parameter must be zero"));
    }
    if b.is_zero() {
        return Err(unknown_parameter_err("curve shape is not supported"));
    }

    let order_len = decode_group_order_length(d)?;
    let order = decode_group_order(d, order_len)?;

    WeierstrassCurve::new(a, b, order, order_len)
}

/// Affine point `(x, y)`, `(0, 0)` being the identity. The on-curve check
/// is only enforced under the strict policy.
pub fn decode_curve_point<'a, F: FieldDecoder<'a>>(
    d: &mut Deserializer<'_>,
    field: &'a F,
    mod_byte_len: usize,
    curve: &WeierstrassCurve<F::Element>,
    policy: ValidationPolicy,
) -> Result<CurvePoint<F::Element>> {
    let x = field.decode_element(mod_byte_len, d)?;
    let y = field.decode_element(mod_byte_len, d)?;
    let point = CurvePoint::point(x, y);

    policy.enforce(point.check_on_curve(curve), || input_err("Point is not on curve"))?;

    Ok(point)
}

/// Scalar for multiplication on `curve`, `order_len` bytes, not dense
/// checked.
pub fn decode_scalar<F: FieldElement>(d: &mut Deserializer<'_>, curve: &WeierstrassCurve<F>) -> Result<DynBigInt> {
    d.dyn_number(curve.order_len(), false, "scalar")
}

/// Pairing input: a count byte followed by `(flag, g1, flag, g2)` records.
/// A set flag requests a subgroup check of the following point. Pairs with
/// an identity on either side do not contribute to a pairing and are left
/// out of the result.
pub fn decode_points<'a, G1: FieldDecoder<'a>, G2: FieldDecoder<'a>>(
    d: &mut Deserializer<'_>,
    mod_byte_len: usize,
    g1_field: &'a G1,
    g1_curve: &WeierstrassCurve<G1::Element>,
    g2_field: &'a G2,
    g2_curve: &WeierstrassCurve<G2::Element>,
    policy: ValidationPolicy,
) -> Result<Vec<(CurvePoint<G1::Element>, CurvePoint<G2::Element>)>> {
    let num_pairs = d.byte("number of pairs")? as usize;
    if num_pairs == 0 {
        return Err(input_err("Zero pairs encoded"));
    }

    let mut pairs = Vec::with_capacity(num_pairs);
    for _ in 0..num_pairs {
        let check_g1 = decode_boolean(d)?;
        let g1 = decode_curve_point(d, g1_field, mod_byte_len, g1_curve, policy)?;
        let check_g2 = decode_boolean(d)?;
        let g2 = decode_curve_point(d, g2_field, mod_byte_len, g2_curve, policy)?;

        // both points of a pair are read before either subgroup check
        if check_g1 {
            check_subgroup(&g1, g1_curve, policy)?;
        }
        if check_g2 {
            check_subgroup(&g2, g2_curve, policy)?;
        }

        if g1.is_zero() || g2.is_zero() {
            continue;
        }
        pairs.push((g1, g2));
    }

    debug!(num_pairs, kept = pairs.len(), "decoded point pairs");
    Ok(pairs)
}

fn check_subgroup<F: FieldElement>(
    point: &CurvePoint<F>,
    curve: &WeierstrassCurve<F>,
    policy: ValidationPolicy,
) -> Result<()> {
    policy.enforce(point.check_correct_subgroup(curve), || {
        input_err("G1 or G2 point is not in the expected subgroup")
    })
}
