//! Exercises the generic curve layer against the real secp256k1 parameters
//! the teacher workspace hard-codes as fixed limbs in
//! `erg-vanity-crypto/src/secp256k1`, to confirm the arbitrary-precision
//! generalization still gets a production-sized curve right.

use num_bigint::BigInt;

use ellipt_curve::Curve;

const P_HEX: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F";
const GX_HEX: &str = "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798";
const GY_HEX: &str = "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8";
const N_HEX: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141";

fn from_hex(s: &str) -> BigInt {
    BigInt::from_bytes_be(num_bigint::Sign::Plus, &hex::decode(s).unwrap())
}

fn secp256k1() -> Curve {
    Curve::short_weierstrass(0, 7, from_hex(P_HEX).to_biguint().unwrap()).unwrap()
}

#[test]
fn generator_lies_on_the_curve() {
    let curve = secp256k1();
    let g = curve
        .create_point(from_hex(GX_HEX), from_hex(GY_HEX))
        .unwrap();
    assert!(curve.contains(&g));
}

#[test]
fn doubling_matches_scalar_multiplication_by_two() {
    let curve = secp256k1();
    let g = curve
        .create_point(from_hex(GX_HEX), from_hex(GY_HEX))
        .unwrap();

    let doubled = curve.add(&g, &g, true).unwrap();
    let scaled = curve.scalar_mult(&g, &BigInt::from(2), true).unwrap();
    assert_eq!(doubled, scaled);
}

#[test]
fn scalar_multiplication_is_additive_for_small_multiples() {
    let curve = secp256k1();
    let g = curve
        .create_point(from_hex(GX_HEX), from_hex(GY_HEX))
        .unwrap();

    for k in 1u32..8 {
        let lhs = curve.scalar_mult(&g, &BigInt::from(k + 1), true).unwrap();
        let rhs = curve
            .add(
                &curve.scalar_mult(&g, &BigInt::from(k), true).unwrap(),
                &g,
                true,
            )
            .unwrap();
        assert_eq!(lhs, rhs, "k={k}");
    }
}

#[test]
fn order_times_generator_is_the_identity() {
    let curve = secp256k1();
    let g = curve
        .create_point(from_hex(GX_HEX), from_hex(GY_HEX))
        .unwrap();
    let n = from_hex(N_HEX);

    let result = curve.scalar_mult(&g, &n, true).unwrap();
    assert!(result.is_infinity());
}
