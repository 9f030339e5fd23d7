//! Static catalog of standardized curve parameters, keyed by name.
//!
//! Only the short-Weierstrass NIST P-series is populated. `CurveKind` keeps
//! a Montgomery arm so the catalog's shape matches the curve hierarchy it
//! feeds (`ellipt_curve::Curve`), but no Montgomery entry exists yet — a
//! lookup that somehow resolved to one would be rejected by the signer with
//! `UnsupportedCurveType`, per the catalog's record shape in the interface
//! this crate implements.

use std::collections::HashMap;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint};
use once_cell::sync::Lazy;

use ellipt_core::Error;

/// A name identifying an entry in the curve parameter catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveName {
    P192,
    P224,
    P256,
    P384,
    P521,
}

impl CurveName {
    fn as_str(self) -> &'static str {
        match self {
            Self::P192 => "P-192",
            Self::P224 => "P-224",
            Self::P256 => "P-256",
            Self::P384 => "P-384",
            Self::P521 => "P-521",
        }
    }
}

impl FromStr for CurveName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P-192" => Ok(Self::P192),
            "P-224" => Ok(Self::P224),
            "P-256" => Ok(Self::P256),
            "P-384" => Ok(Self::P384),
            "P-521" => Ok(Self::P521),
            other => Err(Error::UnknownCurve(other.to_string())),
        }
    }
}

/// Which of the two curve forms a catalog entry describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveKind {
    ShortWeierstrass,
    Montgomery,
}

/// The parameter record for one named curve: `{kind, a, b, p, n, g_x, g_y}`.
#[derive(Clone, Debug)]
pub struct CurveParams {
    pub kind: CurveKind,
    pub a: BigInt,
    pub b: BigInt,
    pub p: BigUint,
    pub n: BigUint,
    pub g_x: BigInt,
    pub g_y: BigInt,
}

fn hex_uint(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 16).expect("catalog constants are valid hex")
}

fn hex_int(s: &str) -> BigInt {
    BigInt::from(hex_uint(s))
}

/// `p - 3`, the coefficient every NIST P-curve below uses for `a`.
fn minus_three(p: &BigUint) -> BigInt {
    BigInt::from(p.clone()) - BigInt::from(3u8)
}

fn p192() -> CurveParams {
    let p = hex_uint("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFF");
    CurveParams {
        kind: CurveKind::ShortWeierstrass,
        a: minus_three(&p),
        b: hex_int("64210519E59C80E70FA7E9AB72243049FEB8DEECC146B9B1"),
        n: hex_uint("FFFFFFFFFFFFFFFFFFFFFFFF99DEF836146BC9B1B4D22831"),
        g_x: hex_int("188DA80EB03090F67CBF20EB43A18800F4FF0AFD82FF1012"),
        g_y: hex_int("07192B95FFC8DA78631011ED6B24CDD573F977A11E794811"),
        p,
    }
}

fn p224() -> CurveParams {
    let p = hex_uint("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000001");
    CurveParams {
        kind: CurveKind::ShortWeierstrass,
        a: minus_three(&p),
        b: hex_int("B4050A850C04B3ABF54132565044B0B7D7BFD8BA270B39432355FFB4"),
        n: hex_uint("FFFFFFFFFFFFFFFFFFFFFFFFFFFF16A2E0B8F03E13DD29455C5C2A3D"),
        g_x: hex_int("B70E0CBD6BB4BF7F321390B94A03C1D356C21122343280D6115C1D21"),
        g_y: hex_int("BD376388B5F723FB4C22DFE6CD4375A05A07476444D5819985007E34"),
        p,
    }
}

fn p256() -> CurveParams {
    let p = hex_uint("FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF");
    CurveParams {
        kind: CurveKind::ShortWeierstrass,
        a: minus_three(&p),
        b: hex_int("5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B"),
        n: hex_uint("FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551"),
        g_x: hex_int("6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296"),
        g_y: hex_int("4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5"),
        p,
    }
}

fn p384() -> CurveParams {
    let p = hex_uint(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFF0000000000000000FFFFFFFF",
    );
    CurveParams {
        kind: CurveKind::ShortWeierstrass,
        a: minus_three(&p),
        b: hex_int(
            "B3312FA7E23EE7E4988E056BE3F82D19181D9C6EFE8141120314088F5013875AC656398D8A2ED19D2A85C8EDD3EC2AEF",
        ),
        n: hex_uint(
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC7634D81F4372DDF581A0DB248B0A77AECEC196ACCC52973",
        ),
        g_x: hex_int(
            "AA87CA22BE8B05378EB1C71EF320AD746E1D3B628BA79B9859F741E082542A385502F25DBF55296C3A545E3872760AB7",
        ),
        g_y: hex_int(
            "3617DE4A96262C6F5D9E98BF9292DC29F8F41DBD289A147CE9DA3113B5F0B8C00A60B1CE1D7E819D7A431D7C90EA0E5F",
        ),
        p,
    }
}

fn p521() -> CurveParams {
    let p = hex_uint(
        "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
    );
    CurveParams {
        kind: CurveKind::ShortWeierstrass,
        a: minus_three(&p),
        b: hex_int(
            "0051953EB9618E1C9A1F929A21A0B68540EEA2DA725B99B315F3B8B489918EF109E156193951EC7E937B1652C0BD3BB1BF073573DF883D2C34F1EF451FD46B503F00",
        ),
        n: hex_uint(
            "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFA51868783BF2F966B7FCC0148F709A5D03BB5C9B8899C47AEBB6FB71E91386409",
        ),
        g_x: hex_int(
            "00C6858E06B70404E9CD9E3ECB662395B4429C648139053FB521F828AF606B4D3DBAA14B5E77EFE75928FE1DC127A2FFA8DE3348B3C1856A429BF97E7E31C2E5BD66",
        ),
        g_y: hex_int(
            "011839296A789A3BC0045C8A5FB42C7D1BD998F54449579B446817AFBD17273E662C97EE72995EF42640C550B9013FAD0761353C7086A272C24088BE94769FD16650",
        ),
        p,
    }
}

static CATALOG: Lazy<HashMap<CurveName, CurveParams>> = Lazy::new(|| {
    HashMap::from([
        (CurveName::P192, p192()),
        (CurveName::P224, p224()),
        (CurveName::P256, p256()),
        (CurveName::P384, p384()),
        (CurveName::P521, p521()),
    ])
});

/// Looks up a curve's parameters by name.
///
/// The catalog is populated for every [`CurveName`] variant, so this never
/// fails — a bad *string* fails earlier, at `CurveName::from_str`.
pub fn lookup(name: CurveName) -> CurveParams {
    CATALOG
        .get(&name)
        .cloned()
        .unwrap_or_else(|| panic!("catalog missing entry for {}", name.as_str()))
}
