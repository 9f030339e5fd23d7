//! Elliptic curve points (affine, Jacobian, infinity) and the group law on
//! short-Weierstrass and Montgomery curves, generalized from the
//! secp256k1-specific implementation in `erg-vanity-crypto` to an arbitrary
//! prime field.

#![forbid(unsafe_code)]

mod curve;
mod point;

pub use curve::Curve;
pub use point::Point;

pub use ellipt_core::{Error, Result};
