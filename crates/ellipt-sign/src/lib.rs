//! ECDSA on top of `ellipt-curve`: a static named-curve catalog plus key
//! generation, signing and verification.

#![forbid(unsafe_code)]

mod catalog;
mod signer;

pub use catalog::{CurveKind, CurveName, CurveParams};
pub use signer::{KeyPair, Signature, Signer};

pub use ellipt_core::{Error, Result};
