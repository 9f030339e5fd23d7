//! Modular residues, prime fields, and the integer helpers (NAF, Miller–Rabin,
//! extended Euclid) that the curve layer is built from.

#![forbid(unsafe_code)]

mod naf;
mod prime_field;
mod residue;

pub use naf::{extended_euclidean, miller_rabin, modular_inverse, to_binary, to_naf};
pub use prime_field::{PrimeField, PrimeFieldIter};
pub use residue::Residue;

pub use ellipt_core::{Error, Result};
