//! A finite field of odd, prime order.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use ellipt_core::{Error, Result};

use crate::naf::miller_rabin;
use crate::residue::Residue;

/// Number of Miller–Rabin trials used to validate a field's prime order.
const MILLER_RABIN_TRIALS: u32 = 5;

/// GF(p) for an odd prime `p`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    p: BigUint,
}

impl PrimeField {
    /// Validates `p` via Miller–Rabin (`k = 5` trials) and rejects `p = 2`
    /// — only odd primes are supported.
    pub fn new(p: impl Into<BigUint>) -> Result<Self> {
        let p = p.into();
        let two = BigUint::from(2u8);
        if p == two || !miller_rabin(&p, MILLER_RABIN_TRIALS) {
            return Err(Error::InvalidFieldParameter(p.to_string()));
        }
        Ok(Self { p })
    }

    /// The field's order.
    pub fn order(&self) -> &BigUint {
        &self.p
    }

    /// Whether `res` is an element of this field, i.e. shares its modulus.
    pub fn contains(&self, res: &Residue) -> bool {
        *res.modulus() == BigInt::from(self.p.clone())
    }

    /// In-order iteration over `Residue(0, p), Residue(1, p), ..., Residue(p-1, p)`.
    pub fn iter(&self) -> PrimeFieldIter {
        PrimeFieldIter {
            p: self.p.clone(),
            current: BigUint::zero(),
        }
    }
}

impl<'a> IntoIterator for &'a PrimeField {
    type Item = Residue;
    type IntoIter = PrimeFieldIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of a [`PrimeField`], in ascending order.
pub struct PrimeFieldIter {
    p: BigUint,
    current: BigUint,
}

impl Iterator for PrimeFieldIter {
    type Item = Residue;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.p {
            return None;
        }
        let residue = Residue::new(
            BigInt::from(self.current.clone()),
            BigInt::from(self.p.clone()),
        )
        .expect("p already validated as positive");
        self.current += BigUint::one();
        Some(residue)
    }
}
