//! An integer modulo a fixed modulus.
//!
//! Generalizes `erg-vanity-crypto`'s fixed 4x64-limb secp256k1 field
//! element to an arbitrary modulus, per the non-fixed-width requirement
//! for the generic core.

use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use ellipt_core::{Error, Result};

use crate::naf::modular_inverse;

/// A value `a` in `[0, m)`, i.e. a residue modulo `m`.
#[derive(Clone, Debug, Hash)]
pub struct Residue {
    a: BigInt,
    m: BigInt,
}

impl Residue {
    /// Builds `a mod m`, normalizing `a` into `[0, m)`.
    ///
    /// Fails with [`Error::InvalidFieldParameter`] when `m <= 0` — the
    /// reference implementation this is ported from only catches this
    /// implicitly, via a downstream division by zero; we validate it here.
    pub fn new(a: impl Into<BigInt>, m: impl Into<BigInt>) -> Result<Self> {
        let m = m.into();
        if m <= BigInt::zero() {
            return Err(Error::InvalidFieldParameter(format!(
                "modulus must be positive, got {m}"
            )));
        }
        let a = a.into().mod_floor(&m);
        Ok(Self { a, m })
    }

    fn same_modulus(&self, other: &Self) -> Result<()> {
        if self.m != other.m {
            return Err(Error::ModulusMismatch {
                lhs: self.m.to_string(),
                rhs: other.m.to_string(),
            });
        }
        Ok(())
    }

    /// The modulus this residue is defined over.
    pub fn modulus(&self) -> &BigInt {
        &self.m
    }

    /// The canonical representative in `[0, m)`.
    pub fn to_int(&self) -> BigInt {
        self.a.clone()
    }

    pub fn is_zero(&self) -> bool {
        self.a.is_zero()
    }

    pub fn add(&self, other: &Self) -> Result<Self> {
        self.same_modulus(other)?;
        Self::new(&self.a + &other.a, self.m.clone())
    }

    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.same_modulus(other)?;
        Self::new(&self.a - &other.a, self.m.clone())
    }

    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.same_modulus(other)?;
        Self::new(&self.a * &other.a, self.m.clone())
    }

    /// `self / other`, i.e. `self * inverse(other)`.
    ///
    /// Fails with [`Error::NoInverse`] when `gcd(other, m) != 1`.
    pub fn div(&self, other: &Self) -> Result<Self> {
        self.same_modulus(other)?;
        let inv = modular_inverse(&other.a, &self.m)?;
        self.mul(&Self::new(inv, self.m.clone())?)
    }

    /// `self^n mod m` for a non-negative integer exponent `n`, computed by
    /// square-and-multiply so the intermediate never grows to `a^n` in full.
    pub fn pow(&self, n: &BigInt) -> Self {
        debug_assert!(*n >= BigInt::zero(), "pow exponent must be non-negative");
        let mut result = Self {
            a: BigInt::one() % &self.m,
            m: self.m.clone(),
        };
        let mut base = self.clone();
        let mut exp = n.clone();
        let two = BigInt::from(2);
        while exp > BigInt::zero() {
            if (&exp % &two) == BigInt::one() {
                result = result.mul(&base).expect("moduli always match");
            }
            base = base.mul(&base).expect("moduli always match");
            exp /= &two;
        }
        result
    }

    /// `-self mod m`.
    pub fn neg(&self) -> Self {
        Self::new(-&self.a, self.m.clone()).expect("modulus already validated")
    }

    /// The multiplicative inverse, or `None` if `gcd(self, m) != 1`.
    pub fn inverse(&self) -> Option<Self> {
        modular_inverse(&self.a, &self.m)
            .ok()
            .map(|inv| Self::new(inv, self.m.clone()).expect("modulus already validated"))
    }
}

impl PartialEq for Residue {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.m == other.m
    }
}

impl Eq for Residue {}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(a: i64, m: i64) -> Residue {
        Residue::new(a, m).unwrap()
    }

    #[test]
    fn normalizes_on_construction() {
        assert_eq!(r(-1, 13).to_int(), BigInt::from(12));
        assert_eq!(r(14, 13).to_int(), BigInt::from(1));
        assert_eq!(r(0, 13).to_int(), BigInt::from(0));
    }

    #[test]
    fn rejects_nonpositive_modulus() {
        assert!(Residue::new(1, 0).is_err());
        assert!(Residue::new(1, -5).is_err());
    }

    #[test]
    fn add_sub_mul_roundtrip() {
        let a = r(7, 13);
        let b = r(9, 13);
        assert_eq!(a.add(&b).unwrap().sub(&b).unwrap(), a);
        assert_eq!(a.sub(&b).unwrap().add(&b).unwrap(), a);
        assert_eq!(a.mul(&b).unwrap(), r(7 * 9 % 13, 13));
    }

    #[test]
    fn modulus_mismatch_errors() {
        let a = r(1, 13);
        let b = r(1, 7);
        assert!(matches!(a.add(&b), Err(Error::ModulusMismatch { .. })));
    }

    #[test]
    fn division_and_inverse() {
        let a = r(2, 13);
        let inv = a.inverse().unwrap();
        assert_eq!(a.mul(&inv).unwrap(), r(1, 13));
        assert_eq!(a.div(&a).unwrap(), r(1, 13));
    }

    #[test]
    fn no_inverse_for_non_coprime() {
        // gcd(2, 4) != 1 in Z/4Z — not a field, but Residue itself doesn't
        // require a prime modulus, only division does.
        let a = r(2, 4);
        assert!(a.inverse().is_none());
    }

    #[test]
    fn pow_matches_repeated_mul() {
        let a = r(5, 13);
        let mut expected = r(1, 13);
        for _ in 0..7 {
            expected = expected.mul(&a).unwrap();
        }
        assert_eq!(a.pow(&BigInt::from(7)), expected);
    }

    #[test]
    fn neg_is_additive_inverse() {
        let a = r(5, 13);
        assert!(a.add(&a.neg()).unwrap().is_zero());
    }
}
