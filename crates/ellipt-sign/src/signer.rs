//! ECDSA key generation, signing and verification, generalized from
//! `erg-vanity-crypto`'s fixed secp256k1 `pubkey.rs` onto an arbitrary
//! catalog entry via `ellipt_curve::Curve`.

use std::str::FromStr;

use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
use num_integer::Integer;
use num_traits::Zero;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256, Sha384, Sha512};
use tracing::{debug, instrument};

use ellipt_core::{Error, Result};
use ellipt_curve::{Curve, Point};
use ellipt_field::modular_inverse;

use crate::catalog::{self, CurveKind, CurveName};

/// A generated signing key pair: a public point and its discrete log.
#[derive(Clone, Debug)]
pub struct KeyPair {
    pub pub_key: Point,
    pub priv_key: BigInt,
}

/// An ECDSA signature `(r, s)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub r: BigInt,
    pub s: BigInt,
}

/// ECDSA over a named curve from the parameter catalog.
pub struct Signer {
    curve: Curve,
    base_point: Point,
    n: BigInt,
}

impl Signer {
    /// Builds a signer for a catalog curve name, e.g. `"P-256"`.
    ///
    /// Fails with [`Error::UnknownCurve`] for a name outside the catalog, or
    /// [`Error::UnsupportedCurveType`] if the catalog entry is a Montgomery
    /// curve (no Montgomery entries exist today, but the signer still
    /// guards against one).
    #[instrument(skip(name), fields(curve = name))]
    pub fn new(name: &str) -> Result<Self> {
        let curve_name = CurveName::from_str(name)?;
        let params = catalog::lookup(curve_name);

        let curve = match params.kind {
            CurveKind::ShortWeierstrass => {
                Curve::short_weierstrass(params.a.clone(), params.b.clone(), params.p.clone())?
            }
            CurveKind::Montgomery => {
                return Err(Error::UnsupportedCurveType(
                    "montgomery curves are not supported by the signer".to_string(),
                ))
            }
        };
        let base_point = curve.create_point(params.g_x.clone(), params.g_y.clone())?;

        debug!("signer constructed");
        Ok(Self {
            curve,
            base_point,
            n: BigInt::from(params.n),
        })
    }

    /// Hashes `message` to an integer, picking SHA-256/384/512 by the
    /// order's bit length: `L <= 256` -> SHA-256, `L <= 384` -> SHA-384,
    /// else SHA-512.
    fn hash(&self, message: &[u8]) -> BigInt {
        let bits = self.n.bits();
        let digest = if bits <= 256 {
            Sha256::digest(message).to_vec()
        } else if bits <= 384 {
            Sha384::digest(message).to_vec()
        } else {
            Sha512::digest(message).to_vec()
        };
        BigInt::from_bytes_be(Sign::Plus, &digest)
    }

    fn sample_scalar(&self) -> BigInt {
        let one = BigUint::from(1u8);
        let upper = self.n.to_biguint().expect("curve order is positive");
        let mut rng = OsRng;
        BigInt::from(rng.gen_biguint_range(&one, &upper))
    }

    /// Samples `d` in `[1, n)` and computes `Q = d*G`.
    #[instrument(skip(self))]
    pub fn generate_key_pair(&self) -> Result<KeyPair> {
        let d = self.sample_scalar();
        let q = self.curve.scalar_mult(&self.base_point, &d, true)?;
        Ok(KeyPair {
            pub_key: q,
            priv_key: d,
        })
    }

    /// Signs `message` with `priv_key`, retrying with a fresh nonce `k`
    /// whenever `r` or `s` would come out to zero.
    #[instrument(skip(self, message, priv_key))]
    pub fn sign(&self, message: &[u8], priv_key: &BigInt) -> Result<Signature> {
        let h = self.hash(message);
        loop {
            let k = self.sample_scalar();
            let p = self.curve.scalar_mult(&self.base_point, &k, true)?;
            let r = p.coordinate(0)?.to_int().mod_floor(&self.n);
            if r.is_zero() {
                continue;
            }

            let k_inv = modular_inverse(&k, &self.n)?;
            let s = ((&h + priv_key * &r) * &k_inv).mod_floor(&self.n);
            if s.is_zero() {
                continue;
            }

            return Ok(Signature { r, s });
        }
    }

    /// Verifies `signature` over `message` against `pub_key`.
    ///
    /// Rejects out-of-range `r`/`s` per the standard ECDSA range
    /// `[1, n-1]`; the reimplementation corrects a stricter-than-intended
    /// lower bound and a too-loose upper bound present in the reference.
    #[instrument(skip(self, message, signature, pub_key))]
    pub fn verify(&self, message: &[u8], signature: &Signature, pub_key: &Point) -> Result<bool> {
        let one = BigInt::from(1u8);
        let n_minus_one = &self.n - &one;
        if signature.r < one
            || signature.r > n_minus_one
            || signature.s < one
            || signature.s > n_minus_one
        {
            return Ok(false);
        }

        let h = self.hash(message);
        let c = modular_inverse(&signature.s, &self.n)?;
        let u = (&h * &c).mod_floor(&self.n);
        let v = (&signature.r * &c).mod_floor(&self.n);

        let p = self.curve.add(
            &self.curve.scalar_mult(&self.base_point, &u, false)?,
            &self.curve.scalar_mult(pub_key, &v, false)?,
            true,
        )?;
        if p.is_infinity() {
            return Ok(false);
        }

        let x = p.coordinate(0)?.to_int().mod_floor(&self.n);
        Ok(x == signature.r)
    }
}
