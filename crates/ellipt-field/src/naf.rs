//! Integer helpers shared by the field and curve layers: extended Euclid,
//! modular inverse, Miller–Rabin primality, and non-adjacent-form encoding.

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use rand::thread_rng;

use ellipt_core::{Error, Result};

/// Computes `gcd(a, b)` and Bézout coefficients `(x, y)` such that
/// `gcd = a*x + b*y`, via the extended Euclidean algorithm.
pub fn extended_euclidean(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a.is_zero() && b.is_zero() {
        // Matches the reference: gcd(0, 0) is undefined, but callers in
        // this workspace only ever reach this with at least one non-zero
        // operand, so we return the conventional (0, 0, 0) rather than
        // threading a Result through every call site.
        return (BigInt::zero(), BigInt::zero(), BigInt::zero());
    }
    if a.is_zero() {
        return (b.clone(), BigInt::zero(), BigInt::one());
    }
    if b.is_zero() {
        return (a.clone(), BigInt::one(), BigInt::zero());
    }

    let (mut r_old, mut r) = (a.clone(), b.clone());
    let (mut s_old, mut s) = (BigInt::one(), BigInt::zero());
    let (mut t_old, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &r_old / &r;
        let r_new = &r_old - &q * &r;
        r_old = std::mem::replace(&mut r, r_new);

        let s_new = &s_old - &q * &s;
        s_old = std::mem::replace(&mut s, s_new);

        let t_new = &t_old - &q * &t;
        t_old = std::mem::replace(&mut t, t_new);
    }

    (r_old, s_old, t_old)
}

/// The multiplicative inverse of `a` modulo `m`, via extended Euclid.
///
/// Fails with [`Error::NoInverse`] when `gcd(a, m) != 1`.
pub fn modular_inverse(a: &BigInt, m: &BigInt) -> Result<BigInt> {
    let (gcd, x, _) = extended_euclidean(a, m);
    if gcd.abs() != BigInt::one() {
        return Err(Error::NoInverse);
    }
    Ok(x.mod_floor(m))
}

/// Miller–Rabin primality test with `k` trials.
///
/// Returns `true` if `n` is prime with probability at least `1 - 4^-k`.
pub fn miller_rabin(n: &BigUint, k: u32) -> bool {
    let zero = BigUint::zero();
    let one = BigUint::one();
    let two = BigUint::from(2u8);
    let three = BigUint::from(3u8);

    if *n == two || *n == three {
        return true;
    }
    if *n <= one || (n % &two).is_zero() {
        return false;
    }

    let n_minus_one = n - &one;
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while (&d % &two).is_zero() {
        s += 1;
        d /= &two;
    }

    let mut rng = thread_rng();
    'witness: for _ in 0..k {
        let a = rng.gen_biguint_range(&two, &(n - &two));
        let mut x = a.modpow(&d, n);
        if x == one || x == n_minus_one {
            continue;
        }
        for _ in 0..s.saturating_sub(1) {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// The bit representation of `n`, most-significant bit first.
pub fn to_binary(n: &BigInt) -> Vec<u8> {
    if n.is_zero() {
        return vec![0];
    }
    let mut n = n.abs();
    let two = BigInt::from(2);
    let mut bits = Vec::new();
    while !n.is_zero() {
        let bit: u8 = if (&n % &two).is_zero() { 0 } else { 1 };
        bits.push(bit);
        n /= &two;
    }
    bits.reverse();
    bits
}

/// The non-adjacent form (NAF) of `n`: digits in `{-1, 0, 1}` with no two
/// adjacent non-zero digits, most-significant digit first.
///
/// `n` must be non-negative.
pub fn to_naf(n: &BigInt) -> Vec<i8> {
    debug_assert!(*n >= BigInt::zero(), "NAF is only defined for n >= 0");
    if n.is_zero() {
        return vec![0];
    }
    let mut n = n.clone();
    let two = BigInt::from(2);
    let four = BigInt::from(4);
    let mut naf = Vec::new();
    while !n.is_zero() {
        if (&n % &two) != BigInt::zero() {
            let rem4 = &n % &four;
            let z: i8 = if rem4 == BigInt::from(1) { 1 } else { -1 };
            naf.push(z);
            n -= BigInt::from(z);
        } else {
            naf.push(0);
        }
        n /= &two;
    }
    naf.reverse();
    naf
}
