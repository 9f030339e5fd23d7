//! Field-law property tests swept across several small primes.
//!
//! Complements the fixed p=13 examples in the unit tests with a broader
//! sweep, so an off-by-one in modular reduction can't hide behind a single
//! lucky modulus.

use num_bigint::BigInt;
use proptest::prelude::*;

use ellipt_field::Residue;

const SMALL_PRIMES: [i64; 5] = [13, 17, 3623, 10007, 65537];

fn prime_at(idx: usize) -> i64 {
    SMALL_PRIMES[idx % SMALL_PRIMES.len()]
}

proptest! {
    #[test]
    fn addition_is_associative(idx in 0usize..100, a: i64, b: i64, c: i64) {
        let p = prime_at(idx);
        let a = Residue::new(a, p).unwrap();
        let b = Residue::new(b, p).unwrap();
        let c = Residue::new(c, p).unwrap();
        let lhs = a.add(&b).unwrap().add(&c).unwrap();
        let rhs = a.add(&b.add(&c).unwrap()).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn multiplication_distributes_over_addition(idx in 0usize..100, a: i64, b: i64, c: i64) {
        let p = prime_at(idx);
        let a = Residue::new(a, p).unwrap();
        let b = Residue::new(b, p).unwrap();
        let c = Residue::new(c, p).unwrap();
        let lhs = a.mul(&b.add(&c).unwrap()).unwrap();
        let rhs = a.mul(&b).unwrap().add(&a.mul(&c).unwrap()).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn additive_and_multiplicative_identities_hold(idx in 0usize..100, a: i64) {
        let p = prime_at(idx);
        let zero = Residue::new(0, p).unwrap();
        let one = Residue::new(1, p).unwrap();
        let a = Residue::new(a, p).unwrap();
        prop_assert_eq!(a.add(&zero).unwrap(), a.clone());
        prop_assert_eq!(a.mul(&one).unwrap(), a);
    }

    #[test]
    fn nonzero_elements_have_a_multiplicative_inverse(idx in 0usize..100, a in 1i64..1_000_000) {
        let p = prime_at(idx);
        let a = Residue::new(a, p).unwrap();
        if a.is_zero() {
            return Ok(());
        }
        let one = Residue::new(1, p).unwrap();
        let inv = a.inverse().expect("p is prime, a != 0");
        prop_assert_eq!(a.mul(&inv).unwrap(), one);
    }
}

#[test]
fn naf_round_trips_for_seed_scenarios() {
    use ellipt_field::to_naf;

    assert_eq!(to_naf(&BigInt::from(7)), vec![1, 0, 0, -1]);
    assert_eq!(to_naf(&BigInt::from(10)), vec![1, 0, 1, 0]);
}
