//! Short-Weierstrass and Montgomery curves over GF(p), and the group law
//! (addition, doubling, NAF scalar multiplication) defined on them.

use num_bigint::BigInt;

use ellipt_core::{Error, Result};
use ellipt_field::{to_naf, PrimeField, Residue};

use crate::point::Point;

/// An elliptic curve in one of two supported forms.
#[derive(Clone, Debug)]
pub enum Curve {
    /// `y^2 = x^3 + ax + b`.
    ShortWeierstrass {
        a: Residue,
        b: Residue,
        field: PrimeField,
    },
    /// `by^2 = x^3 + ax^2 + x`.
    Montgomery {
        a: Residue,
        b: Residue,
        field: PrimeField,
    },
}

impl Curve {
    /// Builds a short-Weierstrass curve `y^2 = x^3 + ax + b` over `GF(p)`.
    ///
    /// Fails with [`Error::InvalidFieldParameter`] if `p` is not an odd
    /// prime, or [`Error::SingularCurve`] if `4a^3 + 27b^2 = 0 (mod p)`.
    pub fn short_weierstrass(
        a: impl Into<BigInt>,
        b: impl Into<BigInt>,
        p: impl Into<num_bigint::BigUint>,
    ) -> Result<Self> {
        let field = PrimeField::new(p)?;
        let p_int = BigInt::from(field.order().clone());
        let a = Residue::new(a, p_int.clone())?;
        let b = Residue::new(b, p_int.clone())?;

        let four = Residue::new(4, p_int.clone())?;
        let twenty_seven = Residue::new(27, p_int.clone())?;
        let a3 = a.pow(&BigInt::from(3));
        let b2 = b.pow(&BigInt::from(2));
        let discriminant = four.mul(&a3)?.add(&twenty_seven.mul(&b2)?)?;
        if discriminant.is_zero() {
            return Err(Error::SingularCurve);
        }

        Ok(Self::ShortWeierstrass { a, b, field })
    }

    /// Builds a Montgomery curve `by^2 = x^3 + ax^2 + x` over `GF(p)`.
    ///
    /// Fails with [`Error::InvalidFieldParameter`] if `p` is not an odd
    /// prime, or [`Error::SingularCurve`] if `b = 0` or `a^2 = 4 (mod p)`.
    pub fn montgomery(
        a: impl Into<BigInt>,
        b: impl Into<BigInt>,
        p: impl Into<num_bigint::BigUint>,
    ) -> Result<Self> {
        let field = PrimeField::new(p)?;
        let p_int = BigInt::from(field.order().clone());
        let a = Residue::new(a, p_int.clone())?;
        let b = Residue::new(b, p_int.clone())?;

        let four = Residue::new(4, p_int.clone())?;
        if b.is_zero() || a.pow(&BigInt::from(2)) == four {
            return Err(Error::SingularCurve);
        }

        Ok(Self::Montgomery { a, b, field })
    }

    fn field(&self) -> &PrimeField {
        match self {
            Self::ShortWeierstrass { field, .. } => field,
            Self::Montgomery { field, .. } => field,
        }
    }

    fn modulus(&self) -> BigInt {
        BigInt::from(self.field().order().clone())
    }

    /// The curve's point at infinity, the group identity.
    pub fn infinity(&self) -> Point {
        Point::Infinity
    }

    /// Whether a point lies on the curve (Infinity always does).
    pub fn contains(&self, p: &Point) -> bool {
        if p.is_infinity() {
            return true;
        }
        let affine = p.to_affine();
        let (x, y) = match &affine {
            Point::Affine { x, y } => (x, y),
            _ => return true, // to_affine() turned a Z=0 Jacobian into Infinity
        };
        match self {
            Self::ShortWeierstrass { a, b, .. } => {
                let lhs = y.mul(y).expect("shared modulus");
                let rhs = x
                    .mul(x)
                    .and_then(|x2| x2.mul(x))
                    .and_then(|x3| x3.add(&a.mul(x).expect("shared modulus")))
                    .and_then(|s| s.add(b))
                    .expect("shared modulus");
                lhs == rhs
            }
            Self::Montgomery { a, b, .. } => {
                let lhs = b.mul(&y.mul(y).expect("shared modulus")).expect("shared modulus");
                let x2 = x.mul(x).expect("shared modulus");
                let rhs = x2
                    .mul(x)
                    .and_then(|x3| x3.add(&a.mul(&x2).expect("shared modulus")))
                    .and_then(|s| s.add(x))
                    .expect("shared modulus");
                lhs == rhs
            }
        }
    }

    /// Creates a point `(x, y)` on the curve, in Jacobian coordinates.
    ///
    /// Fails with [`Error::PointNotOnCurve`] if `(x, y)` does not satisfy the
    /// curve equation.
    pub fn create_point(&self, x: impl Into<BigInt>, y: impl Into<BigInt>) -> Result<Point> {
        let m = self.modulus();
        let point = Point::affine(Residue::new(x, m.clone())?, Residue::new(y, m)?);
        if !self.contains(&point) {
            return Err(Error::PointNotOnCurve);
        }
        Ok(point.to_jacobian())
    }

    /// `P + Q`, returned in Jacobian coordinates unless `to_affine` is set.
    pub fn add(&self, p: &Point, q: &Point, to_affine: bool) -> Result<Point> {
        let result = match self {
            Self::ShortWeierstrass { .. } => self.add_short_weierstrass(p, q)?,
            Self::Montgomery { .. } => self.add_montgomery(p, q)?,
        };
        Ok(if to_affine {
            result.to_affine()
        } else {
            result
        })
    }

    fn add_short_weierstrass(&self, p: &Point, q: &Point) -> Result<Point> {
        if p.is_infinity() {
            return Ok(q.clone());
        }
        if q.is_infinity() {
            return Ok(p.clone());
        }
        if p.negate() == *q {
            return Ok(Point::Infinity);
        }
        if p == q {
            return self.double(p);
        }

        let p = p.to_jacobian();
        let q = q.to_jacobian();
        let (x1, y1, z1) = jacobian_parts(&p);
        let (x2, y2, z2) = jacobian_parts(&q);

        let z1_2 = z1.mul(z1)?;
        let z2_2 = z2.mul(z2)?;
        let z1_3 = z1_2.mul(z1)?;
        let z2_3 = z2_2.mul(z2)?;

        let u = x1.mul(&z2_2)?;
        let v = x2.mul(&z1_2)?;
        let s = y1.mul(&z2_3)?;
        let t = y2.mul(&z1_3)?;

        if u == v {
            return if s == t {
                self.double(&p)
            } else {
                Ok(Point::Infinity)
            };
        }

        let h = v.sub(&u)?;
        let r = t.sub(&s)?;
        let h2 = h.mul(&h)?;
        let h3 = h2.mul(&h)?;
        let uh2 = u.mul(&h2)?;

        let two = Residue::new(2, self.modulus())?;
        let x_new = r.mul(&r)?.sub(&h3)?.sub(&two.mul(&uh2)?)?;
        let y_new = r.mul(&uh2.sub(&x_new)?)?.sub(&s.mul(&h3)?)?;
        let z_new = h.mul(z1)?.mul(z2)?;

        Ok(Point::jacobian(x_new, y_new, z_new))
    }

    /// `2P` on a short-Weierstrass curve.
    fn double(&self, p: &Point) -> Result<Point> {
        let Self::ShortWeierstrass { a, .. } = self else {
            unreachable!("double is only called for short-Weierstrass curves")
        };
        if p.is_infinity() {
            return Ok(Point::Infinity);
        }
        let p = p.to_jacobian();
        let (x, y, z) = jacobian_parts(&p);
        if y.is_zero() {
            return Ok(Point::Infinity);
        }

        let m_val = self.modulus();
        let two = Residue::new(2, m_val.clone())?;
        let three = Residue::new(3, m_val.clone())?;
        let four = Residue::new(4, m_val.clone())?;
        let eight = Residue::new(8, m_val.clone())?;
        let minus_three = Residue::new(-3, m_val)?;

        let y2 = y.mul(y)?;
        let z2 = z.mul(z)?;
        let s = four.mul(x)?.mul(&y2)?;

        let m = if *a == minus_three {
            let xp = x.add(&z2)?;
            let xm = x.sub(&z2)?;
            three.mul(&xp)?.mul(&xm)?
        } else {
            three.mul(x)?.mul(x)?.add(&a.mul(&z2.mul(&z2)?)?)?
        };

        let t = m.mul(&m)?.sub(&two.mul(&s)?)?;
        let x_new = t.clone();
        let y_new = m.mul(&s.sub(&t)?)?.sub(&eight.mul(&y2.mul(&y2)?)?)?;
        let z_new = two.mul(y)?.mul(z)?;

        Ok(Point::jacobian(x_new, y_new, z_new))
    }

    fn add_montgomery(&self, p: &Point, q: &Point) -> Result<Point> {
        if !(self.contains(p) && self.contains(q)) {
            return Err(Error::PointNotOnCurve);
        }
        if p.is_infinity() {
            return Ok(q.clone());
        }
        if q.is_infinity() {
            return Ok(p.clone());
        }
        if p.negate() == *q {
            return Ok(Point::Infinity);
        }

        let Self::Montgomery { a, b, .. } = self else {
            unreachable!("add_montgomery is only called for Montgomery curves")
        };

        let p_aff = p.to_affine();
        let q_aff = q.to_affine();
        let (x1, y1) = match &p_aff {
            Point::Affine { x, y } => (x, y),
            _ => return Ok(Point::Infinity),
        };
        let (x2, y2) = match &q_aff {
            Point::Affine { x, y } => (x, y),
            _ => return Ok(Point::Infinity),
        };

        let m = self.modulus();
        let one = Residue::new(1, m.clone())?;
        let two = Residue::new(2, m.clone())?;
        let three = Residue::new(3, m)?;

        let lambda = if p_aff == q_aff {
            let num = three.mul(x1)?.mul(x1)?.add(&two.mul(a)?.mul(x1)?)?.add(&one)?;
            let den = two.mul(b)?.mul(y1)?;
            num.div(&den)?
        } else {
            y2.sub(y1)?.div(&x2.sub(x1)?)?
        };

        let x_new = b
            .mul(&lambda.mul(&lambda)?)?
            .sub(a)?
            .sub(x1)?
            .sub(x2)?;
        let y_new = lambda.mul(&x1.sub(&x_new)?)?.sub(y1)?;

        Ok(Point::affine(x_new, y_new))
    }

    /// `n * P` via the NAF double-and-add ladder.
    ///
    /// Fails with [`Error::NegativeScalar`] when `n < 0`.
    pub fn scalar_mult(&self, p: &Point, n: &BigInt, to_affine: bool) -> Result<Point> {
        if *n < BigInt::from(0) {
            return Err(Error::NegativeScalar(n.to_string()));
        }
        if p.is_infinity() || *n == BigInt::from(0) {
            return Ok(Point::Infinity);
        }

        let naf = to_naf(n);
        let mut q = p.to_jacobian();
        let mut r = Point::Infinity;

        for &digit in naf.iter().rev() {
            if digit == 1 {
                r = self.add(&r, &q, false)?;
            } else if digit == -1 {
                r = self.add(&r, &q.negate(), false)?;
            }
            q = self.add(&q, &q, false)?;
        }

        Ok(if to_affine { r.to_affine() } else { r })
    }

    /// All points on the curve, including infinity.
    ///
    /// Quadratic in the field's order — only call this for small test
    /// curves, never for a standardized (NIST-sized) curve.
    pub fn points(&self) -> Vec<Point> {
        let residues: Vec<Residue> = self.field().iter().collect();
        let mut found: Vec<Point> = Vec::new();

        let rhs_of = |x: &Residue| -> Residue {
            let m = "shared modulus";
            match self {
                Self::ShortWeierstrass { a, b, .. } => {
                    let x2 = x.mul(x).expect(m);
                    let x3 = x2.mul(x).expect(m);
                    let ax = a.mul(x).expect(m);
                    x3.add(&ax).expect(m).add(b).expect(m)
                }
                Self::Montgomery { a, .. } => {
                    let x2 = x.mul(x).expect(m);
                    let x3 = x2.mul(x).expect(m);
                    let ax2 = a.mul(&x2).expect(m);
                    x3.add(&ax2).expect(m).add(x).expect(m)
                }
            }
        };
        let lhs_of = |y: &Residue| -> Residue {
            let m = "shared modulus";
            let y2 = y.mul(y).expect(m);
            match self {
                Self::ShortWeierstrass { .. } => y2,
                Self::Montgomery { b, .. } => b.mul(&y2).expect(m),
            }
        };

        for x in &residues {
            let target = rhs_of(x);
            for y in &residues {
                if lhs_of(y) == target {
                    found.push(Point::affine(x.clone(), y.clone()));
                }
            }
        }

        found.push(Point::Infinity);
        found
    }
}

fn jacobian_parts(p: &Point) -> (&Residue, &Residue, &Residue) {
    match p {
        Point::Jacobian { x, y, z } => (x, y, z),
        _ => unreachable!("jacobian_parts called on a non-Jacobian point"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s1_construction() {
        assert!(Curve::short_weierstrass(3, 8, 13u32).is_ok());
        assert!(Curve::short_weierstrass(3, 8, 14u32).is_err());
        assert!(matches!(
            Curve::short_weierstrass(0, 0, 13u32),
            Err(Error::SingularCurve)
        ));
    }

    #[test]
    fn s2_membership() {
        let curve = Curve::short_weierstrass(3, 8, 13u32).unwrap();
        assert!(curve.contains(&curve.create_point(1, 5).unwrap()));
        assert!(!curve.contains(&Point::affine(
            ellipt_field::Residue::new(2, 13).unwrap(),
            ellipt_field::Residue::new(5, 13).unwrap()
        )));
        assert!(curve.contains(&Point::Infinity));
    }

    #[test]
    fn s3_addition() {
        let curve = Curve::short_weierstrass(3, 8, 13u32).unwrap();
        let p = curve.create_point(1, 8).unwrap();
        let q = curve.create_point(9, 7).unwrap();

        let sum = curve.add(&p, &q, true).unwrap();
        assert_eq!(sum, curve.create_point(2, 10).unwrap().to_affine());

        assert_eq!(curve.add(&p, &Point::Infinity, true).unwrap(), p.to_affine());
        assert_eq!(curve.add(&p, &p.negate(), true).unwrap(), Point::Infinity);
    }

    #[test]
    fn s4_scalar_mult() {
        let curve = Curve::short_weierstrass(14, 19, 3623u32).unwrap();
        let p = curve.create_point(6, 730).unwrap();

        let result = curve.scalar_mult(&p, &BigInt::from(947), true).unwrap();
        assert_eq!(result, curve.create_point(3492, 60).unwrap().to_affine());

        assert_eq!(
            curve.scalar_mult(&p, &BigInt::from(1), true).unwrap(),
            p.to_affine()
        );
        assert_eq!(
            curve.scalar_mult(&p, &BigInt::from(0), true).unwrap(),
            Point::Infinity
        );
        assert!(matches!(
            curve.scalar_mult(&p, &BigInt::from(-2), true),
            Err(Error::NegativeScalar(_))
        ));
    }

    #[test]
    fn scalar_mult_is_additive() {
        let curve = Curve::short_weierstrass(3, 8, 13u32).unwrap();
        let p = curve.create_point(1, 8).unwrap();
        for m in 0..6 {
            for n in 0..6 {
                let lhs = curve
                    .scalar_mult(&p, &BigInt::from(m + n), true)
                    .unwrap();
                let rhs = curve
                    .add(
                        &curve.scalar_mult(&p, &BigInt::from(m), true).unwrap(),
                        &curve.scalar_mult(&p, &BigInt::from(n), true).unwrap(),
                        true,
                    )
                    .unwrap();
                assert_eq!(lhs, rhs, "m={m}, n={n}");
            }
        }
    }

    #[test]
    fn group_axioms_hold_on_small_curve() {
        let curve = Curve::short_weierstrass(3, 8, 13u32).unwrap();
        let points = curve.points();

        for p in &points {
            assert_eq!(curve.add(p, &Point::Infinity, true).unwrap(), p.to_affine());
            assert_eq!(curve.add(p, &p.negate(), true).unwrap(), Point::Infinity);
        }

        for p in &points {
            for q in &points {
                let pq = curve.add(p, q, true).unwrap();
                let qp = curve.add(q, p, true).unwrap();
                assert_eq!(pq, qp, "commutativity failed for {p:?} + {q:?}");
            }
        }
    }

    #[test]
    fn montgomery_construction_rejects_singular_params() {
        // a^2 = 4 (mod p) is singular regardless of b.
        assert!(Curve::montgomery(2, 1, 13u32).is_err());
        // b = 0 is singular regardless of a.
        assert!(Curve::montgomery(1, 0, 13u32).is_err());
    }
}
