//! Curve points in affine and Jacobian coordinates, plus the point at
//! infinity.

use ellipt_core::{Error, Result};
use ellipt_field::Residue;

/// A point on an elliptic curve, in one of three representations.
#[derive(Clone, Debug)]
pub enum Point {
    /// `(x, y)`, both sharing a modulus.
    Affine { x: Residue, y: Residue },
    /// `(X, Y, Z)`, representing the affine point `(X/Z^2, Y/Z^3)` when `Z != 0`.
    Jacobian { x: Residue, y: Residue, z: Residue },
    /// The group identity.
    Infinity,
}

impl Point {
    /// Builds an affine point.
    pub fn affine(x: Residue, y: Residue) -> Self {
        Self::Affine { x, y }
    }

    /// Builds a Jacobian point.
    pub fn jacobian(x: Residue, y: Residue, z: Residue) -> Self {
        Self::Jacobian { x, y, z }
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, Self::Infinity)
    }

    /// Negates the point: `Affine(x, y) -> Affine(x, -y)`,
    /// `Jacobian(X, Y, Z) -> Jacobian(X, -Y, Z)`, `Infinity -> Infinity`.
    pub fn negate(&self) -> Self {
        match self {
            Self::Affine { x, y } => Self::Affine {
                x: x.clone(),
                y: y.neg(),
            },
            Self::Jacobian { x, y, z } => Self::Jacobian {
                x: x.clone(),
                y: y.neg(),
                z: z.clone(),
            },
            Self::Infinity => Self::Infinity,
        }
    }

    /// Projects to affine coordinates.
    ///
    /// A Jacobian point with `Z = 0` is treated as the point at infinity
    /// rather than raising an inversion error, per the design note in the
    /// specification this is built from (`spec.md` §4.3/§7).
    pub fn to_affine(&self) -> Self {
        match self {
            Self::Affine { .. } => self.clone(),
            Self::Infinity => Self::Infinity,
            Self::Jacobian { x, y, z } => match z.inverse() {
                None => Self::Infinity,
                Some(z_inv) => {
                    let z_inv2 = z_inv.mul(&z_inv).expect("z_inv shares its own modulus");
                    let z_inv3 = z_inv2.mul(&z_inv).expect("z_inv shares its own modulus");
                    Self::Affine {
                        x: x.mul(&z_inv2).expect("shared modulus"),
                        y: y.mul(&z_inv3).expect("shared modulus"),
                    }
                }
            },
        }
    }

    /// Converts to Jacobian coordinates: `Affine(x, y) -> Jacobian(x, y, 1)`;
    /// Jacobian and Infinity are unchanged.
    pub fn to_jacobian(&self) -> Self {
        match self {
            Self::Affine { x, y } => {
                let m = x.modulus().clone();
                let one = Residue::new(1, m).expect("modulus already validated");
                Self::Jacobian {
                    x: x.clone(),
                    y: y.clone(),
                    z: one,
                }
            }
            Self::Jacobian { .. } => self.clone(),
            Self::Infinity => Self::Infinity,
        }
    }

    /// Cross-representation equality: both operands are projected to affine
    /// (or infinity) before comparison. Infinity equals only infinity.
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Ordinal coordinate access: index 0/1 for affine `(x, y)`, 0/1/2 for
    /// Jacobian `(X, Y, Z)`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] for any other index, and for
    /// any index into [`Point::Infinity`] (it has none).
    pub fn coordinate(&self, index: usize) -> Result<Residue> {
        let (coordinate, max) = match self {
            Self::Affine { x, y } => (
                match index {
                    0 => Some(x),
                    1 => Some(y),
                    _ => None,
                },
                1,
            ),
            Self::Jacobian { x, y, z } => (
                match index {
                    0 => Some(x),
                    1 => Some(y),
                    2 => Some(z),
                    _ => None,
                },
                2,
            ),
            Self::Infinity => (None, 0),
        };
        coordinate
            .cloned()
            .ok_or(Error::IndexOutOfRange { index, max })
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        match (self.to_affine(), other.to_affine()) {
            (Point::Infinity, Point::Infinity) => true,
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                x1 == x2 && y1 == y2
            }
            _ => false,
        }
    }
}

impl Eq for Point {}

impl std::hash::Hash for Point {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self.to_affine() {
            Point::Affine { x, y } => {
                0u8.hash(state);
                x.to_int().hash(state);
                y.to_int().hash(state);
            }
            Point::Infinity => 1u8.hash(state),
            Point::Jacobian { .. } => unreachable!("to_affine never returns Jacobian"),
        }
    }
}
