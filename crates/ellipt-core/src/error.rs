use thiserror::Error;

/// Error taxonomy for the field, curve and signer layers.
///
/// One enum covers all three layers: unlike the address/BIP/GPU crates
/// this workspace grew out of, every variant here belongs to the same
/// conceptual domain (prime-field and elliptic-curve arithmetic), so a
/// single shared type is the right granularity.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid field parameter: {0} is not an odd prime")]
    InvalidFieldParameter(String),

    #[error("singular curve: discriminant vanishes mod p")]
    SingularCurve,

    #[error("modulus mismatch: {lhs} != {rhs}")]
    ModulusMismatch { lhs: String, rhs: String },

    #[error("no multiplicative inverse exists")]
    NoInverse,

    #[error("point is not on the curve")]
    PointNotOnCurve,

    #[error("scalar must be non-negative, got {0}")]
    NegativeScalar(String),

    #[error("index out of range: {index} (max {max})")]
    IndexOutOfRange { index: usize, max: usize },

    #[error("unknown curve: {0}")]
    UnknownCurve(String),

    #[error("unsupported curve type: {0}")]
    UnsupportedCurveType(String),
}
