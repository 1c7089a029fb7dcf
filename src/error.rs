//! Crate-wide error type.
//!
//! Mirrors the plain-enum convention used throughout this crate's other
//! algorithms (secret sharing, key derivation): no `Display` or
//! `std::error::Error` impls, just a `Debug` enum callers match on directly.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A key, scalar, or point buffer was not exactly 32 (or 64) bytes.
    InvalidKeyLength,
    /// A signature buffer was not exactly 64 bytes.
    BadSignatureLength,
    /// A decoded field element did not lie in the expected range.
    FieldOutOfRange,
    /// A compressed point encoding does not correspond to a point on the
    /// curve.
    NotOnCurve,
    /// An operation that requires an affine representative was given the
    /// point at infinity.
    PointAtInfinity,
    /// `FieldOps::sqrt` or `tonelli` was asked for the square root of a
    /// quadratic non-residue.
    NoSquareRoot,
    /// A scalar-multiplication strategy failed internally (e.g. a modular
    /// inverse of zero was requested).
    AlgorithmFailure,
}
