//! Error types for vector construction/arithmetic and line construction.

use std::fmt;

/// Errors raised by `Vector` constructors and binary operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VectorError {
    /// No coordinates were supplied.
    Empty,
    /// A coordinate could not be converted to a decimal.
    InvalidCoordinate { value: String },
    /// Operands of a binary operation have different dimensions.
    DimensionMismatch { left: usize, right: usize },
    /// Normalizing (or measuring an angle against) a zero-magnitude vector.
    ZeroVector,
    /// Operation only defined for one dimension (e.g. cross product in 3D).
    UnsupportedDimension {
        op: &'static str,
        expected: usize,
        found: usize,
    },
    /// Result falls outside the decimal range (about ±7.9e28).
    Overflow { op: &'static str },
}

impl VectorError {
    pub(crate) fn invalid(value: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            value: value.into(),
        }
    }

    pub(crate) fn overflow(op: &'static str) -> Self {
        Self::Overflow { op }
    }
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "the coordinates must be nonempty"),
            Self::InvalidCoordinate { value } => {
                write!(f, "coordinate {value:?} is not a finite decimal number")
            }
            Self::DimensionMismatch { left, right } => {
                write!(f, "dimension mismatch: {left} vs {right}")
            }
            Self::ZeroVector => write!(f, "cannot normalize zero vector"),
            Self::UnsupportedDimension {
                op,
                expected,
                found,
            } => write!(f, "{op} requires dimension {expected}, got {found}"),
            Self::Overflow { op } => write!(f, "{op} overflows the decimal range"),
        }
    }
}

impl std::error::Error for VectorError {}

/// Errors raised while building or inspecting a `Line`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineError {
    /// Normal vector is not two-dimensional.
    Dimension { found: usize },
    /// Every coordinate of the normal vector is (near) zero.
    NoNonzeroElements,
    /// Constant term or normal coordinates failed to convert, or a derived
    /// quantity (basepoint, Cramer terms) overflowed.
    Vector(VectorError),
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimension { found } => {
                write!(f, "line normal must be 2-dimensional, got {found}")
            }
            Self::NoNonzeroElements => write!(f, "no nonzero elements found"),
            Self::Vector(e) => write!(f, "invalid line input: {e}"),
        }
    }
}

impl std::error::Error for LineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Vector(e) => Some(e),
            _ => None,
        }
    }
}

impl From<VectorError> for LineError {
    fn from(e: VectorError) -> Self {
        Self::Vector(e)
    }
}
