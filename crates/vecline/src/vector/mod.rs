//! Fixed-dimension decimal vectors.
//!
//! - `Vector`: immutable `DVector<Decimal>` with dimension >= 1.
//! - Binary operations check dimensions and return `VectorError::DimensionMismatch`.
//! - Arithmetic is checked: results past the decimal range are
//!   `VectorError::Overflow`, never a panic.
//! - Zero-magnitude inputs: `direction` yields `None`, `normalize` and
//!   everything built on it (`angle`, `parallel_component`) yield
//!   `VectorError::ZeroVector`.
//!
//! Code cross-refs: `cfg::{ZERO_EPS, ORTHO_EPS, PI_EPS}`, `line::Line`

use std::f64::consts::PI;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use nalgebra::DVector;
use rust_decimal::{Decimal, MathematicalOps};

use crate::cfg::{Tolerances, ORTHO_EPS, ZERO_EPS};
use crate::error::VectorError;
use crate::num::{checked_det2, is_near_zero, parse_decimal, to_f64, IntoDecimal};

/// Point or direction in R^n with decimal coordinates.
///
/// Invariants:
/// - `dimension() >= 1`.
/// - Coordinates never change after construction; operations return new values.
/// - Equality is exact and numeric (`7.230 == 7.23`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vector {
    coords: DVector<Decimal>,
}

impl Vector {
    /// Build from any non-empty sequence of decimal-convertible values.
    pub fn new<I>(coords: I) -> Result<Self, VectorError>
    where
        I: IntoIterator,
        I::Item: IntoDecimal,
    {
        let coords = coords
            .into_iter()
            .map(IntoDecimal::into_decimal)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_decimals(coords)
    }

    pub fn from_decimals(coords: Vec<Decimal>) -> Result<Self, VectorError> {
        if coords.is_empty() {
            return Err(VectorError::Empty);
        }
        Ok(Self {
            coords: DVector::from_vec(coords),
        })
    }

    pub fn zeros(dimension: usize) -> Result<Self, VectorError> {
        if dimension == 0 {
            return Err(VectorError::Empty);
        }
        Ok(Self {
            coords: DVector::from_element(dimension, Decimal::ZERO),
        })
    }

    // Callers guarantee a non-empty result (outputs of same-shape ops).
    #[inline]
    pub(crate) fn from_dvector(coords: DVector<Decimal>) -> Self {
        debug_assert!(!coords.is_empty());
        Self { coords }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }
    #[inline]
    pub fn coordinates(&self) -> &[Decimal] {
        self.coords.as_slice()
    }
    #[inline]
    pub fn get(&self, i: usize) -> Option<Decimal> {
        self.coords.get(i).copied()
    }
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Decimal> {
        self.coords.iter()
    }
    #[inline]
    pub fn as_dvector(&self) -> &DVector<Decimal> {
        &self.coords
    }

    #[inline]
    fn check_dim(&self, other: &Vector) -> Result<(), VectorError> {
        if self.dimension() != other.dimension() {
            return Err(VectorError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        Ok(())
    }

    /// Coordinate-wise `f`, failing with `Overflow` when any result leaves
    /// the decimal range.
    fn zip_checked(
        &self,
        other: &Vector,
        op: &'static str,
        f: impl Fn(Decimal, Decimal) -> Option<Decimal>,
    ) -> Result<Vector, VectorError> {
        self.check_dim(other)?;
        let coords = self
            .coords
            .iter()
            .zip(other.coords.iter())
            .map(|(&a, &b)| f(a, b).ok_or(VectorError::overflow(op)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_dvector(DVector::from_vec(coords)))
    }

    pub fn add(&self, other: &Vector) -> Result<Vector, VectorError> {
        self.zip_checked(other, "add", Decimal::checked_add)
    }

    pub fn subtract(&self, other: &Vector) -> Result<Vector, VectorError> {
        self.zip_checked(other, "subtract", Decimal::checked_sub)
    }

    /// Multiply every coordinate by `scalar` (converted to a decimal first).
    pub fn scalar_multiply(&self, scalar: impl IntoDecimal) -> Result<Vector, VectorError> {
        self.scaled(scalar.into_decimal()?, "scalar multiply")
    }

    fn scaled(&self, s: Decimal, op: &'static str) -> Result<Vector, VectorError> {
        let coords = self
            .coords
            .iter()
            .map(|&x| x.checked_mul(s).ok_or(VectorError::overflow(op)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_dvector(DVector::from_vec(coords)))
    }

    fn dot_checked(&self, other: &Vector) -> Result<Decimal, VectorError> {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .try_fold(Decimal::ZERO, |acc, (&a, &b)| {
                a.checked_mul(b)
                    .and_then(|p| acc.checked_add(p))
                    .ok_or(VectorError::overflow("dot product"))
            })
    }

    /// `(m, s)` with `m = max |x_i|` and `s = |self / m|`, so `|self| = m * s`.
    ///
    /// Every scaled square lies in [0, 1], so the sum neither overflows for
    /// large coordinates nor drops below the 28th decimal place for tiny
    /// ones. `s` is in [1, sqrt(n)] unless the vector is zero.
    fn norm_parts(&self) -> (Decimal, Decimal) {
        let m = self
            .coords
            .iter()
            .map(|x| x.abs())
            .max()
            .unwrap_or(Decimal::ZERO);
        if m.is_zero() {
            return (m, Decimal::ZERO);
        }
        let sum: Decimal = self
            .coords
            .iter()
            .map(|&x| {
                let r = x / m;
                r * r
            })
            .sum();
        // Sum of squares is never negative, so `sqrt` always returns Some.
        (m, sum.sqrt().unwrap_or(Decimal::ZERO))
    }

    /// Euclidean norm, computed as `m * |self / m|` with `m = max |x_i|`.
    ///
    /// Fails only when the norm itself exceeds the decimal range. The square
    /// root is taken in decimal arithmetic, so `normalize` yields unit vectors
    /// whose self dot product is 1 to ~27 digits.
    pub fn magnitude(&self) -> Result<Decimal, VectorError> {
        let (m, s) = self.norm_parts();
        m.checked_mul(s).ok_or(VectorError::overflow("magnitude"))
    }

    /// `self / |self|`, or `None` for the zero vector.
    pub fn direction(&self) -> Option<Vector> {
        let (m, s) = self.norm_parts();
        if m.is_zero() {
            return None;
        }
        // |x / m| <= 1 and s >= 1: neither division can overflow.
        Some(Self::from_dvector(self.coords.map(|x| x / m / s)))
    }

    /// Like `direction`, but the zero vector is an error.
    pub fn normalize(&self) -> Result<Vector, VectorError> {
        self.direction().ok_or(VectorError::ZeroVector)
    }

    pub fn dot_product(&self, other: &Vector) -> Result<Decimal, VectorError> {
        self.check_dim(other)?;
        self.dot_checked(other)
    }

    /// Angle between `self` and `other` in radians (or degrees).
    ///
    /// The cosine is clamped to [-1, 1] before `acos` to absorb round-off.
    pub fn angle(&self, other: &Vector, in_degrees: bool) -> Result<f64, VectorError> {
        self.check_dim(other)?;
        let u = self.normalize()?;
        let w = other.normalize()?;
        let cos = to_f64(u.dot_checked(&w)?).clamp(-1.0, 1.0);
        let theta = cos.acos();
        Ok(if in_degrees { theta.to_degrees() } else { theta })
    }

    pub fn is_orthogonal(&self, other: &Vector) -> Result<bool, VectorError> {
        self.is_orthogonal_eps(other, ORTHO_EPS)
    }

    pub fn is_orthogonal_eps(&self, other: &Vector, eps: f64) -> Result<bool, VectorError> {
        Ok(is_near_zero(self.dot_product(other)?, eps))
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.is_zero_eps(ZERO_EPS)
    }

    /// `|self| < tolerance`; the product is taken in f64 so huge vectors
    /// compare instead of overflowing.
    pub fn is_zero_eps(&self, tolerance: f64) -> bool {
        let (m, s) = self.norm_parts();
        to_f64(m) * to_f64(s) < tolerance
    }

    /// Zero vectors are parallel to everything; otherwise the angle must be
    /// exactly 0 or within `PI_EPS` of π.
    pub fn is_parallel(&self, other: &Vector) -> Result<bool, VectorError> {
        self.is_parallel_cfg(other, &Tolerances::default())
    }

    pub fn is_parallel_cfg(&self, other: &Vector, cfg: &Tolerances) -> Result<bool, VectorError> {
        self.check_dim(other)?;
        if self.is_zero_eps(cfg.eps_zero) || other.is_zero_eps(cfg.eps_zero) {
            return Ok(true);
        }
        match self.angle(other, false) {
            Ok(theta) => Ok(theta == 0.0 || (theta - PI).abs() < cfg.eps_pi),
            // exact zero under a caller-supplied eps_zero of 0
            Err(VectorError::ZeroVector) => Ok(true),
            Err(e) => Err(e),
        }
    }

    /// Projection of `self` onto the direction of `basis`.
    pub fn parallel_component(&self, basis: &Vector) -> Result<Vector, VectorError> {
        self.check_dim(basis)?;
        let u = basis.normalize()?;
        let weight = self.dot_checked(&u)?;
        u.scaled(weight, "parallel component")
    }

    /// `self - parallel_component(basis)`.
    pub fn orthogonal_component(&self, basis: &Vector) -> Result<Vector, VectorError> {
        let p = self.parallel_component(basis)?;
        self.subtract(&p)
    }

    pub fn cross_product(&self, other: &Vector) -> Result<Vector, VectorError> {
        self.check_dim(other)?;
        if self.dimension() != 3 {
            return Err(VectorError::UnsupportedDimension {
                op: "cross product",
                expected: 3,
                found: self.dimension(),
            });
        }
        let (a, b) = (&self.coords, &other.coords);
        let coords = [(1, 2), (2, 0), (0, 1)]
            .iter()
            .map(|&(i, j)| {
                checked_det2(a[i], a[j], b[i], b[j])
                    .ok_or(VectorError::overflow("cross product"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_dvector(DVector::from_vec(coords)))
    }

    pub fn area_of_parallelogram(&self, base: &Vector) -> Result<Decimal, VectorError> {
        self.cross_product(base)?.magnitude()
    }

    pub fn area_of_triangle(&self, base: &Vector) -> Result<Decimal, VectorError> {
        Ok(self.area_of_parallelogram(base)? / Decimal::TWO)
    }
}

impl Index<usize> for Vector {
    type Output = Decimal;
    #[inline]
    fn index(&self, i: usize) -> &Decimal {
        &self.coords[i]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, x) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, ")")
    }
}

/// Comma-separated coordinates, optionally wrapped in `()` or `[]`.
impl FromStr for Vector {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let t = t
            .strip_prefix('(')
            .and_then(|r| r.strip_suffix(')'))
            .or_else(|| t.strip_prefix('[').and_then(|r| r.strip_suffix(']')))
            .unwrap_or(t);
        if t.trim().is_empty() {
            return Err(VectorError::Empty);
        }
        let coords = t
            .split(',')
            .map(parse_decimal)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_decimals(coords)
    }
}
