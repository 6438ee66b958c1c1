//! 2D lines in normal form `n · (x, y) = k`.
//!
//! - `Line`: normal vector, constant term, and a basepoint cached at
//!   construction (`None` when the normal is zero).
//! - `Intersection`: point / parallel / coincident outcome of `Line::intersect`.
//!
//! Degenerate inputs (zero normal, zero Cramer denominator) are ordinary
//! values here, not errors.
//!
//! Code cross-refs: `vector::Vector`, `cfg::{ZERO_EPS, DET_EPS}`

mod display;

use std::str::FromStr;

use nalgebra::DVector;
use rust_decimal::Decimal;

use crate::cfg::{Tolerances, ZERO_EPS};
use crate::error::{LineError, VectorError};
use crate::num::{checked_det2, is_near_zero, parse_decimal, to_f64, IntoDecimal};
use crate::vector::Vector;

/// Lines live in the plane.
pub const LINE_DIMENSION: usize = 2;

/// Line `normal · (x, y) = constant`.
///
/// Invariants:
/// - `normal.dimension() == 2`.
/// - `basepoint` is derived once from `normal` and `constant`; fields are
///   private so it cannot go stale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    normal: Vector,
    constant: Decimal,
    basepoint: Option<Vector>,
}

/// Outcome of intersecting two lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intersection {
    /// Unique intersection point.
    Point(Vector),
    /// Parallel and distinct: no common point.
    Parallel,
    /// Same line: every point is shared. Carries the receiver.
    Coincident(Line),
}

impl Intersection {
    #[inline]
    pub fn point(&self) -> Option<&Vector> {
        match self {
            Self::Point(p) => Some(p),
            _ => None,
        }
    }
}

impl Default for Line {
    /// Zero normal with constant 0.
    fn default() -> Self {
        Self {
            normal: Vector::from_dvector(DVector::zeros(LINE_DIMENSION)),
            constant: Decimal::ZERO,
            basepoint: None,
        }
    }
}

impl Line {
    pub fn new(normal: Vector, constant: impl IntoDecimal) -> Result<Self, LineError> {
        if normal.dimension() != LINE_DIMENSION {
            return Err(LineError::Dimension {
                found: normal.dimension(),
            });
        }
        Self::build(normal, constant.into_decimal()?)
    }

    /// Line through the origin with the given normal.
    pub fn from_normal(normal: Vector) -> Result<Self, LineError> {
        Self::new(normal, Decimal::ZERO)
    }

    /// `a x + b y = k`.
    pub fn from_coefficients(
        a: impl IntoDecimal,
        b: impl IntoDecimal,
        k: impl IntoDecimal,
    ) -> Result<Self, LineError> {
        let normal = Vector::from_decimals(vec![a.into_decimal()?, b.into_decimal()?])?;
        Self::new(normal, k)
    }

    fn build(normal: Vector, constant: Decimal) -> Result<Self, LineError> {
        let basepoint = match basepoint_of(&normal, constant) {
            Ok(p) => Some(p),
            // A zero normal is the whole plane (k = 0) or nothing (k != 0).
            Err(LineError::NoNonzeroElements) => None,
            Err(e) => return Err(e),
        };
        Ok(Self {
            normal,
            constant,
            basepoint,
        })
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        LINE_DIMENSION
    }
    #[inline]
    pub fn normal_vector(&self) -> &Vector {
        &self.normal
    }
    #[inline]
    pub fn constant_term(&self) -> Decimal {
        self.constant
    }
    #[inline]
    pub fn basepoint(&self) -> Option<&Vector> {
        self.basepoint.as_ref()
    }

    pub fn is_parallel_to(&self, other: &Line) -> bool {
        self.is_parallel_to_cfg(other, &Tolerances::default())
    }

    pub fn is_parallel_to_cfg(&self, other: &Line, cfg: &Tolerances) -> bool {
        // Both normals are 2D, so the dimension check cannot fail.
        matches!(self.normal.is_parallel_cfg(&other.normal, cfg), Ok(true))
    }

    /// Parallel, and the basepoint difference is orthogonal to the normal.
    ///
    /// Fails only when that difference or its dot product with the normal
    /// overflows.
    pub fn is_coincident_with(&self, other: &Line) -> Result<bool, LineError> {
        self.is_coincident_with_cfg(other, &Tolerances::default())
    }

    pub fn is_coincident_with_cfg(
        &self,
        other: &Line,
        cfg: &Tolerances,
    ) -> Result<bool, LineError> {
        if !self.is_parallel_to_cfg(other, cfg) {
            return Ok(false);
        }
        match (&self.basepoint, &other.basepoint) {
            (Some(x0), Some(y0)) => {
                let d = x0.subtract(y0)?;
                Ok(d.is_orthogonal_eps(&self.normal, cfg.eps_ortho)?)
            }
            // Zero normals: both the plane or both empty.
            (None, None) => Ok(self.constant.is_zero() == other.constant.is_zero()),
            _ => Ok(false),
        }
    }

    /// Cramer's rule on `A x + B y = k1`, `C x + D y = k2`.
    ///
    /// With a zero (or `eps_det`-small) denominator the result is
    /// `Coincident` when the lines are equal *or* `is_coincident_with` holds,
    /// so scaled equations such as `x + y = 1` and `2x + 2y = 2` coincide
    /// rather than count as disjoint. Otherwise it is `Parallel`.
    ///
    /// Fails with `Overflow` when a Cramer term leaves the decimal range.
    pub fn intersect(&self, other: &Line) -> Result<Intersection, LineError> {
        self.intersect_cfg(other, &Tolerances::default())
    }

    pub fn intersect_cfg(
        &self,
        other: &Line,
        cfg: &Tolerances,
    ) -> Result<Intersection, LineError> {
        let (a, b) = (self.normal[0], self.normal[1]);
        let (c, d) = (other.normal[0], other.normal[1]);
        let (k1, k2) = (self.constant, other.constant);
        let overflow = || LineError::Vector(VectorError::overflow("line intersection"));

        let denom = checked_det2(a, b, c, d).ok_or_else(overflow)?;
        if denom.is_zero() || to_f64(denom.abs()) <= cfg.eps_det {
            return Ok(if self == other || self.is_coincident_with_cfg(other, cfg)? {
                Intersection::Coincident(self.clone())
            } else {
                Intersection::Parallel
            });
        }
        let x = checked_det2(d, b, k2, k1)
            .and_then(|n| n.checked_div(denom))
            .ok_or_else(overflow)?;
        let y = checked_det2(a, c, k1, k2)
            .and_then(|n| n.checked_div(denom))
            .ok_or_else(overflow)?;
        Ok(Intersection::Point(Vector::from_dvector(DVector::from_vec(
            vec![x, y],
        ))))
    }
}

/// Index of the first coordinate with `|x| > ZERO_EPS`.
pub fn first_nonzero_index(v: &Vector) -> Result<usize, LineError> {
    v.iter()
        .position(|&x| !is_near_zero(x, ZERO_EPS))
        .ok_or(LineError::NoNonzeroElements)
}

fn basepoint_of(normal: &Vector, constant: Decimal) -> Result<Vector, LineError> {
    let i = first_nonzero_index(normal)?;
    let mut coords = vec![Decimal::ZERO; normal.dimension()];
    coords[i] = constant
        .checked_div(normal[i])
        .ok_or(VectorError::overflow("line basepoint"))?;
    Ok(Vector::from_decimals(coords)?)
}

/// `a,b=k`, e.g. `4.046,2.83=1.21`.
impl FromStr for Line {
    type Err = LineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lhs, rhs) = s
            .split_once('=')
            .ok_or_else(|| LineError::Vector(VectorError::invalid(s.trim())))?;
        let normal: Vector = lhs.parse()?;
        Self::new(normal, parse_decimal(rhs)?)
    }
}
