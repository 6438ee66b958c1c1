//! Tolerance defaults for vector and line predicates.
//!
//! Policy
//! - Plain methods (`is_zero`, `is_parallel`, `intersect`, ...) use the
//!   constants below. The `*_eps` / `*_cfg` variants take explicit values for
//!   callers that need different thresholds.

/// Magnitude / coordinate threshold below which a value counts as zero.
pub const ZERO_EPS: f64 = 1e-10;
/// `|u · v|` threshold for orthogonality.
pub const ORTHO_EPS: f64 = 1e-10;
/// Distance from π (radians) at which two directions count as antiparallel.
///
/// `acos` is badly conditioned near ±1, so the antiparallel test is
/// approximate while the parallel test (angle == 0) is exact.
pub const PI_EPS: f64 = 0.01;
/// Cramer denominator threshold for `Line::intersect` (exact by default).
pub const DET_EPS: f64 = 0.0;

/// Tolerance set for the `*_cfg` predicates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub eps_zero: f64,
    pub eps_ortho: f64,
    pub eps_pi: f64,
    pub eps_det: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            eps_zero: ZERO_EPS,
            eps_ortho: ORTHO_EPS,
            eps_pi: PI_EPS,
            eps_det: DET_EPS,
        }
    }
}
