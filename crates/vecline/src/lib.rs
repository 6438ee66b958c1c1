//! Decimal vector algebra and 2D normal-form lines.
//!
//! Purpose
//! - `Vector`: fixed-dimension tuple of 28-digit decimals with the usual
//!   arithmetic, projections, angles, and the 3D cross product.
//! - `Line`: `n · (x, y) = k` in the plane with a cached basepoint and
//!   parallel / coincident / intersection queries.
//!
//! Numerics
//! - Coordinates are `rust_decimal::Decimal` stored in a `nalgebra::DVector`.
//!   Precision is fixed by the decimal type; there is no global context.
//!   Arithmetic is checked and reports `VectorError::Overflow`.
//! - Near-zero thresholds live in `cfg` (`Tolerances`).
//! - Degenerate geometry is returned as data (`Option`, `Intersection`);
//!   invalid input is an `Err`.

pub mod cfg;
pub mod error;
pub mod line;
pub mod num;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::Tolerances;
pub use error::{LineError, VectorError};
pub use line::{Intersection, Line};
pub use num::IntoDecimal;
pub use rust_decimal::Decimal;
pub use vector::Vector;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::Tolerances;
    pub use crate::error::{LineError, VectorError};
    pub use crate::line::{first_nonzero_index, Intersection, Line};
    pub use crate::num::{is_near_zero, IntoDecimal};
    pub use crate::vector::Vector;
    pub use rust_decimal::Decimal;
}
