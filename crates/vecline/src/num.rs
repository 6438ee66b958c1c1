//! Decimal conversion helpers.
//!
//! - `IntoDecimal`: coordinate/scalar input accepted by constructors
//!   (strings, integers, floats, `Decimal`).
//! - f64 bridging for the few places that leave the decimal domain
//!   (`acos`, tolerance comparisons).

use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::error::VectorError;

/// Values convertible to a coordinate or scalar.
///
/// Floats keep their shortest decimal representation (`8.218_f64` becomes
/// `8.218`, not its binary expansion).
pub trait IntoDecimal {
    fn into_decimal(self) -> Result<Decimal, VectorError>;
}

impl IntoDecimal for Decimal {
    #[inline]
    fn into_decimal(self) -> Result<Decimal, VectorError> {
        Ok(self)
    }
}

impl IntoDecimal for &Decimal {
    #[inline]
    fn into_decimal(self) -> Result<Decimal, VectorError> {
        Ok(*self)
    }
}

impl IntoDecimal for &str {
    fn into_decimal(self) -> Result<Decimal, VectorError> {
        parse_decimal(self)
    }
}

impl IntoDecimal for String {
    fn into_decimal(self) -> Result<Decimal, VectorError> {
        parse_decimal(&self)
    }
}

impl IntoDecimal for &String {
    fn into_decimal(self) -> Result<Decimal, VectorError> {
        parse_decimal(self)
    }
}

impl IntoDecimal for f64 {
    fn into_decimal(self) -> Result<Decimal, VectorError> {
        if !self.is_finite() {
            return Err(VectorError::invalid(self.to_string()));
        }
        // `Display` is the shortest string that round-trips; fall back to the
        // binary value when it does not fit the decimal's scale.
        parse_decimal(&self.to_string())
            .or_else(|e| Decimal::from_f64(self).ok_or(e))
    }
}

impl IntoDecimal for f32 {
    fn into_decimal(self) -> Result<Decimal, VectorError> {
        if !self.is_finite() {
            return Err(VectorError::invalid(self.to_string()));
        }
        parse_decimal(&self.to_string())
            .or_else(|e| Decimal::from_f32(self).ok_or(e))
    }
}

macro_rules! into_decimal_int {
    ($($t:ty),*) => {
        $(
            impl IntoDecimal for $t {
                #[inline]
                fn into_decimal(self) -> Result<Decimal, VectorError> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

into_decimal_int!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

/// Parse plain (`-1.25`) or scientific (`1e-10`) notation.
pub fn parse_decimal(s: &str) -> Result<Decimal, VectorError> {
    let t = s.trim();
    Decimal::from_str(t)
        .or_else(|_| Decimal::from_scientific(t))
        .map_err(|_| VectorError::invalid(t))
}

/// Lossy conversion used when leaving the decimal domain.
#[inline]
pub fn to_f64(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(f64::NAN)
}

/// `|d| < eps`.
#[inline]
pub fn is_near_zero(d: Decimal, eps: f64) -> bool {
    to_f64(d.abs()) < eps
}

/// `a * d - b * c`, or `None` if any step leaves the decimal range.
#[inline]
pub fn checked_det2(a: Decimal, b: Decimal, c: Decimal, d: Decimal) -> Option<Decimal> {
    a.checked_mul(d)?.checked_sub(b.checked_mul(c)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_and_numbers_convert() {
        assert_eq!("8.218".into_decimal().unwrap(), Decimal::new(8218, 3));
        assert_eq!(8.218_f64.into_decimal().unwrap(), Decimal::new(8218, 3));
        assert_eq!(0.1_f32.into_decimal().unwrap(), Decimal::new(1, 1));
        assert_eq!(7_i32.into_decimal().unwrap(), Decimal::from(7));
        assert_eq!(" 1e-3 ".into_decimal().unwrap(), Decimal::new(1, 3));
    }

    #[test]
    fn garbage_and_non_finite_are_rejected() {
        assert!(matches!(
            "abc".into_decimal(),
            Err(VectorError::InvalidCoordinate { .. })
        ));
        assert!(f64::NAN.into_decimal().is_err());
        assert!(f64::INFINITY.into_decimal().is_err());
    }

    #[test]
    fn near_zero_threshold() {
        assert!(is_near_zero(Decimal::new(1, 11), 1e-10));
        assert!(is_near_zero(Decimal::new(-1, 11), 1e-10));
        assert!(!is_near_zero(Decimal::new(1, 9), 1e-10));
    }

    #[test]
    fn det2_reports_overflow() {
        let big = parse_decimal("1e20").unwrap();
        assert_eq!(
            checked_det2(Decimal::from(3), Decimal::from(-1), Decimal::ONE, Decimal::TWO),
            Some(Decimal::from(7))
        );
        assert_eq!(checked_det2(big, Decimal::ZERO, Decimal::ZERO, big), None);
    }
}
