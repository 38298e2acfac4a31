// src/precision.rs
//! # Precision
//!
//! Working precision for decimal arithmetic.
//!
//! Every vector carries the `Precision` it was built with and hands it on to
//! the values it derives, so two computations with different precisions can
//! run side by side without touching any shared context.

use crate::error::{Error, Result};
use crate::scalar::Scalar;
use num_traits::Zero;

/// Number of significant digits kept by divisions and on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precision {
    digits: u64,
}

impl Precision {
    /// Lowest accepted precision.
    pub const MIN_DIGITS: u64 = 28;

    /// Precision used by [`Precision::default`].
    pub const DEFAULT_DIGITS: u64 = 30;

    /// Create a precision of `digits` significant digits.
    ///
    /// Fails with [`Error::InvalidArgument`] below [`Precision::MIN_DIGITS`].
    pub fn new(digits: u64) -> Result<Self> {
        if digits < Self::MIN_DIGITS {
            return Err(Error::InvalidArgument(format!(
                "precision must be at least {} significant digits, got {}",
                Self::MIN_DIGITS,
                digits
            )));
        }
        Ok(Self { digits })
    }

    pub fn digits(&self) -> u64 {
        self.digits
    }

    /// Round `value` to at most `digits` significant digits.
    ///
    /// Values that already fit are returned untouched, so exact inputs stay
    /// exact through addition and subtraction.
    pub fn apply(&self, value: Scalar) -> Scalar {
        if value.digits() > self.digits {
            value.with_prec(self.digits)
        } else {
            value
        }
    }

    /// `numerator / denominator` rounded to this precision.
    pub fn divide(&self, numerator: &Scalar, denominator: &Scalar) -> Result<Scalar> {
        if denominator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.apply(numerator / denominator))
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            digits: Self::DEFAULT_DIGITS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn rejects_low_precision() {
        assert!(matches!(Precision::new(10), Err(Error::InvalidArgument(_))));
        assert_eq!(Precision::new(28).unwrap().digits(), 28);
        assert_eq!(Precision::default().digits(), 30);
    }

    #[test]
    fn divide_rounds_to_significant_digits() {
        let p = Precision::default();
        let third = p.divide(&Scalar::from(1), &Scalar::from(3)).unwrap();
        assert_eq!(third.digits(), 30);

        let wider = Precision::new(40).unwrap();
        let third = wider.divide(&Scalar::from(1), &Scalar::from(3)).unwrap();
        assert_eq!(third.digits(), 40);
    }

    #[test]
    fn apply_keeps_short_values() {
        let p = Precision::default();
        let v = Scalar::from_str("1.21").unwrap();
        assert_eq!(p.apply(v.clone()), v);
    }

    #[test]
    fn divide_by_zero_is_an_error() {
        let p = Precision::default();
        assert_eq!(
            p.divide(&Scalar::from(1), &Scalar::from(0)),
            Err(Error::DivisionByZero)
        );
    }
}
