// src/scalar.rs
//! Decimal scalar type, conversions into it, and tolerance helpers.

use crate::error::{Error, Result};
use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::str::FromStr;

/// Arbitrary-precision decimal used for every coordinate and constant.
pub type Scalar = BigDecimal;

/// Magnitudes and differences below this are treated as zero.
pub const NEAR_ZERO_TOLERANCE: f64 = 1e-10;

/// Decimal places used by human-readable output.
pub const DISPLAY_PLACES: i64 = 3;

/// Conversion of a numeric or textual value into a [`Scalar`].
///
/// Floats go through their shortest round-trip decimal form, so `4.046_f64`
/// becomes exactly `4.046` rather than its binary expansion.
pub trait IntoScalar {
    fn into_scalar(self) -> Result<Scalar>;
}

impl IntoScalar for Scalar {
    fn into_scalar(self) -> Result<Scalar> {
        Ok(self)
    }
}

impl IntoScalar for &Scalar {
    fn into_scalar(self) -> Result<Scalar> {
        Ok(self.clone())
    }
}

macro_rules! int_into_scalar {
    ($($t:ty),*) => {
        $(
            impl IntoScalar for $t {
                fn into_scalar(self) -> Result<Scalar> {
                    Ok(Scalar::from(self))
                }
            }
        )*
    };
}

int_into_scalar!(i32, i64, u32, u64);

impl IntoScalar for f64 {
    fn into_scalar(self) -> Result<Scalar> {
        from_f64(self)
    }
}

impl IntoScalar for f32 {
    fn into_scalar(self) -> Result<Scalar> {
        if !self.is_finite() {
            return Err(Error::InvalidArgument(format!("{self} is not a finite number")));
        }
        parse(&self.to_string())
    }
}

impl IntoScalar for &str {
    fn into_scalar(self) -> Result<Scalar> {
        parse(self)
    }
}

impl IntoScalar for String {
    fn into_scalar(self) -> Result<Scalar> {
        parse(&self)
    }
}

fn parse(text: &str) -> Result<Scalar> {
    Scalar::from_str(text.trim()).map_err(|_| {
        Error::InvalidArgument(format!("cannot convert {text:?} to a decimal number"))
    })
}

/// Exact decimal for a finite `f64`, via its shortest round-trip representation.
pub fn from_f64(value: f64) -> Result<Scalar> {
    if !value.is_finite() {
        return Err(Error::InvalidArgument(format!("{value} is not a finite number")));
    }
    parse(&value.to_string())
}

/// Nearest `f64`. Values beyond the `f64` range saturate to infinity.
pub fn to_f64(value: &Scalar) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// `1e-10` as an exact decimal.
pub fn near_zero_tolerance() -> Scalar {
    Scalar::new(BigInt::from(1), 10)
}

pub fn is_near_zero(value: &Scalar) -> bool {
    value.abs() < near_zero_tolerance()
}

/// Round half-to-even to `places` decimal places.
pub fn round_places(value: &Scalar, places: i64) -> Scalar {
    value.with_scale_round(places, RoundingMode::HalfEven)
}

/// Round to [`DISPLAY_PLACES`] and drop the fraction when it is zero.
pub fn render(value: &Scalar) -> String {
    let rounded = round_places(value, DISPLAY_PLACES);
    let whole = rounded.with_scale(0);
    if whole == rounded {
        whole.to_string()
    } else {
        rounded.to_string()
    }
}
