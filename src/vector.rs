// src/vector.rs
//! Fixed-dimension decimal vector and its geometric operations.

use crate::error::{Error, Result};
use crate::precision::Precision;
use crate::scalar::{self, IntoScalar, Scalar, DISPLAY_PLACES, NEAR_ZERO_TOLERANCE};
use num_traits::Zero;
use std::fmt;
use std::ops::{Mul, Neg};
use tracing::debug;

/// An immutable vector of decimal coordinates.
///
/// Every operation returns a new `Vector` carrying the precision of `self`.
/// Equality is exact and ignores precision.
#[derive(Debug, Clone)]
pub struct Vector {
    coordinates: Vec<Scalar>,
    precision: Precision,
}

impl Vector {
    /// Build a vector from any non-empty sequence of convertible values,
    /// using the default precision.
    pub fn new<I>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: IntoScalar,
    {
        Self::with_precision(coordinates, Precision::default())
    }

    /// Build a vector with an explicit working precision.
    pub fn with_precision<I>(coordinates: I, precision: Precision) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: IntoScalar,
    {
        let coordinates = coordinates
            .into_iter()
            .map(IntoScalar::into_scalar)
            .collect::<Result<Vec<_>>>()?;
        Self::from_scalars(coordinates, precision)
    }

    /// The zero vector of the given dimension.
    pub fn zeros(dimension: usize) -> Result<Self> {
        Self::from_scalars(vec![Scalar::zero(); dimension], Precision::default())
    }

    fn from_scalars(coordinates: Vec<Scalar>, precision: Precision) -> Result<Self> {
        if coordinates.is_empty() {
            return Err(Error::InvalidArgument(
                "the coordinates must be nonempty".to_string(),
            ));
        }
        Ok(Self::from_parts(coordinates, precision))
    }

    /// Callers guarantee `coordinates` is non-empty.
    pub(crate) fn from_parts(coordinates: Vec<Scalar>, precision: Precision) -> Self {
        let coordinates = coordinates.into_iter().map(|c| precision.apply(c)).collect();
        Self {
            coordinates,
            precision,
        }
    }

    /// Coordinates in order.
    pub fn coordinates(&self) -> &[Scalar] {
        &self.coordinates
    }

    /// Number of coordinates.
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    /// Working precision handed on to derived values.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    fn ensure_same_dimension(&self, other: &Self) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(Error::DimensionMismatch {
                expected: self.dimension(),
                actual: other.dimension(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, other: &Self, op: impl Fn(&Scalar, &Scalar) -> Scalar) -> Result<Self> {
        self.ensure_same_dimension(other)?;
        let coordinates = self
            .coordinates
            .iter()
            .zip(&other.coordinates)
            .map(|(a, b)| op(a, b))
            .collect();
        Ok(Self::from_parts(coordinates, self.precision))
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise difference `self - other`.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Multiply every coordinate by `factor`.
    pub fn scale(&self, factor: &Scalar) -> Self {
        let coordinates = self.coordinates.iter().map(|c| c * factor).collect();
        Self::from_parts(coordinates, self.precision)
    }

    /// Euclidean norm as `f64`.
    pub fn magnitude(&self) -> f64 {
        scalar::to_f64(&self.decimal_magnitude())
    }

    /// Euclidean norm in decimal, rounded to the working precision.
    fn decimal_magnitude(&self) -> Scalar {
        let sum_of_squares = self
            .coordinates
            .iter()
            .fold(Scalar::zero(), |acc, c| acc + c * c);
        // sqrt only fails on negative input
        let root = sum_of_squares.sqrt().unwrap_or_else(Scalar::zero);
        self.precision.apply(root)
    }

    /// Unit vector in the same direction.
    pub fn normalize(&self) -> Result<Self> {
        let magnitude = self.decimal_magnitude();
        if magnitude.is_zero() {
            debug!(dimension = self.dimension(), "refusing to normalize the zero vector");
            return Err(Error::Degenerate("cannot normalize the zero vector"));
        }
        let factor = self.precision.divide(&Scalar::from(1), &magnitude)?;
        Ok(self.scale(&factor))
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> Result<Scalar> {
        self.ensure_same_dimension(other)?;
        let sum = self
            .coordinates
            .iter()
            .zip(&other.coordinates)
            .fold(Scalar::zero(), |acc, (a, b)| acc + a * b);
        Ok(self.precision.apply(sum))
    }

    /// Angle to `other` in radians.
    ///
    /// The cosine is rounded to 2 decimal places before `acos`, which keeps
    /// round-off from pushing it outside `[-1, 1]`.
    pub fn angle(&self, other: &Self) -> Result<f64> {
        self.ensure_same_dimension(other)?;
        let magnitudes = self.decimal_magnitude() * other.decimal_magnitude();
        if magnitudes.is_zero() {
            debug!(dimension = self.dimension(), "angle requested with a zero vector");
            return Err(Error::Degenerate("angle with a zero vector is undefined"));
        }
        let ratio = self.precision.divide(&self.dot(other)?, &magnitudes)?;
        let cosine = scalar::to_f64(&scalar::round_places(&ratio, 2));
        Ok(cosine.acos())
    }

    /// Angle to `other` in degrees.
    pub fn angle_in_degrees(&self, other: &Self) -> Result<f64> {
        self.angle(other).map(f64::to_degrees)
    }

    /// True iff the magnitude is below the near-zero tolerance.
    pub fn is_zero(&self) -> bool {
        self.is_zero_within(NEAR_ZERO_TOLERANCE)
    }

    /// True iff the magnitude is below `tolerance`.
    pub fn is_zero_within(&self, tolerance: f64) -> bool {
        self.magnitude().abs() < tolerance
    }

    /// True if either vector is zero or the angle between them is 0 or π.
    ///
    /// Compares `(v·w)²` with `|v|²|w|²` in decimal, so nearly parallel
    /// vectors are not collapsed by the 2-place rounding of [`Vector::angle`].
    pub fn is_parallel(&self, other: &Self) -> Result<bool> {
        self.ensure_same_dimension(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(true);
        }
        let dot = self.dot(other)?;
        let norms = self.dot(self)? * other.dot(other)?;
        let cos_squared = self.precision.divide(&(&dot * &dot), &norms)?;
        Ok(scalar::is_near_zero(&(Scalar::from(1) - cos_squared)))
    }

    /// True iff `|self · other|` is below the near-zero tolerance.
    pub fn is_orthogonal(&self, other: &Self) -> Result<bool> {
        self.is_orthogonal_within(other, NEAR_ZERO_TOLERANCE)
    }

    /// True iff `|self · other| < tolerance`.
    pub fn is_orthogonal_within(&self, other: &Self, tolerance: f64) -> Result<bool> {
        let tolerance = scalar::from_f64(tolerance)?;
        Ok(self.dot(other)?.abs() < tolerance)
    }

    /// Orthogonal projection of `self` onto the direction of `basis`.
    pub fn project_onto(&self, basis: &Self) -> Result<Self> {
        self.ensure_same_dimension(basis)?;
        let unit = basis.normalize()?;
        let length = self.dot(&unit)?;
        Ok(unit.scale(&length))
    }

    /// The part of `self` perpendicular to `basis`: `self - proj_basis(self)`.
    pub fn component_orthogonal_to(&self, basis: &Self) -> Result<Self> {
        self.subtract(&self.project_onto(basis)?)
    }

    /// Cross product; both vectors must be 3-dimensional.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        match (self.coordinates.as_slice(), other.coordinates.as_slice()) {
            ([x1, y1, z1], [x2, y2, z2]) => {
                let coordinates = vec![
                    y1 * z2 - z1 * y2,
                    z1 * x2 - x1 * z2,
                    x1 * y2 - y1 * x2,
                ];
                Ok(Self::from_parts(coordinates, self.precision))
            }
            _ => Err(Error::InvalidArgument(format!(
                "cross product is only defined for 3-dimensional vectors, got {} and {}",
                self.dimension(),
                other.dimension()
            ))),
        }
    }

    /// Area of the parallelogram spanned by two 3-vectors.
    pub fn parallelogram_area(&self, other: &Self) -> Result<f64> {
        Ok(self.cross(other)?.magnitude())
    }

    /// Area of the triangle spanned by two 3-vectors, rounded to 3 places.
    pub fn triangle_area(&self, other: &Self) -> Result<f64> {
        let half = scalar::from_f64(self.parallelogram_area(other)?)? / Scalar::from(2);
        Ok(scalar::to_f64(&scalar::round_places(&half, 3)))
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates == other.coordinates
    }
}

impl Eq for Vector {}

impl TryFrom<Vec<Scalar>> for Vector {
    type Error = Error;

    fn try_from(coordinates: Vec<Scalar>) -> Result<Self> {
        Self::from_scalars(coordinates, Precision::default())
    }
}

impl Neg for &Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        self.scale(&Scalar::from(-1))
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        -&self
    }
}

impl Mul<Scalar> for Vector {
    type Output = Vector;
    fn mul(self, rhs: Scalar) -> Vector {
        self.scale(&rhs)
    }
}

/// A tiny wrapper for printing a `Vector` rounded to `decimals` places.
pub struct Rounded<'a>(pub &'a Vector, pub usize);

impl<'a> Rounded<'a> {
    /// Wrap a `&Vector` for pretty-printing with `decimals` digits.
    pub fn new(v: &'a Vector, decimals: usize) -> Self {
        Rounded(v, decimals)
    }
}

impl<'a> fmt::Display for Rounded<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Rounded(v, dec) = *self;
        write!(f, "Vector: [")?;
        for (i, c) in v.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let places = i64::try_from(dec).unwrap_or(i64::MAX);
            write!(f, "{}", scalar::round_places(c, places))?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", Rounded::new(self, DISPLAY_PLACES as usize))
    }
}
