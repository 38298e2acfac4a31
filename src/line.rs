// src/line.rs
//! Lines in the plane, in normal form `normal · x = constant`.

use crate::error::{Error, Result};
use crate::precision::Precision;
use crate::scalar::{self, IntoScalar, Scalar, DISPLAY_PLACES};
use crate::vector::Vector;
use num_traits::Zero;
use std::fmt;
use tracing::{debug, trace};

/// Lines only live in the plane.
pub const LINE_DIMENSION: usize = 2;

/// A 2D line `normal_vector · x = constant_term`.
///
/// The basepoint is one point on the line, fixed at construction. It is
/// `None` when the normal vector has no coefficient outside the near-zero
/// tolerance: such a line is either the whole plane (`0 = 0`) or empty
/// (`0 = k`), told apart by the constant term.
#[derive(Debug, Clone)]
pub struct Line {
    normal_vector: Vector,
    constant_term: Scalar,
    basepoint: Option<Vector>,
}

/// Outcome of intersecting two lines that are not parallel and distinct.
#[derive(Debug, Clone, PartialEq)]
pub enum Intersection {
    /// The lines cross at exactly one point.
    Point(Vector),
    /// The lines are the same line; every point is shared.
    Coincident,
}

impl Intersection {
    pub fn point(&self) -> Option<&Vector> {
        match self {
            Intersection::Point(p) => Some(p),
            Intersection::Coincident => None,
        }
    }
}

/// Index of the first coordinate whose magnitude is not near zero.
pub fn first_nonzero_index(coordinates: &[Scalar]) -> Result<usize> {
    coordinates
        .iter()
        .position(|c| !scalar::is_near_zero(c))
        .ok_or(Error::NoNonzeroElements)
}

impl Line {
    /// Create a line from a 2-dimensional normal vector and a constant term.
    pub fn new(normal_vector: Vector, constant_term: Scalar) -> Result<Self> {
        if normal_vector.dimension() != LINE_DIMENSION {
            return Err(Error::InvalidArgument(format!(
                "a line needs a {}-dimensional normal vector, got {}",
                LINE_DIMENSION,
                normal_vector.dimension()
            )));
        }
        let constant_term = normal_vector.precision().apply(constant_term);
        let basepoint = Self::compute_basepoint(&normal_vector, &constant_term)?;
        Ok(Self {
            normal_vector,
            constant_term,
            basepoint,
        })
    }

    /// Create a line from raw coefficients `[a, b]` and constant `k`
    /// (`a·x_1 + b·x_2 = k`).
    pub fn from_coefficients<T, K>(coefficients: [T; 2], constant_term: K) -> Result<Self>
    where
        T: IntoScalar,
        K: IntoScalar,
    {
        Self::new(Vector::new(coefficients)?, constant_term.into_scalar()?)
    }

    fn compute_basepoint(normal_vector: &Vector, constant_term: &Scalar) -> Result<Option<Vector>> {
        let n = normal_vector.coordinates();
        let Ok(index) = first_nonzero_index(n) else {
            debug!(constant = %constant_term, "zero normal vector, line has no basepoint");
            return Ok(None);
        };
        let precision = normal_vector.precision();
        let mut coordinates = vec![Scalar::zero(); LINE_DIMENSION];
        coordinates[index] = precision.divide(constant_term, &n[index])?;
        Ok(Some(Vector::from_parts(coordinates, precision)))
    }

    /// Normal vector `[a, b]` of `a·x_1 + b·x_2 = k`.
    pub fn normal_vector(&self) -> &Vector {
        &self.normal_vector
    }

    /// Constant term `k`.
    pub fn constant_term(&self) -> &Scalar {
        &self.constant_term
    }

    /// A point on the line, or `None` when the line is degenerate.
    pub fn basepoint(&self) -> Option<&Vector> {
        self.basepoint.as_ref()
    }

    /// Always 2.
    pub fn dimension(&self) -> usize {
        LINE_DIMENSION
    }

    /// True when no normal coefficient clears the near-zero tolerance, so the
    /// line has no basepoint.
    pub fn is_degenerate(&self) -> bool {
        self.basepoint.is_none()
    }

    pub fn is_parallel(&self, other: &Self) -> bool {
        // both normals are 2-dimensional, so the comparison cannot fail
        matches!(
            self.normal_vector.is_parallel(&other.normal_vector),
            Ok(true)
        )
    }

    /// Tolerance-based line equality.
    ///
    /// Two degenerate lines are equal when their constants agree. A degenerate
    /// line never equals a regular one. Otherwise the lines must be parallel,
    /// and the vector joining their basepoints must be orthogonal to the
    /// shared normal direction.
    pub fn equals(&self, other: &Self) -> bool {
        match (&self.basepoint, &other.basepoint) {
            (None, None) => {
                scalar::is_near_zero(&(&self.constant_term - &other.constant_term))
            }
            (None, Some(_)) | (Some(_), None) => false,
            (Some(p), Some(q)) => {
                self.is_parallel(other)
                    && matches!(
                        p.subtract(q)
                            .and_then(|joining| joining.is_orthogonal(&self.normal_vector)),
                        Ok(true)
                    )
            }
        }
    }

    /// Intersect two lines.
    ///
    /// Equal lines give [`Intersection::Coincident`]; parallel, distinct lines
    /// fail with [`Error::NoIntersection`]; anything else is solved by
    /// Cramer's rule.
    pub fn intersection(&self, other: &Self) -> Result<Intersection> {
        if self.equals(other) {
            debug!(line = %self, "lines coincide");
            return Ok(Intersection::Coincident);
        }
        if self.is_degenerate() || other.is_degenerate() || self.is_parallel(other) {
            debug!(first = %self, second = %other, "parallel lines do not intersect");
            return Err(Error::NoIntersection);
        }

        let (a, b) = self.coefficients();
        let (c, d) = other.coefficients();
        let k1 = &self.constant_term;
        let k2 = &other.constant_term;

        let denominator = a * d - b * c;
        if denominator.is_zero() {
            return Err(Error::NoIntersection);
        }

        let precision = self.normal_vector.precision();
        let x = precision.divide(&(d * k1 - b * k2), &denominator)?;
        let y = precision.divide(&(a * k2 - c * k1), &denominator)?;
        let point = Vector::from_parts(vec![x, y], precision);
        trace!(%point, "lines intersect");
        Ok(Intersection::Point(point))
    }

    fn coefficients(&self) -> (&Scalar, &Scalar) {
        let n = self.normal_vector.coordinates();
        (&n[0], &n[1])
    }
}

impl Default for Line {
    fn default() -> Self {
        Self {
            normal_vector: Vector::from_parts(
                vec![Scalar::zero(); LINE_DIMENSION],
                Precision::default(),
            ),
            constant_term: Scalar::zero(),
            basepoint: None,
        }
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let one = Scalar::from(1);
        let mut terms: Vec<String> = Vec::new();

        for (i, coefficient) in self.normal_vector.coordinates().iter().enumerate() {
            let rounded = scalar::round_places(coefficient, DISPLAY_PLACES);
            if rounded.is_zero() {
                continue;
            }
            let leading = terms.is_empty();
            let mut term = String::new();
            if rounded < Scalar::zero() {
                term.push('-');
            } else if !leading {
                term.push('+');
            }
            if !leading {
                term.push(' ');
            }
            let magnitude = rounded.abs();
            if magnitude != one {
                term.push_str(&scalar::render(&magnitude));
            }
            term.push_str(&format!("x_{}", i + 1));
            terms.push(term);
        }

        let lhs = if terms.is_empty() {
            "0".to_string()
        } else {
            terms.join(" ")
        };
        write!(f, "{} = {}", lhs, scalar::render(&self.constant_term))
    }
}
