//! # decimal_geometry Quickstart
//!
//! ```rust
//! use decimal_geometry::prelude::*;
//!
//! // Two lines in normal form: a·x_1 + b·x_2 = k
//! let l1 = Line::from_coefficients([7.204, 3.182], 8.68).unwrap();
//! let l2 = Line::from_coefficients([8.172, 4.114], 9.883).unwrap();
//!
//! assert!(!l1.is_parallel(&l2));
//! let point = l1.intersection(&l2).unwrap();
//! assert_eq!(point.point().unwrap().to_string(), "Vector: [1.173, 0.073]");
//!
//! // Exact decimal cross product
//! let v = Vector::new([1, 2, 3]).unwrap();
//! let w = Vector::new([4, 5, 6]).unwrap();
//! assert_eq!(v.cross(&w).unwrap(), Vector::new([-3, 6, -3]).unwrap());
//! ```
//!
#![doc = include_str!("../README.md")]

// Core modules
pub mod error;
pub mod line;
pub mod precision;
pub mod prelude;
pub mod scalar;
pub mod vector;

// --- Public API exports ---

pub use error::{Error, Result};
pub use line::{first_nonzero_index, Intersection, Line};
pub use precision::Precision;
pub use scalar::{IntoScalar, Scalar, NEAR_ZERO_TOLERANCE};
pub use vector::{Rounded, Vector};
