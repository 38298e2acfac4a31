// src/prelude.rs
//! The “everything” import for decimal_geometry.
//!
//! ```rust
//! use decimal_geometry::prelude::*;
//! ```

// core data types
pub use crate::line::{Intersection, Line};
pub use crate::vector::{Rounded, Vector};

// numeric model
pub use crate::error::{Error, Result};
pub use crate::precision::Precision;
pub use crate::scalar::{IntoScalar, Scalar};
