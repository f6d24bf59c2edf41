#![warn(missing_docs)]

//! Vector algebra for the prism renderer.
//!
//! Small value types used by the tracing pipeline: a real 3D [`Vector3`]
//! with reflection and refraction, a generic 2D [`Vector2`] for discrete and
//! planar coordinates, and a [`Geometry`] rectangle for image bounds.
//!
//! Equality on real vectors is approximate: two vectors compare equal when
//! every component differs by less than [`EPS`].
//!
//! # Example
//!
//! ```
//! use prism_math::Vector3;
//!
//! let normal = Vector3::new(0.0, 1.0, 0.0);
//! let incoming = Vector3::new(1.0, -1.0, 0.0).get_normalized();
//! let out = normal.reflection(&incoming);
//! assert_eq!(out, Vector3::new(1.0, 1.0, 0.0).get_normalized());
//! ```

mod error;
mod geometry;
pub mod scalar;
mod vector2;
mod vector3;

pub use error::{MathError, Result};
pub use geometry::Geometry;
pub use scalar::{sqr, update_max, update_min, Real, Tolerance, EPS};
pub use vector2::{polygon_edges, Component, Coor, Line2, Polygon, Vec2, Vector2};
pub use vector3::Vector3;

/// Short alias for [`Vector3`].
pub type Vec3 = Vector3;
