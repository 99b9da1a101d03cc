//! Vector algebra over arbitrary-dimension numeric vectors.
//!
//! ```
//! use vector_algebra::{add, cross_product, dot_product, Vector};
//!
//! let total = add(&[Vector::new([2, -1, 5]), Vector::new([1, 1, -1])]).unwrap();
//! assert_eq!(total, Vector::new([3, 0, 4]));
//!
//! let dot = dot_product(&Vector::new([-1, -2, 3]), &Vector::new([4, 0, -8])).unwrap();
//! assert_eq!(dot, -28);
//!
//! let cross = cross_product(&Vector::new([1, -7, 1]), &Vector::new([5, 2, 4])).unwrap();
//! assert_eq!(cross, Vector::new([-30, 1, 37]));
//! ```

mod error;
pub mod ops;
mod vector;

pub use error::{Result, VectorError};
pub use ops::{
    add, cross_product, dot_product, equals, invert, magnitude, multiply_by_components,
    multiply_by_scalar, normalize, resize, subtract, sum,
};
pub use vector::{Vector, Vector2D, Vector3D};
