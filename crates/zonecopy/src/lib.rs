//! # zonecopy
//!
//! Runtime side of `#[copyable]`: the root [`Object`] trait, the opaque
//! [`Zone`] token and the [`Copying`] / [`MutableCopying`] capabilities that
//! generated types implement.
//!
//! ```
//! use zonecopy::{copyable, foreign, MutableCopying, Object};
//!
//! #[copyable]
//! #[foreign]
//! pub trait PointProtocol: Object {
//!     fn x(&self) -> f64;
//!     fn y(&self) -> f64;
//! }
//!
//! # fn main() {
//! let point = Point::new(1.0, 2.0);
//! let mut copy = point.copy();
//! copy.x = 3.0;
//!
//! assert_eq!(point.x(), 1.0);
//! assert_eq!(copy.x(), 3.0);
//! # }
//! ```
//!
//! The immutable variant keeps its fields private, even to the module that
//! declares the trait:
//!
//! ```compile_fail
//! use zonecopy::{copyable, foreign, Object};
//!
//! #[copyable]
//! #[foreign]
//! pub trait PointProtocol: Object {
//!     fn x(&self) -> f64;
//! }
//!
//! fn main() {
//!     let mut point = Point::new(1.0);
//!     point.x = 2.0;
//! }
//! ```
//!
//! Traits must be declared at module level; the generated items refer back
//! to the declaring module.

mod copying;
mod object;

pub use copying::{Copying, MutableCopying, Zone};
pub use object::Object;

#[cfg(feature = "derive")]
pub use zonecopy_derive::{copyable, foreign};
