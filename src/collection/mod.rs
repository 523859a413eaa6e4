//! Set collection backed by a sequential container.
//!
//! This module provides:
//!
//! - [`Set`]: a growable set of unique elements kept in insertion order
//! - [`SetError`]: the error returned when a checked operation receives an
//!   absent element
//!
//! # Examples
//!
//! ```rust
//! use seqset::collection::Set;
//!
//! let left: Set<i32> = [1, 2, 3].into_iter().collect();
//! let right: Set<i32> = [3, 4].into_iter().collect();
//!
//! let union = left.union(&right);
//! let intersection = left.intersection(&right);
//!
//! assert_eq!(union.len(), 4);        // {1, 2, 3, 4}
//! assert_eq!(intersection.len(), 1); // {3}
//! ```

mod error;
mod set;

pub use error::SetError;
pub use set::Set;
pub use set::SetIntoIterator;
pub use set::SetIterator;
