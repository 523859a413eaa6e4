//! # seqset
//!
//! A small generic set backed by a sequential container.
//!
//! ## Overview
//!
//! [`Set`](collection::Set) stores unique elements in a `Vec`, needing only
//! `PartialEq` from the element type. It offers membership testing,
//! insertion, removal, union and intersection, keeps elements in insertion
//! order, and never hands out its storage mutably.
//!
//! ## Feature Flags
//!
//! - `collection`: The set collection (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for `Set` as a plain sequence
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use seqset::prelude::*;
//!
//! let mut set = Set::new();
//! set.insert("x");
//! assert_eq!(set.to_string(), "x ");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use seqset::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "collection")]
    pub use crate::collection::*;
}

#[cfg(feature = "collection")]
pub mod collection;
