//! Error types for the set collection.
//!
//! The only failure a [`Set`](super::Set) reports is an absent element
//! handed to one of its checked entry points.

/// Represents errors that can occur when operating on a [`Set`](super::Set).
///
/// Every checked operation validates its arguments before touching the set,
/// so receiving this error means the set is exactly as it was before the call.
///
/// # Examples
///
/// ```rust
/// use seqset::collection::SetError;
///
/// let error = SetError::InvalidArgument {
///     operation: "try_insert",
///     index: None,
/// };
/// assert_eq!(format!("{error}"), "try_insert: element must not be absent");
///
/// let error = SetError::InvalidArgument {
///     operation: "try_from_elements",
///     index: Some(2),
/// };
/// assert_eq!(
///     format!("{error}"),
///     "try_from_elements: element must not be absent (at index 2)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetError {
    /// An absent value was supplied where an element was required.
    InvalidArgument {
        /// The name of the operation that rejected the argument.
        operation: &'static str,
        /// Position of the first absent element, for operations taking a sequence.
        index: Option<usize>,
    },
}

impl SetError {
    pub(crate) fn absent(operation: &'static str) -> Self {
        tracing::debug!(operation, "rejected absent element");
        Self::InvalidArgument {
            operation,
            index: None,
        }
    }

    pub(crate) fn absent_at(operation: &'static str, index: usize) -> Self {
        tracing::debug!(operation, index, "rejected absent element in sequence");
        Self::InvalidArgument {
            operation,
            index: Some(index),
        }
    }
}

impl std::fmt::Display for SetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument {
                operation,
                index: None,
            } => write!(formatter, "{operation}: element must not be absent"),
            Self::InvalidArgument {
                operation,
                index: Some(index),
            } => write!(
                formatter,
                "{operation}: element must not be absent (at index {index})"
            ),
        }
    }
}

impl std::error::Error for SetError {}
