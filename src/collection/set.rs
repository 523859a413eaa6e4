//! Sequential set with insertion-order iteration.
//!
//! This module provides [`Set`], a growable collection of unique elements
//! stored in a plain `Vec`. Only equality is required of the element type:
//! no hashing and no ordering.
//!
//! # Overview
//!
//! - Elements are kept in first-insertion order, which is observable through
//!   iteration, [`Display`](std::fmt::Display) and the slice/vec accessors.
//! - Order never affects equality: two sets are equal when they hold the
//!   same elements.
//! - [`Set::union`] and [`Set::intersection`] return new, independently
//!   owned sets and leave both operands untouched.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `contains`     | O(n)       |
//! | `insert`       | O(n)       |
//! | `remove`       | O(n)       |
//! | `len`          | O(1)       |
//! | `union`        | O(n * m)   |
//! | `intersection` | O(n * m)   |
//!
//! Membership is a linear scan. The set is meant for small collections or
//! element types that offer nothing beyond equality; reach for a hashed or
//! ordered set when large inputs matter.
//!
//! # Absent Elements
//!
//! An owned `E` is never absent, so [`Set::insert`], [`Set::contains`] and
//! [`Set::remove`] cannot fail. Values that may be missing (`Option<E>`) go
//! through the checked variants ([`Set::try_insert`], [`Set::try_contains`],
//! [`Set::try_remove`], [`Set::try_from_elements`]), which reject `None` with
//! [`SetError::InvalidArgument`] before mutating anything.
//!
//! # Examples
//!
//! ```rust
//! use seqset::collection::Set;
//!
//! let mut set = Set::new();
//! set.insert(1);
//! set.insert(2);
//! set.insert(1);
//! assert_eq!(set.len(), 2);
//!
//! let other = Set::from_elements([2, 3]);
//! assert_eq!(set.union(&other).as_slice(), &[2, 3, 1]);
//! assert_eq!(set.intersection(&other).as_slice(), &[2]);
//! assert_eq!(set.to_string(), "1 2 ");
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::iter::FusedIterator;

use super::SetError;

/// A collection of unique elements backed by a sequential container.
///
/// No two stored elements compare equal. Elements are iterated in the order
/// they were first inserted.
///
/// # Type Parameters
///
/// * `E` - The element type. Most operations only need `PartialEq`; set
///   algebra and copying additionally need `Clone`.
///
/// # Examples
///
/// ```rust
/// use seqset::collection::Set;
///
/// let set = Set::from_elements(["a", "a", "b"]);
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&"a"));
/// assert!(set.contains(&"b"));
/// ```
#[derive(Clone)]
pub struct Set<E> {
    elements: Vec<E>,
}

impl<E> Set<E> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::collection::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the elements in insertion order.
    #[inline]
    pub fn iter(&self) -> SetIterator<'_, E> {
        SetIterator {
            inner: self.elements.iter(),
        }
    }

    /// Returns a read-only view of the elements in insertion order.
    ///
    /// The view borrows the set, so it cannot be used to break uniqueness.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::collection::Set;
    ///
    /// let set = Set::from_elements([3, 1, 3, 2]);
    /// assert_eq!(set.as_slice(), &[3, 1, 2]);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        &self.elements
    }

    /// Consumes the set and returns its elements in insertion order.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<E> {
        self.elements
    }
}

impl<E: Clone> Set<E> {
    /// Returns an owned copy of the elements in insertion order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<E> {
        self.elements.clone()
    }

    /// Returns an owned, fixed-size copy of the elements in insertion order.
    #[must_use]
    pub fn to_boxed_slice(&self) -> Box<[E]> {
        self.elements.clone().into_boxed_slice()
    }

    /// Returns a new set with the same elements in the same order.
    ///
    /// The copy owns its own storage: mutating either set never affects the
    /// other. Elements themselves are cloned according to `E`'s own `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::collection::Set;
    ///
    /// let original = Set::from_elements([1, 2]);
    /// let mut copy = original.duplicate();
    /// copy.insert(3);
    ///
    /// assert_eq!(original.len(), 2);
    /// assert_eq!(copy.len(), 3);
    /// ```
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            elements: self.elements.clone(),
        }
    }
}

impl<E: PartialEq> Set<E> {
    /// Creates a set holding the distinct values of `elements`.
    ///
    /// Duplicates are collapsed; the first occurrence of each value decides
    /// its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::collection::Set;
    ///
    /// let set = Set::from_elements([2, 1, 2, 3, 1]);
    /// assert_eq!(set.as_slice(), &[2, 1, 3]);
    /// ```
    #[must_use]
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let mut set = Self::new();
        set.extend(elements);
        set
    }

    /// Creates a set from possibly-absent values.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidArgument`] carrying the index of the first
    /// `None` in `elements`. No set is produced in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::collection::{Set, SetError};
    ///
    /// let set = Set::try_from_elements([Some("a"), Some("a"), Some("b")]).unwrap();
    /// assert_eq!(set.len(), 2);
    ///
    /// let error = Set::try_from_elements([Some("a"), None]).unwrap_err();
    /// assert_eq!(
    ///     error,
    ///     SetError::InvalidArgument {
    ///         operation: "try_from_elements",
    ///         index: Some(1),
    ///     }
    /// );
    /// ```
    pub fn try_from_elements<I>(elements: I) -> Result<Self, SetError>
    where
        I: IntoIterator<Item = Option<E>>,
    {
        let mut set = Self::new();
        for (index, element) in elements.into_iter().enumerate() {
            let element = element.ok_or_else(|| SetError::absent_at("try_from_elements", index))?;
            set.insert(element);
        }
        Ok(set)
    }

    /// Returns `true` if an element equal to `element` is present.
    ///
    /// Borrowed forms of the element type are accepted, so a `Set<String>`
    /// can be queried with a `&str`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::collection::Set;
    ///
    /// let set = Set::from_elements(["x".to_string()]);
    /// assert!(set.contains("x"));
    /// assert!(!set.contains("y"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(element).is_some()
    }

    /// Appends `element` unless an equal element is already present.
    ///
    /// Returns `true` if the set changed. Inserting the same value twice has
    /// the same effect as inserting it once.
    pub fn insert(&mut self, element: E) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.elements.push(element);
        true
    }

    /// Removes the element equal to `element`, if any.
    ///
    /// Returns `true` if the set changed. The relative order of the remaining
    /// elements is kept.
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let Some(index) = self.position(element) else {
            return false;
        };
        self.elements.remove(index);
        true
    }

    /// Checked form of [`Set::contains`] for possibly-absent values.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidArgument`] if `element` is `None`.
    pub fn try_contains<Q>(&self, element: Option<&Q>) -> Result<bool, SetError>
    where
        E: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let element = element.ok_or_else(|| SetError::absent("try_contains"))?;
        Ok(self.contains(element))
    }

    /// Checked form of [`Set::insert`] for possibly-absent values.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidArgument`] if `element` is `None`; the set
    /// is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::collection::Set;
    ///
    /// let mut set = Set::new();
    /// assert_eq!(set.try_insert(Some(1)), Ok(true));
    /// assert!(set.try_insert(None).is_err());
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn try_insert(&mut self, element: Option<E>) -> Result<bool, SetError> {
        let element = element.ok_or_else(|| SetError::absent("try_insert"))?;
        Ok(self.insert(element))
    }

    /// Checked form of [`Set::remove`] for possibly-absent values.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidArgument`] if `element` is `None`; the set
    /// is left untouched.
    pub fn try_remove<Q>(&mut self, element: Option<&Q>) -> Result<bool, SetError>
    where
        E: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let element = element.ok_or_else(|| SetError::absent("try_remove"))?;
        Ok(self.remove(element))
    }

    fn position<Q>(&self, element: &Q) -> Option<usize>
    where
        E: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.elements
            .iter()
            .position(|item| item.borrow() == element)
    }
}

impl<E: Clone + PartialEq> Set<E> {
    /// Returns a new set with every element of `self` or `other`.
    ///
    /// The result starts as a copy of `other`, followed by the elements of
    /// `self` that `other` lacks, in `self`'s order. Element-wise the
    /// operation is symmetric; only the iteration order depends on which
    /// operand is `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::collection::Set;
    ///
    /// let left = Set::from_elements([1, 2, 3]);
    /// let right = Set::from_elements([3, 4]);
    ///
    /// let union = left.union(&right);
    /// assert_eq!(union.as_slice(), &[3, 4, 1, 2]);
    /// assert_eq!(union, right.union(&left));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = other.duplicate();
        result.extend(self.iter().cloned());
        tracing::trace!(
            left = self.len(),
            right = other.len(),
            result = result.len(),
            "union"
        );
        result
    }

    /// Returns a new set with the elements of `self` also present in `other`,
    /// in `self`'s order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqset::collection::Set;
    ///
    /// let left = Set::from_elements([1, 2, 3]);
    /// let right = Set::from_elements([3, 4, 2]);
    ///
    /// assert_eq!(left.intersection(&right).as_slice(), &[2, 3]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        // `self` is already unique, so filtering cannot introduce duplicates.
        let elements: Vec<E> = self
            .iter()
            .filter(|element| other.contains(*element))
            .cloned()
            .collect();
        tracing::trace!(
            left = self.len(),
            right = other.len(),
            result = elements.len(),
            "intersection"
        );
        Self { elements }
    }
}

impl<E> Default for Set<E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Space-separated elements in iteration order, each followed by one space.
///
/// An empty set renders as the empty string.
impl<E: fmt::Display> fmt::Display for Set<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in self {
            write!(formatter, "{element} ")?;
        }
        Ok(())
    }
}

impl<E: fmt::Debug> fmt::Debug for Set<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<E: PartialEq> PartialEq for Set<E> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<E: Eq> Eq for Set<E> {}

impl<E: PartialEq> Extend<E> for Set<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<E: PartialEq> FromIterator<E> for Set<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<E: PartialEq> From<Vec<E>> for Set<E> {
    fn from(elements: Vec<E>) -> Self {
        Self::from_elements(elements)
    }
}

impl<E: PartialEq, const N: usize> From<[E; N]> for Set<E> {
    fn from(elements: [E; N]) -> Self {
        Self::from_elements(elements)
    }
}

/// Iterator over references to elements of a [`Set`], in insertion order.
pub struct SetIterator<'a, E> {
    inner: std::slice::Iter<'a, E>,
}

impl<'a, E> Iterator for SetIterator<'a, E> {
    type Item = &'a E;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> DoubleEndedIterator for SetIterator<'_, E> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<E> ExactSizeIterator for SetIterator<'_, E> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<E> FusedIterator for SetIterator<'_, E> {}

/// Owning iterator over the elements of a [`Set`], in insertion order.
pub struct SetIntoIterator<E> {
    inner: std::vec::IntoIter<E>,
}

impl<E> Iterator for SetIntoIterator<E> {
    type Item = E;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> DoubleEndedIterator for SetIntoIterator<E> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<E> ExactSizeIterator for SetIntoIterator<E> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<E> FusedIterator for SetIntoIterator<E> {}

impl<'a, E> IntoIterator for &'a Set<E> {
    type Item = &'a E;
    type IntoIter = SetIterator<'a, E>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> IntoIterator for Set<E> {
    type Item = E;
    type IntoIter = SetIntoIterator<E>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<E: serde::Serialize> serde::Serialize for Set<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SetVisitor<E> {
    marker: std::marker::PhantomData<E>,
}

#[cfg(feature = "serde")]
impl<E> SetVisitor<E> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, E> serde::de::Visitor<'de> for SetVisitor<E>
where
    E: serde::Deserialize<'de> + PartialEq,
{
    type Value = Set<E>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = Set::new();
        while let Some(element) = seq.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, E> serde::Deserialize<'de> for Set<E>
where
    E: serde::Deserialize<'de> + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
