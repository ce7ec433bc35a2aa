//! Collaborator traits for the radix sort.
//!
//! This module defines:
//! - [`KeyAccessor`]: hands the sorter the byte key of an element by index.
//! - [`IndexSwap`]: lets the sorter permute the caller's storage by index.

use std::collections::VecDeque;

/// A trait for accessing key data from a collection without copying.
///
/// This trait allows `msdsort` to sort any collection where elements can be
/// represented as byte slices (e.g., `Vec<String>`, `Vec<Vec<u8>>`, or custom types
/// like Arrow arrays).
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use msdsort::core::KeyAccessor;
///
/// struct MyCollection {
///     data: Vec<String>,
/// }
///
/// impl KeyAccessor for MyCollection {
///     fn get_key(&self, index: usize) -> &[u8] {
///         self.data[index].as_bytes()
///     }
///
///     fn len(&self) -> usize {
///         self.data.len()
///     }
/// }
/// ```
pub trait KeyAccessor {
    /// Returns a byte slice representing the key at the given index.
    fn get_key(&self, index: usize) -> &[u8];

    /// Returns the number of items in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Index-based swapping of a collection's elements.
///
/// Together with [`KeyAccessor`] this is all [`sort_accessor`](crate::sort_accessor)
/// needs to put a collection into key order; the sorter never touches the
/// elements themselves.
pub trait IndexSwap {
    /// Exchanges the elements at positions `a` and `b`.
    fn swap_indices(&mut self, a: usize, b: usize);
}

// Blanket implementation for indexable slices of byte-ref types.
impl<T: AsRef<[u8]>> KeyAccessor for [T] {
    fn get_key(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_slice()).
impl<T: AsRef<[u8]>> KeyAccessor for Vec<T> {
    fn get_key(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: AsRef<[u8]>> KeyAccessor for VecDeque<T> {
    fn get_key(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T> IndexSwap for [T] {
    fn swap_indices(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

impl<T> IndexSwap for Vec<T> {
    fn swap_indices(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T> IndexSwap for VecDeque<T> {
    fn swap_indices(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}
