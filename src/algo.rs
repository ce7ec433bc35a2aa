//! Top-level sorting entry points.
//!
//! Every entry point links the keys into an index-based chain, runs the
//! adaptive MSD radix sort over it and reads the order back. The slice and
//! accessor forms then apply that order to the caller's storage by swapping
//! elements along permutation cycles.
//!
//! The main entry points are [`sort`], [`sort_indices`], [`sort_by_key`] and
//! [`sort_accessor`]. [`RadixSorter`] offers the same operations with a custom
//! [`SortConfig`] and exposes [`SortStats`] for the last run.

use crate::config::SortConfig;
use crate::core::{IndexSwap, KeyAccessor};
use crate::list::Chain;
use crate::scheduler::{self, SortStats};
use log::debug;

/// A configurable MSD radix sorter.
///
/// # Examples
///
/// ```
/// use msdsort::{RadixSorter, SortConfig};
///
/// let config = SortConfig::new(8, 1).unwrap();
/// let mut sorter = RadixSorter::with_config(config);
///
/// let mut data = vec!["pear", "apple", "fig", "apple"];
/// sorter.sort(&mut data);
///
/// assert_eq!(data, vec!["apple", "apple", "fig", "pear"]);
/// assert_eq!(sorter.stats().keys, 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RadixSorter {
    config: SortConfig,
    stats: SortStats,
}

impl RadixSorter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SortConfig) -> Self {
        Self {
            config,
            stats: SortStats::default(),
        }
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Counters from the most recent sort.
    pub fn stats(&self) -> &SortStats {
        &self.stats
    }

    /// Returns the indices that put `provider` in ascending byte-wise order.
    ///
    /// The collection itself is not modified.
    pub fn sort_indices<A: KeyAccessor + ?Sized>(&mut self, provider: &A) -> Vec<usize> {
        let mut chain = Chain::from_accessor(provider);
        let (head, stats) = scheduler::run(&mut chain, &self.config);
        self.stats = stats;
        debug!("sorted {} keys: {:?}", stats.keys, stats);
        chain.extract(head)
    }

    /// Sorts `data` in place.
    pub fn sort<T: AsRef<[u8]>>(&mut self, data: &mut [T]) {
        let indices = self.sort_indices(&*data);
        apply_permutation(data, indices);
    }

    /// Sorts `data` in place by the byte key `key_of` derives from each element.
    ///
    /// Keys are computed once per element.
    pub fn sort_by_key<T, K, F>(&mut self, data: &mut [T], key_of: F)
    where
        K: AsRef<[u8]>,
        F: FnMut(&T) -> K,
    {
        let keys: Vec<K> = data.iter().map(key_of).collect();
        let indices = self.sort_indices(&keys);
        drop(keys);
        apply_permutation(data, indices);
    }

    /// Sorts a collection that can only be read by index and permuted by swaps.
    pub fn sort_accessor<A: KeyAccessor + IndexSwap + ?Sized>(&mut self, data: &mut A) {
        let indices = self.sort_indices(&*data);
        apply_permutation(data, indices);
    }
}

/// Performs an index-based sort on the provided collection.
///
/// This function does not modify the input collection. Instead, it returns a `Vec<usize>`
/// containing the indices that would order the collection.
///
/// # Returns
///
/// A vector of indices such that `provider.get_key(indices[i]) <= provider.get_key(indices[i+1])`.
///
/// # Examples
///
/// ```
/// use msdsort::sort_indices;
///
/// let data = vec!["banana", "apple", "cherry"];
/// let indices = sort_indices(&data);
///
/// assert_eq!(indices, vec![1, 0, 2]); // apple, banana, cherry
/// ```
pub fn sort_indices<A: KeyAccessor + ?Sized>(provider: &A) -> Vec<usize> {
    RadixSorter::new().sort_indices(provider)
}

/// Sorts a mutable slice in place in ascending byte-wise lexicographic order.
///
/// # Examples
///
/// ```
/// use msdsort::sort;
///
/// let mut data = vec!["", "Hello", "foo", "fo", "bar", "foo"];
/// sort(&mut data);
///
/// assert_eq!(data, vec!["", "Hello", "bar", "fo", "foo", "foo"]);
/// ```
pub fn sort<T: AsRef<[u8]>>(data: &mut [T]) {
    RadixSorter::new().sort(data)
}

/// Sorts a slice in place by a byte key derived from each element.
///
/// # Examples
///
/// ```
/// use msdsort::sort_by_key;
///
/// struct Person {
///     name: &'static str,
///     age: u32,
/// }
///
/// let mut people = vec![
///     Person { name: "Gopher", age: 7 },
///     Person { name: "Alice", age: 55 },
///     Person { name: "Vera", age: 24 },
///     Person { name: "Bob", age: 75 },
/// ];
/// sort_by_key(&mut people, |p| p.name);
///
/// let ages: Vec<u32> = people.iter().map(|p| p.age).collect();
/// assert_eq!(ages, vec![55, 75, 7, 24]);
/// ```
pub fn sort_by_key<T, K, F>(data: &mut [T], key_of: F)
where
    K: AsRef<[u8]>,
    F: FnMut(&T) -> K,
{
    RadixSorter::new().sort_by_key(data, key_of)
}

/// Sorts any collection that exposes keys by index and can swap elements.
pub fn sort_accessor<A: KeyAccessor + IndexSwap + ?Sized>(data: &mut A) {
    RadixSorter::new().sort_accessor(data)
}

/// Moves element `indices[i]` to position `i` by following permutation cycles.
fn apply_permutation<A: IndexSwap + ?Sized>(data: &mut A, mut indices: Vec<usize>) {
    for i in 0..indices.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap_indices(current, next);
            indices[current] = current; // Mark as visited/placed
            current = next;
        }
        indices[current] = current;
    }
}
