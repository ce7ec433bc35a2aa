//! # msdsort
//!
//! `msdsort` sorts byte strings into ascending byte-wise lexicographic order with an
//! adaptive **most-significant-digit (MSD) radix sort**. It is a drop-in replacement
//! for `slice::sort` on string-like data, tuned for inputs with many keys and long
//! shared prefixes.
//!
//! ## Key Features
//!
//! - **No Recursion**: Sub-problems live on an explicit work stack, so keys with very
//!   long shared prefixes cannot overflow the call stack. Adjacent finished runs are
//!   merged on the stack, keeping it as small as the number of unfinished sub-problems.
//! - **Adaptive Fan-out**: Large sub-problems are bucketed two bytes at a time (65536
//!   buckets, visited sparsely through presence flags), smaller ones one byte at a time,
//!   and the smallest are finished with insertion sort.
//! - **Zero-Copy**: Keys are borrowed, never copied. The sorter links them into an
//!   index-based chain and only rewrites the links.
//! - **Custom Storage**: The [`KeyAccessor`] and [`IndexSwap`] traits let you sort any
//!   indexable collection (e.g., Arrow-style offset buffers) without materialising keys.
//!
//! ## Usage
//!
//! ```rust
//! use msdsort::sort;
//!
//! let mut data = vec!["banana", "apple", "cherry", "date"];
//! sort(&mut data);
//!
//! assert_eq!(data, vec!["apple", "banana", "cherry", "date"]);
//! ```
//!
//! ### Sorting by a derived key
//!
//! ```rust
//! use msdsort::sort_by_key;
//!
//! let mut files = vec![("b.txt", 3), ("a.txt", 10), ("c.txt", 1)];
//! sort_by_key(&mut files, |f| f.0);
//!
//! assert_eq!(files, vec![("a.txt", 10), ("b.txt", 3), ("c.txt", 1)]);
//! ```
//!
//! ## Ordering
//!
//! Bytes compare as unsigned values and a key sorts before every key it is a proper
//! prefix of, exactly like `<[u8]>::cmp`. The relative order of equal keys is not
//! specified.
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: one `debug!` record
//! per sort with its [`SortStats`], and a `trace!` record per bucketing pass.

pub mod algo;
mod bucket;
pub mod config;
pub mod core;
mod digit;
mod insertion;
mod list;
mod scheduler;

pub use algo::{RadixSorter, sort, sort_accessor, sort_by_key, sort_indices};
pub use config::{ConfigError, SortConfig};
pub use crate::core::{IndexSwap, KeyAccessor};
pub use scheduler::SortStats;

pub mod prelude {
    pub use crate::algo::{RadixSorter, sort, sort_accessor, sort_by_key, sort_indices};
    pub use crate::config::SortConfig;
    pub use crate::core::{IndexSwap, KeyAccessor};
}
