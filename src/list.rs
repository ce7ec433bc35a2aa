//! Arena-backed singly linked chain of keys.
//!
//! Node `i` is input element `i`. Keys are borrowed from the caller and never
//! copied; sorting only rewrites the `next` links.

use crate::core::KeyAccessor;

/// Link value marking the end of a chain.
pub(crate) const NIL: usize = usize::MAX;

pub(crate) struct Chain<'a> {
    keys: Vec<&'a [u8]>,
    next: Vec<usize>,
}

impl<'a> Chain<'a> {
    /// Links `keys` in input order: node `i` points at node `i + 1`, the last at `NIL`.
    pub fn new(keys: Vec<&'a [u8]>) -> Self {
        let n = keys.len();
        let next = (1..=n).map(|i| if i < n { i } else { NIL }).collect();
        Self { keys, next }
    }

    pub fn from_accessor<A: KeyAccessor + ?Sized>(provider: &'a A) -> Self {
        Self::new((0..provider.len()).map(|i| provider.get_key(i)).collect())
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// First node of the chain as built, or `NIL` when empty.
    pub fn head(&self) -> usize {
        if self.keys.is_empty() { NIL } else { 0 }
    }

    #[inline(always)]
    pub fn key(&self, node: usize) -> &'a [u8] {
        self.keys[node]
    }

    /// The part of the key at or after `offset`; empty when the key is shorter.
    #[inline(always)]
    pub fn suffix(&self, node: usize, offset: usize) -> &'a [u8] {
        self.keys[node].get(offset..).unwrap_or(&[])
    }

    #[inline(always)]
    pub fn next(&self, node: usize) -> usize {
        self.next[node]
    }

    #[inline(always)]
    pub fn set_next(&mut self, node: usize, to: usize) {
        self.next[node] = to;
    }

    pub fn walk(&self, head: usize) -> Walk<'_, 'a> {
        Walk { chain: self, node: head }
    }

    /// Consumes the chain and returns node ids in link order from `head`.
    pub fn extract(self, head: usize) -> Vec<usize> {
        let order: Vec<usize> = self.walk(head).collect();
        debug_assert_eq!(
            order.len(),
            self.len(),
            "sorted chain does not cover every node"
        );
        order
    }
}

pub(crate) struct Walk<'c, 'a> {
    chain: &'c Chain<'a>,
    node: usize,
}

impl Iterator for Walk<'_, '_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.node == NIL {
            return None;
        }
        let node = self.node;
        self.node = self.chain.next(node);
        Some(node)
    }
}
