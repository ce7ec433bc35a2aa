//! Insertion sort for short chains.

use crate::list::{Chain, NIL};

/// Sorts the `NIL`-terminated chain starting at `first`, comparing keys from
/// `offset` onward only. Bytes before `offset` are equal across the chain.
///
/// Returns the new `(head, tail)`; the tail keeps a `NIL` link.
pub(crate) fn insertion_sort(chain: &mut Chain<'_>, first: usize, offset: usize) -> (usize, usize) {
    let mut head = first;
    let mut tail = first;
    let mut node = chain.next(tail);
    while node != NIL {
        let key = chain.suffix(node, offset);
        let rest = chain.next(node);
        if chain.suffix(tail, offset) <= key {
            tail = node;
        } else if chain.suffix(head, offset) >= key {
            chain.set_next(tail, rest);
            chain.set_next(node, head);
            head = node;
        } else {
            // tail > key, so this stops before running off the sorted part.
            let mut at = head;
            while chain.suffix(chain.next(at), offset) <= key {
                at = chain.next(at);
            }
            let after = chain.next(at);
            chain.set_next(tail, rest);
            chain.set_next(node, after);
            chain.set_next(at, node);
        }
        node = chain.next(tail);
    }
    (head, tail)
}
