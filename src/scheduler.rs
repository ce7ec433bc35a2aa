//! Explicit work stack driving the MSD radix sort.
//!
//! Instead of recursing per byte position, sub-problems are pushed as
//! [`Frame`]s and popped depth-first. Buckets are pushed in ascending order,
//! so frames pop from the largest keys down and the result chain is built
//! back to front by prepending each sorted frame.

use crate::bucket::{Bucket, Scratch, bucketize_one, bucketize_two};
use crate::config::SortConfig;
use crate::insertion::insertion_sort;
use crate::list::{Chain, NIL};
use log::trace;

/// Counters collected during one top-level sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Number of keys sorted.
    pub keys: usize,
    /// Sub-problems finished by insertion sort.
    pub insertion_sorts: usize,
    /// Bucketing passes that read one byte per key.
    pub one_byte_passes: usize,
    /// Bucketing passes that read two bytes per key.
    pub two_byte_passes: usize,
    /// Sorted runs folded into the sorted frame already on top of the stack.
    pub merged_frames: usize,
    /// Peak number of frames on the work stack.
    pub max_stack_depth: usize,
}

/// A scheduled sub-problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Frame {
    /// Keys sharing their first `offset` bytes, still to be partitioned.
    Pending { run: Bucket, offset: usize },
    /// A run already in final order.
    Sorted { head: usize, tail: usize },
}

pub(crate) struct WorkStack {
    frames: Vec<Frame>,
    insertion_cutoff: usize,
    stats: SortStats,
}

impl WorkStack {
    pub fn new(insertion_cutoff: usize) -> Self {
        Self {
            frames: Vec::new(),
            insertion_cutoff,
            stats: SortStats::default(),
        }
    }

    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// Schedules a bucket whose keys share their first `offset` bytes.
    ///
    /// Buckets of at most the insertion cutoff are sorted right away and
    /// pushed as sorted runs.
    pub fn push_bucket(&mut self, chain: &mut Chain<'_>, bucket: Bucket, offset: usize) {
        chain.set_next(bucket.tail, NIL);
        if bucket.count <= 1 {
            return self.push_sorted_run(chain, bucket.head, bucket.tail);
        }
        if bucket.count <= self.insertion_cutoff {
            let (head, tail) = insertion_sort(chain, bucket.head, offset);
            self.stats.insertion_sorts += 1;
            return self.push_sorted_run(chain, head, tail);
        }
        self.push_frame(Frame::Pending {
            run: bucket,
            offset,
        });
    }

    /// Schedules a bucket of equal keys.
    pub fn push_sorted(&mut self, chain: &mut Chain<'_>, bucket: Bucket) {
        self.push_sorted_run(chain, bucket.head, bucket.tail);
    }

    fn push_sorted_run(&mut self, chain: &mut Chain<'_>, head: usize, tail: usize) {
        if let Some(Frame::Sorted { tail: top_tail, .. }) = self.frames.last_mut() {
            chain.set_next(*top_tail, head);
            *top_tail = tail;
            self.stats.merged_frames += 1;
            return;
        }
        self.push_frame(Frame::Sorted { head, tail });
    }

    fn push_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
        self.stats.max_stack_depth = self.stats.max_stack_depth.max(self.frames.len());
    }
}

/// Sorts the whole chain and returns the head of the sorted chain together
/// with the counters of the run.
pub(crate) fn run(chain: &mut Chain<'_>, config: &SortConfig) -> (usize, SortStats) {
    let n = chain.len();
    let mut stack = WorkStack::new(config.insertion_cutoff());
    stack.stats.keys = n;
    if n < 2 {
        return (chain.head(), stack.stats);
    }

    let mut scratch = Scratch::new();
    let whole = Bucket {
        head: chain.head(),
        tail: n - 1,
        count: n,
    };
    stack.push_bucket(chain, whole, 0);

    let mut result = NIL;
    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Sorted { head, tail } => {
                chain.set_next(tail, result);
                result = head;
            }
            Frame::Pending { run, offset } if run.count > config.byte_budget() => {
                trace!("two-byte pass: {} keys at offset {}", run.count, offset);
                stack.stats.two_byte_passes += 1;
                bucketize_two(chain, &mut scratch, &mut stack, run, offset);
            }
            Frame::Pending { run, offset } => {
                trace!("one-byte pass: {} keys at offset {}", run.count, offset);
                stack.stats.one_byte_passes += 1;
                bucketize_one(chain, &mut scratch, &mut stack, run, offset);
            }
        }
    }
    (result, stack.stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<'a>(words: &[&'a str]) -> Vec<&'a [u8]> {
        words.iter().map(|w| w.as_bytes()).collect()
    }

    fn sorted_with(input: &[&[u8]], config: SortConfig) -> (Vec<Vec<u8>>, SortStats) {
        let mut chain = Chain::new(input.to_vec());
        let (head, stats) = run(&mut chain, &config);
        let order = chain.extract(head);
        (order.into_iter().map(|i| input[i].to_vec()).collect(), stats)
    }

    fn reference(input: &[&[u8]]) -> Vec<Vec<u8>> {
        let mut expected: Vec<Vec<u8>> = input.iter().map(|k| k.to_vec()).collect();
        expected.sort();
        expected
    }

    #[test]
    fn test_sorted_frames_merge_on_push() {
        let mut chain = Chain::new(keys(&["a", "b", "c"]));
        let mut stack = WorkStack::new(20);
        for node in 0..3 {
            let bucket = Bucket {
                head: node,
                tail: node,
                count: 1,
            };
            stack.push_sorted(&mut chain, bucket);
        }
        assert_eq!(stack.pop(), Some(Frame::Sorted { head: 0, tail: 2 }));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.stats.merged_frames, 2);
        assert_eq!(stack.stats.max_stack_depth, 1);
    }

    #[test]
    fn test_pending_frame_breaks_merge() {
        let mut chain = Chain::new(keys(&["a", "b1", "b2", "c"]));
        let mut stack = WorkStack::new(1);
        stack.push_sorted(&mut chain, Bucket { head: 0, tail: 0, count: 1 });
        stack.push_bucket(&mut chain, Bucket { head: 1, tail: 2, count: 2 }, 1);
        stack.push_bucket(&mut chain, Bucket { head: 3, tail: 3, count: 1 }, 1);
        assert_eq!(stack.frames.len(), 3);
        assert_eq!(chain.next(2), NIL);
    }

    #[test]
    fn test_small_input_uses_insertion_only() {
        let input = keys(&["", "Hello", "foo", "fo", "bar", "foo"]);
        let (sorted, stats) = sorted_with(&input, SortConfig::default());
        assert_eq!(sorted, reference(&input));
        assert_eq!(stats.insertion_sorts, 1);
        assert_eq!(stats.one_byte_passes + stats.two_byte_passes, 0);
    }

    #[test]
    fn test_trivial_inputs() {
        let (sorted, stats) = sorted_with(&[], SortConfig::default());
        assert!(sorted.is_empty());
        assert_eq!(stats.keys, 0);

        let single = keys(&["x"]);
        let (sorted, _) = sorted_with(&single, SortConfig::default());
        assert_eq!(sorted, vec![b"x".to_vec()]);
    }

    #[test]
    fn test_dispatch_follows_byte_budget() {
        let owned: Vec<String> = (0..2000).map(|i| format!("k{}", (i * 7919) % 2000)).collect();
        let input: Vec<&[u8]> = owned.iter().map(|s| s.as_bytes()).collect();

        let one = SortConfig::new(4, usize::MAX).unwrap();
        let (sorted, stats) = sorted_with(&input, one);
        assert_eq!(sorted, reference(&input));
        assert!(stats.one_byte_passes > 0);
        assert_eq!(stats.two_byte_passes, 0);

        let two = SortConfig::new(4, 1).unwrap();
        let (sorted, stats) = sorted_with(&input, two);
        assert_eq!(sorted, reference(&input));
        assert!(stats.two_byte_passes > 0);
        assert_eq!(stats.one_byte_passes, 0);
    }

    #[test]
    fn test_all_equal_long_keys_terminate() {
        let key = vec![b'z'; 300];
        let input: Vec<&[u8]> = (0..100).map(|_| key.as_slice()).collect();
        for config in [SortConfig::new(1, 1).unwrap(), SortConfig::new(1, 1000).unwrap()] {
            let (sorted, stats) = sorted_with(&input, config);
            assert_eq!(sorted, reference(&input));
            assert_eq!(stats.max_stack_depth, 1);
        }
    }
}
