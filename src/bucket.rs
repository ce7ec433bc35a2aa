//! One-byte and two-byte bucketing passes.
//!
//! Both passes walk a chain once, cutting it into runs of consecutive keys
//! that share a digit and splicing each run onto its bucket in O(1). The
//! buckets are then pushed onto the [`WorkStack`] in ascending digit order.

use crate::digit::{Digit, byte_at};
use crate::list::{Chain, NIL};
use crate::scheduler::WorkStack;
use cuneiform::cuneiform;

/// Number of one-byte buckets (one per byte value).
const BYTE_BUCKETS: usize = 256;

/// Number of two-byte buckets.
const PAIR_BUCKETS: usize = BYTE_BUCKETS * BYTE_BUCKETS;

/// A `(head, tail, count)` run of linked nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Bucket {
    pub head: usize,
    pub tail: usize,
    pub count: usize,
}

impl Bucket {
    pub const EMPTY: Bucket = Bucket {
        head: NIL,
        tail: NIL,
        count: 0,
    };

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.head == NIL
    }

    /// Appends `run` after the current tail. Returns `true` if the bucket was empty.
    #[inline(always)]
    fn absorb(&mut self, chain: &mut Chain<'_>, run: Bucket) -> bool {
        if self.is_empty() {
            *self = run;
            return true;
        }
        chain.set_next(self.tail, run.head);
        self.tail = run.tail;
        self.count += run.count;
        false
    }

    #[inline(always)]
    fn take(&mut self) -> Bucket {
        std::mem::replace(self, Bucket::EMPTY)
    }
}

// Cache-aligned one-byte bucket table.
#[cuneiform]
struct ByteTable {
    slots: [Bucket; BYTE_BUCKETS],
}

// Cache-aligned presence flags for the two-byte table.
#[cuneiform]
struct Presence {
    high: [bool; BYTE_BUCKETS],
    low: [bool; BYTE_BUCKETS],
}

/// Byte range of the buckets that received data, `lo > hi` when none did.
#[derive(Clone, Copy, Debug)]
struct ByteRange {
    lo: u8,
    hi: u8,
}

impl ByteRange {
    const NONE: ByteRange = ByteRange {
        lo: u8::MAX,
        hi: u8::MIN,
    };

    #[inline(always)]
    fn include(&mut self, byte: u8) {
        self.lo = self.lo.min(byte);
        self.hi = self.hi.max(byte);
    }

    fn union(self, other: ByteRange) -> ByteRange {
        ByteRange {
            lo: self.lo.min(other.lo),
            hi: self.hi.max(other.hi),
        }
    }

    fn bytes(self) -> std::ops::RangeInclusive<usize> {
        self.lo as usize..=self.hi as usize
    }
}

struct ByteBuckets {
    table: ByteTable,
    range: ByteRange,
}

impl ByteBuckets {
    fn new() -> Self {
        Self {
            table: ByteTable {
                slots: [Bucket::EMPTY; BYTE_BUCKETS],
            },
            range: ByteRange::NONE,
        }
    }

    #[inline(always)]
    fn insert(&mut self, chain: &mut Chain<'_>, byte: u8, run: Bucket) {
        if self.table.slots[byte as usize].absorb(chain, run) {
            self.range.include(byte);
        }
    }

    fn take(&mut self, byte: usize) -> Bucket {
        self.table.slots[byte].take()
    }
}

struct PairBuckets {
    // Allocated on the first two-byte pass.
    table: Vec<Bucket>,
    seen: Presence,
    highs: ByteRange,
    lows: Vec<u8>,
}

impl PairBuckets {
    fn new() -> Self {
        Self {
            table: Vec::new(),
            seen: Presence {
                high: [false; BYTE_BUCKETS],
                low: [false; BYTE_BUCKETS],
            },
            highs: ByteRange::NONE,
            lows: Vec::with_capacity(BYTE_BUCKETS),
        }
    }

    fn ensure_table(&mut self) {
        if self.table.is_empty() {
            self.table = vec![Bucket::EMPTY; PAIR_BUCKETS];
        }
    }

    #[inline(always)]
    fn insert(&mut self, chain: &mut Chain<'_>, pair: u16, run: Bucket) {
        if self.table[pair as usize].absorb(chain, run) {
            let [high, low] = pair.to_be_bytes();
            self.seen.high[high as usize] = true;
            self.seen.low[low as usize] = true;
            self.highs.include(high);
        }
    }

    /// Gathers the distinct low bytes seen this pass in ascending order and
    /// clears their presence flags.
    fn collect_lows(&mut self) {
        self.lows.clear();
        for (low, seen) in self.seen.low.iter_mut().enumerate() {
            if std::mem::take(seen) {
                self.lows.push(low as u8);
            }
        }
    }

    /// Pushes every populated bucket with high byte `high`, in ascending order.
    fn drain_high(&mut self, chain: &mut Chain<'_>, stack: &mut WorkStack, high: usize, offset: usize) {
        if !std::mem::take(&mut self.seen.high[high]) {
            return;
        }
        let Self { table, lows, .. } = self;
        for &low in lows.iter() {
            let bucket = table[(high << 8) | low as usize].take();
            if !bucket.is_empty() {
                stack.push_bucket(chain, bucket, offset);
            }
        }
    }
}

/// Bucket storage shared by every pass of one top-level sort.
///
/// Each pass leaves it empty again, so nothing leaks from one offset to the next.
pub(crate) struct Scratch {
    bytes: ByteBuckets,
    pairs: PairBuckets,
}

impl Scratch {
    pub fn new() -> Self {
        Self {
            bytes: ByteBuckets::new(),
            pairs: PairBuckets::new(),
        }
    }

    #[cfg(test)]
    fn is_clean(&self) -> bool {
        self.bytes.table.slots.iter().all(Bucket::is_empty)
            && self.pairs.table.iter().all(Bucket::is_empty)
            && !self.pairs.seen.high.iter().any(|&b| b)
            && !self.pairs.seen.low.iter().any(|&b| b)
    }
}

/// Walks the `NIL`-terminated chain from `head`, handing each maximal run of
/// equal digits to `sink`. Returns the number of nodes visited.
///
/// `sink` may only relink tails of runs it was given earlier.
#[inline(always)]
fn scan_runs<'a, D, R, S>(chain: &mut Chain<'a>, head: usize, offset: usize, read: R, mut sink: S) -> usize
where
    D: Copy + PartialEq,
    R: Fn(&[u8], usize) -> D,
    S: FnMut(&mut Chain<'a>, D, Bucket),
{
    let mut digit = read(chain.key(head), offset);
    let mut run = Bucket {
        head,
        tail: head,
        count: 1,
    };
    let mut seen = 1;
    let mut node = chain.next(head);
    while node != NIL {
        let next_digit = read(chain.key(node), offset);
        if next_digit != digit {
            sink(chain, digit, run);
            digit = next_digit;
            run = Bucket {
                head: node,
                tail: node,
                count: 0,
            };
        }
        run.tail = node;
        run.count += 1;
        seen += 1;
        node = chain.next(node);
    }
    sink(chain, digit, run);
    seen
}

/// Partitions `frame` on the byte at `offset`.
///
/// Keys ending at `offset` are equal and pushed as sorted; the other buckets
/// are pushed in byte order at `offset + 1`.
pub(crate) fn bucketize_one(
    chain: &mut Chain<'_>,
    scratch: &mut Scratch,
    stack: &mut WorkStack,
    frame: Bucket,
    offset: usize,
) {
    let bytes = &mut scratch.bytes;
    let mut ended = Bucket::EMPTY;

    let seen = scan_runs(chain, frame.head, offset, byte_at, |chain, digit, run| match digit {
        None => {
            ended.absorb(chain, run);
        }
        Some(byte) => bytes.insert(chain, byte, run),
    });
    debug_assert_eq!(seen, frame.count, "frame count does not match its chain");

    if !ended.is_empty() {
        stack.push_sorted(chain, ended);
    }
    for byte in bytes.range.bytes() {
        let bucket = bytes.take(byte);
        if !bucket.is_empty() {
            stack.push_bucket(chain, bucket, offset + 1);
        }
    }
    bytes.range = ByteRange::NONE;
}

/// Partitions `frame` on up to two bytes at `offset`.
///
/// Keys are split by how many bytes remain: none (sorted, equal), exactly one
/// (sorted, equal within a byte value), or two or more (pushed at
/// `offset + 2`). Only high bytes and low bytes flagged in the presence arrays
/// are visited when draining the two-byte table.
pub(crate) fn bucketize_two(
    chain: &mut Chain<'_>,
    scratch: &mut Scratch,
    stack: &mut WorkStack,
    frame: Bucket,
    offset: usize,
) {
    let Scratch { bytes, pairs } = scratch;
    pairs.ensure_table();
    let mut ended = Bucket::EMPTY;

    let seen = scan_runs(chain, frame.head, offset, Digit::read, |chain, digit, run| match digit {
        Digit::End => {
            ended.absorb(chain, run);
        }
        Digit::One(byte) => bytes.insert(chain, byte, run),
        Digit::Two(pair) => pairs.insert(chain, pair, run),
    });
    debug_assert_eq!(seen, frame.count, "frame count does not match its chain");

    if !ended.is_empty() {
        stack.push_sorted(chain, ended);
    }

    pairs.collect_lows();
    // A key with one byte `h` left sorts before every key continuing past `h`.
    for high in bytes.range.union(pairs.highs).bytes() {
        let single = bytes.take(high);
        if !single.is_empty() {
            stack.push_sorted(chain, single);
        }
        pairs.drain_high(chain, stack, high, offset + 2);
    }
    bytes.range = ByteRange::NONE;
    pairs.highs = ByteRange::NONE;
}
