use std::ops::Range;

/// Range Minimum Query.
///
/// Queries return the minimum of the range together with a position at which
/// it occurs, so callers can split the range at its minimum.
pub trait Rmq<T: Ord> {
    fn new(a: &[T]) -> Self;
    /// Returns `(min, pos)` for the half-open `range`, with `pos` in `range`.
    /// Panics on an empty range.
    fn query(&self, range: Range<usize>) -> (T, usize);
}

/// O(1) query, O(n lg n) words of space.
/// Ties resolve to the leftmost position.
pub struct SparseTable<T> {
    /// The number of elements.
    n: usize,
    /// Packed rows of n (value, position) pairs.
    table: Vec<(T, usize)>,
}

impl<T: Ord + Copy> SparseTable<T> {
    /// Build from explicit (value, position) pairs.
    /// Positions need not be 0..n; `MaskRmq` stores block minima with their
    /// position in the full input.
    pub fn from_entries(entries: Vec<(T, usize)>) -> Self {
        let n = entries.len();
        if n == 0 {
            return Self { n, table: entries };
        }
        let logn = n.ilog2() as usize;
        let mut table = entries;
        table.reserve(n * logn);
        for k in 1..=logn {
            let len = 1 << (k - 1);
            let prev = (k - 1) * n;
            for i in 0..n {
                // Cells past n - 2^k are never read; pad them to keep rows aligned.
                let v = if i + len < n {
                    Ord::min(table[prev + i], table[prev + i + len])
                } else {
                    table[prev + i]
                };
                table.push(v);
            }
        }
        Self { n, table }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}

impl<T: Ord + Copy> Rmq<T> for SparseTable<T> {
    fn new(a: &[T]) -> Self {
        Self::from_entries(a.iter().copied().zip(0..).collect())
    }

    /// Query the minimum of [l, r).
    /// 0-based, right exclusive.
    fn query(&self, range: Range<usize>) -> (T, usize) {
        assert!(!range.is_empty(), "empty range {range:?}");
        assert!(range.end <= self.n, "range {range:?} out of bounds {}", self.n);
        let Range { start: l, end: r } = range;
        let k = (r - l).ilog2() as usize;
        Ord::min(
            self.table[k * self.n + l],
            self.table[k * self.n + r - (1 << k)],
        )
    }
}

/// O(1) query, O(n) words of space.
/// Taken from  https://codeforces.com/blog/entry/78931
pub struct MaskRmq<T> {
    /// The input values.
    a: Vec<T>,
    /// A sparse table on the minima of blocks of size W.
    sparse: SparseTable<T>,
    /// For a position i, consider a[i..i+W].
    /// The mask at i has bit j set if a[i+j] <= a[i+j'] for all j'<j.
    masks: Vec<B>,
}

type B = u64;
const W: usize = B::BITS as usize;

impl<T: Ord + Copy> Rmq<T> for MaskRmq<T> {
    fn new(a: &[T]) -> Self {
        let block_mins: Vec<_> = a
            .chunks(W)
            .enumerate()
            .filter_map(|(b, block)| {
                // Leftmost minimum of the block.
                let (off, &x) = block.iter().enumerate().min_by_key(|&(_, x)| x)?;
                Some((x, b * W + off))
            })
            .collect();
        let sparse = SparseTable::from_entries(block_mins);

        let mut masks = vec![0; a.len()];
        let mut mask: B = 0;
        for (i, &x) in a.iter().enumerate().rev() {
            mask <<= 1;
            while mask > 0 {
                // Clear bits of values larger than the current one.
                if a[i + mask.trailing_zeros() as usize] > x {
                    // Clear the lsb.
                    mask &= mask - 1;
                } else {
                    break;
                }
            }
            mask |= 1;
            masks[i] = mask;
        }
        Self {
            a: a.to_vec(),
            sparse,
            masks,
        }
    }

    fn query(&self, range: Range<usize>) -> (T, usize) {
        assert!(!range.is_empty(), "empty range {range:?}");
        assert!(
            range.end <= self.a.len(),
            "range {range:?} out of bounds {}",
            self.a.len()
        );
        // The highest set bit is the rightmost minimum of the masked window.
        let mask_min = |pos: usize, bitmask: B| -> (T, usize) {
            let mask = self.masks[pos] & bitmask;
            let offset = W - 1 - mask.leading_zeros() as usize;
            (self.a[pos + offset], pos + offset)
        };
        if range.len() < W {
            let bitmask = (1 as B).wrapping_shl(range.len() as u32).wrapping_sub(1);
            return mask_min(range.start, bitmask);
        }
        let ends = Ord::min(
            // head
            mask_min(range.start, B::MAX),
            // tail
            mask_min(range.end - W, B::MAX),
        );

        let blocks = range.start.div_ceil(W)..range.end / W;
        if blocks.is_empty() {
            return ends;
        }
        Ord::min(ends, self.sparse.query(blocks))
    }
}
