use std::ops::Range;

/// Nearest strictly smaller neighbours of every position in a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundaries {
    /// `prev_smaller[i]` is the nearest `j < i` with `a[j] < a[i]`, if any.
    pub prev_smaller: Vec<Option<usize>>,
    /// `next_smaller[i]` is the nearest `j > i` with `a[j] < a[i]`, or `n` if none.
    pub next_smaller: Vec<usize>,
}

impl Boundaries {
    /// Two linear passes of a monotonic stack, one per direction.
    pub fn new<T: Ord>(a: &[T]) -> Self {
        Self {
            prev_smaller: previous_smaller(a),
            next_smaller: next_smaller(a),
        }
    }

    pub fn len(&self) -> usize {
        self.next_smaller.len()
    }

    pub fn is_empty(&self) -> bool {
        self.next_smaller.is_empty()
    }

    /// The maximal range around `i` in which `a[i]` is a minimum.
    /// 0-based, right exclusive.
    pub fn extent(&self, i: usize) -> Range<usize> {
        let start = self.prev_smaller[i].map_or(0, |j| j + 1);
        start..self.next_smaller[i]
    }

    /// `next_smaller[i] - prev_smaller[i] - 1`, with -1 standing for "none".
    pub fn width(&self, i: usize) -> usize {
        self.extent(i).len()
    }
}

/// For each position, the index of the nearest strictly smaller element on the left.
pub fn previous_smaller<T: Ord>(a: &[T]) -> Vec<Option<usize>> {
    let mut out = Vec::with_capacity(a.len());
    // Indices with strictly increasing values from bottom to top.
    let mut stack: Vec<usize> = Vec::with_capacity(a.len());
    for (i, x) in a.iter().enumerate() {
        // Equal values do not block.
        while let Some(&top) = stack.last() {
            if a[top] >= *x {
                stack.pop();
            } else {
                break;
            }
        }
        out.push(stack.last().copied());
        stack.push(i);
    }
    out
}

/// For each position, the index of the nearest strictly smaller element on the right,
/// or `a.len()` if there is none.
pub fn next_smaller<T: Ord>(a: &[T]) -> Vec<usize> {
    let n = a.len();
    let mut out = vec![n; n];
    let mut stack: Vec<usize> = Vec::with_capacity(n);
    for (i, x) in a.iter().enumerate().rev() {
        while let Some(&top) = stack.last() {
            if a[top] >= *x {
                stack.pop();
            } else {
                break;
            }
        }
        out[i] = stack.last().copied().unwrap_or(n);
        stack.push(i);
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    fn naive(a: &[u32]) -> Boundaries {
        let n = a.len();
        Boundaries {
            prev_smaller: (0..n).map(|i| (0..i).rev().find(|&j| a[j] < a[i])).collect(),
            next_smaller: (0..n)
                .map(|i| (i + 1..n).find(|&j| a[j] < a[i]).unwrap_or(n))
                .collect(),
        }
    }

    #[test]
    fn small() {
        let b = Boundaries::new(&[2, 1, 5, 6, 2, 3]);
        assert_eq!(
            b.prev_smaller,
            [None, None, Some(1), Some(2), Some(1), Some(4)]
        );
        assert_eq!(b.next_smaller, [1, 6, 4, 4, 6, 6]);
        assert_eq!(b.extent(2), 2..4);
        assert_eq!(b.width(1), 6);
    }

    #[test]
    fn empty() {
        let b = Boundaries::new::<u32>(&[]);
        assert!(b.is_empty());
        assert!(b.prev_smaller.is_empty());
    }

    #[test]
    fn equal_values_do_not_block() {
        let b = Boundaries::new(&[3, 3, 3, 3]);
        for i in 0..4 {
            assert_eq!(b.extent(i), 0..4);
        }
    }

    #[test]
    fn random() {
        for n in (0..20).chain([100, 1000]) {
            for alphabet in [2, 5, 1000] {
                let a = (0..n)
                    .map(|_| rand::random::<u32>() % alphabet)
                    .collect::<Vec<_>>();
                let b = Boundaries::new(&a);
                assert_eq!(b, naive(&a), "Mismatch for {a:?}");
                // Pure: a second call gives the same arrays.
                assert_eq!(b, Boundaries::new(&a));
                for i in 0..n {
                    let extent = b.extent(i);
                    assert!(extent.contains(&i));
                    assert!(a[extent].iter().all(|x| *x >= a[i]));
                }
            }
        }
    }
}
