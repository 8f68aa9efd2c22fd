use std::collections::VecDeque;

/// A queue of indices into a slice, in increasing order.
/// When an index is pushed, preceding indices whose values it dominates are removed,
/// so that the front always holds the best value of the indices still in the queue.
#[derive(Debug, Default, Clone)]
pub struct MonotoneQueue {
    q: VecDeque<usize>,
}

impl MonotoneQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            q: VecDeque::with_capacity(capacity),
        }
    }

    /// Push index `i` of `a`.
    /// Preceding indices `j` with `dominated(&a[j], &a[i])` are dropped first.
    /// `i` must be larger than all indices in the queue.
    pub fn push_by<T>(&mut self, a: &[T], i: usize, mut dominated: impl FnMut(&T, &T) -> bool) {
        debug_assert!(self.q.back().map_or(true, |&j| j < i));
        while let Some(&j) = self.q.back() {
            if dominated(&a[j], &a[i]) {
                self.q.pop_back();
            } else {
                break;
            }
        }
        self.q.push_back(i);
    }

    /// Drop indices `< start`.
    /// Then return the first index `>= start`.
    pub fn expire(&mut self, start: usize) -> Option<usize> {
        while let Some(&j) = self.q.front() {
            if j < start {
                self.q.pop_front();
            } else {
                break;
            }
        }
        self.q.front().copied()
    }

    pub fn front(&self) -> Option<usize> {
        self.q.front().copied()
    }

    pub fn len(&self) -> usize {
        self.q.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }

    /// The indices in the queue, front to back.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.q.iter().copied()
    }
}
