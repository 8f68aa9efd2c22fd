//! Extrema of all fixed-size windows of a sequence, using a monotone queue of indices.

mod queue;

pub use queue::MonotoneQueue;

use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("window: window size must be at least 1")]
    ZeroWindow,
}

/// The maximum of each window `a[i..i+k]`, for `i` in `0..=n-k`.
///
/// Returns an empty vector when `k > n`.
/// Of several equal maxima in a window, the oldest one is kept at the front of
/// the queue until it leaves the window, and the next equal one takes over.
#[instrument(skip(a), fields(n = a.len()))]
pub fn sliding_window_max<T: Ord + Copy>(a: &[T], k: usize) -> Result<Vec<T>, WindowError> {
    // Values strictly smaller than a newer one can never be a maximum again.
    sliding_window_by(a, k, |back, x| back < x)
}

/// The minimum of each window `a[i..i+k]`, for `i` in `0..=n-k`.
#[instrument(skip(a), fields(n = a.len()))]
pub fn sliding_window_min<T: Ord + Copy>(a: &[T], k: usize) -> Result<Vec<T>, WindowError> {
    sliding_window_by(a, k, |back, x| back > x)
}

fn sliding_window_by<T: Copy>(
    a: &[T],
    k: usize,
    mut dominated: impl FnMut(&T, &T) -> bool,
) -> Result<Vec<T>, WindowError> {
    if k == 0 {
        return Err(WindowError::ZeroWindow);
    }
    let n = a.len();
    if k > n {
        debug!("window larger than input");
        return Ok(vec![]);
    }

    let mut out = Vec::with_capacity(n - k + 1);
    // Holds at most k indices.
    let mut q = MonotoneQueue::with_capacity(k);
    for i in 0..n {
        // The window ending at i starts at i+1-k.
        q.expire((i + 1).saturating_sub(k));
        q.push_by(a, i, &mut dominated);
        debug_assert!(q.len() <= k);
        if i + 1 >= k {
            // Never None: i itself is in the queue.
            if let Some(front) = q.front() {
                out.push(a[front]);
            }
        }
    }
    debug_assert_eq!(out.len(), n - k + 1);
    Ok(out)
}

/// O(nk): scan every window.
pub fn sliding_window_max_naive<T: Ord + Copy>(a: &[T], k: usize) -> Result<Vec<T>, WindowError> {
    if k == 0 {
        return Err(WindowError::ZeroWindow);
    }
    Ok(a.windows(k).filter_map(|w| w.iter().max().copied()).collect())
}
