use std::ops::Range;

use rmq::{MaskRmq, Rmq};
use tracing::{debug, instrument};

use crate::{Area, Boundaries, Height};

/// Largest rectangle in a histogram.
///
/// Each bar is extended to its extent: the maximal range in which it is a minimum.
pub fn largest_rectangle(heights: &[Height]) -> Area {
    largest_rectangle_with_extent(heights).map_or(0, |(area, _)| area)
}

/// Like [`largest_rectangle`], but also returns the range `[l, r)` spanned by the rectangle.
/// Returns `None` for an empty histogram.
#[instrument(skip_all, fields(n = heights.len()))]
pub fn largest_rectangle_with_extent(heights: &[Height]) -> Option<(Area, Range<usize>)> {
    let b = Boundaries::new(heights);
    let best = (0..heights.len())
        .map(|i| {
            let extent = b.extent(i);
            (area(heights[i], extent.len()), extent)
        })
        // Leftmost largest.
        .max_by(|(x, r1), (y, r2)| x.cmp(y).then(r2.start.cmp(&r1.start)));
    debug!(?best);
    best
}

/// `height * width`, in a type wide enough to never overflow.
fn area(height: Height, width: usize) -> Area {
    Area::from(height) * width as Area
}

/// O(n^2): for each left end, extend to the right while tracking the running minimum.
pub fn largest_rectangle_naive(heights: &[Height]) -> Area {
    let mut ans = 0;
    for l in 0..heights.len() {
        let mut min = Height::MAX;
        for (r, &h) in heights.iter().enumerate().skip(l) {
            min = min.min(h);
            ans = ans.max(area(min, r - l + 1));
        }
    }
    ans
}

/// A single left-to-right pass.
/// A bar's area is settled when it is popped: the bar popping it is its next smaller
/// and the bar below it on the stack is its previous smaller.
#[instrument(skip_all, fields(n = heights.len()))]
pub fn largest_rectangle_one_pass(heights: &[Height]) -> Area {
    let n = heights.len();
    let mut ans = 0;
    let mut stack: Vec<usize> = Vec::with_capacity(n);
    // A trailing bar of height 0 flushes the stack.
    for (i, h) in heights.iter().copied().chain([0]).enumerate() {
        while let Some(&top) = stack.last() {
            if heights[top] < h {
                break;
            }
            stack.pop();
            let start = stack.last().map_or(0, |&j| j + 1);
            ans = ans.max(area(heights[top], i - start));
        }
        if i < n {
            stack.push(i);
        }
    }
    ans
}

/// Divide and conquer: the best rectangle of a range either spans the whole range at
/// the height of its minimum, or lies entirely left or right of that minimum.
#[instrument(skip_all, fields(n = heights.len()))]
pub fn largest_rectangle_rmq(heights: &[Height]) -> Area {
    if heights.is_empty() {
        return 0;
    }
    let rmq = MaskRmq::new(heights);
    let mut ans = 0;
    // Explicit stack of ranges, so that sorted input does not recurse n deep.
    let mut ranges = vec![0..heights.len()];
    while let Some(range) = ranges.pop() {
        if range.is_empty() {
            continue;
        }
        let (min, pos) = rmq.query(range.clone());
        ans = ans.max(area(min, range.len()));
        ranges.push(range.start..pos);
        ranges.push(pos + 1..range.end);
    }
    ans
}
