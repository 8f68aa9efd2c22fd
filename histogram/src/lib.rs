//! Monotonic-stack algorithms on histograms.
//!
//! - [`Boundaries`]: nearest strictly smaller element on each side of every position.
//! - [`largest_rectangle`]: largest rectangle under a histogram, plus alternative solutions.
//! - [`maximal_rectangle`]: largest all-`'1'` rectangle in a binary grid.

mod boundaries;
mod grid;
mod rectangle;

pub use boundaries::{next_smaller, previous_smaller, Boundaries};
pub use grid::{maximal_rectangle, maximal_rectangle_naive, GridError, EMPTY, FILLED};
pub use rectangle::{
    largest_rectangle, largest_rectangle_naive, largest_rectangle_one_pass, largest_rectangle_rmq,
    largest_rectangle_with_extent,
};

/// Height of a bar.
pub type Height = u64;
/// Area of a rectangle: height times width.
/// Wider than [`Height`], so that no product of a height and a width overflows.
pub type Area = u128;
