use itertools::iproduct;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::{largest_rectangle, Area, Height};

/// Marker of a filled cell.
pub const FILLED: u8 = b'1';
/// Marker of an empty cell.
pub const EMPTY: u8 = b'0';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid: row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("grid: invalid cell {cell:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, cell: char },
}

/// Check that all rows have the same width and only contain `'0'` and `'1'`.
/// Returns the number of columns.
fn validate<R: AsRef<[u8]>>(grid: &[R]) -> Result<usize, GridError> {
    let Some(first) = grid.first() else {
        return Ok(0);
    };
    let cols = first.as_ref().len();
    for (row, r) in grid.iter().enumerate() {
        let r = r.as_ref();
        if r.len() != cols {
            return Err(GridError::RaggedRow {
                row,
                expected: cols,
                found: r.len(),
            });
        }
        if let Some(col) = r.iter().position(|&c| c != FILLED && c != EMPTY) {
            return Err(GridError::InvalidCell {
                row,
                col,
                cell: r[col] as char,
            });
        }
    }
    Ok(cols)
}

/// Largest all-`'1'` rectangle in a binary grid.
///
/// Every row turns into a histogram of the number of consecutive filled cells
/// ending at that row, which is solved with [`largest_rectangle`].
#[instrument(skip_all, fields(rows = grid.len()))]
pub fn maximal_rectangle<R: AsRef<[u8]>>(grid: &[R]) -> Result<Area, GridError> {
    let cols = validate(grid)?;
    let mut heights: Vec<Height> = vec![0; cols];
    let mut ans = 0;
    for row in grid {
        for (h, &c) in heights.iter_mut().zip(row.as_ref()) {
            if c == FILLED {
                *h += 1;
            } else {
                *h = 0;
            }
        }
        ans = ans.max(largest_rectangle(&heights));
    }
    debug!(cols, area = ans);
    Ok(ans)
}

/// Brute force over all rectangles, using 2D prefix sums to count filled cells.
pub fn maximal_rectangle_naive<R: AsRef<[u8]>>(grid: &[R]) -> Result<Area, GridError> {
    let cols = validate(grid)?;
    let rows = grid.len();
    // sum[i][j]: number of filled cells in grid[..i][..j].
    let mut sum = vec![vec![0usize; cols + 1]; rows + 1];
    for (i, j) in iproduct!(0..rows, 0..cols) {
        let filled = (grid[i].as_ref()[j] == FILLED) as usize;
        sum[i + 1][j + 1] = sum[i][j + 1] + sum[i + 1][j] - sum[i][j] + filled;
    }
    let mut ans = 0;
    for (top, bottom, left, right) in iproduct!(0..rows, 0..rows, 0..cols, 0..cols) {
        if top > bottom || left > right {
            continue;
        }
        let area = (bottom - top + 1) * (right - left + 1);
        let filled =
            sum[bottom + 1][right + 1] + sum[top][left] - sum[top][right + 1] - sum[bottom + 1][left];
        if filled == area {
            ans = ans.max(area as Area);
        }
    }
    Ok(ans)
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(rows: &[&str]) -> Vec<Vec<u8>> {
        rows.iter().map(|r| r.bytes().collect()).collect()
    }

    #[test]
    fn small() {
        let grid = parse(&["10100", "10111", "11111", "10010"]);
        assert_eq!(maximal_rectangle(&grid), Ok(6));
        assert_eq!(maximal_rectangle_naive(&grid), Ok(6));
        // Rows may be given as string slices too.
        assert_eq!(maximal_rectangle(&["01", "11"]), Ok(2));
    }

    #[test]
    fn empty() {
        let no_rows: [&[u8]; 0] = [];
        assert_eq!(maximal_rectangle(&no_rows), Ok(0));
        assert_eq!(maximal_rectangle(&["", "", ""]), Ok(0));
        assert_eq!(maximal_rectangle_naive(&["", ""]), Ok(0));
    }

    #[test]
    fn uniform() {
        for r in 1..8 {
            for c in 1..8 {
                let zeros = vec![vec![EMPTY; c]; r];
                let ones = vec![vec![FILLED; c]; r];
                assert_eq!(maximal_rectangle(&zeros), Ok(0));
                assert_eq!(maximal_rectangle(&ones), Ok((r * c) as Area));
            }
        }
    }

    #[test]
    fn invalid() {
        assert_eq!(
            maximal_rectangle(&["101", "10"]),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            maximal_rectangle_naive(&["101", "1x1"]),
            Err(GridError::InvalidCell {
                row: 1,
                col: 1,
                cell: 'x'
            })
        );
        let err = maximal_rectangle(&["1 1"]).unwrap_err();
        assert_eq!(err.to_string(), "grid: invalid cell ' ' at row 0, column 1");
    }

    #[test]
    fn random() {
        for rows in 0..8 {
            for cols in 0..8 {
                for _ in 0..10 {
                    let grid = (0..rows)
                        .map(|_| {
                            (0..cols)
                                .map(|_| if rand::random::<f32>() < 0.7 { FILLED } else { EMPTY })
                                .collect::<Vec<_>>()
                        })
                        .collect::<Vec<_>>();
                    assert_eq!(
                        maximal_rectangle(&grid),
                        maximal_rectangle_naive(&grid),
                        "Mismatch for {grid:?}"
                    );
                }
            }
        }
    }
}
