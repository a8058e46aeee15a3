//! Start and end selection by passage distance.
//!
//! Two breadth-first sweeps approximate the pair of boundary cells that are
//! farthest apart. The first sweep starts at the top-left corner; the second
//! starts from the farthest boundary cell the first one found. This is the
//! classic double sweep, not an exact diameter.

use std::collections::VecDeque;

use crate::types::Point;

use super::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Endpoints {
    pub(super) start: Point,
    pub(super) end: Point,
    /// Passage distance from `start` to `end`.
    pub(super) distance: u32,
}

/// Passage distance from `origin` to every cell, indexed row-major.
/// `None` marks a cell the sweep could not reach.
pub(super) fn passage_distances(grid: &Grid, origin: (usize, usize)) -> Vec<Option<u32>> {
    let cols = grid.cols();
    let mut distances = vec![None; grid.rows() * cols];
    distances[origin.0 * cols + origin.1] = Some(0);

    let mut queue = VecDeque::from([origin]);
    while let Some((row, col)) = queue.pop_front() {
        let Some(distance) = distances[row * cols + col] else {
            continue;
        };
        for next in grid.open_neighbors(row, col) {
            let slot = &mut distances[next.row * cols + next.col];
            if slot.is_none() {
                *slot = Some(distance + 1);
                queue.push_back((next.row, next.col));
            }
        }
    }

    distances
}

pub(super) fn boundary_endpoints(grid: &Grid) -> Endpoints {
    let first_sweep = passage_distances(grid, (0, 0));
    let (start, _) = farthest_boundary_cell(grid, &first_sweep, (0, 0));

    let second_sweep = passage_distances(grid, start);
    let (end, distance) = farthest_boundary_cell(grid, &second_sweep, start);

    Endpoints {
        start: Point::from_row_col(start.0, start.1),
        end: Point::from_row_col(end.0, end.1),
        distance,
    }
}

pub(super) fn is_boundary(grid: &Grid, row: usize, col: usize) -> bool {
    row == 0 || col == 0 || row + 1 == grid.rows() || col + 1 == grid.cols()
}

/// First boundary cell in row-major order with the strictly largest distance.
fn farthest_boundary_cell(
    grid: &Grid,
    distances: &[Option<u32>],
    fallback: (usize, usize),
) -> ((usize, usize), u32) {
    let mut best = fallback;
    let mut best_distance = 0_u32;
    for (row, col, _) in grid.iter() {
        if !is_boundary(grid, row, col) {
            continue;
        }
        if let Some(distance) = distances[row * grid.cols() + col]
            && distance > best_distance
        {
            best = (row, col);
            best_distance = distance;
        }
    }
    (best, best_distance)
}
