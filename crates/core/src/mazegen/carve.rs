//! Randomized depth-first carving.
//! Produces a spanning tree over the grid, so the result is a perfect maze.

use super::grid::Grid;
use super::rng::{RandomSource, pick_index};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct CarveSummary {
    /// `(row, col)` where the walk started.
    pub(super) origin: (usize, usize),
    pub(super) passages: usize,
    pub(super) max_depth: usize,
}

pub(super) fn carve_spanning_tree<R: RandomSource + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
) -> CarveSummary {
    let origin_row = pick_index(rng, grid.rows());
    let origin_col = pick_index(rng, grid.cols());

    grid.mark_visited(origin_row, origin_col);
    let mut stack = vec![(origin_row, origin_col)];
    let mut passages = 0;
    let mut max_depth = stack.len();

    while let Some(&(row, col)) = stack.last() {
        // Visited state is checked here, at selection time, never when pushing.
        let candidates = grid.unvisited_neighbors(row, col);
        if candidates.is_empty() {
            stack.pop();
            continue;
        }

        let next = candidates[pick_index(rng, candidates.len())];
        grid.remove_wall(row, col, next);
        grid.mark_visited(next.row, next.col);
        stack.push((next.row, next.col));
        passages += 1;
        max_depth = max_depth.max(stack.len());
    }

    CarveSummary { origin: (origin_row, origin_col), passages, max_depth }
}
