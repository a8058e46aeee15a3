//! Shared invariant checks for mazegen unit tests.

use super::endpoints::passage_distances;
use super::grid::Grid;

pub(super) fn reachable_cell_count(grid: &Grid) -> usize {
    passage_distances(grid, (0, 0)).iter().filter(|distance| distance.is_some()).count()
}

pub(super) fn walls_are_symmetric(grid: &Grid) -> bool {
    grid.iter().all(|(row, col, cell)| {
        grid.neighbors(row, col).iter().all(|next| {
            cell.walls.has(next.direction)
                == grid.cell(next.row, next.col).walls.has(next.direction.opposite())
        })
    })
}
