//! Loop insertion over a carved maze.

use super::grid::Grid;
use super::params::LoopRatio;
use super::rng::{RandomSource, pick_index};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct BraidSummary {
    pub(super) dead_ends: usize,
    pub(super) opened: usize,
}

/// Gives each dead end, in row-major order, one chance to open an extra wall.
///
/// Dead ends are judged on the walls standing when the scan reaches them, so an
/// opening made earlier in the scan can retire a later dead end.
pub(super) fn braid_dead_ends<R: RandomSource + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    ratio: LoopRatio,
) -> BraidSummary {
    let mut summary = BraidSummary::default();
    if ratio.value() <= 0.0 {
        return summary;
    }

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if grid.cell(row, col).walls.standing() != 3 {
                continue;
            }
            summary.dead_ends += 1;
            if rng.next_f64() >= ratio.value() {
                continue;
            }

            let candidates = grid.walled_neighbors(row, col);
            if candidates.is_empty() {
                continue;
            }
            let next = candidates[pick_index(rng, candidates.len())];
            grid.remove_wall(row, col, next);
            summary.opened += 1;
        }
    }

    summary
}
