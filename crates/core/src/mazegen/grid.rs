//! Walled cell grid shared by the carving, braiding, and distance passes.

use crate::types::{Direction, Neighbor, Walls};

use super::params::Dimensions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct GridCell {
    pub(super) walls: Walls,
    pub(super) visited: bool,
}

#[derive(Clone, Debug)]
pub(super) struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<GridCell>,
}

impl Grid {
    pub(super) fn new(dimensions: Dimensions) -> Self {
        let cells = vec![
            GridCell { walls: Walls::CLOSED, visited: false };
            dimensions.cell_count()
        ];
        Self { rows: dimensions.rows(), cols: dimensions.cols(), cells }
    }

    pub(super) fn rows(&self) -> usize {
        self.rows
    }

    pub(super) fn cols(&self) -> usize {
        self.cols
    }

    pub(super) fn cell(&self, row: usize, col: usize) -> &GridCell {
        &self.cells[self.index(row, col)]
    }

    pub(super) fn mark_visited(&mut self, row: usize, col: usize) {
        let index = self.index(row, col);
        self.cells[index].visited = true;
    }

    /// Row-major iteration over `(row, col, cell)`.
    pub(super) fn iter(&self) -> impl Iterator<Item = (usize, usize, &GridCell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (index / self.cols, index % self.cols, cell))
    }

    /// In-grid neighbors in scan order top, bottom, left, right.
    pub(super) fn neighbors(&self, row: usize, col: usize) -> Vec<Neighbor> {
        let mut neighbors = Vec::with_capacity(4);
        if row > 0 {
            neighbors.push(Neighbor { direction: Direction::Top, row: row - 1, col });
        }
        if row + 1 < self.rows {
            neighbors.push(Neighbor { direction: Direction::Bottom, row: row + 1, col });
        }
        if col > 0 {
            neighbors.push(Neighbor { direction: Direction::Left, row, col: col - 1 });
        }
        if col + 1 < self.cols {
            neighbors.push(Neighbor { direction: Direction::Right, row, col: col + 1 });
        }
        neighbors
    }

    pub(super) fn unvisited_neighbors(&self, row: usize, col: usize) -> Vec<Neighbor> {
        let mut neighbors = self.neighbors(row, col);
        neighbors.retain(|next| !self.cell(next.row, next.col).visited);
        neighbors
    }

    /// Neighbors still separated from `(row, col)` by a wall.
    pub(super) fn walled_neighbors(&self, row: usize, col: usize) -> Vec<Neighbor> {
        let walls = self.cell(row, col).walls;
        let mut neighbors = self.neighbors(row, col);
        neighbors.retain(|next| walls.has(next.direction));
        neighbors
    }

    /// Neighbors reachable from `(row, col)` through an open wall.
    pub(super) fn open_neighbors(&self, row: usize, col: usize) -> Vec<Neighbor> {
        let walls = self.cell(row, col).walls;
        let mut neighbors = self.neighbors(row, col);
        neighbors.retain(|next| !walls.has(next.direction));
        neighbors
    }

    /// Clears the wall between `(row, col)` and its neighbor, on both sides.
    pub(super) fn remove_wall(&mut self, row: usize, col: usize, to: Neighbor) {
        debug_assert_eq!(row.abs_diff(to.row) + col.abs_diff(to.col), 1);
        let from_index = self.index(row, col);
        let to_index = self.index(to.row, to.col);
        self.cells[from_index].walls.open(to.direction);
        self.cells[to_index].walls.open(to.direction.opposite());
    }

    /// Number of open passages, counting each shared opening once.
    #[cfg(test)]
    pub(super) fn passage_count(&self) -> usize {
        self.iter()
            .map(|(_, _, cell)| usize::from(!cell.walls.right) + usize::from(!cell.walls.bottom))
            .sum()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}
