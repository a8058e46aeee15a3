//! Public data models for generated mazes and the generation event log.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Point, Walls};

/// One cell of a finished maze. Carving bookkeeping is not part of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeCell {
    pub x: usize,
    pub y: usize,
    pub walls: Walls,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeResult {
    pub rows: usize,
    pub cols: usize,
    pub start: Point,
    pub end: Point,
    /// Row-major: the cell at `(x, y)` lives at index `y * cols + x`.
    pub cells: Vec<MazeCell>,
}

impl MazeResult {
    pub fn cell(&self, point: Point) -> Option<&MazeCell> {
        if point.x >= self.cols || point.y >= self.rows {
            return None;
        }
        self.cells.get(point.y * self.cols + point.x)
    }

    pub fn is_boundary(&self, point: Point) -> bool {
        point.x == 0 || point.y == 0 || point.x + 1 == self.cols || point.y + 1 == self.rows
    }

    /// Open passages, each shared opening counted once.
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| usize::from(!cell.walls.right) + usize::from(!cell.walls.bottom))
            .sum()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(32 + self.cells.len());
        bytes.extend((self.rows as u64).to_le_bytes());
        bytes.extend((self.cols as u64).to_le_bytes());
        for point in [self.start, self.end] {
            bytes.extend((point.x as u32).to_le_bytes());
            bytes.extend((point.y as u32).to_le_bytes());
        }
        bytes.extend(self.cells.iter().map(|cell| cell.walls.bits()));
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

/// Milestones recorded while a maze is generated.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GenerationEvent {
    GridInitialized { rows: usize, cols: usize },
    CarveFinished { origin: Point, passages: usize, max_depth: usize },
    BraidFinished { loop_ratio: f64, dead_ends: usize, opened: usize },
    EndpointsSelected { start: Point, end: Point, distance: u32 },
}
