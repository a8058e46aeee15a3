//! High-level maze generation orchestration: carve, braid, then pick endpoints.

use crate::types::Point;

use super::braid::braid_dead_ends;
use super::carve::carve_spanning_tree;
use super::endpoints::boundary_endpoints;
use super::grid::Grid;
use super::model::{GenerationEvent, MazeCell, MazeResult};
use super::params::{Dimensions, LoopRatio, MazeRequest};
use super::rng::{ChaChaSource, RandomSource};

pub struct MazeGenerator<R = ChaChaSource> {
    dimensions: Dimensions,
    rng: R,
    log: Vec<GenerationEvent>,
}

impl MazeGenerator<ChaChaSource> {
    pub fn seeded(dimensions: Dimensions, seed: u64) -> Self {
        Self::with_source(dimensions, ChaChaSource::from_seed(seed))
    }

    pub fn unseeded(dimensions: Dimensions) -> Self {
        Self::with_source(dimensions, ChaChaSource::from_entropy())
    }

    pub fn for_request(request: &MazeRequest) -> Self {
        match request.seed {
            Some(seed) => Self::seeded(request.dimensions, seed),
            None => Self::unseeded(request.dimensions),
        }
    }
}

impl<R: RandomSource> MazeGenerator<R> {
    pub fn with_source(dimensions: Dimensions, rng: R) -> Self {
        Self { dimensions, rng, log: Vec::new() }
    }

    /// Builds one maze. Calling again keeps drawing from the same random stream.
    pub fn generate(&mut self, loop_ratio: LoopRatio) -> MazeResult {
        let mut grid = Grid::new(self.dimensions);
        self.log.push(GenerationEvent::GridInitialized { rows: grid.rows(), cols: grid.cols() });

        let carve = carve_spanning_tree(&mut grid, &mut self.rng);
        self.log.push(GenerationEvent::CarveFinished {
            origin: Point::from_row_col(carve.origin.0, carve.origin.1),
            passages: carve.passages,
            max_depth: carve.max_depth,
        });

        let braid = braid_dead_ends(&mut grid, &mut self.rng, loop_ratio);
        self.log.push(GenerationEvent::BraidFinished {
            loop_ratio: loop_ratio.value(),
            dead_ends: braid.dead_ends,
            opened: braid.opened,
        });

        let endpoints = boundary_endpoints(&grid);
        self.log.push(GenerationEvent::EndpointsSelected {
            start: endpoints.start,
            end: endpoints.end,
            distance: endpoints.distance,
        });

        MazeResult {
            rows: grid.rows(),
            cols: grid.cols(),
            start: endpoints.start,
            end: endpoints.end,
            cells: grid
                .iter()
                .map(|(row, col, cell)| MazeCell { x: col, y: row, walls: cell.walls })
                .collect(),
        }
    }

    pub fn log(&self) -> &[GenerationEvent] {
        &self.log
    }
}
