//! Maze generation split into coherent submodules.

pub mod model;
pub mod params;
pub mod rng;

mod braid;
mod carve;
mod endpoints;
mod generator;
mod grid;
#[cfg(test)]
mod test_support;

pub use generator::MazeGenerator;
pub use model::{GenerationEvent, MazeCell, MazeResult};
pub use params::{Dimensions, LoopRatio, MAX_CELLS, MazeRequest};
pub use rng::{ChaChaSource, RandomSource};

use crate::error::GenerateError;

/// Validates the inputs and builds one maze.
///
/// With `Some(seed)` the output is reproducible for identical inputs; with `None`
/// each call draws from a fresh entropy-seeded stream.
pub fn generate(
    rows: usize,
    cols: usize,
    seed: Option<u64>,
    loop_ratio: f64,
) -> Result<MazeResult, GenerateError> {
    let request = MazeRequest::new(rows, cols, seed, loop_ratio)?;
    Ok(generate_request(&request))
}

pub fn generate_request(request: &MazeRequest) -> MazeResult {
    MazeGenerator::for_request(request).generate(request.loop_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_matches_maze_generator_output() {
        let from_helper = generate(7, 9, Some(123), 0.4).expect("valid request");
        let dimensions = Dimensions::new(7, 9).expect("valid dimensions");
        let ratio = LoopRatio::new(0.4).expect("valid ratio");
        let from_generator = MazeGenerator::seeded(dimensions, 123).generate(ratio);

        assert_eq!(from_helper, from_generator);
    }

    #[test]
    fn invalid_dimensions_fail_before_any_grid_exists() {
        let err = generate(0, 5, Some(1), 0.0).expect_err("zero rows must be rejected");
        assert!(matches!(err, GenerateError::InvalidDimensions { field: "rows", .. }));
    }

    #[test]
    fn out_of_range_loop_ratio_is_rejected() {
        let err = generate(5, 5, Some(1), 1.5).expect_err("ratio above one must be rejected");
        assert_eq!(err, GenerateError::InvalidLoopRatio { value: 1.5 });
    }
}
