//! Validated generation inputs.

use crate::error::GenerateError;

/// Largest grid a single request may ask for (2048 x 2048 cells).
///
/// Grids are fully materialized, so anything above this is refused before
/// allocation instead of risking an aborted process.
pub const MAX_CELLS: usize = 1 << 22;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GenerateError> {
        if rows == 0 {
            return Err(non_positive("rows", rows));
        }
        if cols == 0 {
            return Err(non_positive("cols", cols));
        }
        if rows.checked_mul(cols).is_none_or(|cells| cells > MAX_CELLS) {
            return Err(GenerateError::InvalidDimensions {
                field: "rows",
                message: format!("{rows} x {cols} exceeds the {MAX_CELLS} cell limit"),
            });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

fn non_positive(field: &'static str, value: usize) -> GenerateError {
    GenerateError::InvalidDimensions {
        field,
        message: format!("must be a positive integer, got {value}"),
    }
}

/// Probability in `[0, 1]` that a dead end gets an extra opening while braiding.
///
/// Values outside the range are rejected rather than clamped.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct LoopRatio(f64);

impl LoopRatio {
    pub const NONE: LoopRatio = LoopRatio(0.0);

    pub fn new(value: f64) -> Result<Self, GenerateError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(GenerateError::InvalidLoopRatio { value });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Everything a single generation needs: shape, optional seed, and braid ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MazeRequest {
    pub dimensions: Dimensions,
    pub seed: Option<u64>,
    pub loop_ratio: LoopRatio,
}

impl MazeRequest {
    pub fn new(
        rows: usize,
        cols: usize,
        seed: Option<u64>,
        loop_ratio: f64,
    ) -> Result<Self, GenerateError> {
        Ok(Self {
            dimensions: Dimensions::new(rows, cols)?,
            seed,
            loop_ratio: LoopRatio::new(loop_ratio)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rows_or_cols_are_rejected() {
        let rows_err = Dimensions::new(0, 5).expect_err("zero rows must be rejected");
        assert!(matches!(rows_err, GenerateError::InvalidDimensions { field: "rows", .. }));

        let cols_err = Dimensions::new(5, 0).expect_err("zero cols must be rejected");
        assert!(matches!(cols_err, GenerateError::InvalidDimensions { field: "cols", .. }));
    }

    #[test]
    fn overflowing_cell_count_is_rejected() {
        assert!(Dimensions::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn grids_above_the_cell_limit_are_rejected() {
        let err = Dimensions::new(1 << 40, 1).expect_err("oversized grid must be rejected");
        assert!(matches!(err, GenerateError::InvalidDimensions { field: "rows", .. }));
        assert!(Dimensions::new(2049, 2048).is_err());
    }

    #[test]
    fn grid_at_the_cell_limit_is_accepted() {
        let dims = Dimensions::new(2048, 2048).expect("limit itself is allowed");
        assert_eq!(dims.cell_count(), MAX_CELLS);
    }

    #[test]
    fn single_cell_is_a_valid_shape() {
        let dims = Dimensions::new(1, 1).expect("1x1 is valid");
        assert_eq!(dims.cell_count(), 1);
    }

    #[test]
    fn loop_ratio_accepts_closed_unit_interval_only() {
        assert_eq!(LoopRatio::new(0.0).map(LoopRatio::value), Ok(0.0));
        assert_eq!(LoopRatio::new(1.0).map(LoopRatio::value), Ok(1.0));
        assert!(LoopRatio::new(-0.01).is_err());
        assert!(LoopRatio::new(1.01).is_err());
        assert!(LoopRatio::new(f64::NAN).is_err());
        assert!(LoopRatio::new(f64::INFINITY).is_err());
    }

    #[test]
    fn request_checks_dimensions_before_loop_ratio() {
        let err = MazeRequest::new(0, 5, None, 7.0).expect_err("request must be rejected");
        assert!(matches!(err, GenerateError::InvalidDimensions { .. }));
    }
}
