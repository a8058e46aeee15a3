//! Client-facing failures for maze generation requests.
//!
//! Every variant describes a bad request. Valid input never fails: carving and
//! both distance sweeps always terminate on a finite connected grid.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// `rows` or `cols` is missing, non-positive, non-integer, or too large.
    InvalidDimensions { field: &'static str, message: String },
    /// `loop_ratio` is NaN or outside `[0, 1]`.
    InvalidLoopRatio { value: f64 },
    /// The request body is not a JSON object of the expected shape.
    MalformedRequest { message: String },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { field, message } => {
                write!(f, "invalid maze dimensions: {field} {message}")
            }
            Self::InvalidLoopRatio { value } => {
                write!(f, "invalid loop_ratio {value}: must be a number between 0 and 1")
            }
            Self::MalformedRequest { message } => write!(f, "malformed request: {message}"),
        }
    }
}

impl Error for GenerateError {}
