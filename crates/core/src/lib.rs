pub mod api;
pub mod error;
pub mod mazegen;
pub mod render;
pub mod types;

pub use api::{GenerateRequest, HealthStatus, handle_generate, health, seed_key};
pub use error::GenerateError;
pub use mazegen::{
    Dimensions, GenerationEvent, LoopRatio, MAX_CELLS, MazeCell, MazeGenerator, MazeRequest,
    MazeResult, generate, generate_request,
};
pub use types::*;
