//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement
//! the prediction pipeline.

mod prediction;

pub use prediction::PredictionService;
