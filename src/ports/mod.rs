//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the application and the externally produced ML artifacts
//! (classifier, categorical encoders).

mod classifier;
mod encoder;

pub use classifier::{Classifier, PredictionError};
pub use encoder::{CategoricalEncoder, UnknownCategoryError};
