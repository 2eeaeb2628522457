//! # Churnscope
//!
//! Interactive customer churn prediction for bank customers.
//!
//! This crate provides:
//! - A single-form terminal UI collecting ten customer attributes
//! - A stateless inference pipeline over a pre-trained binary classifier
//! - A churn probability gauge with low/medium/high bands
//!
//! The classifier and the categorical encoders are externally produced
//! artifacts (JSON exports from the training pipeline), loaded once at
//! startup and shared read-only across all predictions.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (CustomerRecord, Prediction, probability bands)
//! - `ports`: Trait definitions for the classifier and encoders
//! - `adapters`: Concrete artifact-backed implementations
//! - `application`: The prediction pipeline orchestrating domain and ports
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{ChurnLabel, CustomerRecord, Prediction};

/// Result type for Churnscope operations
pub type Result<T> = std::result::Result<T, ChurnscopeError>;

/// Main error type for Churnscope
#[derive(Debug, thiserror::Error)]
pub enum ChurnscopeError {
    #[error("Artifact loading failed: {0}")]
    Artifact(#[from] adapters::ArtifactLoadError),

    #[error("Unknown category: {0}")]
    UnknownCategory(#[from] ports::UnknownCategoryError),

    #[error("Prediction failed: {0}")]
    Prediction(#[from] ports::PredictionError),

    #[error("Invalid customer data: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
