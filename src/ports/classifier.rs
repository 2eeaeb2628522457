//! Classifier port: Trait for the trained churn model.
//!
//! The trained model is an opaque, externally produced artifact. This trait
//! keeps the pipeline independent of its concrete format so tests can
//! substitute deterministic stubs.

/// Errors raised by a classifier invocation.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("feature count mismatch: got {got}, expected {expected}")]
    FeatureCountMismatch { got: usize, expected: usize },

    #[error("classifier produced a non-finite probability")]
    NonFiniteProbability,

    #[error("classifier failure: {0}")]
    Classifier(String),
}

/// Trait for binary churn classifiers.
///
/// Implementations are immutable after construction and shared read-only
/// across all predictions.
pub trait Classifier: Send + Sync {
    /// Number of features the model was trained on.
    fn n_features(&self) -> usize;

    /// Predicted class for one feature vector: 0 = stay, 1 = churn.
    ///
    /// # Errors
    /// Returns `PredictionError` if the vector has the wrong length or the
    /// model produces an unusable value.
    fn predict(&self, features: &[f64]) -> Result<u8, PredictionError>;

    /// Class probabilities `[p_stay, p_churn]` for one feature vector.
    ///
    /// # Errors
    /// Returns `PredictionError` if the vector has the wrong length or the
    /// model produces a non-finite probability.
    fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2], PredictionError>;
}
