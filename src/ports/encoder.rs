//! Categorical encoder port: Trait for trained category-to-code mappings.

/// Error raised when a value was not seen during encoder fitting.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown category {value:?} for field {field} (known: {known:?})")]
pub struct UnknownCategoryError {
    /// Categorical field the encoder belongs to
    pub field: String,
    /// The rejected value
    pub value: String,
    /// The classes the encoder was fitted on
    pub known: Vec<String>,
}

/// Trait for a fitted categorical encoder.
///
/// `classes()` is the source of truth for valid choices: the form populates
/// its selection controls from it, so `transform` failures are unreachable
/// through the UI by construction.
pub trait CategoricalEncoder: Send + Sync {
    /// Ordered category values seen during training.
    fn classes(&self) -> &[String];

    /// Map a known category value to its trained integer code.
    ///
    /// # Errors
    /// Returns `UnknownCategoryError` if `value` is not among `classes()`.
    fn transform(&self, value: &str) -> Result<i64, UnknownCategoryError>;
}
