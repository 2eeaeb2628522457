//! Prediction result types.
//!
//! Represents the output of one churn classifier invocation.

use serde::{Deserialize, Serialize};

/// Predicted churn label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChurnLabel {
    /// Customer is likely to stay
    Stay,
    /// Customer is likely to churn
    Churn,
}

impl ChurnLabel {
    /// Derive the label from the classifier's predicted class.
    #[must_use]
    pub fn from_class(class: u8) -> Self {
        if class == 1 {
            Self::Churn
        } else {
            Self::Stay
        }
    }

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Stay => "The customer is likely to stay.",
            Self::Churn => "The customer is likely to churn.",
        }
    }

    /// Get the associated severity color for TUI display (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Stay => (0, 204, 150),  // Green (#00CC96)
            Self::Churn => (239, 85, 59), // Red (#EF553B)
        }
    }
}

impl std::fmt::Display for ChurnLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stay => write!(f, "STAY"),
            Self::Churn => write!(f, "CHURN"),
        }
    }
}

/// Color band for the churn probability gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbabilityBand {
    /// [0, 30) — low churn probability
    Low,
    /// [30, 70) — medium churn probability
    Medium,
    /// [70, 100] — high churn probability
    High,
}

impl ProbabilityBand {
    /// Classify a percentage in [0, 100] into its band.
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent < 30.0 {
            Self::Low
        } else if percent < 70.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Get the associated gauge color (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Low => (0, 204, 150),    // Green (#00CC96)
            Self::Medium => (255, 166, 0), // Amber (#FFA600)
            Self::High => (239, 85, 59),   // Red (#EF553B)
        }
    }
}

/// Outcome of one prediction. Derived per submission, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted label
    pub label: ChurnLabel,

    /// Churn probability as a percentage, rounded to two decimals
    pub churn_probability: f64,

    /// Timestamp of the prediction
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Prediction {
    /// Create a prediction from the classifier's class and the raw
    /// positive-class probability in [0, 1].
    ///
    /// The probability is scaled to a 0-100 percentage and rounded to two
    /// decimal places (round-half-away, not truncation).
    #[must_use]
    pub fn new(class: u8, churn_proba: f64) -> Self {
        Self {
            label: ChurnLabel::from_class(class),
            churn_probability: round2(churn_proba * 100.0),
            created_at: chrono::Utc::now(),
        }
    }

    /// Gauge band for the rounded percentage.
    #[must_use]
    pub fn band(&self) -> ProbabilityBand {
        ProbabilityBand::from_percent(self.churn_probability)
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_class() {
        assert_eq!(ChurnLabel::from_class(0), ChurnLabel::Stay);
        assert_eq!(ChurnLabel::from_class(1), ChurnLabel::Churn);
    }

    #[test]
    fn test_band_from_percent() {
        assert_eq!(ProbabilityBand::from_percent(0.0), ProbabilityBand::Low);
        assert_eq!(ProbabilityBand::from_percent(29.99), ProbabilityBand::Low);
        assert_eq!(ProbabilityBand::from_percent(30.0), ProbabilityBand::Medium);
        assert_eq!(ProbabilityBand::from_percent(69.99), ProbabilityBand::Medium);
        assert_eq!(ProbabilityBand::from_percent(70.0), ProbabilityBand::High);
        assert_eq!(ProbabilityBand::from_percent(100.0), ProbabilityBand::High);
    }

    #[test]
    fn test_probability_scaling() {
        let prediction = Prediction::new(1, 0.9);
        assert_eq!(prediction.label, ChurnLabel::Churn);
        assert_eq!(prediction.churn_probability, 90.0);
    }

    #[test]
    fn test_two_decimal_rounding() {
        // Rounding, not truncation.
        assert_eq!(Prediction::new(0, 0.33333).churn_probability, 33.33);
        assert_eq!(Prediction::new(0, 0.33338).churn_probability, 33.34);
        assert_eq!(Prediction::new(1, 0.999999).churn_probability, 100.0);
    }
}
