//! Prediction service: Orchestrates categorical encoding and classifier
//! inference.
//!
//! This service coordinates:
//! - Encoding the two categorical fields via the loaded encoders
//! - Assembling the fixed-order feature vector
//! - Invoking the classifier
//! - Deriving the label and the rounded churn percentage

use std::sync::Arc;

use crate::adapters::EncoderSet;
use crate::domain::{CustomerRecord, Prediction};
use crate::ports::{CategoricalEncoder, Classifier};
use crate::ChurnscopeError;

/// Service for running churn predictions.
///
/// Stateless and idempotent: the outcome is a pure function of the submitted
/// record and the immutable artifacts loaded at startup. The classifier and
/// encoder set are shared read-only, so the service is safe for concurrent
/// use without further synchronization.
pub struct PredictionService<C>
where
    C: Classifier,
{
    classifier: Arc<C>,
    encoders: Arc<EncoderSet>,
}

impl<C> PredictionService<C>
where
    C: Classifier,
{
    /// Create a new prediction service over the loaded artifacts.
    pub fn new(classifier: Arc<C>, encoders: Arc<EncoderSet>) -> Self {
        Self {
            classifier,
            encoders,
        }
    }

    /// The loaded encoder set.
    ///
    /// The form reads `classes()` from here to populate its selection
    /// controls, closing off invalid categories by construction.
    #[must_use]
    pub fn encoders(&self) -> &EncoderSet {
        &self.encoders
    }

    /// Run one prediction.
    ///
    /// The collecting surface validates field domains before this stage; the
    /// pipeline trusts its caller. No retries, no partial results — a
    /// classifier failure is surfaced for this submission only.
    ///
    /// # Errors
    /// Returns `ChurnscopeError::UnknownCategory` if a categorical value was
    /// not seen during training, or `ChurnscopeError::Prediction` if the
    /// classifier call fails.
    pub fn predict(&self, record: &CustomerRecord) -> Result<Prediction, ChurnscopeError> {
        tracing::debug!("Encoding categorical fields...");
        let geography_code = self.encoders.geography.transform(&record.geography)?;
        let gender_code = self.encoders.gender.transform(&record.gender)?;

        let encoded = record.encode(geography_code, gender_code);
        let features = encoded.to_feature_vec();

        tracing::debug!("Invoking classifier on {} features...", features.len());
        let class = self.classifier.predict(&features)?;
        let proba = self.classifier.predict_proba(&features)?;

        let prediction = Prediction::new(class, proba[1]);

        tracing::info!(
            "Prediction complete: label={}, churn_probability={:.2}%",
            prediction.label,
            prediction.churn_probability
        );

        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LabelEncoder;
    use crate::domain::ChurnLabel;
    use crate::ports::PredictionError;

    /// Deterministic classifier stub with fixed outputs.
    struct StubClassifier {
        class: u8,
        proba: [f64; 2],
    }

    impl Classifier for StubClassifier {
        fn n_features(&self) -> usize {
            10
        }

        fn predict(&self, _features: &[f64]) -> Result<u8, PredictionError> {
            Ok(self.class)
        }

        fn predict_proba(&self, _features: &[f64]) -> Result<[f64; 2], PredictionError> {
            Ok(self.proba)
        }
    }

    /// Classifier stub that always fails.
    struct FailingClassifier;

    impl Classifier for FailingClassifier {
        fn n_features(&self) -> usize {
            10
        }

        fn predict(&self, _features: &[f64]) -> Result<u8, PredictionError> {
            Err(PredictionError::Classifier("boom".to_string()))
        }

        fn predict_proba(&self, _features: &[f64]) -> Result<[f64; 2], PredictionError> {
            Err(PredictionError::Classifier("boom".to_string()))
        }
    }

    fn test_encoders() -> Arc<EncoderSet> {
        Arc::new(EncoderSet {
            geography: LabelEncoder::new(
                "Geography",
                vec![
                    "France".to_string(),
                    "Germany".to_string(),
                    "Spain".to_string(),
                ],
            ),
            gender: LabelEncoder::new(
                "Gender",
                vec!["Female".to_string(), "Male".to_string()],
            ),
        })
    }

    fn service_with(class: u8, proba: [f64; 2]) -> PredictionService<StubClassifier> {
        PredictionService::new(Arc::new(StubClassifier { class, proba }), test_encoders())
    }

    fn sample_record() -> CustomerRecord {
        CustomerRecord {
            credit_score: 600,
            geography: "France".to_string(),
            gender: "Female".to_string(),
            age: 40,
            tenure: 3,
            balance: 60000.0,
            num_of_products: 1,
            has_cr_card: 1,
            is_active_member: 1,
            estimated_salary: 50000.0,
        }
    }

    #[test]
    fn test_churn_prediction_end_to_end() {
        let service = service_with(1, [0.1, 0.9]);
        let prediction = service.predict(&sample_record()).expect("predict");

        assert_eq!(prediction.label, ChurnLabel::Churn);
        assert_eq!(prediction.churn_probability, 90.0);
    }

    #[test]
    fn test_stay_prediction() {
        let service = service_with(0, [0.8, 0.2]);
        let prediction = service.predict(&sample_record()).expect("predict");

        assert_eq!(prediction.label, ChurnLabel::Stay);
        assert_eq!(prediction.churn_probability, 20.0);
    }

    #[test]
    fn test_probability_rounded_to_two_decimals() {
        let service = service_with(0, [0.66667, 0.33333]);
        let prediction = service.predict(&sample_record()).expect("predict");

        assert_eq!(prediction.churn_probability, 33.33);
    }

    #[test]
    fn test_probability_always_in_range() {
        for p in [0.0, 0.0001, 0.5, 0.9999, 1.0] {
            let service = service_with(u8::from(p >= 0.5), [1.0 - p, p]);
            let prediction = service.predict(&sample_record()).expect("predict");
            assert!((0.0..=100.0).contains(&prediction.churn_probability));
        }
    }

    #[test]
    fn test_boundary_record() {
        let record = CustomerRecord {
            credit_score: 300,
            geography: "France".to_string(), // first Geography class
            gender: "Female".to_string(),    // first Gender class
            age: 18,
            tenure: 0,
            balance: 0.0,
            num_of_products: 1,
            has_cr_card: 0,
            is_active_member: 0,
            estimated_salary: 0.0,
        };
        record.validate().expect("boundary record is valid");

        let service = service_with(0, [0.7, 0.3]);
        let prediction = service.predict(&record).expect("predict");
        assert_eq!(prediction.label, ChurnLabel::Stay);
        assert!((0.0..=100.0).contains(&prediction.churn_probability));
    }

    #[test]
    fn test_unknown_category_is_surfaced() {
        let service = service_with(0, [0.5, 0.5]);
        let record = CustomerRecord {
            geography: "Atlantis".to_string(),
            ..sample_record()
        };

        let err = service.predict(&record).expect_err("must fail");
        assert!(matches!(err, ChurnscopeError::UnknownCategory(_)));
    }

    #[test]
    fn test_classifier_failure_is_surfaced() {
        let service = PredictionService::new(Arc::new(FailingClassifier), test_encoders());

        let err = service.predict(&sample_record()).expect_err("must fail");
        assert!(matches!(err, ChurnscopeError::Prediction(_)));
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let service = service_with(1, [0.25, 0.75]);
        let record = sample_record();

        let first = service.predict(&record).expect("predict");
        let second = service.predict(&record).expect("predict");
        assert_eq!(first.label, second.label);
        assert_eq!(first.churn_probability, second.churn_probability);
    }
}
