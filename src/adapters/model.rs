//! Churn model adapter: the classifier artifact exported by the training
//! pipeline.
//!
//! The artifact is the JSON export of a standardized logistic regression:
//! scaler statistics plus coefficients and intercept, with `feature_names`
//! recording the exact column order the model was fitted on. The file format
//! is owned and versioned by the training pipeline; this adapter only checks
//! that the shape is usable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ArtifactLoadError;
use crate::ports::{Classifier, PredictionError};

/// Model parameters exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedChurnModel {
    pub feature_names: Vec<String>,
    pub scaler_mean: Vec<f64>,
    pub scaler_scale: Vec<f64>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// Classifier backed by the exported model artifact.
///
/// Read-only after construction; safe to share across threads.
#[derive(Debug)]
pub struct ChurnModel {
    params: ExportedChurnModel,
}

impl ChurnModel {
    /// Load the model artifact from `path`.
    ///
    /// # Errors
    /// Returns `ArtifactLoadError` if the file is missing, unreadable, not
    /// valid JSON, or the parameter vectors disagree in length.
    pub fn load(path: &Path) -> Result<Self, ArtifactLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ArtifactLoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let params: ExportedChurnModel =
            serde_json::from_str(&content).map_err(|e| ArtifactLoadError::Format {
                path: path.to_path_buf(),
                source: e,
            })?;

        let model = Self::from_params(params).map_err(|reason| ArtifactLoadError::Shape {
            path: path.to_path_buf(),
            reason,
        })?;

        tracing::info!(
            "Loaded churn model from {:?} ({} features)",
            path,
            model.params.feature_names.len()
        );

        Ok(model)
    }

    /// Construct from already-deserialized parameters, checking shape.
    ///
    /// # Errors
    /// Returns the reason string if the parameters are unusable.
    pub fn from_params(params: ExportedChurnModel) -> Result<Self, String> {
        let n = params.feature_names.len();
        if n == 0 {
            return Err("feature_names is empty".to_string());
        }
        if params.coefficients.len() != n
            || params.scaler_mean.len() != n
            || params.scaler_scale.len() != n
        {
            return Err(format!(
                "parameter lengths do not match feature_names length {n}"
            ));
        }
        if params
            .scaler_scale
            .iter()
            .any(|s| !s.is_finite() || *s == 0.0)
        {
            return Err("scaler_scale contains zero or non-finite entries".to_string());
        }
        if !params.intercept.is_finite()
            || params.coefficients.iter().any(|c| !c.is_finite())
            || params.scaler_mean.iter().any(|m| !m.is_finite())
        {
            return Err("model parameters contain non-finite values".to_string());
        }

        Ok(Self { params })
    }

    /// Feature names in the order the model was fitted on.
    #[must_use]
    pub fn feature_names(&self) -> &[String] {
        &self.params.feature_names
    }

    /// Standardize the raw features and compute the linear decision value.
    fn decision_function(&self, features: &[f64]) -> Result<f64, PredictionError> {
        let n = self.params.feature_names.len();
        if features.len() != n {
            return Err(PredictionError::FeatureCountMismatch {
                got: features.len(),
                expected: n,
            });
        }

        let mut z = self.params.intercept;
        for i in 0..n {
            let scaled = (features[i] - self.params.scaler_mean[i]) / self.params.scaler_scale[i];
            z += self.params.coefficients[i] * scaled;
        }
        Ok(z)
    }

    fn sigmoid(x: f64) -> f64 {
        1.0 / (1.0 + (-x).exp())
    }
}

impl Classifier for ChurnModel {
    fn n_features(&self) -> usize {
        self.params.feature_names.len()
    }

    fn predict(&self, features: &[f64]) -> Result<u8, PredictionError> {
        let proba = self.predict_proba(features)?;
        // Positive class wins at the 0.5 boundary, matching the library that
        // produced the artifact.
        Ok(u8::from(proba[1] >= 0.5))
    }

    fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2], PredictionError> {
        let z = self.decision_function(features)?;
        let p_churn = Self::sigmoid(z);
        if !p_churn.is_finite() {
            return Err(PredictionError::NonFiniteProbability);
        }
        Ok([1.0 - p_churn, p_churn])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn identity_params(n: usize) -> ExportedChurnModel {
        ExportedChurnModel {
            feature_names: (0..n).map(|i| format!("f{i}")).collect(),
            scaler_mean: vec![0.0; n],
            scaler_scale: vec![1.0; n],
            coefficients: vec![1.0; n],
            intercept: 0.0,
        }
    }

    #[test]
    fn test_load_from_json() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("churn_model.json");
        let json = serde_json::to_string(&identity_params(3)).expect("serialize model");
        std::fs::write(&path, json).expect("write model");

        let model = ChurnModel::load(&path).expect("load model");
        assert_eq!(model.n_features(), 3);
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("churn_model.json");
        std::fs::write(&path, "not json").expect("write model");

        let err = ChurnModel::load(&path).expect_err("must fail");
        assert!(matches!(err, ArtifactLoadError::Format { .. }));
    }

    #[test]
    fn test_load_rejects_length_mismatch() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("churn_model.json");
        let mut params = identity_params(3);
        params.coefficients.pop();
        let json = serde_json::to_string(&params).expect("serialize model");
        std::fs::write(&path, json).expect("write model");

        let err = ChurnModel::load(&path).expect_err("must fail");
        assert!(matches!(err, ArtifactLoadError::Shape { .. }));
    }

    #[test]
    fn test_from_params_rejects_zero_scale() {
        let mut params = identity_params(2);
        params.scaler_scale[1] = 0.0;
        assert!(ChurnModel::from_params(params).is_err());
    }

    #[test]
    fn test_zero_decision_is_even_odds() {
        let model = ChurnModel::from_params(identity_params(2)).expect("valid params");
        let proba = model.predict_proba(&[0.0, 0.0]).expect("predict_proba");
        assert!((proba[0] - 0.5).abs() < 1e-12);
        assert!((proba[1] - 0.5).abs() < 1e-12);
        // Positive class wins the tie.
        assert_eq!(model.predict(&[0.0, 0.0]).expect("predict"), 1);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let model = ChurnModel::from_params(identity_params(2)).expect("valid params");
        let proba = model.predict_proba(&[1.5, -0.25]).expect("predict_proba");
        assert!((proba[0] + proba[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_feature_count_mismatch() {
        let model = ChurnModel::from_params(identity_params(2)).expect("valid params");
        let err = model.predict(&[1.0]).expect_err("must fail");
        assert!(matches!(
            err,
            PredictionError::FeatureCountMismatch { got: 1, expected: 2 }
        ));
    }
}
