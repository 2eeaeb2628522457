//! Label encoder adapter: the category-to-code mappings exported by the
//! training pipeline.
//!
//! The artifact is a JSON object mapping each categorical field name to its
//! ordered class list; a category's code is its index in that list. The class
//! order is whatever the fitting library produced and must not be reordered
//! here.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ArtifactLoadError;
use crate::ports::{CategoricalEncoder, UnknownCategoryError};

/// A single fitted label encoder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    field: String,
    classes: Vec<String>,
}

impl LabelEncoder {
    #[must_use]
    pub fn new(field: impl Into<String>, classes: Vec<String>) -> Self {
        Self {
            field: field.into(),
            classes,
        }
    }

    /// Name of the categorical field this encoder was fitted on.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }
}

impl CategoricalEncoder for LabelEncoder {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn transform(&self, value: &str) -> Result<i64, UnknownCategoryError> {
        self.classes
            .iter()
            .position(|c| c == value)
            .map(|i| i as i64)
            .ok_or_else(|| UnknownCategoryError {
                field: self.field.clone(),
                value: value.to_string(),
                known: self.classes.clone(),
            })
    }
}

/// The encoders for the two categorical fields of the customer record.
#[derive(Debug, Clone)]
pub struct EncoderSet {
    pub geography: LabelEncoder,
    pub gender: LabelEncoder,
}

impl EncoderSet {
    /// Load the encoder artifact from `path`.
    ///
    /// # Errors
    /// Returns `ArtifactLoadError` if the file is missing, unreadable, not
    /// valid JSON, or lacks the expected categorical keys.
    pub fn load(path: &Path) -> Result<Self, ArtifactLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ArtifactLoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut raw: BTreeMap<String, Vec<String>> =
            serde_json::from_str(&content).map_err(|e| ArtifactLoadError::Format {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut take = |field: &str| -> Result<LabelEncoder, ArtifactLoadError> {
            let classes = raw.remove(field).ok_or_else(|| ArtifactLoadError::Shape {
                path: path.to_path_buf(),
                reason: format!("missing categorical key {field:?}"),
            })?;
            if classes.is_empty() {
                return Err(ArtifactLoadError::Shape {
                    path: path.to_path_buf(),
                    reason: format!("empty class list for {field:?}"),
                });
            }
            Ok(LabelEncoder::new(field, classes))
        };

        let geography = take("Geography")?;
        let gender = take("Gender")?;

        tracing::info!(
            "Loaded label encoders from {:?} (Geography: {} classes, Gender: {} classes)",
            path,
            geography.classes().len(),
            gender.classes().len()
        );

        Ok(Self { geography, gender })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_encoder() -> LabelEncoder {
        LabelEncoder::new(
            "Geography",
            vec![
                "France".to_string(),
                "Germany".to_string(),
                "Spain".to_string(),
            ],
        )
    }

    #[test]
    fn test_transform_known_classes() {
        let encoder = sample_encoder();
        for (i, class) in encoder.classes().to_vec().iter().enumerate() {
            assert_eq!(encoder.transform(class).expect("known class"), i as i64);
        }
    }

    #[test]
    fn test_transform_is_deterministic() {
        let encoder = sample_encoder();
        let first = encoder.transform("Germany").expect("known class");
        let second = encoder.transform("Germany").expect("known class");
        assert_eq!(first, second);
    }

    #[test]
    fn test_transform_unknown_category() {
        let encoder = sample_encoder();
        let err = encoder.transform("Atlantis").expect_err("unknown class");
        assert_eq!(err.field, "Geography");
        assert_eq!(err.value, "Atlantis");
        assert_eq!(err.known.len(), 3);
    }

    #[test]
    fn test_load_from_json() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("label_encoders.json");
        std::fs::write(
            &path,
            r#"{"Geography": ["France", "Germany", "Spain"], "Gender": ["Female", "Male"]}"#,
        )
        .expect("write encoders");

        let set = EncoderSet::load(&path).expect("load encoders");
        assert_eq!(set.geography.classes().len(), 3);
        assert_eq!(set.gender.transform("Male").expect("known class"), 1);
    }

    #[test]
    fn test_load_rejects_missing_key() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("label_encoders.json");
        std::fs::write(&path, r#"{"Geography": ["France"]}"#).expect("write encoders");

        let err = EncoderSet::load(&path).expect_err("must fail");
        assert!(matches!(err, ArtifactLoadError::Shape { .. }));
    }

    #[test]
    fn test_load_rejects_empty_class_list() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("label_encoders.json");
        std::fs::write(&path, r#"{"Geography": [], "Gender": ["Female", "Male"]}"#)
            .expect("write encoders");

        let err = EncoderSet::load(&path).expect_err("must fail");
        assert!(matches!(err, ArtifactLoadError::Shape { .. }));
    }
}
