//! Adapters layer: Concrete implementations of ports.
//!
//! These modules load and wrap the externally produced ML artifacts:
//! - `model`: the exported churn classifier
//! - `encoders`: the exported label encoders for the categorical fields

pub mod encoders;
pub mod model;

use std::path::{Path, PathBuf};

pub use encoders::{EncoderSet, LabelEncoder};
pub use model::{ChurnModel, ExportedChurnModel};

/// Errors raised while loading the serialized artifacts at startup.
///
/// Any of these is fatal: the process cannot serve predictions without both
/// artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactLoadError {
    #[error("failed to read artifact {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("artifact {path:?} is not valid JSON: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact {path:?} has an incompatible shape: {reason}")]
    Shape { path: PathBuf, reason: String },
}

/// Load the classifier and encoder artifacts.
///
/// Called once per process lifetime; the returned objects are immutable and
/// shared read-only across all subsequent predictions.
///
/// # Errors
/// Returns `ArtifactLoadError` if either file is missing, unreadable, or
/// deserializes to an incompatible shape.
pub fn load_artifacts(
    model_path: &Path,
    encoders_path: &Path,
) -> Result<(ChurnModel, EncoderSet), ArtifactLoadError> {
    let model = ChurnModel::load(model_path)?;
    let encoders = EncoderSet::load(encoders_path)?;
    Ok((model, encoders))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_artifacts_missing_model_file() {
        let temp = tempdir().expect("tempdir");
        let model_path = temp.path().join("churn_model.json");
        let encoders_path = temp.path().join("label_encoders.json");
        std::fs::write(
            &encoders_path,
            r#"{"Geography": ["France"], "Gender": ["Female", "Male"]}"#,
        )
        .expect("write encoders");

        let err = load_artifacts(&model_path, &encoders_path).expect_err("must fail");
        assert!(matches!(err, ArtifactLoadError::Io { .. }));
    }
}
