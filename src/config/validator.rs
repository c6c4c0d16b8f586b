use thiserror::Error;

use crate::config::{LoggingSettings, PreviewSettings, SeedSettings, Settings};
use crate::seed::SeedFormat;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        errors.extend(Self::validate_logging(&settings.logging));
        errors.extend(Self::validate_preview(&settings.preview));
        errors.extend(Self::validate_seed(&settings.seed));

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_logging(logging: &LoggingSettings) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if logging.level.is_empty() {
            errors.push(ValidationError::MissingField("logging.level".to_string()));
        } else if logging.max_level().is_err() {
            errors.push(ValidationError::InvalidValue {
                field: "logging.level".to_string(),
                reason: format!(
                    "'{}' is not one of error, warn, info, debug, trace",
                    logging.level
                ),
            });
        }

        errors
    }

    fn validate_preview(preview: &PreviewSettings) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if preview.placeholders.string.is_empty() {
            errors.push(ValidationError::MissingField(
                "preview.placeholders.string".to_string(),
            ));
        }
        if preview.placeholders.number.is_empty() {
            errors.push(ValidationError::MissingField(
                "preview.placeholders.number".to_string(),
            ));
        }

        errors
    }

    fn validate_seed(seed: &SeedSettings) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if let Some(path) = &seed.path {
            if let Err(e) = SeedFormat::from_path(path) {
                errors.push(ValidationError::InvalidValue {
                    field: "seed.path".to_string(),
                    reason: e.to_string(),
                });
            }
        }

        errors
    }
}
