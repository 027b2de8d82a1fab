//! Configuration validation

use super::LookupConfig;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),

    #[error("Configuration could not be parsed: {0}")]
    Parse(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if a setting is outside
    /// its valid range.
    fn validate(&self) -> ConfigResult<()>;
}

impl Validator for LookupConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_input_bytes == Some(0) {
            return Err(ConfigurationError::InvalidParameter(
                "max_input_bytes cannot be zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_limit_rejected() {
        let error = LookupConfig::default()
            .with_max_input_bytes(0)
            .validate()
            .expect_err("zero limit must be rejected");
        assert!(error.to_string().contains("max_input_bytes"));
    }

    #[test]
    fn test_default_is_valid() {
        assert!(LookupConfig::default().validate().is_ok());
    }
}
