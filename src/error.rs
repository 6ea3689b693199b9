//! Error types.
//!
//! - `ModelError`: raised by the numerical core (invalid strip configuration).
//! - `AppError`: what the binary reports; carries the process exit code.

/// Errors raised while building a surface model.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// Parameters are missing, non-numeric, or too coarse to discretize.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl ModelError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ModelError::InvalidConfiguration(message.into())
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        AppError::new(2, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_error_maps_to_config_exit_code() {
        let err: AppError = ModelError::invalid("resolution must be >= 2 (got 1)").into();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            err.to_string(),
            "invalid configuration: resolution must be >= 2 (got 1)"
        );
    }
}
