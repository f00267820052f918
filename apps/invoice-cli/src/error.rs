//! Error types for the invoice CLI.

use invoice_core::PricingError;

use crate::config::ConfigError;

/// Everything that can stop the CLI from printing a result.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read {source_name}: {source}")]
    Io {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid invoice JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid log filter: {0}")]
    LogFilter(String),

    /// The invoice was read but failed validation.
    #[error("{0}")]
    Pricing(#[from] PricingError),
}

impl CliError {
    /// Process exit status: 2 for an invoice that failed validation, 1 for
    /// everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Pricing(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoice_core::ValidationError;

    #[test]
    fn test_validation_failure_message_is_the_joined_problems() {
        let err = CliError::from(PricingError::Validation(vec![
            ValidationError::MissingField { field: "customer_id" },
            ValidationError::NoItems,
        ]));
        assert_eq!(err.to_string(), "Missing customer_id; Invoice must contain items");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_config_errors_exit_with_one() {
        let err = CliError::from(ConfigError::InvalidValue("INVOICE_LOG".to_string()));
        assert_eq!(err.exit_code(), 1);
    }
}
