//! Provider error types.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;
use unkey_tfsdk::{AttributePath, Diagnostic};

/// Result type alias using the provider error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while translating between Terraform values and the API.
#[derive(Error, Debug, MietteDiagnostic)]
pub enum Error {
    /// A string attribute did not hold the JSON it should.
    #[error("Failed to decode JSON: {0}")]
    #[diagnostic(
        code(unkey_provider::decoding),
        help("The value must be a JSON object, for example {{\"plan\": \"pro\"}}")
    )]
    Decoding(#[source] serde_json::Error),

    /// A JSON value could not be serialised back into an attribute.
    #[error("Failed to encode JSON: {0}")]
    #[diagnostic(code(unkey_provider::encoding))]
    Encoding(#[source] serde_json::Error),

    /// The Unkey API call failed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Client(#[from] unkey_client::Error),

    /// Provider or logging configuration is unusable.
    #[error("Configuration error: {message}")]
    #[diagnostic(code(unkey_provider::configuration))]
    Configuration {
        /// What is wrong
        message: String,
    },
}

impl Error {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Renders the error as a Terraform diagnostic.
    #[must_use]
    pub fn to_diagnostic(&self, summary: &str) -> Diagnostic {
        Diagnostic::error(summary, self.to_string())
    }

    /// Renders the error as a diagnostic attached to an attribute.
    #[must_use]
    pub fn to_attribute_diagnostic(&self, summary: &str, path: AttributePath) -> Diagnostic {
        self.to_diagnostic(summary).with_attribute(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoding_error_diagnostic() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let diag = Error::Decoding(err)
            .to_attribute_diagnostic("Invalid JSON in meta", AttributePath::attribute_root("meta"));
        assert!(diag.is_error());
        assert_eq!(diag.summary, "Invalid JSON in meta");
        assert!(diag.detail.starts_with("Failed to decode JSON"));
        assert_eq!(diag.attribute.map(|p| p.to_string()).as_deref(), Some("meta"));
    }

    #[test]
    fn test_client_error_is_transparent() {
        let err = Error::from(unkey_client::Error::InvalidConfig {
            message: "root key is empty".into(),
        });
        assert_eq!(
            err.to_string(),
            "Invalid client configuration: root key is empty"
        );
    }
}
