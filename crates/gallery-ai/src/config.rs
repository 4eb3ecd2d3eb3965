//! Collaborator configuration
//!
//! Each external service gets an explicit configuration object holding
//! its credential, validated when the client is constructed. Keys are
//! never read lazily at first use: a missing credential fails the tool
//! before any extraction work is wasted.

use crate::AiError;

/// Configuration for one external collaborator.
///
/// Recognized keys: `api_key`, the credential for the external service.
#[derive(Clone, PartialEq, Eq)]
pub struct CollaboratorConfig {
    api_key: String,
}

impl CollaboratorConfig {
    /// Build a configuration from an explicit key.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::MissingCredential`] if the key is empty or
    /// whitespace.
    pub fn new(api_key: impl Into<String>) -> Result<Self, AiError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AiError::MissingCredential(
                "api_key is empty".to_string(),
            ));
        }
        Ok(Self { api_key })
    }

    /// Build a configuration from a named environment variable,
    /// failing fast when it is unset or empty.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::MissingCredential`] naming the variable.
    pub fn from_env(var: &str) -> Result<Self, AiError> {
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => Ok(Self { api_key: value }),
            _ => Err(AiError::MissingCredential(format!(
                "{var} environment variable not set"
            ))),
        }
    }

    /// The credential for the external service.
    #[inline]
    #[must_use = "returns the API key"]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

// Credentials stay out of Debug output.
impl std::fmt::Debug for CollaboratorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollaboratorConfig")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_nonempty_key() {
        let config = CollaboratorConfig::new("sk-123").unwrap();
        assert_eq!(config.api_key(), "sk-123");
    }

    #[test]
    fn test_new_rejects_empty_key() {
        assert!(CollaboratorConfig::new("").is_err());
        assert!(CollaboratorConfig::new("   ").is_err());
    }

    #[test]
    fn test_from_env_missing_variable_fails_fast() {
        match CollaboratorConfig::from_env("GALLERY_TEST_UNSET_VARIABLE_XYZ") {
            Err(AiError::MissingCredential(msg)) => {
                assert!(msg.contains("GALLERY_TEST_UNSET_VARIABLE_XYZ"));
            }
            other => panic!("Expected MissingCredential, got {other:?}"),
        }
    }

    #[test]
    fn test_from_env_reads_value() {
        std::env::set_var("GALLERY_TEST_PRESENT_VARIABLE", "key-value");
        let config = CollaboratorConfig::from_env("GALLERY_TEST_PRESENT_VARIABLE").unwrap();
        assert_eq!(config.api_key(), "key-value");
        std::env::remove_var("GALLERY_TEST_PRESENT_VARIABLE");
    }

    #[test]
    fn test_debug_redacts_credential() {
        let config = CollaboratorConfig::new("super-secret").unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("redacted"));
    }
}
