//! # Gallery AI: external collaborators
//!
//! The gallery's tools do no model work themselves; every hard operation
//! is delegated to a hosted endpoint. This crate holds the thin,
//! synchronous clients for those endpoints:
//!
//! - [`GeminiClient`]: generative text and vision
//!   (risk analysis, prescription transcription, diagnosis)
//! - [`TranslateClient`]: Google Translate v2 (notice translation)
//! - [`MistralClient`]: chat completions (storyteller)
//!
//! There is no retry policy anywhere: a failed call surfaces immediately
//! as [`AiError`] and the caller renders it inline. Credentials come
//! from explicit [`CollaboratorConfig`] objects validated at client
//! construction, never read lazily at first use.

pub mod config;
pub mod gemini;
pub mod mistral;
pub mod prompts;
pub mod translate;

pub use config::CollaboratorConfig;
pub use gemini::{GeminiClient, DEFAULT_GEMINI_MODEL, GEMINI_API_KEY_VAR};
pub use mistral::{MistralClient, DEFAULT_MISTRAL_MODEL, MISTRAL_API_KEY_VAR};
pub use translate::{TargetLanguage, TranslateClient, TRANSLATE_API_KEY_VAR};

use thiserror::Error;

/// Errors from external collaborator calls
#[derive(Error, Debug)]
pub enum AiError {
    /// A required credential is missing or empty; raised at client
    /// construction, before any work is done
    #[error("Configuration error: {0}")]
    MissingCredential(String),

    /// Transport-level failure (connection, TLS, body decoding)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// The endpoint answered 200 but the body had no usable content
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
