//! Google Translate v2 client
//!
//! Used by the notice-translation tool: extracted English text goes in,
//! Hindi or Kannada comes out. `format=text` keeps the response free of
//! HTML entity escaping.

use crate::{AiError, CollaboratorConfig};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

/// Environment variable holding the Translate credential
pub const TRANSLATE_API_KEY_VAR: &str = "GOOGLE_TRANSLATION_API_KEY";

const API_URL: &str = "https://translation.googleapis.com/language/translate/v2";

/// Translation targets offered by the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetLanguage {
    /// Hindi (`hi`)
    Hindi,
    /// Kannada (`kn`)
    Kannada,
}

impl TargetLanguage {
    /// ISO-639-1 code sent to the API
    #[inline]
    #[must_use = "returns the language code"]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Hindi => "hi",
            Self::Kannada => "kn",
        }
    }
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Hindi => "Hindi",
            Self::Kannada => "Kannada",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for TargetLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hindi" | "hi" => Ok(Self::Hindi),
            "kannada" | "kn" => Ok(Self::Kannada),
            _ => Err(format!(
                "unknown target language '{s}'. Valid options: hindi, kannada"
            )),
        }
    }
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    target: &'static str,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// HTTP client for the Translate v2 API
#[derive(Debug, Clone)]
pub struct TranslateClient {
    client: Client,
    config: CollaboratorConfig,
}

impl TranslateClient {
    /// Create a client from an explicit configuration
    #[must_use = "creates a Translate client"]
    pub fn new(config: CollaboratorConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Create a client from the `GOOGLE_TRANSLATION_API_KEY` environment
    /// variable, failing fast when it is unset.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::MissingCredential`] if the variable is unset or
    /// empty.
    pub fn from_env() -> Result<Self, AiError> {
        Ok(Self::new(CollaboratorConfig::from_env(
            TRANSLATE_API_KEY_VAR,
        )?))
    }

    /// Translate text into the target language.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status, or a
    /// response carrying no translation.
    pub fn translate(&self, text: &str, target: TargetLanguage) -> Result<String, AiError> {
        let request = TranslateRequest {
            q: text,
            target: target.code(),
            format: "text",
        };

        log::debug!("translating {} chars to {target}", text.len());
        let response = self
            .client
            .post(API_URL)
            .query(&[("key", self.config.api_key())])
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: TranslateResponse = response.json()?;
        parsed
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| AiError::MalformedResponse("no translations in response".to_string()))
    }
}
