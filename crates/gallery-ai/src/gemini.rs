//! Gemini generative client
//!
//! Synchronous client for the `generateContent` endpoint, used by the
//! risk-analysis, prescription, and diagnosis tools. Requests carry a
//! fixed instruction prefix plus whatever text or image the tool
//! collected; responses are free-form text rendered unmodified.

use crate::{AiError, CollaboratorConfig};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

/// Environment variable holding the Gemini credential
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Default generative model
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// HTTP client for the Gemini API
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: CollaboratorConfig,
    model: String,
}

impl GeminiClient {
    /// Create a client from an explicit configuration
    #[must_use = "creates a Gemini client"]
    pub fn new(config: CollaboratorConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            model: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }

    /// Create a client from the `GEMINI_API_KEY` environment variable,
    /// failing fast when it is unset.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::MissingCredential`] if the variable is unset or
    /// empty.
    pub fn from_env() -> Result<Self, AiError> {
        Ok(Self::new(CollaboratorConfig::from_env(GEMINI_API_KEY_VAR)?))
    }

    /// Use a different Gemini model
    #[inline]
    #[must_use = "returns the client with the model configured"]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Generate a response for a plain-text prompt.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status, or a
    /// response with no text content.
    pub fn generate(&self, prompt: &str) -> Result<String, AiError> {
        self.request(prompt, None, None)
    }

    /// Generate a response for a prompt plus an attached image.
    ///
    /// The image bytes are base64-encoded into an inline data part with
    /// the given MIME type (e.g. `"image/png"`).
    ///
    /// # Errors
    ///
    /// Same contract as [`GeminiClient::generate`].
    pub fn generate_with_image(
        &self,
        prompt: &str,
        image: &[u8],
        mime_type: &str,
        temperature: Option<f64>,
    ) -> Result<String, AiError> {
        self.request(prompt, Some((image, mime_type)), temperature)
    }

    fn request(
        &self,
        prompt: &str,
        image: Option<(&[u8], &str)>,
        temperature: Option<f64>,
    ) -> Result<String, AiError> {
        let mut parts = vec![Part::Text {
            text: prompt.to_string(),
        }];
        if let Some((bytes, mime_type)) = image {
            parts.push(Part::InlineData {
                inline_data: InlineData {
                    mime_type: mime_type.to_string(),
                    data: BASE64.encode(bytes),
                },
            });
        }

        let request = GenerateRequest {
            contents: vec![RequestContent { parts }],
            generation_config: temperature.map(|t| GenerationConfig { temperature: t }),
        };

        let url = format!("{API_BASE}/{}:generateContent", self.model);
        log::debug!("gemini request to {} ({} chars)", self.model, prompt.len());
        let response = self
            .client
            .post(&url)
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

        response_text(response.json()?)
    }
}

/// Concatenate the text parts of the first candidate.
fn response_text(response: GenerateResponse) -> Result<String, AiError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| AiError::MalformedResponse("no candidates in response".to_string()))?;

    let text: String = candidate
        .content
        .parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect();
    if text.is_empty() {
        return Err(AiError::MalformedResponse(
            "candidate contained no text parts".to_string(),
        ));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_request_serialization() {
        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![Part::Text {
                    text: "analyze this".to_string(),
                }],
            }],
            generation_config: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "analyze this");
        assert!(
            json.get("generationConfig").is_none(),
            "absent temperature must not serialize"
        );
    }

    #[test]
    fn test_image_request_serialization() {
        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![
                    Part::Text {
                        text: "transcribe".to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/png".to_string(),
                            data: BASE64.encode(b"fake image"),
                        },
                    },
                ],
            }],
            generation_config: Some(GenerationConfig { temperature: 0.4 }),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["contents"][0]["parts"][1]["inlineData"]["mimeType"],
            "image/png"
        );
        assert_eq!(json["generationConfig"]["temperature"], 0.4);
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Hello "},{"text":"world"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(response_text(response).unwrap(), "Hello world");
    }

    #[test]
    fn test_response_without_candidates_is_error() {
        let response: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        match response_text(response) {
            Err(AiError::MalformedResponse(msg)) => assert!(msg.contains("candidates")),
            other => panic!("Expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_response_without_text_parts_is_error() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap();
        assert!(response_text(response).is_err());
    }

    #[test]
    fn test_from_env_fails_fast_without_key() {
        // Run against a guaranteed-unset variable by temporarily clearing.
        std::env::remove_var(GEMINI_API_KEY_VAR);
        assert!(GeminiClient::from_env().is_err());
    }

    #[test]
    fn test_with_model_overrides_default() {
        let client = GeminiClient::new(CollaboratorConfig::new("k").unwrap())
            .with_model("gemini-1.5-pro");
        assert_eq!(client.model, "gemini-1.5-pro");
    }
}
