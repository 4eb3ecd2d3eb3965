//! Mistral chat-completions client
//!
//! Backs the storyteller tool: a fixed system persona and a short user
//! prompt built from the visitor's optional theme.

use crate::{AiError, CollaboratorConfig};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

/// Environment variable holding the Mistral credential
pub const MISTRAL_API_KEY_VAR: &str = "MISTRAL_API_KEY";

/// Default chat model
pub const DEFAULT_MISTRAL_MODEL: &str = "mistral-small";

const API_URL: &str = "https://api.mistral.ai/v1/chat/completions";

const STORYTELLER_PERSONA: &str =
    "You are a creative and imaginative storyteller. Write vivid and short stories.";

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f64,
    max_tokens: u32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// HTTP client for the Mistral chat API
#[derive(Debug, Clone)]
pub struct MistralClient {
    client: Client,
    config: CollaboratorConfig,
    model: String,
}

impl MistralClient {
    /// Create a client from an explicit configuration
    #[must_use = "creates a Mistral client"]
    pub fn new(config: CollaboratorConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            model: DEFAULT_MISTRAL_MODEL.to_string(),
        }
    }

    /// Create a client from the `MISTRAL_API_KEY` environment variable,
    /// failing fast when it is unset.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::MissingCredential`] if the variable is unset or
    /// empty.
    pub fn from_env() -> Result<Self, AiError> {
        Ok(Self::new(CollaboratorConfig::from_env(MISTRAL_API_KEY_VAR)?))
    }

    /// Use a different Mistral model
    #[inline]
    #[must_use = "returns the client with the model configured"]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Generate a short story, optionally themed.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status, or an
    /// empty response.
    pub fn tell_story(&self, theme: Option<&str>) -> Result<String, AiError> {
        let story = self.chat(STORYTELLER_PERSONA, &story_prompt(theme), 0.9, 600)?;
        Ok(story.trim().to_string())
    }

    /// One-shot chat completion.
    ///
    /// # Errors
    ///
    /// Same contract as [`MistralClient::tell_story`].
    pub fn chat(
        &self,
        system: &str,
        user: &str,
        temperature: f64,
        max_tokens: u32,
    ) -> Result<String, AiError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system",
                    content: system.to_string(),
                },
                Message {
                    role: "user",
                    content: user.to_string(),
                },
            ],
            temperature,
            max_tokens,
            stream: false,
        };

        log::debug!("mistral chat request to {}", self.model);
        let response = self
            .client
            .post(API_URL)
            .bearer_auth(self.config.api_key())
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

        let parsed: ChatResponse = response.json()?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AiError::MalformedResponse("no choices in response".to_string()))
    }
}

/// Build the storyteller user prompt from an optional theme.
fn story_prompt(theme: Option<&str>) -> String {
    match theme {
        Some(theme) if !theme.trim().is_empty() => {
            format!("Write a short story under 300 words about {theme}.")
        }
        _ => "Write a short story under 300 words.".to_string(),
    }
}
