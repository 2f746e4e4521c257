//! `generateContent` request and response types

use crate::error::GeminiError;
use crate::types::{Content, UsageMetadata};
use serde::{Deserialize, Serialize};

/// Default model used when none is specified
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Request to generate content
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Model to use (e.g., "gemini-3-flash-preview"); part of the URL, not
    /// the JSON body
    #[serde(skip)]
    pub model: String,
    /// Conversation contents
    pub contents: Vec<Content>,
    /// System instruction (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    /// Generation parameters (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Create a basic request with sensible defaults
    #[must_use]
    pub fn new(contents: Vec<Content>) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            contents,
            system_instruction: None,
            generation_config: None,
        }
    }

    /// Builder: Set model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Builder: Set system instruction
    #[must_use]
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(Content::system(instruction));
        self
    }

    /// Builder: Set generation config
    #[must_use]
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }
}

/// Generation parameters
#[derive(Clone, Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// Response from generating content
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated candidates (the API returns one unless asked otherwise)
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Token usage statistics
    #[serde(default)]
    pub usage_metadata: UsageMetadata,
}

impl GenerateContentResponse {
    /// Extract the text of the first candidate
    ///
    /// Concatenates the text parts of the first candidate's content.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::EmptyResponse`] if there is no candidate or
    /// the candidate carries no text.
    pub fn into_text(self) -> Result<String, GeminiError> {
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or(GeminiError::EmptyResponse)?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect();

        if text.is_empty() {
            return Err(GeminiError::EmptyResponse);
        }

        Ok(text)
    }
}

/// A generated candidate
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The generated content
    pub content: Content,
    /// Why generation stopped (e.g., "STOP", "`MAX_TOKENS`")
    #[serde(default)]
    pub finish_reason: Option<String>,
}
