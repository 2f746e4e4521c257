//! Core types for the Gemini `generateContent` API

use serde::{Deserialize, Serialize};

/// A content block in the conversation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Content {
    /// Role of the content author (absent on system instructions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Parts making up the content
    pub parts: Vec<Part>,
}

impl Content {
    /// Create user content with a single text part
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some(Role::User),
            parts: vec![Part {
                text: text.into(),
            }],
        }
    }

    /// Create model content with a single text part
    #[must_use]
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Some(Role::Model),
            parts: vec![Part {
                text: text.into(),
            }],
        }
    }

    /// Create role-less content, as used for system instructions
    #[must_use]
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part {
                text: text.into(),
            }],
        }
    }
}

/// Content author role
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User-authored content
    User,
    /// Model-authored content
    Model,
}

/// A single part of a content block
///
/// The storefront only ever sends and receives text parts.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Part {
    /// The text content
    pub text: String,
}

/// Token usage statistics reported by the API
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Number of tokens in the prompt
    #[serde(default)]
    pub prompt_token_count: u32,
    /// Number of tokens across all candidates
    #[serde(default)]
    pub candidates_token_count: u32,
}
