//! # Shield Point Gemini
//!
//! Minimal client for the Google Gemini `generateContent` API.
//!
//! The storefront makes exactly one kind of call: a single, non-streaming
//! text generation request carrying the user's question, the serialized
//! catalog, and a fixed system instruction. This crate covers that surface
//! and nothing more - no retries, no caching, no streaming.
//!
//! ## Example
//!
//! ```no_run
//! use shieldpoint_gemini::{Content, GeminiClient, GenerateContentRequest};
//!
//! # async fn example() -> Result<(), shieldpoint_gemini::GeminiError> {
//! let client = GeminiClient::from_env()?;
//!
//! let request = GenerateContentRequest::new(vec![Content::user("Suggest something thin")])
//!     .with_system_instruction("You are a discreet product advisor.");
//!
//! let response = client.generate(&request).await?;
//! println!("{}", response.into_text()?);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod generate;
mod types;

pub use client::GeminiClient;
pub use error::GeminiError;
pub use generate::{
    Candidate, DEFAULT_MODEL, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};
pub use types::{Content, Part, Role, UsageMetadata};
