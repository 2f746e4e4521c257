//! Storefront error types.

use thiserror::Error;

/// Errors an advice provider can report
///
/// These never cross the gateway boundary: the advisor reducer converts
/// every failure into the fixed fallback message before it reaches state.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// The underlying generation call failed
    #[error("advice call failed: {0}")]
    CallFailed(String),
}

impl From<shieldpoint_gemini::GeminiError> for AdvisorError {
    fn from(err: shieldpoint_gemini::GeminiError) -> Self {
        Self::CallFailed(err.to_string())
    }
}
