//! Gemini API client implementation

use crate::{
    error::GeminiError,
    generate::{GenerateContentRequest, GenerateContentResponse},
};
use reqwest::{Client, StatusCode};

/// Gemini API client
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl GeminiClient {
    /// Create a new client with API key from environment
    ///
    /// # Errors
    ///
    /// Returns `GeminiError::MissingApiKey` if `GEMINI_API_KEY` is not set
    pub fn from_env() -> Result<Self, GeminiError> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| GeminiError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Create a new client with explicit API key
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    /// Override the API base URL (used by tests against a local server)
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Generate content (non-streaming)
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, API errors, or parsing failures
    pub async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.api_url, request.model
            ))
            .query(&[("key", self.api_key.as_str())])
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| GeminiError::RequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<GenerateContentResponse>()
                .await
                .map_err(|e| GeminiError::ResponseParseFailed(e.to_string())),
            StatusCode::TOO_MANY_REQUESTS => Err(GeminiError::RateLimited),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(GeminiError::Unauthorized),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(GeminiError::ApiError {
                    status: status.as_u16(),
                    message: body,
                })
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Content;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_client_creation() {
        let client = GeminiClient::new("test-key".to_string());
        assert_eq!(client.api_key, "test-key");
        assert_eq!(
            client.api_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
    }

    #[test]
    fn test_request_creation() {
        let request = GenerateContentRequest::new(vec![Content::user("Hello")]);
        assert_eq!(request.contents.len(), 1);
        assert!(request.system_instruction.is_none());
    }

    #[tokio::test]
    async fn generate_returns_candidate_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/models/gemini-3-flash-preview:generateContent"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "Try the thin one."}]},
                    "finishReason": "STOP"
                }]
            })))
            .mount(&server)
            .await;

        let client = GeminiClient::new("test-key".to_string()).with_api_url(server.uri());
        let request = GenerateContentRequest::new(vec![Content::user("thinnest?")]);

        let result = client.generate(&request).await;
        assert!(matches!(
            result.map(GenerateContentResponse::into_text),
            Ok(Ok(text)) if text == "Try the thin one."
        ));
    }

    #[tokio::test]
    async fn generate_maps_rate_limit_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let client = GeminiClient::new("test-key".to_string()).with_api_url(server.uri());
        let request = GenerateContentRequest::new(vec![Content::user("hi")]);

        let result = client.generate(&request).await;
        assert!(matches!(result, Err(GeminiError::RateLimited)));
    }

    #[tokio::test]
    async fn generate_maps_server_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = GeminiClient::new("test-key".to_string()).with_api_url(server.uri());
        let request = GenerateContentRequest::new(vec![Content::user("hi")]);

        let result = client.generate(&request).await;
        assert!(matches!(
            result,
            Err(GeminiError::ApiError { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn generate_maps_malformed_body_to_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = GeminiClient::new("test-key".to_string()).with_api_url(server.uri());
        let request = GenerateContentRequest::new(vec![Content::user("hi")]);

        let result = client.generate(&request).await;
        assert!(matches!(result, Err(GeminiError::ResponseParseFailed(_))));
    }
}
