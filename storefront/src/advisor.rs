//! Gemini-backed product advisor.
//!
//! Wraps one external text-generation call: the user's question, the full
//! serialized catalog and a fixed persona instruction go out; advisory text
//! comes back. The gateway never lets an error escape - the advisor reducer
//! substitutes [`FALLBACK_ADVICE`] for any failure.

use crate::error::AdvisorError;
use crate::providers::ProductAdvisor;
use crate::types::Product;
use shieldpoint_gemini::{Content, GeminiClient, GenerateContentRequest};

/// Fixed persona instruction for the consultant.
pub const PERSONA_INSTRUCTION: &str = "Bạn là chuyên gia tư vấn sức khỏe tại hệ thống THE SHIELD \
     POINT. Hãy trả lời thân thiện, bảo mật và chuyên nghiệp bằng tiếng Việt.";

/// User-safe text shown whenever the generation call fails for any reason.
pub const FALLBACK_ADVICE: &str =
    "Xin lỗi, tôi đang gặp chút trục trặc. Bạn có thể tham khảo danh sách sản phẩm bên dưới nhé!";

/// Product advisor backed by the Gemini `generateContent` API
///
/// The catalog is serialized once at construction; every question embeds it
/// in the prompt so the model only recommends stocked products.
#[derive(Clone)]
pub struct GeminiAdvisor {
    client: GeminiClient,
    model: String,
    catalog_json: String,
}

impl GeminiAdvisor {
    /// Create an advisor over the given catalog
    ///
    /// Falls back to an empty catalog payload if serialization fails, which
    /// cannot happen for the plain-data product type.
    #[must_use]
    pub fn new(client: GeminiClient, model: impl Into<String>, catalog: &[Product]) -> Self {
        let catalog_json = serde_json::to_string(catalog).unwrap_or_else(|_| "[]".to_string());
        Self {
            client,
            model: model.into(),
            catalog_json,
        }
    }

    fn prompt(&self, query: &str) -> String {
        format!(
            "User asks: {query}. Based on our products: {}, suggest the best option and explain \
             why. Keep it discreet, professional, and helpful.",
            self.catalog_json
        )
    }
}

impl ProductAdvisor for GeminiAdvisor {
    async fn advise(&self, query: &str) -> Result<String, AdvisorError> {
        let request = GenerateContentRequest::new(vec![Content::user(self.prompt(query))])
            .with_model(self.model.clone())
            .with_system_instruction(PERSONA_INSTRUCTION);

        let response = self.client.generate(&request).await?;
        Ok(response.into_text()?)
    }
}
