//! Request and response shapes for the AI assistant endpoints.
//!
//! The assistant exposes three purpose-built generators (insights,
//! email, marketing post) plus a generic request route. Each returns a
//! differently-named text field, so they get separate response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct InsightRequest {
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightResponse {
    pub answer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmailRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub context: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailResponse {
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketingRequest {
    #[serde(rename = "productInfo")]
    pub product_info: String,
    pub promotion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketingResponse {
    pub post: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AiRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub prompt: String,
    pub context: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiResponse {
    pub response: String,
}
