// Request and response bodies for the HTTP API

use crate::models::Direction;
use serde::{Deserialize, Serialize};

/// Body of `POST /translate`.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    /// Raw direction code; validated by the handler before any model work.
    pub direction: String,
}

/// Successful response of `POST /translate`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub original_text: String,
    pub translated_text: String,
    pub direction: Direction,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_wire_format() {
        let response = TranslationResponse {
            original_text: "hello".to_string(),
            translated_text: "مرحبا".to_string(),
            direction: Direction::EnglishToArabic,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["original_text"], "hello");
        assert_eq!(value["translated_text"], "مرحبا");
        assert_eq!(value["direction"], "e2a");
    }

    #[test]
    fn test_request_accepts_any_direction_string() {
        // validation happens in the handler, not during deserialization
        let request: TranslationRequest =
            serde_json::from_str(r#"{"text": "hi", "direction": "fr"}"#).unwrap();
        assert_eq!(request.direction, "fr");
    }
}
