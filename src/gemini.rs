//! Gemini `generateContent` client for place-name extraction.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;

/// Marker the model returns for questions that do not ask about a place.
pub const INVALID_MARKER: &str = "invalid";

/// Builds the fixed extraction prompt around the user's question. The model
/// answers with either a bare place name or the literal string `invalid`.
pub fn extraction_prompt(question: &str) -> String {
    format!(
        r#"
    I need to tell me if the following text is requesting a precise location or not.
    If yes return me only the name of request place.
    If the question is: Rome, return "Rome"
    If the question is: Did I go to the Eiffel Tower? return "Eiffel Tower"
    If the question is: When did I go to Reggio Emilia? return "Reggio Emilia"
    and so on...
    no line breaks in the response.
    Otherwise return me the string invalid.
    The question is: {}
    "#,
        question
    )
}

/// What the model extracted from a question.
#[derive(Debug, PartialEq)]
pub enum Extraction {
    Place(String),
    Invalid,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
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
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(base_url: String, api_key: String, model: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url,
            api_key,
            model,
        }
    }

    /// Single bounded call; a timeout or transport error surfaces as a
    /// dependency failure.
    pub async fn extract_place(&self, prompt: &str) -> Result<Extraction, ApiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let payload: GenerateContentResponse = response.json().await?;

        let text = payload
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or_else(|| ApiError::Dependency("empty model response".to_string()))?;

        debug!("Model extraction response: {}", text);

        if text.contains(INVALID_MARKER) {
            Ok(Extraction::Invalid)
        } else {
            Ok(Extraction::Place(text.trim().to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn model_reply(text: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": text}]}}
            ]
        })
    }

    #[test]
    fn test_prompt_embeds_question() {
        let prompt = extraction_prompt("When did I go to Reggio Emilia?");
        assert!(prompt.contains("The question is: When did I go to Reggio Emilia?"));
        assert!(prompt.contains("return me the string invalid"));
    }

    #[tokio::test]
    async fn test_extracts_place_name() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path_regex(r"^/v1beta/models/.*:generateContent$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(model_reply("Eiffel Tower\n")))
            .mount(&server)
            .await;

        let client = GeminiClient::new(server.uri(), "key".into(), "gemini-1.5-flash".into(), 5);
        let result = client
            .extract_place(&extraction_prompt("Did I go to the Eiffel Tower?"))
            .await
            .unwrap();
        assert_eq!(result, Extraction::Place("Eiffel Tower".to_string()));
    }

    #[tokio::test]
    async fn test_invalid_marker() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(model_reply("invalid")))
            .mount(&server)
            .await;

        let client = GeminiClient::new(server.uri(), "key".into(), "gemini-1.5-flash".into(), 5);
        let result = client.extract_place("anything").await.unwrap();
        assert_eq!(result, Extraction::Invalid);
    }

    #[tokio::test]
    async fn test_http_error_is_dependency_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = GeminiClient::new(server.uri(), "key".into(), "gemini-1.5-flash".into(), 5);
        let err = client.extract_place("anything").await.unwrap_err();
        assert!(matches!(err, ApiError::Dependency(_)));
    }

    #[tokio::test]
    async fn test_empty_candidates_is_dependency_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = GeminiClient::new(server.uri(), "key".into(), "gemini-1.5-flash".into(), 5);
        let err = client.extract_place("anything").await.unwrap_err();
        assert!(matches!(err, ApiError::Dependency(_)));
    }
}
