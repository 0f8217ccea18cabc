//! Direct REST client for the Gemini `generateContent` API.
//!
//! Exposes the [`GenerativeModel`] seam the pipeline and classifier are
//! written against, plus the concrete [`GeminiClient`] implementation.
//! HTTP failures are mapped to the [`PipelineError`] taxonomy by status
//! code first; message-substring matching is isolated in
//! [`classify_message`] as a last resort for responses without a usable
//! structured code.

use async_trait::async_trait;
use ideolab_core::config::ApiCredential;
use ideolab_core::error::PipelineError;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Parameters of a plain text generation call.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Model ID, e.g. "gemini-3-pro-preview"
    pub model: String,
    /// Composed user payload
    pub payload: String,
    /// System instruction sent alongside the payload
    pub system_instruction: Option<String>,
    /// Sampling temperature
    pub temperature: f64,
    /// Reasoning budget hint, in tokens
    pub thinking_budget: u32,
}

/// Parameters of a schema-constrained JSON generation call.
#[derive(Debug, Clone)]
pub struct StructuredRequest {
    /// Model ID, e.g. "gemini-3-flash-preview"
    pub model: String,
    /// Composed user payload
    pub payload: String,
    /// Response schema the model output must conform to
    pub response_schema: Value,
}

/// The remote generative-text service.
///
/// Both operations are single suspend-until-resolved calls: no streaming,
/// no cancellation, no timeout at this layer. Implementations classify
/// their failures into [`PipelineError`] so callers can branch on error
/// kind instead of message text.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Generates a text document from the composed payload.
    async fn generate(&self, request: GenerateRequest) -> Result<String, PipelineError>;

    /// Generates a JSON document conforming to the request schema.
    ///
    /// Returns the raw JSON text; the caller owns deserialization so that
    /// an out-of-schema response stays a caller-side classification
    /// failure.
    async fn generate_structured(&self, request: StructuredRequest)
        -> Result<String, PipelineError>;
}

/// Client that talks to the Gemini HTTP API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    credential: ApiCredential,
}

impl GeminiClient {
    /// Creates a new client with a validated credential.
    ///
    /// Credential validation happens in [`ApiCredential::new`], so a client
    /// can never issue a request with an absent or placeholder key.
    pub fn new(credential: ApiCredential) -> Self {
        Self {
            client: Client::new(),
            credential,
        }
    }

    async fn send_request(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, PipelineError> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = model,
            api_key = self.credential.expose()
        );

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                if err.is_connect() || err.is_timeout() {
                    PipelineError::service_unavailable(format!("Gemini API unreachable: {err}"))
                } else {
                    PipelineError::unknown(format!("Gemini API request failed: {err}"))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, &body_text));
        }

        response
            .json()
            .await
            .map_err(|err| PipelineError::unknown(format!("Failed to parse Gemini response: {err}")))
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<String, PipelineError> {
        let body = GenerateContentRequest {
            contents: vec![Content::user(request.payload)],
            system_instruction: request.system_instruction.map(Content::system),
            generation_config: Some(GenerationConfig {
                temperature: Some(request.temperature),
                thinking_config: Some(ThinkingConfig {
                    thinking_budget: request.thinking_budget,
                }),
                response_mime_type: None,
                response_schema: None,
            }),
        };

        let response = self.send_request(&request.model, &body).await?;
        extract_text(response)
    }

    async fn generate_structured(
        &self,
        request: StructuredRequest,
    ) -> Result<String, PipelineError> {
        let body = GenerateContentRequest {
            contents: vec![Content::user(request.payload)],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                temperature: None,
                thinking_config: None,
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(request.response_schema),
            }),
        };

        let response = self.send_request(&request.model, &body).await?;
        extract_text(response)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

impl Content {
    fn user(text: String) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part { text }],
        }
    }

    fn system(text: String) -> Self {
        Self {
            role: "system".to_string(),
            parts: vec![Part { text }],
        }
    }
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    code: Option<i32>,
    message: Option<String>,
    status: Option<String>,
}

fn extract_text(response: GenerateContentResponse) -> Result<String, PipelineError> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| {
            PipelineError::unknown("Gemini API returned no text in the response candidates")
        })
}

/// Maps an HTTP failure to the error taxonomy, status code first.
fn map_http_error(status: StatusCode, body: &str) -> PipelineError {
    let (api_status, message) = parse_error_body(body);

    match status.as_u16() {
        401 | 403 => PipelineError::authentication(format!("The API key was rejected: {message}.")),
        429 => PipelineError::rate_limited(message),
        // 400 covers malformed requests including invalid keys; only the
        // message distinguishes them.
        400 => match classify_message(api_status.as_deref(), &message) {
            Some(classified) => classified,
            None => PipelineError::unknown(message),
        },
        500..=599 => PipelineError::service_unavailable(message),
        _ => match classify_message(api_status.as_deref(), &message) {
            Some(classified) => classified,
            None => PipelineError::unknown(message),
        },
    }
}

/// Extracts the structured `{ error: { code, message, status } }` body.
///
/// Falls back to the raw body text when the payload is not the documented
/// error shape.
fn parse_error_body(body: &str) -> (Option<String>, String) {
    match serde_json::from_str::<ErrorWrapper>(body) {
        Ok(wrapper) => {
            let message = wrapper
                .error
                .message
                .unwrap_or_else(|| body.to_string());
            (wrapper.error.status, message)
        }
        Err(_) => (None, body.to_string()),
    }
}

/// Last-resort substring classification for provider messages.
///
/// Known Gemini failure markers without a reliable HTTP status mapping:
/// leaked-key lockouts and permission denials come back as authentication
/// problems, RESOURCE_EXHAUSTED as quota exhaustion. Returns `None` when
/// nothing matches so the caller can keep the message verbatim.
fn classify_message(api_status: Option<&str>, message: &str) -> Option<PipelineError> {
    let status = api_status.unwrap_or_default();

    if message.contains("leaked") {
        return Some(PipelineError::authentication(
            "Google detected that this API key leaked and disabled it.",
        ));
    }
    if status == "PERMISSION_DENIED" || message.contains("PERMISSION_DENIED") {
        return Some(PipelineError::authentication(
            "The API key was denied permission.",
        ));
    }
    if message.contains("API_KEY_INVALID")
        || message.contains("API key not valid")
        || message.contains("API key not found")
    {
        return Some(PipelineError::authentication("The API key is invalid."));
    }
    if status == "RESOURCE_EXHAUSTED" || message.contains("RESOURCE_EXHAUSTED") {
        return Some(PipelineError::rate_limited(message.to_string()));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gemini_error(code: i32, status: &str, message: &str) -> String {
        serde_json::json!({
            "error": { "code": code, "message": message, "status": status }
        })
        .to_string()
    }

    #[test]
    fn test_403_maps_to_authentication() {
        let body = gemini_error(403, "PERMISSION_DENIED", "Permission denied on resource");
        let err = map_http_error(StatusCode::FORBIDDEN, &body);
        assert!(err.is_authentication());
        assert!(err.message().contains("Permission denied on resource"));
    }

    #[test]
    fn test_429_maps_to_rate_limited() {
        let body = gemini_error(
            429,
            "RESOURCE_EXHAUSTED",
            "Quota exceeded for quota metric 'GenerateContent requests'",
        );
        let err = map_http_error(StatusCode::TOO_MANY_REQUESTS, &body);
        assert!(err.is_rate_limited());
    }

    #[test]
    fn test_400_invalid_key_maps_to_authentication() {
        let body = gemini_error(400, "INVALID_ARGUMENT", "API key not valid. Please pass a valid API key. [API_KEY_INVALID]");
        let err = map_http_error(StatusCode::BAD_REQUEST, &body);
        assert!(err.is_authentication());
    }

    #[test]
    fn test_400_other_stays_verbatim_unknown() {
        let body = gemini_error(400, "INVALID_ARGUMENT", "Unknown field \"reasoning\"");
        let err = map_http_error(StatusCode::BAD_REQUEST, &body);
        assert_eq!(
            err,
            PipelineError::unknown("Unknown field \"reasoning\"")
        );
    }

    #[test]
    fn test_5xx_maps_to_service_unavailable() {
        let body = gemini_error(503, "UNAVAILABLE", "The model is overloaded");
        let err = map_http_error(StatusCode::SERVICE_UNAVAILABLE, &body);
        assert!(matches!(err, PipelineError::ServiceUnavailable { .. }));
    }

    #[test]
    fn test_unparseable_body_is_kept_verbatim() {
        let err = map_http_error(StatusCode::BAD_REQUEST, "<html>gateway error</html>");
        assert_eq!(err, PipelineError::unknown("<html>gateway error</html>"));
    }

    #[test]
    fn test_classify_message_leaked_key() {
        let err = classify_message(None, "Your API key was reported as leaked").unwrap();
        assert!(err.is_authentication());
        assert!(err.message().contains("leaked"));
    }

    #[test]
    fn test_classify_message_resource_exhausted() {
        let err = classify_message(Some("RESOURCE_EXHAUSTED"), "quota exceeded").unwrap();
        assert!(err.is_rate_limited());
    }

    #[test]
    fn test_classify_message_no_match() {
        assert!(classify_message(Some("INTERNAL"), "something odd happened").is_none());
    }

    #[test]
    fn test_generate_request_wire_shape() {
        let body = GenerateContentRequest {
            contents: vec![Content::user("payload".to_string())],
            system_instruction: Some(Content::system("instruction".to_string())),
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
                thinking_config: Some(ThinkingConfig {
                    thinking_budget: 2048,
                }),
                response_mime_type: None,
                response_schema: None,
            }),
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "payload");
        assert_eq!(value["systemInstruction"]["role"], "system");
        assert_eq!(value["generationConfig"]["temperature"], 0.7);
        assert_eq!(
            value["generationConfig"]["thinkingConfig"]["thinkingBudget"],
            2048
        );
        assert!(value["generationConfig"]
            .as_object()
            .unwrap()
            .get("responseMimeType")
            .is_none());
    }

    #[test]
    fn test_structured_request_wire_shape() {
        let body = GenerateContentRequest {
            contents: vec![Content::user("payload".to_string())],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                temperature: None,
                thinking_config: None,
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(serde_json::json!({ "type": "OBJECT" })),
            }),
        };

        let value = serde_json::to_value(&body).unwrap();
        assert!(value.as_object().unwrap().get("systemInstruction").is_none());
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_extract_text_takes_first_text_part() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Hello"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "Hello");
    }

    #[test]
    fn test_extract_text_empty_candidates_is_an_error() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(extract_text(response).is_err());
    }
}
