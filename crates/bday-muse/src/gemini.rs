//! A [`Muse`] backed by the Gemini `generateContent` REST endpoint.

use std::time::Duration;

use bday_core::RiddleContent;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use crate::error::{MuseError, MuseResult};
use crate::muse::Muse;
use crate::prompt;

/// Public Gemini API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Model used unless configured otherwise.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
/// Name the closing poem is addressed to unless configured otherwise.
pub const DEFAULT_RECIPIENT: &str = "Sis";

const TIMEOUT: Duration = Duration::from_secs(30);

/// Gemini HTTP client.
#[derive(Debug, Clone)]
pub struct GeminiMuse {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    recipient: String,
}

impl GeminiMuse {
    /// Create a client authenticating with `api_key`.
    pub fn new(api_key: impl Into<String>) -> MuseResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| MuseError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            recipient: DEFAULT_RECIPIENT.to_string(),
        })
    }

    /// Use a different model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Address the closing poem to `recipient`.
    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = recipient.into();
        self
    }

    /// The configured model.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    async fn generate(&self, body: &GenerateRequest<'_>) -> MuseResult<String> {
        if self.api_key.trim().is_empty() {
            return Err(MuseError::MissingKey);
        }
        debug!(model = %self.model, "calling generateContent");
        let resp = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| MuseError::Transport(e.to_string()))?;

        let status = resp.status();
        if let Some(err) = status_error(status) {
            let body = resp.text().await.unwrap_or_default();
            return Err(match err {
                MuseError::Status { code, .. } => MuseError::Status { code, body },
                other => other,
            });
        }
        let body: GenerateResponse = resp.json().await?;
        body.text()
    }
}

impl Muse for GeminiMuse {
    async fn riddle(&self) -> MuseResult<RiddleContent> {
        let request = GenerateRequest::text(prompt::RIDDLE).with_config(GenerationConfig {
            response_mime_type: "application/json",
            response_schema: riddle_schema(),
        });
        let text = self.generate(&request).await?;
        parse_riddle(&text)
    }

    async fn reaction(&self, symbols: &[String]) -> MuseResult<String> {
        let prompt = prompt::reaction(symbols);
        self.generate(&GenerateRequest::text(&prompt)).await
    }

    async fn closing_wish(&self) -> MuseResult<String> {
        let prompt = prompt::closing_wish(&self.recipient);
        self.generate(&GenerateRequest::text(&prompt)).await
    }
}

/// Map a non-success status to its error. The body is filled in later.
fn status_error(status: StatusCode) -> Option<MuseError> {
    if status.is_success() {
        return None;
    }
    Some(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => MuseError::Unauthorized,
        StatusCode::TOO_MANY_REQUESTS => MuseError::RateLimited,
        other => MuseError::Status {
            code: other.as_u16(),
            body: String::new(),
        },
    })
}

/// Drop markdown code fences the model sometimes wraps JSON in.
pub fn strip_fences(text: &str) -> &str {
    let text = text.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    text.strip_suffix("```").unwrap_or(text).trim()
}

/// Parse the riddle JSON object out of a model answer.
pub fn parse_riddle(text: &str) -> MuseResult<RiddleContent> {
    let body = strip_fences(text);
    if body.is_empty() {
        return Err(MuseError::Empty);
    }
    let content: RiddleContent = serde_json::from_str(body)?;
    if content.riddle.trim().is_empty() {
        return Err(MuseError::Empty);
    }
    Ok(content)
}

fn riddle_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "riddle": { "type": "STRING" },
            "hint": { "type": "STRING" }
        },
        "required": ["riddle", "hint"]
    })
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl<'a> GenerateRequest<'a> {
    fn text(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: None,
        }
    }

    fn with_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate, all parts joined.
    fn text(self) -> MuseResult<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();
        let text = text.trim();
        if text.is_empty() {
            Err(MuseError::Empty)
        } else {
            Ok(text.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_fences() {
        assert_eq!(strip_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_fences("```\n{}\n```"), "{}");
        assert_eq!(strip_fences("  {} "), "{}");
    }

    #[test]
    fn parses_riddle() {
        let text = "```json\n{\"riddle\": \"What has candles?\", \"hint\": \"Cake\"}\n```";
        let content = parse_riddle(text).unwrap();
        assert_eq!(content, RiddleContent::new("What has candles?", "Cake"));
    }

    #[test]
    fn riddle_parse_errors() {
        assert!(matches!(parse_riddle("```json\n```"), Err(MuseError::Empty)));
        assert!(matches!(parse_riddle("not json"), Err(MuseError::Malformed(_))));
        assert!(matches!(
            parse_riddle("{\"riddle\": \" \", \"hint\": \"x\"}"),
            Err(MuseError::Empty)
        ));
    }

    #[test]
    fn status_mapping() {
        assert!(status_error(StatusCode::OK).is_none());
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED),
            Some(MuseError::Unauthorized)
        ));
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN),
            Some(MuseError::Unauthorized)
        ));
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS),
            Some(MuseError::RateLimited)
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY),
            Some(MuseError::Status { code: 502, .. })
        ));
    }

    #[test]
    fn response_text_joins_parts() {
        let body: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Happy " }, { "text": "birthday!" }] }
            }]
        }))
        .unwrap();
        assert_eq!(body.text().unwrap(), "Happy birthday!");
    }

    #[test]
    fn response_without_text_is_empty() {
        let body: GenerateResponse = serde_json::from_value(json!({ "candidates": [] })).unwrap();
        assert!(matches!(body.text(), Err(MuseError::Empty)));
        let body: GenerateResponse =
            serde_json::from_value(json!({ "candidates": [{ "content": { "parts": [] } }] }))
                .unwrap();
        assert!(matches!(body.text(), Err(MuseError::Empty)));
    }

    #[test]
    fn request_body_shape() {
        let request = GenerateRequest::text("hi").with_config(GenerationConfig {
            response_mime_type: "application/json",
            response_schema: riddle_schema(),
        });
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            value["generationConfig"]["responseSchema"]["required"],
            json!(["riddle", "hint"])
        );

        let plain = serde_json::to_value(GenerateRequest::text("hi")).unwrap();
        assert!(plain.get("generationConfig").is_none());
    }

    #[test]
    fn builder_trims_base_url() {
        let muse = GeminiMuse::new("key")
            .unwrap()
            .with_base_url("http://localhost:1234/")
            .with_model("gemini-test");
        assert_eq!(muse.model(), "gemini-test");
        assert_eq!(
            muse.endpoint(),
            "http://localhost:1234/v1beta/models/gemini-test:generateContent"
        );
    }

    #[tokio::test]
    async fn blank_key_never_hits_the_network() {
        let muse = GeminiMuse::new("  ")
            .unwrap()
            .with_base_url("http://127.0.0.1:9");
        assert!(matches!(muse.closing_wish().await, Err(MuseError::MissingKey)));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        let muse = GeminiMuse::new("key")
            .unwrap()
            .with_base_url("http://127.0.0.1:9");
        assert!(matches!(
            muse.reaction(&["\u{1F451}".into()]).await,
            Err(MuseError::Transport(_))
        ));
    }
}
