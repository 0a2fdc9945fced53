//! Client for the legal-opinion generation webhook.
//!
//! This is the app's single real network call: an unauthenticated POST to a
//! fixed endpoint. There is deliberately no timeout, retry, or cancellation;
//! a request in flight runs to completion and failures only surface as a
//! toast on the triggering screen.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_WEBHOOK_URL: &str = "https://hooks.nimbus.app/webhook/generate-parecer";

/// Wire format expected by the webhook. Field names are part of the
/// endpoint's contract and stay in its original language.
#[derive(Debug, Serialize)]
pub struct OpinionRequest<'a> {
    pub titulo: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<&'a str>,
    pub instrucoes: &'a str,
}

#[derive(Deserialize)]
struct OpinionBody {
    parecer: Option<String>,
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("webhook error {status}: {body}")]
    Endpoint { status: u16, body: String },
}

impl WebhookError {
    /// Best-effort text for the user-facing toast.
    pub fn user_message(&self) -> String {
        match self {
            WebhookError::Transport(_) => {
                "Could not reach the opinion service. Check your connection and try again."
                    .to_string()
            }
            WebhookError::Endpoint { body, .. } => extract_error_message(body)
                .unwrap_or_else(|| "The opinion service returned an error.".to_string()),
        }
    }
}

pub fn webhook_url() -> String {
    std::env::var("OPINION_WEBHOOK_URL").unwrap_or_else(|_| DEFAULT_WEBHOOK_URL.to_string())
}

/// Pull the generated text out of a successful response body. The endpoint
/// answers with `parecer` on the current deployment and `content` on older
/// ones; anything else falls through to the raw body.
pub fn parse_opinion_body(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<OpinionBody>(body) {
        if let Some(parecer) = parsed.parecer {
            return parecer;
        }
        if let Some(content) = parsed.content {
            return content;
        }
    }
    body.trim().to_string()
}

pub fn extract_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ErrorBody>(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .filter(|msg| !msg.trim().is_empty())
}

pub async fn generate_opinion(
    titulo: &str,
    categoria: Option<&str>,
    instrucoes: &str,
) -> Result<String, WebhookError> {
    let response = Client::new()
        .post(webhook_url())
        .json(&OpinionRequest {
            titulo,
            categoria,
            instrucoes,
        })
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        Ok(parse_opinion_body(&body))
    } else {
        Err(WebhookError::Endpoint {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_parecer_field() {
        let body = r#"{"parecer":"Opinion text","content":"ignored"}"#;
        assert_eq!(parse_opinion_body(body), "Opinion text");
    }

    #[test]
    fn falls_back_to_content_field() {
        assert_eq!(parse_opinion_body(r#"{"content":"Alt text"}"#), "Alt text");
    }

    #[test]
    fn falls_back_to_raw_body() {
        assert_eq!(parse_opinion_body("  plain text  "), "plain text");
        assert_eq!(parse_opinion_body(r#"{"other":1}"#), r#"{"other":1}"#);
    }

    #[test]
    fn extracts_error_messages() {
        assert_eq!(
            extract_error_message(r#"{"message":"quota exceeded"}"#),
            Some("quota exceeded".to_string())
        );
        assert_eq!(
            extract_error_message(r#"{"error":"bad request"}"#),
            Some("bad request".to_string())
        );
        assert_eq!(extract_error_message(r#"{"message":"  "}"#), None);
        assert_eq!(extract_error_message("not json"), None);
    }

    #[test]
    fn request_serializes_contract_fields() {
        let request = OpinionRequest {
            titulo: "Title",
            categoria: None,
            instrucoes: "Do it",
        };
        let raw = serde_json::to_string(&request).unwrap();
        assert!(raw.contains(r#""titulo":"Title""#));
        assert!(raw.contains(r#""instrucoes":"Do it""#));
        assert!(!raw.contains("categoria"));
    }
}
