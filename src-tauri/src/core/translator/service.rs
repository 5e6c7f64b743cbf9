//! HTTP client for the translation backend.
//!
//! Speaks the unofficial Google Translate endpoint (the `gtx` client used by
//! the free web widget, no API key required). The wire format is a nested
//! JSON array: sentence segments under index 0, the detected source language
//! at index 2.

use crate::shared::error::{AppError, AppResult};
use reqwest::{Client, StatusCode};
use std::time::Duration;

const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug)]
pub struct TranslationOutcome {
    pub translated: String,
    pub detected: Option<String>,
}

pub struct TranslationService {
    http: Client,
    endpoint: String,
}

impl TranslationService {
    pub fn new(http: Client) -> Self {
        Self {
            http,
            endpoint: ENDPOINT.to_string(),
        }
    }

    fn request_url(&self, text: &str, source: Option<&str>, target: &str) -> String {
        format!(
            "{}?client=gtx&sl={}&tl={}&dt=t&q={}",
            self.endpoint,
            source.unwrap_or("auto"),
            target,
            urlencoding::encode(text)
        )
    }

    /// One outbound call: (text, source_or_auto, target) → outcome.
    pub async fn translate(
        &self,
        text: &str,
        source: Option<&str>,
        target: &str,
    ) -> AppResult<TranslationOutcome> {
        log::debug!(
            "Dispatching translation request: {} chars, {} -> {}",
            text.chars().count(),
            source.unwrap_or("auto"),
            target
        );

        let url = self.request_url(text, source, target);
        let response = self.http.get(&url).timeout(REQUEST_TIMEOUT).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(classify_status(status));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::Service(format!("Malformed response: {}", e)))?;
        parse_payload(&payload)
    }

    /// Ask the backend which language `text` is written in.
    pub async fn detect(&self, text: &str) -> AppResult<Option<String>> {
        let outcome = self.translate(text, None, "en").await?;
        Ok(outcome.detected)
    }
}

fn classify_status(status: StatusCode) -> AppError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => AppError::Service(
            "Rate limit exceeded: please wait a moment and try again".to_string(),
        ),
        StatusCode::FORBIDDEN => {
            AppError::Service("Translation service access denied".to_string())
        }
        StatusCode::SERVICE_UNAVAILABLE => {
            AppError::Service("Translation service temporarily unavailable".to_string())
        }
        _ => AppError::Service(format!("Backend returned HTTP {}", status)),
    }
}

/// Extract translated text and detected source from the gtx payload shape
/// `[[["<segment>", "<original>", ...], ...], null, "<detected>", ...]`.
pub(crate) fn parse_payload(payload: &serde_json::Value) -> AppResult<TranslationOutcome> {
    let sentences = payload
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| AppError::Service("Unexpected response format".to_string()))?;

    let mut translated = String::new();
    for sentence in sentences {
        if let Some(segment) = sentence.get(0).and_then(|v| v.as_str()) {
            translated.push_str(segment);
        }
    }
    if translated.is_empty() {
        return Err(AppError::Service(
            "Backend returned no translation".to_string(),
        ));
    }

    let detected = payload
        .get(2)
        .and_then(|v| v.as_str())
        .map(|code| code.to_ascii_lowercase());

    Ok(TranslationOutcome {
        translated,
        detected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_a_single_segment_verbatim() {
        let payload = json!([[["Hola mundo", "Hello world", null, null, 10]], null, "en"]);
        let outcome = parse_payload(&payload).unwrap();
        assert_eq!(outcome.translated, "Hola mundo");
        assert_eq!(outcome.detected.as_deref(), Some("en"));
    }

    #[test]
    fn concatenates_sentence_segments_in_order() {
        let payload = json!([
            [
                ["Bonjour. ", "Hello. ", null],
                ["Comment allez-vous ?", "How are you?", null]
            ],
            null,
            "en"
        ]);
        let outcome = parse_payload(&payload).unwrap();
        assert_eq!(outcome.translated, "Bonjour. Comment allez-vous ?");
    }

    #[test]
    fn detected_language_is_lowercased() {
        let payload = json!([[["hola", "hello", null]], null, "EN"]);
        let outcome = parse_payload(&payload).unwrap();
        assert_eq!(outcome.detected.as_deref(), Some("en"));
    }

    #[test]
    fn missing_sentence_array_is_a_service_error() {
        let err = parse_payload(&json!({"error": "nope"})).unwrap_err();
        assert!(matches!(err, AppError::Service(_)));
    }

    #[test]
    fn empty_translation_is_a_service_error() {
        let err = parse_payload(&json!([[], null, "en"])).unwrap_err();
        assert!(matches!(err, AppError::Service(_)));
    }

    #[test]
    fn payload_without_detection_still_parses() {
        let outcome = parse_payload(&json!([[["hola", "hello", null]]])).unwrap();
        assert_eq!(outcome.translated, "hola");
        assert!(outcome.detected.is_none());
    }

    #[test]
    fn request_url_encodes_the_query() {
        let service = TranslationService::new(Client::new());
        let url = service.request_url("good morning & hello", None, "es");
        assert!(url.starts_with(ENDPOINT));
        assert!(url.contains("client=gtx"));
        assert!(url.contains("sl=auto"));
        assert!(url.contains("tl=es"));
        assert!(url.contains("q=good%20morning%20%26%20hello"));
    }

    #[test]
    fn request_url_carries_an_explicit_source() {
        let service = TranslationService::new(Client::new());
        let url = service.request_url("hi", Some("en"), "fr");
        assert!(url.contains("sl=en"));
        assert!(url.contains("tl=fr"));
    }
}
