//! Translation request flow
//!
//! Validates input, pre-flights reachability, then dispatches a single
//! backend call on the async runtime so the webview thread never blocks.
//! Only one request may be in flight at a time; a request arriving while the
//! guard is held is rejected rather than queued.

pub mod service;

use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::connectivity::NetworkProbe;
use crate::core::languages;
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{DetectLanguageResponse, TranslateRequest, TranslateResponse};
use service::TranslationService;

/// Character limit the backend enforces per request.
pub const MAX_INPUT_CHARS: usize = 5000;

pub struct Translator {
    service: TranslationService,
    probe: NetworkProbe,
    in_flight: AtomicBool,
}

/// Releases the in-flight flag on every exit path.
#[derive(Debug)]
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

impl Translator {
    pub fn new() -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent("phrase-bridge/translator")
            .build()
            .map_err(|e| AppError::Network(e.to_string()))?;
        Ok(Self {
            service: TranslationService::new(http.clone()),
            probe: NetworkProbe::new(http),
            in_flight: AtomicBool::new(false),
        })
    }

    #[cfg(test)]
    fn with_parts(service: TranslationService, probe: NetworkProbe) -> Self {
        Self {
            service,
            probe,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Input constraints, checked before any side effect.
    pub fn validate(request: &TranslateRequest) -> AppResult<()> {
        if request.text.trim().is_empty() {
            return Err(AppError::Validation(
                "Please enter text to translate".to_string(),
            ));
        }
        let chars = request.text.chars().count();
        if chars > MAX_INPUT_CHARS {
            return Err(AppError::Validation(format!(
                "Text too long: {} characters (maximum {})",
                chars, MAX_INPUT_CHARS
            )));
        }
        if !languages::is_valid_target(&request.target_lang) {
            return Err(AppError::Validation(format!(
                "Unsupported target language: {}",
                request.target_lang
            )));
        }
        if let Some(source) = explicit_source(request) {
            if !languages::is_known_code(source) {
                return Err(AppError::Validation(format!(
                    "Unsupported source language: {}",
                    source
                )));
            }
        }
        Ok(())
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    fn begin(&self) -> AppResult<InFlightGuard<'_>> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(AppError::Validation(
                "A translation is already in progress".to_string(),
            ));
        }
        Ok(InFlightGuard {
            flag: &self.in_flight,
        })
    }

    pub async fn translate(&self, request: TranslateRequest) -> AppResult<TranslateResponse> {
        Self::validate(&request)?;
        let _guard = self.begin()?;

        // Same pair: nothing to ask the backend.
        if let Some(source) = explicit_source(&request) {
            if source == request.target_lang {
                return Ok(TranslateResponse {
                    translated: request.text.clone(),
                    detected_source_lang: None,
                    detected_source_name: None,
                });
            }
        }

        self.ensure_online().await?;

        let source = explicit_source(&request);
        let outcome = self
            .service
            .translate(&request.text, source, &request.target_lang)
            .await?;

        // Detection is only meaningful when the caller asked for it.
        let detected = if source.is_none() {
            outcome.detected
        } else {
            None
        };
        Ok(TranslateResponse {
            translated: outcome.translated,
            detected_source_name: detected.as_deref().map(languages::display_name),
            detected_source_lang: detected,
        })
    }

    pub async fn detect(&self, text: &str) -> AppResult<DetectLanguageResponse> {
        if text.trim().is_empty() {
            return Err(AppError::Validation(
                "No text provided for language detection".to_string(),
            ));
        }
        if text.chars().count() > MAX_INPUT_CHARS {
            return Err(AppError::Validation(format!(
                "Text too long (maximum {} characters)",
                MAX_INPUT_CHARS
            )));
        }
        let _guard = self.begin()?;
        self.ensure_online().await?;

        let code = self
            .service
            .detect(text)
            .await?
            .ok_or_else(|| AppError::Service("Backend reported no language".to_string()))?;
        Ok(DetectLanguageResponse {
            name: languages::display_name(&code),
            code,
        })
    }

    pub async fn service_available(&self) -> bool {
        self.probe.is_online().await
    }

    async fn ensure_online(&self) -> AppResult<()> {
        if self.probe.is_online().await {
            Ok(())
        } else {
            Err(AppError::Network(
                "Translation service is unreachable. Check your internet connection".to_string(),
            ))
        }
    }
}

fn explicit_source(request: &TranslateRequest) -> Option<&str> {
    request
        .source_lang
        .as_deref()
        .filter(|code| *code != languages::AUTO_CODE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str, source: Option<&str>, target: &str) -> TranslateRequest {
        TranslateRequest {
            text: text.to_string(),
            source_lang: source.map(|s| s.to_string()),
            target_lang: target.to_string(),
        }
    }

    fn offline_translator() -> Translator {
        Translator::with_parts(
            TranslationService::new(reqwest::Client::new()),
            NetworkProbe::fixed(false),
        )
    }

    #[test]
    fn rejects_empty_text() {
        let err = Translator::validate(&request("", None, "es")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn rejects_whitespace_only_text() {
        let err = Translator::validate(&request("   \n\t ", None, "es")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn rejects_overlong_text() {
        let text = "x".repeat(MAX_INPUT_CHARS + 1);
        let err = Translator::validate(&request(&text, None, "es")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn accepts_text_at_the_limit() {
        let text = "x".repeat(MAX_INPUT_CHARS);
        assert!(Translator::validate(&request(&text, None, "es")).is_ok());
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        // Multibyte scalars: MAX chars but far more bytes must still pass
        let text = "ü".repeat(MAX_INPUT_CHARS);
        assert!(text.len() > MAX_INPUT_CHARS);
        assert!(Translator::validate(&request(&text, None, "es")).is_ok());
    }

    #[test]
    fn rejects_unknown_target() {
        let err = Translator::validate(&request("hello", None, "xx")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn rejects_auto_as_target() {
        let err = Translator::validate(&request("hello", None, "auto")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn rejects_unknown_explicit_source() {
        let err = Translator::validate(&request("hello", Some("xx"), "es")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn auto_source_is_accepted() {
        assert!(Translator::validate(&request("hello", Some("auto"), "es")).is_ok());
        assert!(Translator::validate(&request("hello", None, "es")).is_ok());
    }

    #[tokio::test]
    async fn overlong_text_is_rejected_before_any_network_call() {
        // The probe is pinned offline; a Validation error (not Network)
        // proves rejection happened before dispatch.
        let translator = offline_translator();
        let text = "x".repeat(MAX_INPUT_CHARS + 1);
        let err = translator
            .translate(request(&text, None, "es"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn offline_probe_surfaces_network_error() {
        let translator = offline_translator();
        let err = translator
            .translate(request("hello", None, "es"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Network(_)));
    }

    #[tokio::test]
    async fn same_language_pair_short_circuits() {
        // Offline probe: a successful result proves no network was needed.
        let translator = offline_translator();
        let response = translator
            .translate(request("hello", Some("en"), "en"))
            .await
            .unwrap();
        assert_eq!(response.translated, "hello");
        assert!(response.detected_source_lang.is_none());
    }

    #[tokio::test]
    async fn guard_rejects_a_second_request_in_flight() {
        let translator = offline_translator();
        let first = translator.begin().unwrap();
        assert!(translator.is_busy());
        let err = translator.begin().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        drop(first);
        assert!(!translator.is_busy());
        assert!(translator.begin().is_ok());
    }

    #[tokio::test]
    async fn guard_is_released_after_a_failed_request() {
        let translator = offline_translator();
        let _ = translator
            .translate(request("hello", None, "es"))
            .await
            .unwrap_err();
        assert!(!translator.is_busy());
    }
}
