//! Translation command module
//!
//! The request flow lives in `core::translator`; this layer wires it to IPC
//! and reports state transitions so the frontend can disable the translate
//! action while a request is in flight.

use crate::core::translator::Translator;
use crate::core::{languages, text_stats};
use crate::shared::emit::emit_event;
use crate::shared::error::{AppError, AppResult};
use crate::shared::events::AppEvent;
use crate::shared::types::{
    DetectLanguageResponse, LanguageEntry, TextAnalysisRequest, TextAnalysisResponse,
    TranslateRequest, TranslateResponse, TranslationPhase,
};
use tauri::{AppHandle, State};

#[tauri::command]
pub async fn translate_text(
    app: AppHandle,
    translator: State<'_, Translator>,
    request: TranslateRequest,
) -> AppResult<TranslateResponse> {
    // Overlapping requests are rejected, not queued; the guard inside the
    // flow catches the race this early check can miss.
    if translator.is_busy() {
        return Err(AppError::Validation(
            "A translation is already in progress".to_string(),
        ));
    }

    log::info!(
        "Translate request: {} chars, {} -> {}",
        request.text.chars().count(),
        request.source_lang.as_deref().unwrap_or(languages::AUTO_CODE),
        request.target_lang
    );

    emit_event(
        &app,
        AppEvent::TranslationStateChanged(TranslationPhase::Requesting),
    );
    let result = translator.translate(request).await;
    let phase = match &result {
        Ok(_) => TranslationPhase::Success,
        Err(e) => {
            log::warn!("Translation failed: {}", e);
            TranslationPhase::Failed
        }
    };
    emit_event(&app, AppEvent::TranslationStateChanged(phase));
    emit_event(
        &app,
        AppEvent::TranslationStateChanged(TranslationPhase::Idle),
    );
    result
}

#[tauri::command]
pub async fn detect_language(
    translator: State<'_, Translator>,
    text: String,
) -> AppResult<DetectLanguageResponse> {
    translator.detect(&text).await
}

#[tauri::command]
pub fn get_languages() -> Vec<LanguageEntry> {
    languages::LANGUAGES
        .iter()
        .map(|&(name, code)| LanguageEntry {
            name: name.to_string(),
            code: code.to_string(),
        })
        .collect()
}

#[tauri::command]
pub async fn check_service_availability(translator: State<'_, Translator>) -> AppResult<bool> {
    Ok(translator.service_available().await)
}

#[tauri::command]
pub fn analyze_text(request: TextAnalysisRequest) -> TextAnalysisResponse {
    text_stats::analyze(&request.text)
}
