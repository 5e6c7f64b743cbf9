use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../ui/types/bindings.ts")]
pub struct TranslateRequest {
    pub text: String,
    /// `None` or `"auto"` means auto-detect.
    pub source_lang: Option<String>,
    pub target_lang: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../ui/types/bindings.ts")]
pub struct TranslateResponse {
    pub translated: String,
    /// Set only when the source language was auto-detected.
    pub detected_source_lang: Option<String>,
    pub detected_source_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../ui/types/bindings.ts")]
pub struct LanguageEntry {
    pub name: String,
    pub code: String,
}

/// Request lifecycle reported on the `translation://state` event channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../ui/types/bindings.ts")]
pub enum TranslationPhase {
    Idle,
    Requesting,
    Success,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../ui/types/bindings.ts")]
pub struct DetectLanguageResponse {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../ui/types/bindings.ts")]
pub struct TextAnalysisRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../ui/types/bindings.ts")]
pub struct TextAnalysisResponse {
    pub word_count: usize,
    pub char_count: usize,
    pub char_count_no_spaces: usize,
    pub grapheme_count: usize,
    pub line_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../ui/types/bindings.ts")]
pub struct ExportTranslationRequest {
    pub path: String,
    pub source_lang: String,
    pub target_lang: String,
    pub source_text: String,
    pub translated_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../ui/types/bindings.ts")]
pub struct LogRequest {
    pub level: String,
    pub message: String,
}
