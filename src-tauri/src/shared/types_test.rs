//! Test to trigger ts-rs bindings export
//! Run with: cargo test export_bindings

use crate::shared::types::*;
use ts_rs::TS;

#[test]
fn export_bindings() {
    // The bindings are written to ui/types/bindings.ts
    TranslateRequest::export().expect("Failed to export TranslateRequest");
    TranslateResponse::export().expect("Failed to export TranslateResponse");
    LanguageEntry::export().expect("Failed to export LanguageEntry");
    TranslationPhase::export().expect("Failed to export TranslationPhase");
    DetectLanguageResponse::export().expect("Failed to export DetectLanguageResponse");
    TextAnalysisResponse::export().expect("Failed to export TextAnalysisResponse");
    ExportTranslationRequest::export().expect("Failed to export ExportTranslationRequest");
}
