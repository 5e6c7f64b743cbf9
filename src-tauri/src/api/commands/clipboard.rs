//! Clipboard and export commands.

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::ExportTranslationRequest;
use tauri::AppHandle;
use tauri_plugin_clipboard_manager::ClipboardExt;

#[tauri::command]
pub fn read_clipboard(app: AppHandle) -> AppResult<String> {
    app.clipboard()
        .read_text()
        .map_err(|e| AppError::Clipboard(format!("Failed to paste from clipboard: {}", e)))
}

#[tauri::command]
pub fn copy_translation(app: AppHandle, text: String) -> AppResult<()> {
    if text.is_empty() {
        return Err(AppError::Validation("No translation to copy".to_string()));
    }
    app.clipboard()
        .write_text(text)
        .map_err(|e| AppError::Clipboard(format!("Failed to copy to clipboard: {}", e)))
}

/// Write the language pair, source text and translation to a text file at a
/// path the user already picked in the save dialog.
#[tauri::command]
pub async fn export_translation(request: ExportTranslationRequest) -> AppResult<String> {
    if request.translated_text.trim().is_empty() {
        return Err(AppError::Validation("No translation to save".to_string()));
    }

    let content = render_export(&request, chrono::Utc::now());
    tokio::fs::write(&request.path, content)
        .await
        .map_err(|e| AppError::Io(format!("Failed to save translation: {}", e)))?;

    log::info!("Translation exported to {}", request.path);
    Ok(request.path)
}

fn render_export(
    request: &ExportTranslationRequest,
    exported_at: chrono::DateTime<chrono::Utc>,
) -> String {
    format!(
        "Phrase Bridge Translation\n\
         ==============================\n\
         Exported: {}\n\n\
         Source Language: {}\n\
         Target Language: {}\n\n\
         Original Text:\n{}\n\n\
         Translation:\n{}\n",
        exported_at.format("%Y-%m-%d %H:%M UTC"),
        request.source_lang,
        request.target_lang,
        request.source_text,
        request.translated_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn export_contains_pair_and_both_texts() {
        let request = ExportTranslationRequest {
            path: "/tmp/out.txt".to_string(),
            source_lang: "English".to_string(),
            target_lang: "Spanish".to_string(),
            source_text: "good morning".to_string(),
            translated_text: "buenos días".to_string(),
        };
        let stamp = chrono::Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        let content = render_export(&request, stamp);
        assert!(content.starts_with("Phrase Bridge Translation"));
        assert!(content.contains("Exported: 2026-08-06 12:00 UTC"));
        assert!(content.contains("Source Language: English"));
        assert!(content.contains("Target Language: Spanish"));
        assert!(content.contains("good morning"));
        assert!(content.contains("buenos días"));
    }
}
