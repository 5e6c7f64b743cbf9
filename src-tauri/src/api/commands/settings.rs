//! Settings command module
//!
//! Handles application settings persistence.

use crate::shared::error::AppResult;
use crate::shared::settings::AppSettings;
use crate::shared::types::LogRequest;

#[tauri::command]
pub async fn get_settings() -> AppResult<AppSettings> {
    AppSettings::load().await
}

#[tauri::command]
pub async fn save_settings(app: tauri::AppHandle, settings: AppSettings) -> AppResult<()> {
    settings.save(&app).await
}

/// Route frontend log lines into the shared log sink.
#[tauri::command]
pub async fn log_message(request: LogRequest) -> AppResult<()> {
    match request.level.as_str() {
        "error" => log::error!("[ui] {}", request.message),
        "warn" => log::warn!("[ui] {}", request.message),
        "debug" => log::debug!("[ui] {}", request.message),
        _ => log::info!("[ui] {}", request.message),
    }
    Ok(())
}
