use crate::shared::emit::emit_event;
use crate::shared::error::{AppError, AppResult};
use crate::shared::events::AppEvent;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tauri::AppHandle;
use tokio::fs;
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../ui/types/settings.ts")]
pub struct AppSettings {
    pub preferences: UserPreferences,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../ui/types/settings.ts")]
pub struct UserPreferences {
    /// Language code, `"auto"` for auto-detect.
    pub default_source_lang: String,
    pub default_target_lang: String,
    pub theme: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            preferences: UserPreferences {
                default_source_lang: "auto".to_string(),
                default_target_lang: "en".to_string(),
                theme: "system".to_string(),
            },
        }
    }
}

impl AppSettings {
    pub fn settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "phrasebridge", "phrase-bridge")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Io("Failed to determine config directory".to_string()))
    }

    pub async fn load() -> AppResult<Self> {
        let path = Self::settings_path()?;

        if !path.exists() {
            let settings = Self::default();
            settings.save_to_disk().await?;
            return Ok(settings);
        }

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| AppError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| AppError::Io(format!("Failed to parse settings: {}", e)))
    }

    /// Internal helper to save to disk without emission
    async fn save_to_disk(&self) -> AppResult<()> {
        let path = Self::settings_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::Io(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Io(format!("Failed to serialize settings: {}", e)))?;

        fs::write(&path, content)
            .await
            .map_err(|e| AppError::Io(format!("Failed to write settings file: {}", e)))
    }

    /// Save settings to disk and notify every window.
    pub async fn save(&self, app: &AppHandle) -> AppResult<()> {
        self.save_to_disk().await?;
        emit_event(app, AppEvent::SettingsUpdated(self.clone()));
        Ok(())
    }
}
