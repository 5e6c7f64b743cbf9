use super::events::AppEvent;
use tauri::{AppHandle, Emitter};

/// Emit an application event to all windows.
///
/// Tauri's emit takes a string event name; each variant maps to a namespaced
/// name the frontend listens on.
pub fn emit_event(app: &AppHandle, event: AppEvent) {
    match &event {
        AppEvent::TranslationStateChanged(phase) => {
            if let Err(e) = app.emit("translation://state", phase) {
                log::warn!("Failed to emit translation state: {}", e);
            }
        }
        AppEvent::SettingsUpdated(settings) => {
            if let Err(e) = app.emit("settings://update", settings) {
                log::warn!("Failed to emit settings update: {}", e);
            }
        }
    }
}
