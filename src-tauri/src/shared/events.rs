use crate::shared::settings::AppSettings;
use crate::shared::types::TranslationPhase;
use serde::Serialize;

/// Application events pushed to the webview.
///
/// The enum encapsulates both the event name (see `emit.rs`) and the payload.
#[derive(Debug, Clone, Serialize)]
pub enum AppEvent {
    TranslationStateChanged(TranslationPhase),
    SettingsUpdated(AppSettings),
}
