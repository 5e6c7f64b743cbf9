pub mod api;
pub mod core;
pub mod shared;

use crate::core::translator::Translator;
use tauri::Manager;
use tauri_plugin_log::{Target, TargetKind};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .targets([
                    Target::new(TargetKind::Stdout),
                    Target::new(TargetKind::LogDir {
                        file_name: Some("phrase-bridge".to_string()),
                    }),
                ])
                .level(if cfg!(debug_assertions) {
                    log::LevelFilter::Debug
                } else {
                    log::LevelFilter::Info
                })
                .build(),
        )
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_clipboard_manager::init())
        .setup(|app| {
            // Ensure the settings file exists before the frontend asks for it
            let settings = tauri::async_runtime::block_on(shared::settings::AppSettings::load())
                .unwrap_or_else(|e| {
                    log::warn!("Failed to load settings, using defaults: {}", e);
                    shared::settings::AppSettings::default()
                });
            log::info!(
                "Settings loaded: default pair {} -> {}",
                settings.preferences.default_source_lang,
                settings.preferences.default_target_lang
            );

            let translator = Translator::new()?;
            app.manage(translator);

            log::info!(
                "Phrase Bridge initialized with {} languages",
                core::languages::entry_count()
            );
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            api::commands::translation::translate_text,
            api::commands::translation::detect_language,
            api::commands::translation::get_languages,
            api::commands::translation::check_service_availability,
            api::commands::translation::analyze_text,
            api::commands::clipboard::read_clipboard,
            api::commands::clipboard::copy_translation,
            api::commands::clipboard::export_translation,
            api::commands::settings::get_settings,
            api::commands::settings::save_settings,
            api::commands::settings::log_message,
        ])
        .run(tauri::generate_context!())
        .unwrap_or_else(|e| {
            eprintln!("FATAL: Failed to start Phrase Bridge: {}", e);
            std::process::exit(1);
        });
}
