//! Tauri command surface, split by area.

pub mod clipboard;
pub mod settings;
pub mod translation;
