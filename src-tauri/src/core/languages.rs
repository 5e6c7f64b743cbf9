//! Language table
//!
//! Immutable mapping between display names and the codes the translation
//! backend accepts. Built once at startup, never mutated.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Pseudo-code asking the backend to infer the source language.
pub const AUTO_CODE: &str = "auto";

/// Display name → language code. Mostly ISO 639-1; the Chinese variants keep
/// the regional suffix the backend expects.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("Auto Detect", "auto"),
    ("English", "en"),
    ("Spanish", "es"),
    ("French", "fr"),
    ("German", "de"),
    ("Italian", "it"),
    ("Portuguese", "pt"),
    ("Russian", "ru"),
    ("Chinese (Simplified)", "zh-cn"),
    ("Chinese (Traditional)", "zh-tw"),
    ("Japanese", "ja"),
    ("Korean", "ko"),
    ("Arabic", "ar"),
    ("Hindi", "hi"),
    ("Dutch", "nl"),
    ("Polish", "pl"),
    ("Turkish", "tr"),
    ("Swedish", "sv"),
    ("Norwegian", "no"),
    ("Danish", "da"),
    ("Finnish", "fi"),
    ("Greek", "el"),
    ("Hebrew", "he"),
    ("Thai", "th"),
    ("Vietnamese", "vi"),
    ("Indonesian", "id"),
    ("Malay", "ms"),
    ("Czech", "cs"),
    ("Hungarian", "hu"),
    ("Romanian", "ro"),
    ("Bulgarian", "bg"),
    ("Croatian", "hr"),
    ("Slovak", "sk"),
    ("Slovenian", "sl"),
    ("Estonian", "et"),
    ("Latvian", "lv"),
    ("Lithuanian", "lt"),
    ("Ukrainian", "uk"),
    ("Bengali", "bn"),
    ("Tamil", "ta"),
    ("Telugu", "te"),
    ("Gujarati", "gu"),
    ("Marathi", "mr"),
    ("Punjabi", "pa"),
    ("Urdu", "ur"),
    ("Persian", "fa"),
    ("Swahili", "sw"),
    ("Afrikaans", "af"),
    ("Albanian", "sq"),
    ("Armenian", "hy"),
    ("Azerbaijani", "az"),
    ("Basque", "eu"),
    ("Belarusian", "be"),
    ("Bosnian", "bs"),
    ("Catalan", "ca"),
    ("Filipino", "tl"),
    ("Galician", "gl"),
    ("Georgian", "ka"),
    ("Icelandic", "is"),
    ("Irish", "ga"),
    ("Kazakh", "kk"),
    ("Kurdish", "ku"),
    ("Kyrgyz", "ky"),
    ("Latin", "la"),
    ("Luxembourgish", "lb"),
    ("Macedonian", "mk"),
    ("Maltese", "mt"),
    ("Mongolian", "mn"),
    ("Nepali", "ne"),
    ("Pashto", "ps"),
    ("Serbian", "sr"),
    ("Sinhala", "si"),
    ("Tajik", "tg"),
    ("Uzbek", "uz"),
    ("Welsh", "cy"),
    ("Yiddish", "yi"),
];

fn code_index() -> &'static HashMap<&'static str, &'static str> {
    static INDEX: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    INDEX.get_or_init(|| LANGUAGES.iter().copied().collect())
}

fn name_index() -> &'static HashMap<&'static str, &'static str> {
    static INDEX: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    INDEX.get_or_init(|| LANGUAGES.iter().map(|&(name, code)| (code, name)).collect())
}

pub fn code_for_name(name: &str) -> Option<&'static str> {
    code_index().get(name).copied()
}

pub fn name_for_code(code: &str) -> Option<&'static str> {
    name_index().get(code).copied()
}

/// Valid translation targets are every table entry except the auto pseudo
/// entry.
pub fn is_valid_target(code: &str) -> bool {
    code != AUTO_CODE && name_index().contains_key(code)
}

pub fn is_known_code(code: &str) -> bool {
    name_index().contains_key(code)
}

/// Sorted display names for the language selectors.
pub fn language_names(include_auto: bool) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = LANGUAGES
        .iter()
        .filter(|&&(_, code)| include_auto || code != AUTO_CODE)
        .map(|&(name, _)| name)
        .collect();
    names.sort_unstable();
    names
}

pub fn entry_count() -> usize {
    LANGUAGES.len()
}

/// Display name for a detected code. Codes outside the table fall back to
/// the isolang English name, then to the bare code.
pub fn display_name(code: &str) -> String {
    if let Some(name) = name_for_code(code) {
        return name.to_string();
    }
    isolang::Language::from_639_1(code)
        .map(|lang| lang.to_name().to_string())
        .unwrap_or_else(|| code.to_string())
}
