//! Core data models for translation

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, TranslationError};

/// Source language token that asks the backend to detect the language
pub const AUTO_DETECT: &str = "auto";

/// Display name and code of every language offered by the front end
pub const LANGUAGES: &[(&str, &str)] = &[
    ("Auto Detect", AUTO_DETECT),
    ("English", "en"),
    ("Turkish", "tr"),
    ("Spanish", "es"),
    ("French", "fr"),
    ("German", "de"),
    ("Italian", "it"),
    ("Portuguese", "pt"),
    ("Russian", "ru"),
    ("Arabic", "ar"),
    ("Chinese (Simplified)", "zh"),
    ("Japanese", "ja"),
    ("Korean", "ko"),
];

/// Map a display name or code to its language code.
///
/// Matching is case-insensitive. Anything not in [`LANGUAGES`] is returned
/// trimmed but otherwise unchanged, so backends with wider coverage still work.
pub fn resolve_language(input: &str) -> String {
    let input = input.trim();
    LANGUAGES
        .iter()
        .find(|(name, code)| name.eq_ignore_ascii_case(input) || code.eq_ignore_ascii_case(input))
        .map(|(_, code)| code.to_string())
        .unwrap_or_else(|| input.to_string())
}

/// Display name for a code, if it is one of [`LANGUAGES`]
pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(_, c)| c.eq_ignore_ascii_case(code))
        .map(|(name, _)| *name)
}

/// Translation request, serialized as the outbound JSON body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate, already trimmed
    #[serde(rename = "q")]
    pub text: String,
    /// Source language code, or `auto`
    #[serde(rename = "source")]
    pub source_lang: String,
    /// Target language code
    #[serde(rename = "target")]
    pub target_lang: String,
    /// Always `text`
    pub format: String,
}

impl TranslationRequest {
    /// Build a request with auto-detected source language.
    ///
    /// Fails with [`TranslationError::EmptyInput`] when `text` is blank.
    pub fn new(text: impl AsRef<str>, target_lang: impl Into<String>) -> Result<Self> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return Err(TranslationError::EmptyInput);
        }

        Ok(Self {
            text: text.to_string(),
            source_lang: AUTO_DETECT.to_string(),
            target_lang: target_lang.into(),
            format: "text".to_string(),
        })
    }

    /// Set the source language
    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = source_lang.into();
        self
    }

    /// Whether the backend is asked to detect the source language
    pub fn is_auto_detect(&self) -> bool {
        self.source_lang == AUTO_DETECT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let request = TranslationRequest::new("  Hello world \n", "fr")
            .unwrap()
            .with_source_lang("en");

        assert_json_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"q": "Hello world", "source": "en", "target": "fr", "format": "text"})
        );
    }

    #[test]
    fn test_default_source_is_auto() {
        let request = TranslationRequest::new("Merhaba", "en").unwrap();

        assert!(request.is_auto_detect());
        assert_eq!(serde_json::to_value(&request).unwrap()["source"], "auto");
    }

    #[test]
    fn test_blank_text_rejected() {
        assert!(matches!(TranslationRequest::new("", "en"), Err(TranslationError::EmptyInput)));
        assert!(matches!(TranslationRequest::new(" \t\n ", "en"), Err(TranslationError::EmptyInput)));
    }

    #[test]
    fn test_resolve_language() {
        assert_eq!(resolve_language("French"), "fr");
        assert_eq!(resolve_language("chinese (simplified)"), "zh");
        assert_eq!(resolve_language("DE"), "de");
        assert_eq!(resolve_language("auto detect"), "auto");
        assert_eq!(resolve_language(" uk "), "uk");
    }

    #[test]
    fn test_language_name() {
        assert_eq!(language_name("ja"), Some("Japanese"));
        assert_eq!(language_name("xx"), None);
    }
}
