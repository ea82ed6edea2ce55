//! Extraction of translated text from heterogeneous backend responses
//!
//! Backends disagree on the response shape. Each matcher below recognises
//! one shape and the first match wins; a body no matcher recognises (or one
//! that is not JSON at all) is handed back verbatim.

use serde_json::Value;
use tracing::debug;

/// A rule that pulls translated text out of a parsed response
pub type ShapeMatcher = fn(&Value) -> Option<&str>;

/// Shape matchers in priority order, with a name for logging
pub const SHAPE_MATCHERS: &[(&str, ShapeMatcher)] = &[
    ("translatedText", libre_translate),
    ("data.translations", translations_list),
    ("string", bare_string),
    ("result", result_field),
];

/// LibreTranslate: `{"translatedText": "..."}`
pub fn libre_translate(root: &Value) -> Option<&str> {
    root.get("translatedText")?.as_str()
}

/// Google-style: `{"data": {"translations": [{"translatedText" | "translation": "..."}]}}`
pub fn translations_list(root: &Value) -> Option<&str> {
    let first = root
        .get("data")?
        .as_object()?
        .get("translations")?
        .as_array()?
        .first()?;

    first
        .get("translatedText")
        .and_then(Value::as_str)
        .or_else(|| first.get("translation").and_then(Value::as_str))
}

/// A bare JSON string
pub fn bare_string(root: &Value) -> Option<&str> {
    root.as_str()
}

/// `{"result": "..."}`
pub fn result_field(root: &Value) -> Option<&str> {
    root.get("result")?.as_str()
}

/// Interpret a successful response body.
///
/// Never fails: unrecognised or non-JSON bodies come back unchanged.
pub fn interpret_body(body: &str) -> String {
    let root: Value = match serde_json::from_str(body) {
        Ok(root) => root,
        Err(e) => {
            debug!("Response is not JSON ({}), returning raw body", e);
            return body.to_string();
        }
    };

    for (name, matcher) in SHAPE_MATCHERS {
        if let Some(text) = matcher(&root) {
            debug!("Response matched shape {}", name);
            return text.to_string();
        }
    }

    debug!("Response matched no known shape, returning raw body");
    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_libre_translate_shape() {
        assert_eq!(interpret_body(r#"{"translatedText": "Bonjour"}"#), "Bonjour");
        assert_eq!(interpret_body(r#"{"translatedText": ""}"#), "");
    }

    #[test]
    fn test_translations_list_shapes() {
        assert_eq!(
            interpret_body(r#"{"data":{"translations":[{"translatedText":"Hola"}]}}"#),
            "Hola"
        );
        assert_eq!(
            interpret_body(r#"{"data":{"translations":[{"translation":"Ciao"}]}}"#),
            "Ciao"
        );
    }

    #[test]
    fn test_only_first_translation_is_used() {
        let body = r#"{"data":{"translations":[{"translation":"eins"},{"translatedText":"zwei"}]}}"#;
        assert_eq!(interpret_body(body), "eins");
    }

    #[test]
    fn test_first_element_prefers_translated_text() {
        let value = json!({"data": {"translations": [{"translation": "b", "translatedText": "a"}]}});
        assert_eq!(translations_list(&value), Some("a"));
    }

    #[test]
    fn test_empty_translations_falls_through() {
        let body = r#"{"data":{"translations":[]},"result":"fallback"}"#;
        assert_eq!(interpret_body(body), "fallback");
    }

    #[test]
    fn test_bare_string_and_result() {
        assert_eq!(interpret_body(r#""Hallo""#), "Hallo");
        assert_eq!(interpret_body(r#"{"result":"Привет"}"#), "Привет");
    }

    #[test]
    fn test_top_level_wins_over_nested() {
        let body = r#"{"translatedText":"top","data":{"translations":[{"translatedText":"nested"}]}}"#;
        assert_eq!(interpret_body(body), "top");
    }

    #[test]
    fn test_non_string_fields_do_not_match() {
        let body = r#"{"translatedText": 42, "result": null}"#;
        assert_eq!(interpret_body(body), body);
    }

    #[test]
    fn test_unknown_shapes_return_raw_body() {
        assert_eq!(interpret_body("not json at all"), "not json at all");
        assert_eq!(interpret_body(r#"{"text":"x"}"#), r#"{"text":"x"}"#);
        assert_eq!(interpret_body("[1, 2]"), "[1, 2]");
        assert_eq!(interpret_body(""), "");
    }
}
