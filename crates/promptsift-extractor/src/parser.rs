//! Decode JSON documents and pick out their prompt values

use crate::config::{ExtractorConfig, NonStringPolicy};
use crate::types::{FailureKind, FileFailure, Prompt, PromptKind};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::warn;

/// Decode `bytes` as UTF-8 and parse them as a single JSON document
pub fn parse_document(path: &Path, bytes: &[u8]) -> Result<Value, FileFailure> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| FileFailure::new(path, FailureKind::Decode, e.to_string()))?;

    serde_json::from_str(text).map_err(|e| FileFailure::new(path, FailureKind::Parse, e.to_string()))
}

/// Collect the prompts carried by a parsed document
///
/// A top-level object contributes its own prompt; a top-level array contributes
/// the prompt of every element that is an object. Anything else yields nothing.
pub fn extract_prompts(document: &Value, config: &ExtractorConfig) -> Vec<Prompt> {
    match document {
        Value::Object(map) => prompt_from_object(map, config).into_iter().collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_object)
            .filter_map(|map| prompt_from_object(map, config))
            .collect(),
        _ => Vec::new(),
    }
}

fn prompt_from_object(map: &Map<String, Value>, config: &ExtractorConfig) -> Option<Prompt> {
    let value = map.get(&config.prompt_key)?;
    if !is_non_empty(value) {
        return None;
    }

    match value {
        Value::String(s) => Some(Prompt::new(s.as_str())),
        _ if config.non_string_prompts == NonStringPolicy::Skip => None,
        other => render(other),
    }
}

/// False for `null`, `false`, numeric zero and empty strings, arrays or objects
pub fn is_non_empty(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn render(value: &Value) -> Option<Prompt> {
    let kind = match value {
        Value::Number(_) => PromptKind::Number,
        Value::Bool(_) => PromptKind::Bool,
        Value::Array(_) => PromptKind::Array,
        Value::Object(_) => PromptKind::Object,
        Value::String(s) => return Some(Prompt::new(s.as_str())),
        Value::Null => return None,
    };

    match serde_json::to_string(value) {
        Ok(text) => Some(Prompt::with_kind(text, kind)),
        Err(e) => {
            warn!("Failed to render prompt value: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn texts(document: &Value, config: &ExtractorConfig) -> Vec<String> {
        extract_prompts(document, config)
            .into_iter()
            .map(|p| p.text().to_string())
            .collect()
    }

    #[test]
    fn test_object_with_prompt() {
        let doc = json!({"prompt": "hello", "seed": 42});
        assert_eq!(texts(&doc, &ExtractorConfig::default()), vec!["hello"]);
    }

    #[test]
    fn test_array_of_objects() {
        let doc = json!([{"prompt": "x"}, "stray", {"other": 1}, {"prompt": "y"}]);
        assert_eq!(texts(&doc, &ExtractorConfig::default()), vec!["x", "y"]);
    }

    #[test]
    fn test_nested_prompt_is_ignored() {
        let doc = json!({"data": {"prompt": "deep"}});
        assert!(texts(&doc, &ExtractorConfig::default()).is_empty());

        let doc = json!([[{"prompt": "deeper"}]]);
        assert!(texts(&doc, &ExtractorConfig::default()).is_empty());
    }

    #[test]
    fn test_scalar_document_yields_nothing() {
        assert!(texts(&json!("prompt"), &ExtractorConfig::default()).is_empty());
        assert!(texts(&json!(7), &ExtractorConfig::default()).is_empty());
        assert!(texts(&Value::Null, &ExtractorConfig::default()).is_empty());
    }

    #[test]
    fn test_empty_values_are_excluded() {
        let doc = json!([
            {"prompt": ""},
            {"prompt": null},
            {"prompt": false},
            {"prompt": 0},
            {"prompt": 0.0},
            {"prompt": []},
            {"prompt": {}}
        ]);
        assert!(texts(&doc, &ExtractorConfig::default()).is_empty());
    }

    #[test]
    fn test_non_string_values_are_rendered() {
        let doc = json!([
            {"prompt": 42},
            {"prompt": true},
            {"prompt": ["a", "b"]},
            {"prompt": {"k": 1}}
        ]);
        assert_eq!(
            texts(&doc, &ExtractorConfig::default()),
            vec!["42", "true", r#"["a","b"]"#, r#"{"k":1}"#]
        );
    }

    #[test]
    fn test_non_string_values_skipped_when_configured() {
        let config = ExtractorConfig {
            non_string_prompts: NonStringPolicy::Skip,
            ..ExtractorConfig::default()
        };
        let doc = json!([{"prompt": 42}, {"prompt": "kept"}, {"prompt": true}]);
        assert_eq!(texts(&doc, &config), vec!["kept"]);
    }

    #[test]
    fn test_custom_prompt_key() {
        let config = ExtractorConfig {
            prompt_key: "negative_prompt".to_string(),
            ..ExtractorConfig::default()
        };
        let doc = json!({"prompt": "a", "negative_prompt": "b"});
        assert_eq!(texts(&doc, &config), vec!["b"]);
    }

    #[test]
    fn test_string_contents_are_verbatim() {
        let doc = json!({"prompt": "  a \"quoted\", value\n"});
        assert_eq!(
            texts(&doc, &ExtractorConfig::default()),
            vec!["  a \"quoted\", value\n"]
        );
    }

    #[test]
    fn test_parse_document_reports_malformed_json() {
        let failure = parse_document(Path::new("bad.json"), b"not valid json").unwrap_err();
        assert_eq!(failure.kind, FailureKind::Parse);
        assert_eq!(failure.path, Path::new("bad.json"));
    }

    #[test]
    fn test_parse_document_reports_invalid_utf8() {
        let failure = parse_document(Path::new("latin1.json"), b"{\"prompt\": \"caf\xe9\"}").unwrap_err();
        assert_eq!(failure.kind, FailureKind::Decode);
    }

    #[test]
    fn test_parse_document_accepts_valid_json() {
        let value = parse_document(Path::new("ok.json"), br#"{"prompt": "ok"}"#).unwrap();
        assert_eq!(value["prompt"], "ok");
    }
}
