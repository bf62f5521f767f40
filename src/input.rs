//! Collection input
//!
//! Turns raw text (a JSON document or plain lines) into the element list a
//! paginator is built from.

use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

/// How raw input is split into elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum InputFormat {
    /// A JSON array, one element per array entry
    #[default]
    Json,
    /// Plain text, one element per line
    Lines,
}

/// Read raw input from a file, or from stdin when the path is `-`
pub fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::config(format!("Input file '{}' not found", path.display()))
        } else {
            Error::Io(e)
        }
    })
}

/// Parse text into elements according to the input format
pub fn parse_collection(text: &str, format: InputFormat) -> Result<Vec<Value>> {
    match format {
        InputFormat::Json => parse_json_collection(text),
        InputFormat::Lines => Ok(parse_lines(text)),
    }
}

/// Parse a JSON document that must be an array
pub fn parse_json_collection(text: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(text)?;
    expect_array(value)
}

/// Split text into one JSON string per line
pub fn parse_lines(text: &str) -> Vec<Value> {
    text.lines().map(|line| Value::String(line.to_string())).collect()
}

/// Unwrap a JSON array, rejecting every other shape
pub fn expect_array(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(Error::invalid_input(format!(
            "Invalid type supplied to paginator - must be an array, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn test_parse_json_collection() {
        let items = parse_json_collection(r#"[1, 2, 3, 4, 5, "hello"]"#).unwrap();
        assert_eq!(items.len(), 6);
        assert_eq!(items[5], json!("hello"));
    }

    #[test_case("null", "null" ; "null input")]
    #[test_case(r#""hello""#, "string" ; "scalar string")]
    #[test_case("42", "number" ; "scalar number")]
    #[test_case("true", "boolean" ; "scalar bool")]
    #[test_case(r#"{"a": 1}"#, "object" ; "object input")]
    fn test_parse_json_collection_rejects_non_arrays(text: &str, kind: &str) {
        let err = parse_json_collection(text).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            format!("Invalid type supplied to paginator - must be an array, got {kind}")
        );
    }

    #[test]
    fn test_parse_json_collection_malformed() {
        let err = parse_json_collection("[1, 2").unwrap_err();
        assert!(matches!(err, Error::JsonParse(_)));
    }

    #[test]
    fn test_parse_lines() {
        let items = parse_lines("alpha\nbeta\ngamma\n");
        assert_eq!(items, vec![json!("alpha"), json!("beta"), json!("gamma")]);

        assert!(parse_lines("").is_empty());
    }

    #[test]
    fn test_parse_collection_dispatch() {
        let lines = parse_collection("[1]\n[2]", InputFormat::Lines).unwrap();
        assert_eq!(lines, vec![json!("[1]"), json!("[2]")]);

        let json = parse_collection("[[1], [2]]", InputFormat::Json).unwrap();
        assert_eq!(json, vec![json!([1]), json!([2])]);
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
