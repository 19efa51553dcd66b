//! Typed desktop entry values and their line-text form.
use super::schema::{EntryType, ValueKind};
use crate::error::CrescentError;
use std::fmt;

/// A validated value of one desktop entry key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Bool(bool),
    Enum(EntryType),
    List(Vec<String>),
}

impl Value {
    /// Convert raw JSON into the kind the schema declares for `key`.
    ///
    /// No coercion happens: numbers are never text and list elements must all
    /// be strings.
    pub fn from_json(
        key: &str,
        kind: ValueKind,
        raw: &serde_json::Value,
    ) -> Result<Self, CrescentError> {
        let mismatch = || CrescentError::TypeMismatch {
            key: key.to_string(),
            expected: kind,
        };
        match (kind, raw) {
            (ValueKind::Text, serde_json::Value::String(text)) => Ok(Value::Text(text.clone())),
            (ValueKind::Bool, serde_json::Value::Bool(flag)) => Ok(Value::Bool(*flag)),
            (ValueKind::Enum, serde_json::Value::String(label)) => EntryType::from_label(label)
                .map(Value::Enum)
                .ok_or_else(mismatch),
            (ValueKind::List, serde_json::Value::Array(items)) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string).ok_or_else(mismatch))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            _ => Err(mismatch()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Line-text form used on the right-hand side of `Key=Value`.
///
/// List elements are joined with `;` as-is; an element that itself contains
/// `;` is not escaped.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Bool(true) => f.write_str("true"),
            Value::Bool(false) => f.write_str("false"),
            Value::Enum(entry_type) => f.write_str(entry_type.label()),
            Value::List(items) => f.write_str(&items.join(";")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_each_kind() {
        assert_eq!(Value::Text("firefox %u".into()).to_string(), "firefox %u");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Enum(EntryType::Link).to_string(), "Link");
        assert_eq!(
            Value::List(vec!["a".into(), "b".into()]).to_string(),
            "a;b"
        );
    }

    #[test]
    fn list_elements_are_not_escaped() {
        let value = Value::List(vec!["a;b".into(), "c".into()]);
        assert_eq!(value.to_string(), "a;b;c");
    }

    #[test]
    fn integer_is_never_text() {
        let err = Value::from_json("Comment", ValueKind::Text, &json!(42)).expect_err("mismatch");
        assert_eq!(
            err,
            CrescentError::TypeMismatch {
                key: "Comment".into(),
                expected: ValueKind::Text
            }
        );
    }

    #[test]
    fn string_is_never_bool() {
        assert!(Value::from_json("Terminal", ValueKind::Bool, &json!("true")).is_err());
    }

    #[test]
    fn list_with_non_string_element_is_rejected() {
        assert!(Value::from_json("Keywords", ValueKind::List, &json!(["a", 1])).is_err());
    }

    #[test]
    fn entry_type_accepts_only_known_labels() {
        assert_eq!(
            Value::from_json("Type", ValueKind::Enum, &json!("Directory")).expect("label"),
            Value::Enum(EntryType::Directory)
        );
        assert!(Value::from_json("Type", ValueKind::Enum, &json!("Service")).is_err());
    }
}
