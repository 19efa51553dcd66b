//! Desktop entry key schema.
//!
//! The legal key set is a static table mapping each key to the kind of value it
//! accepts. Validation walks raw JSON against this table and never coerces.
use super::record::KeyedRecord;
use super::value::Value;
use crate::error::CrescentError;
use serde_json::Map;
use std::fmt;

/// Semantic type accepted by a schema key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Bool,
    Enum,
    List,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::Bool => "boolean",
            ValueKind::Enum => "entry type",
            ValueKind::List => "list of text",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values of the enumerated `Type` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryType {
    #[default]
    Application,
    Link,
    Directory,
}

impl EntryType {
    /// Return the label written to the desktop file.
    pub fn label(&self) -> &'static str {
        match self {
            EntryType::Application => "Application",
            EntryType::Link => "Link",
            EntryType::Directory => "Directory",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Application" => Some(EntryType::Application),
            "Link" => Some(EntryType::Link),
            "Directory" => Some(EntryType::Directory),
            _ => None,
        }
    }
}

/// Whether a validation pass enforces the schema's required keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Required {
    Enforced,
    Relaxed,
}

/// Fixed key table plus the subset of keys every application must define.
#[derive(Debug)]
pub struct Schema {
    keys: &'static [(&'static str, ValueKind)],
    required: &'static [&'static str],
}

/// Key set of a `[Desktop Entry]` group.
pub const DESKTOP_ENTRY: Schema = Schema {
    keys: &[
        ("Type", ValueKind::Enum),
        ("Name", ValueKind::Text),
        ("GenericName", ValueKind::Text),
        ("NoDisplay", ValueKind::Bool),
        ("Comment", ValueKind::Text),
        ("Icon", ValueKind::Text),
        ("Hidden", ValueKind::Bool),
        ("OnlyShowIn", ValueKind::List),
        ("NotShowIn", ValueKind::List),
        ("DBusActivatable", ValueKind::Bool),
        ("TryExec", ValueKind::Text),
        ("Exec", ValueKind::Text),
        ("Path", ValueKind::Text),
        ("Terminal", ValueKind::Bool),
        ("MimeType", ValueKind::List),
        ("Categories", ValueKind::List),
        ("Implements", ValueKind::List),
        ("Keywords", ValueKind::List),
        ("StartupNotify", ValueKind::Bool),
        ("StartupWMClass", ValueKind::Text),
    ],
    required: &["Name"],
};

impl Schema {
    /// Return the declared kind for `key`, or `None` for non-standard keys.
    pub fn kind_of(&self, key: &str) -> Option<ValueKind> {
        self.keys
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, kind)| *kind)
    }

    pub fn is_required(&self, key: &str) -> bool {
        self.required.contains(&key)
    }

    /// Validate a raw JSON object into a typed record.
    ///
    /// Required keys are checked first, in table order, then the remaining keys
    /// in document order. The first violation aborts validation.
    pub fn validate(
        &self,
        raw: &Map<String, serde_json::Value>,
        required: Required,
    ) -> Result<KeyedRecord, CrescentError> {
        let mut record = KeyedRecord::new();
        if required == Required::Enforced {
            for key in self.required {
                let value = raw
                    .get(*key)
                    .ok_or_else(|| CrescentError::MissingRequiredKey {
                        key: key.to_string(),
                    })?;
                record.insert(key.to_string(), self.typed_value(key, value)?);
            }
        }
        for (key, value) in raw {
            if required == Required::Enforced && self.is_required(key) {
                continue;
            }
            record.insert(key.clone(), self.typed_value(key, value)?);
        }
        Ok(record)
    }

    fn typed_value(&self, key: &str, value: &serde_json::Value) -> Result<Value, CrescentError> {
        let kind = self
            .kind_of(key)
            .ok_or_else(|| CrescentError::UnknownKey {
                key: key.to_string(),
            })?;
        Value::from_json(key, kind, value)
    }
}
