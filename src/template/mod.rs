//! Templates loaded from `templates.json`.
//!
//! A template supplies static default keys plus placeholder patterns that
//! applications fill in through their own `templating` overrides.
mod pattern;

pub use pattern::{format_pattern, PatternError};

use crate::entry::{KeyedRecord, Required, ValueKind, DESKTOP_ENTRY};
use crate::error::CrescentError;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Map;
use std::collections::BTreeMap;

/// Ordered placeholder name to text mapping.
pub type Placeholders = IndexMap<String, String>;

/// Read a `templating` JSON object whose values must all be strings.
pub fn placeholders_from_json(
    raw: &Map<String, serde_json::Value>,
) -> Result<Placeholders, CrescentError> {
    raw.iter()
        .map(|(name, value)| -> Result<(String, String), CrescentError> {
            let text = value.as_str().ok_or_else(|| CrescentError::TypeMismatch {
                key: format!("templating.{name}"),
                expected: ValueKind::Text,
            })?;
            Ok((name.clone(), text.to_string()))
        })
        .collect()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTemplate {
    #[serde(default)]
    keys: Map<String, serde_json::Value>,
    #[serde(default)]
    templating: Map<String, serde_json::Value>,
}

/// A named, read-only template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    keys: KeyedRecord,
    templating: Placeholders,
}

impl Template {
    /// Validate one `templates.json` entry.
    ///
    /// Static keys go through the desktop entry schema without required keys;
    /// placeholder patterns only need to be strings.
    pub fn from_raw(name: &str, raw: &serde_json::Value) -> Result<Self, CrescentError> {
        let raw: RawTemplate =
            serde_json::from_value(raw.clone()).map_err(|err| CrescentError::InvalidRecord {
                name: name.to_string(),
                reason: err.to_string(),
            })?;
        Ok(Self {
            name: name.to_string(),
            keys: DESKTOP_ENTRY.validate(&raw.keys, Required::Relaxed)?,
            templating: placeholders_from_json(&raw.templating)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keys(&self) -> &KeyedRecord {
        &self.keys
    }

    pub fn templating(&self) -> &Placeholders {
        &self.templating
    }
}

/// Templates of one run, looked up by name.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: BTreeMap<String, Template>,
}

impl TemplateStore {
    pub fn add(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }
}
