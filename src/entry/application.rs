//! Application records loaded from `apps.json`.
use super::{EntryType, KeyedRecord, Required, Value, DESKTOP_ENTRY};
use crate::error::CrescentError;
use crate::template::{placeholders_from_json, Placeholders};

const TEMPLATE_FIELD: &str = "template";
const TEMPLATING_FIELD: &str = "templating";

/// A user-defined application: its own keys plus an optional template reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    name: String,
    keys: KeyedRecord,
    template: Option<String>,
    templating: Placeholders,
}

impl Application {
    /// Validate one `apps.json` entry.
    ///
    /// `name` is the entry's key in the document and always becomes the `Name`
    /// key. `Type=Application` is injected first so it leads the record; an
    /// explicit `Type` replaces the value in place.
    pub fn from_raw(name: &str, raw: &serde_json::Value) -> Result<Self, CrescentError> {
        let mut fields = raw
            .as_object()
            .cloned()
            .ok_or_else(|| CrescentError::InvalidRecord {
                name: name.to_string(),
                reason: "application must be a JSON object".to_string(),
            })?;

        let template = match fields.remove(TEMPLATE_FIELD) {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(template)) => Some(template),
            Some(_) => {
                return Err(CrescentError::InvalidRecord {
                    name: name.to_string(),
                    reason: "\"template\" must be a string".to_string(),
                })
            }
        };
        let templating = match fields.remove(TEMPLATING_FIELD) {
            None | Some(serde_json::Value::Null) => Placeholders::default(),
            Some(serde_json::Value::Object(map)) => placeholders_from_json(&map)?,
            Some(_) => {
                return Err(CrescentError::InvalidRecord {
                    name: name.to_string(),
                    reason: "\"templating\" must be an object".to_string(),
                })
            }
        };

        fields.insert(
            "Name".to_string(),
            serde_json::Value::String(name.to_string()),
        );
        let mut keys = KeyedRecord::new();
        keys.insert("Type".to_string(), Value::Enum(EntryType::Application));
        keys.extend(DESKTOP_ENTRY.validate(&fields, Required::Enforced)?);

        Ok(Self {
            name: name.to_string(),
            keys,
            template,
            templating,
        })
    }

    /// Return the application's key in `apps.json`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keys(&self) -> &KeyedRecord {
        &self.keys
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    pub fn templating(&self) -> &Placeholders {
        &self.templating
    }
}

#[cfg(test)]
#[path = "application_tests.rs"]
mod tests;
