//! Resolved entries and their `.desktop` rendering.
use super::record::KeyedRecord;
use super::value::Value;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Extension of every generated file.
pub const DESKTOP_EXTENSION: &str = "desktop";

const GROUP_HEADER: &str = "[Desktop Entry]";

/// Application record after template merge, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    application: String,
    template: Option<String>,
    keys: KeyedRecord,
}

impl ResolvedEntry {
    pub fn new(application: &str, template: Option<&str>, keys: KeyedRecord) -> Self {
        Self {
            application: application.to_string(),
            template: template.map(str::to_string),
            keys,
        }
    }

    /// Return the application's key in `apps.json`.
    pub fn application(&self) -> &str {
        &self.application
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    pub fn keys(&self) -> &KeyedRecord {
        &self.keys
    }

    /// Return the display name written as `Name`.
    ///
    /// A template may derive `Name`, so this reads the merged record and falls
    /// back to the application key.
    pub fn name(&self) -> &str {
        self.keys
            .get("Name")
            .and_then(Value::as_text)
            .unwrap_or(&self.application)
    }

    /// Return `<sanitized Name>.desktop`.
    pub fn file_name(&self) -> String {
        format!("{}.{DESKTOP_EXTENSION}", sanitize_file_stem(self.name()))
    }

    /// Render the full file content: group header then one `Key=Value` line per
    /// key, in record order, without a trailing newline.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.keys.len() + 1);
        lines.push(GROUP_HEADER.to_string());
        for (key, value) in self.keys.iter() {
            lines.push(format!("{key}={value}"));
        }
        lines.join("\n")
    }

    /// JSON-friendly view used by `list --json`.
    pub fn summary(&self) -> EntrySummary {
        EntrySummary {
            name: self.name().to_string(),
            file_name: self.file_name(),
            template: self.template().map(str::to_string),
            keys: self
                .keys()
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }
}

/// One-line summary: `[Name] Key=Value, Key=Value`.
impl fmt::Display for ResolvedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name())?;
        if !self.keys.is_empty() {
            let pairs: Vec<String> = self
                .keys
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            write!(f, " {}", pairs.join(", "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct EntrySummary {
    pub name: String,
    pub file_name: String,
    pub template: Option<String>,
    pub keys: BTreeMap<String, String>,
}

/// Replace every character outside the Unicode letter and number categories
/// with `_`.
///
/// Combining marks count as separators even when `char::is_alphanumeric`
/// accepts them, so existing file names stay stable.
pub fn sanitize_file_stem(name: &str) -> String {
    name.chars()
        .map(|c| if is_letter_or_number(c) { c } else { '_' })
        .collect()
}

fn is_letter_or_number(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}
