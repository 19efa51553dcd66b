//! Template resolution for application records.
//!
//! Resolution is a pure function of an application and the template store: the
//! application is cloned, never mutated, and the merged keys come back as a
//! [`ResolvedEntry`].
use crate::entry::{Application, ResolvedEntry, Value, DESKTOP_ENTRY};
use crate::error::CrescentError;
use crate::template::{format_pattern, PatternError, TemplateStore};

/// Merge `application` with the template it references.
///
/// Order of operations:
/// 1. placeholder arguments start from the application's overrides; every
///    template placeholder without an override gets the template's literal
///    pattern as its argument;
/// 2. every template placeholder is formatted with those arguments and stored
///    under its own name, replacing any existing value;
/// 3. template static keys fill in keys the application does not define.
pub fn resolve(
    application: &Application,
    templates: &TemplateStore,
) -> Result<ResolvedEntry, CrescentError> {
    let Some(template_name) = application.template() else {
        return Ok(ResolvedEntry::new(
            application.name(),
            None,
            application.keys().clone(),
        ));
    };
    let template = templates
        .get(template_name)
        .ok_or_else(|| CrescentError::TemplateNotFound {
            name: template_name.to_string(),
        })?;

    let mut args = application.templating().clone();
    for (name, pattern) in template.templating().iter() {
        if !args.contains_key(name) {
            args.insert(name.clone(), pattern.clone());
        }
    }

    let mut keys = application.keys().clone();
    for (name, pattern) in template.templating().iter() {
        let derived = format_pattern(pattern, &args).map_err(|err| match err {
            PatternError::MissingPlaceholder(placeholder) => CrescentError::MissingPlaceholder {
                template: template.name().to_string(),
                key: name.to_string(),
                placeholder,
            },
            PatternError::Malformed(reason) => CrescentError::MalformedPattern {
                template: template.name().to_string(),
                key: name.to_string(),
                reason: reason.to_string(),
            },
        })?;
        if DESKTOP_ENTRY.kind_of(name).is_none() {
            tracing::warn!(
                application = application.name(),
                template = template.name(),
                key = name.as_str(),
                "derived key is not a standard desktop entry key"
            );
        }
        keys.insert(name.clone(), Value::Text(derived));
    }

    for (name, value) in template.keys().iter() {
        if !keys.contains_key(name) {
            keys.insert(name.clone(), value.clone());
        }
    }

    tracing::debug!(
        application = application.name(),
        template = template.name(),
        keys = ?keys.keys().collect::<Vec<_>>(),
        "resolved application against template"
    );
    Ok(ResolvedEntry::new(
        application.name(),
        Some(template.name()),
        keys,
    ))
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
