//! Named-field pattern formatting for templating keys.
//!
//! Patterns use `{name}` fields and `{{`/`}}` for literal braces. Arguments are
//! substituted verbatim; braces inside an argument are never expanded again.
use super::Placeholders;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("undefined placeholder \"{0}\"")]
    MissingPlaceholder(String),
    #[error("{0}")]
    Malformed(&'static str),
}

/// Substitute every `{name}` field in `pattern` from `args`.
pub fn format_pattern(pattern: &str, args: &Placeholders) -> Result<String, PatternError> {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '}' => return Err(PatternError::Malformed("single '}' encountered")),
            '{' => {
                let mut field = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some('{') => {
                            return Err(PatternError::Malformed("unexpected '{' in field name"))
                        }
                        Some(ch) => field.push(ch),
                        None => return Err(PatternError::Malformed("unterminated '{' field")),
                    }
                }
                out.push_str(lookup_field(&field, args)?);
            }
            _ => out.push(c),
        }
    }
    Ok(out)
}

fn lookup_field<'a>(field: &str, args: &'a Placeholders) -> Result<&'a str, PatternError> {
    if field.is_empty() || field.chars().all(|c| c.is_ascii_digit()) {
        return Err(PatternError::Malformed(
            "positional fields are not supported",
        ));
    }
    if field.contains([':', '!']) {
        return Err(PatternError::Malformed(
            "format specifications and conversions are not supported",
        ));
    }
    args.get(field)
        .map(String::as_str)
        .ok_or_else(|| PatternError::MissingPlaceholder(field.to_string()))
}
