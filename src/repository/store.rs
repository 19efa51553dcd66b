//! JSON config documents under the config directory.
use crate::error::CrescentError;
use anyhow::{Context, Result};
use serde_json::Map;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Contents written to a missing document by `init`.
pub const EMPTY_DOCUMENT: &str = "{}";

/// Load a `name -> object` document.
///
/// A missing file is an empty document. A file that is present but not a JSON
/// object is an [`CrescentError::InvalidConfigFile`].
pub fn read_document(path: &Path) -> Result<Map<String, serde_json::Value>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "config document missing, treating as empty");
            return Ok(Map::new());
        }
        Err(err) => return Err(err).with_context(|| format!("read {}", path.display())),
    };
    let invalid = |reason: String| CrescentError::InvalidConfigFile {
        path: path.to_path_buf(),
        reason,
    };
    match serde_json::from_str::<serde_json::Value>(&content) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(_) => Err(invalid("top level must be a JSON object".to_string()).into()),
        Err(err) => Err(invalid(err.to_string()).into()),
    }
}

/// Write `{}` to `path` unless it already exists. Returns whether it wrote.
pub fn write_stub(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, EMPTY_DOCUMENT).with_context(|| format!("write {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_document_is_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let map = read_document(&dir.path().join("apps.json")).expect("missing is empty");
        assert!(map.is_empty());
    }

    #[test]
    fn malformed_document_is_invalid_config() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("apps.json");
        for content in ["{not json", "", "[1, 2]"] {
            fs::write(&path, content).expect("write");
            let err = read_document(&path).expect_err("invalid config");
            let err = err
                .downcast_ref::<CrescentError>()
                .expect("domain error");
            assert!(
                matches!(err, CrescentError::InvalidConfigFile { path: p, .. } if p == &path),
                "unexpected error for {content:?}: {err}"
            );
        }
    }

    #[test]
    fn document_order_is_preserved() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("apps.json");
        fs::write(&path, r#"{"zeta": {}, "alpha": {}, "mid": {}}"#).expect("write");
        let map = read_document(&path).expect("valid");
        let names: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn stub_never_overwrites() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("templates.json");
        assert!(write_stub(&path).expect("first write"));
        fs::write(&path, r#"{"t": {}}"#).expect("write");
        assert!(!write_stub(&path).expect("second write"));
        assert_eq!(
            fs::read_to_string(&path).expect("read"),
            r#"{"t": {}}"#
        );
    }
}
