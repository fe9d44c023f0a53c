//! Rule file loading.

use crate::error::{ConfigError, OverrideError};
use serde_json::Value;
use std::path::Path;

/// Bundled default ruleset, compiled into the crate. Every build ships it;
/// a parse failure here is a packaging defect.
const DEFAULT_RULES: &str = include_str!("../../resources/default_rules.json");

/// Annotated starter override, for hosts that offer a "copy sample rules"
/// action.
const SAMPLE_RULES: &str = include_str!("../../resources/rules_sample.json");

/// Load the bundled default rule tree.
pub fn load_default() -> Result<Value, ConfigError> {
    serde_json::from_str(DEFAULT_RULES).map_err(ConfigError::MissingDefaultRules)
}

/// The bundled sample override file, verbatim.
pub fn sample_rules() -> &'static str {
    SAMPLE_RULES
}

/// Load a user override rule tree.
///
/// An empty path means "no override configured". A path that cannot be
/// read, or content that does not parse as a rule tree, also yields `None`
/// with the reason logged; a broken override must never block validation
/// against the defaults.
pub fn load_override(path: &str) -> Option<Value> {
    if path.trim().is_empty() {
        tracing::debug!("override rules path is empty; using defaults only");
        return None;
    }
    match try_load_override(Path::new(path)) {
        Ok(tree) => Some(tree),
        Err(err) => {
            tracing::warn!("ignoring override rules: {err}");
            None
        }
    }
}

/// Fallible override load, dispatching the parser on the file extension:
/// `.yaml`/`.yml` and `.toml` overrides are accepted alongside JSON, all
/// normalized into the same tree shape before merging.
pub(crate) fn try_load_override(path: &Path) -> Result<Value, OverrideError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| OverrideError::Unreadable { path: path.to_path_buf(), source })?;

    let extension =
        path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    let tree: Value = match extension.as_str() {
        "yaml" | "yml" => {
            serde_yaml::from_str(&content).map_err(|err| malformed(path, err))?
        }
        "toml" => toml::from_str(&content).map_err(|err| malformed(path, err))?,
        _ => serde_json::from_str(&content).map_err(|err| malformed(path, err))?,
    };

    if !tree.is_object() {
        return Err(OverrideError::Malformed {
            path: path.to_path_buf(),
            detail: "root must be an object".to_string(),
        });
    }
    Ok(tree)
}

fn malformed(path: &Path, err: impl std::fmt::Display) -> OverrideError {
    OverrideError::Malformed { path: path.to_path_buf(), detail: err.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_rules_parse() {
        let tree = load_default().expect("bundled default rules");
        assert!(tree.get("CONTEXT").is_some());
        assert!(tree.get("TASKS").and_then(|t| t.as_array()).is_some_and(|t| !t.is_empty()));
        for key in ["SCENARIO", "GIVEN", "WHEN", "THEN", "TAG"] {
            assert!(tree.get(key).is_some_and(|v| v.is_object()), "missing section {key}");
        }
    }

    #[test]
    fn sample_rules_parse_as_override() {
        let tree: serde_json::Value =
            serde_json::from_str(sample_rules()).expect("sample rules json");
        assert!(tree.is_object());
    }

    #[test]
    fn empty_path_is_no_override() {
        assert!(load_override("").is_none());
        assert!(load_override("   ").is_none());
    }

    #[test]
    fn missing_file_is_no_override() {
        assert!(load_override("/nonexistent/rules.json").is_none());
        let err = try_load_override(Path::new("/nonexistent/rules.json"))
            .expect_err("missing file should fail");
        assert!(matches!(err, OverrideError::Unreadable { .. }));
    }

    #[test]
    fn malformed_file_is_no_override() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("rules.json");
        fs::write(&path, "{ not json").expect("write");

        assert!(load_override(path.to_str().expect("utf8 path")).is_none());
        let err = try_load_override(&path).expect_err("bad json should fail");
        assert!(matches!(err, OverrideError::Malformed { .. }));
    }

    #[test]
    fn non_object_root_is_malformed() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("rules.json");
        fs::write(&path, "[1, 2, 3]").expect("write");

        let err = try_load_override(&path).expect_err("array root should fail");
        assert!(matches!(err, OverrideError::Malformed { .. }));
    }

    #[test]
    fn yaml_override_loads() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("rules.yaml");
        fs::write(&path, "CONTEXT: from yaml\nENTITIES:\n  - user\n").expect("write");

        let tree = load_override(path.to_str().expect("utf8 path")).expect("yaml override");
        assert_eq!(tree["CONTEXT"], "from yaml");
        assert_eq!(tree["ENTITIES"][0], "user");
    }

    #[test]
    fn toml_override_loads() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("rules.toml");
        fs::write(&path, "CONTEXT = \"from toml\"\n\n[GIVEN]\ntense = \"past tense\"\n")
            .expect("write");

        let tree = load_override(path.to_str().expect("utf8 path")).expect("toml override");
        assert_eq!(tree["CONTEXT"], "from toml");
        assert_eq!(tree["GIVEN"]["tense"], "past tense");
    }
}
