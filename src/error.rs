//! Error taxonomy.
//!
//! Only a missing or corrupt bundled default ruleset is fatal. Override
//! files degrade to "no override" (logged), and a bad selection or an
//! unparsable model reply is reported to the caller without touching the
//! configuration pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal configuration failures, propagated to the caller.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The default ruleset ships inside the crate; failing to parse it is a
    /// packaging defect, never an expected runtime condition.
    #[error("bundled default rules are missing or corrupt: {0}")]
    MissingDefaultRules(#[source] serde_json::Error),
}

/// Non-fatal override-file failures. The loader logs these and falls back
/// to the default-only ruleset; a broken override must not block validation.
#[derive(Debug, Error)]
pub enum OverrideError {
    #[error("override rules file is not readable: {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("override rules file is malformed: {path}: {detail}")]
    Malformed { path: PathBuf, detail: String },
}

/// Rejections of the selected text before any prompt is assembled.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error(
        "No Gherkin text selected for validation. Please select some text \
         containing a Gherkin statement and try again."
    )]
    Empty,

    #[error(
        "Selected text is too short. Valid Gherkin text typically contains at \
         least 3 words. Please select a longer Gherkin text for validation."
    )]
    TooShort,

    #[error(
        "The selected text includes an 'And', 'But', or '*' step without \
         context. These steps depend on preceding 'Given', 'When', or 'Then' \
         steps to define the scenario flow. Please include the preceding steps \
         for proper validation."
    )]
    MissingContext,
}

/// Failures parsing the model's validation reply.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("validation reply did not contain a JSON array")]
    NoJsonArray,

    #[error("validation reply failed to parse: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
