//! gherkin-lint: layered rule configuration and LLM prompt assembly for
//! Gherkin scenario validation.
//!
//! The crate combines a bundled default ruleset with an optional user
//! override file (deep-merged, cached against the override file's state)
//! and renders a multi-section validation prompt whose sections appear,
//! disappear, and renumber themselves depending on the keywords present
//! in the selected text and the rule fields that are populated.
//!
//! The host application owns the editor surface, the settings store, and
//! the LLM transport; this crate owns everything between "here is the
//! selected text" and "here is the prompt to send", plus parsing the
//! model's JSON validation report back into per-line records.
//!
//! ```
//! use gherkin_lint::{ConfigCache, PromptAssembler};
//!
//! let cache = ConfigCache::new();
//! let rules = cache.resolve(false, "")?;
//! let prompt = PromptAssembler::new(&rules)
//!     .build_prompt("Given a user exists", "feature", true);
//! assert!(prompt.contains("GIVEN STEP GUIDELINES"));
//! # Ok::<(), gherkin_lint::ConfigError>(())
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod prompt;
pub mod report;
pub mod selection;

pub use config::ConfigCache;
pub use domain::{RuleSet, StepKind, ValidationRecord};
pub use error::{ConfigError, OverrideError, ReportError, SelectionError};
pub use prompt::PromptAssembler;
pub use report::{format_records, parse_reply};
