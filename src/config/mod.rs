//! Rule configuration: loading, merging, caching.
//!
//! A bundled default ruleset defines the complete schema; an optional
//! user override file is deep-merged onto it, and the resolved result is
//! cached against the override file's state (enabled flag, path,
//! modification time).

pub mod cache;
pub mod loader;
pub mod merge;

pub use cache::ConfigCache;
pub use loader::{load_default, load_override, sample_rules};
pub use merge::{merge, merge_trees};
