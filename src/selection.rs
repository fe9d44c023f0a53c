//! Selected-text probes and preflight checks.
//!
//! The host hands over the raw editor selection; everything here is pure
//! text inspection: which keywords are present, and whether the selection
//! is worth sending at all.

use crate::error::SelectionError;
use once_cell::sync::Lazy;
use regex::Regex;

pub const SCENARIO_KEYWORD: &str = "Scenario";
pub const GIVEN_KEYWORD: &str = "Given";
pub const WHEN_KEYWORD: &str = "When";
pub const THEN_KEYWORD: &str = "Then";
pub const AND_KEYWORD: &str = "And";
pub const BUT_KEYWORD: &str = "But";
pub const META_KEYWORD: &str = "Meta";

/// File extensions the host offers validation for.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["feature", "story", "txt"];

/// Below this the text cannot hold a meaningful Gherkin statement.
const MIN_SELECTION_WORDS: usize = 3;

static LEADING_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]*@").expect("valid regex"));

const STEP_KEYWORDS: [&str; 4] = [SCENARIO_KEYWORD, GIVEN_KEYWORD, WHEN_KEYWORD, THEN_KEYWORD];

/// True when any of the four step keywords appears in the selection.
pub fn contains_step_keyword(text: &str) -> bool {
    STEP_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}

/// True when the selection carries a tag line (`@smoke`) or a "Meta" line.
pub fn has_tag_marker(text: &str) -> bool {
    LEADING_TAG.is_match(text) || text.contains(META_KEYWORD)
}

/// True when an opening `<` precedes a later `>`, the placeholder
/// convention of parameterized steps.
pub fn has_parameter_placeholder(text: &str) -> bool {
    match (text.find('<'), text.find('>')) {
        (Some(open), Some(close)) => open < close,
        _ => false,
    }
}

/// First keyword-ish token of the selection: `@` and `*` markers pass
/// through, otherwise the leading word stripped to its alphabetic
/// characters ("Scenario:" reads as "Scenario").
pub fn first_keyword_token(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.starts_with('@') {
        return "@".to_string();
    }
    if trimmed.starts_with('*') {
        return "*".to_string();
    }
    trimmed
        .split_whitespace()
        .next()
        .map(|word| word.chars().filter(|c| c.is_ascii_alphabetic()).collect())
        .unwrap_or_default()
}

pub fn is_supported_extension(extension: &str) -> bool {
    SUPPORTED_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str())
}

/// Reject selections that cannot produce a meaningful validation: empty
/// text, fewer than three words, or a continuation step ("And"/"But"/"*")
/// with no preceding step to give it context.
pub fn check_selection(text: &str) -> Result<(), SelectionError> {
    if text.trim().is_empty() {
        return Err(SelectionError::Empty);
    }
    if text.split_whitespace().count() < MIN_SELECTION_WORDS {
        return Err(SelectionError::TooShort);
    }
    let first = first_keyword_token(text);
    if first.eq_ignore_ascii_case(AND_KEYWORD)
        || first.eq_ignore_ascii_case(BUT_KEYWORD)
        || first == "*"
    {
        return Err(SelectionError::MissingContext);
    }
    Ok(())
}
