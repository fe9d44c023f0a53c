//! Typed rule configuration and validation records.
//!
//! The merged rule tree is parsed into [`RuleSet`] exactly once, right
//! after merging; everything downstream works with plain fields and
//! `is_empty()` checks instead of probing a dynamic tree. Parsing is
//! lenient by contract: a field of the wrong shape (a string where a list
//! is expected, a list holding non-strings) reads as absent, never as an
//! error. Only the bundled default resource is allowed to hard-fail, and
//! that happens at the loader, not here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The four structured step categories, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Scenario,
    Given,
    When,
    Then,
}

impl StepKind {
    pub const ALL: [StepKind; 4] = [StepKind::Scenario, StepKind::Given, StepKind::When, StepKind::Then];

    /// The keyword whose presence in the selection pulls in this kind's block.
    pub fn keyword(self) -> &'static str {
        match self {
            StepKind::Scenario => "Scenario",
            StepKind::Given => "Given",
            StepKind::When => "When",
            StepKind::Then => "Then",
        }
    }
}

/// The resolved rule tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    pub context: String,
    pub tasks: Vec<String>,
    pub entities: Vec<String>,
    pub requirements: Vec<String>,
    pub perspective: String,
    pub scenario: StepRules,
    pub given: StepRules,
    pub when: StepRules,
    pub then: StepRules,
    pub tag: TagRules,
}

impl RuleSet {
    /// Parse a merged rule tree. Missing or malformed fields read as empty.
    pub fn from_value(tree: &Value) -> Self {
        Self {
            context: string_field(tree.get("CONTEXT")),
            tasks: string_list(tree.get("TASKS")),
            entities: string_list(tree.get("ENTITIES")),
            requirements: string_list(tree.get("REQUIREMENTS")),
            perspective: string_field(tree.get("PERSPECTIVE")),
            scenario: StepRules::from_value(tree.get("SCENARIO")),
            given: StepRules::from_value(tree.get("GIVEN")),
            when: StepRules::from_value(tree.get("WHEN")),
            then: StepRules::from_value(tree.get("THEN")),
            tag: TagRules::from_value(tree.get("TAG")),
        }
    }

    pub fn step(&self, kind: StepKind) -> &StepRules {
        match kind {
            StepKind::Scenario => &self.scenario,
            StepKind::Given => &self.given,
            StepKind::When => &self.when,
            StepKind::Then => &self.then,
        }
    }
}

/// Per-step-kind guideline fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepRules {
    pub structure: Vec<String>,
    pub requirements: Vec<String>,
    pub tense: String,
    pub examples: ExampleSet,
    pub feedback: Vec<String>,
}

impl StepRules {
    fn from_value(value: Option<&Value>) -> Self {
        Self {
            structure: string_list(value.and_then(|v| v.get("structure"))),
            requirements: string_list(value.and_then(|v| v.get("requirements"))),
            tense: string_field(value.and_then(|v| v.get("tense"))),
            examples: ExampleSet::from_value(value.and_then(|v| v.get("examples"))),
            feedback: string_list(value.and_then(|v| v.get("feedback"))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExampleSet {
    pub valid: Vec<String>,
    pub invalid: Vec<BadExample>,
}

impl ExampleSet {
    fn from_value(value: Option<&Value>) -> Self {
        Self {
            valid: string_list(value.and_then(|v| v.get("valid"))),
            invalid: value
                .and_then(|v| v.get("invalid"))
                .and_then(Value::as_array)
                .map(|items| items.iter().filter_map(BadExample::from_value).collect())
                .unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.valid.is_empty() && self.invalid.is_empty()
    }
}

/// A counter-example with its diagnosis. Overrides sometimes supply only
/// the example text; the missing pieces render as empty rather than
/// dropping the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadExample {
    pub example: String,
    pub reason: String,
    pub suggestion: String,
}

impl BadExample {
    fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        Some(Self {
            example: string_field(value.get("example")),
            reason: string_field(value.get("reason")),
            suggestion: string_field(value.get("suggestion")),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRules {
    pub requirements: Vec<String>,
}

impl TagRules {
    fn from_value(value: Option<&Value>) -> Self {
        Self { requirements: string_list(value.and_then(|v| v.get("requirements"))) }
    }
}

/// One per-line verdict from the model's validation report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRecord {
    pub title: String,
    pub status: String,
    pub reason: String,
    pub suggestion: String,
}

impl ValidationRecord {
    pub fn is_valid(&self) -> bool {
        self.status.eq_ignore_ascii_case(crate::report::STATUS_VALID)
    }
}

fn string_field(value: Option<&Value>) -> String {
    value.and_then(Value::as_str).unwrap_or_default().to_string()
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items.iter().filter_map(|item| item.as_str().map(str::to_string)).collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_full_tree() {
        let tree = json!({
            "CONTEXT": "ctx",
            "TASKS": ["t1", "t2"],
            "ENTITIES": ["User"],
            "REQUIREMENTS": ["r1"],
            "PERSPECTIVE": "tester",
            "GIVEN": {
                "structure": ["s1"],
                "requirements": ["gr1"],
                "tense": "past tense",
                "examples": {
                    "valid": ["good"],
                    "invalid": [{"example": "bad", "reason": "why", "suggestion": "fix"}]
                },
                "feedback": ["fb"]
            },
            "TAG": {"requirements": ["tag rule"]}
        });

        let rules = RuleSet::from_value(&tree);
        assert_eq!(rules.context, "ctx");
        assert_eq!(rules.tasks, vec!["t1", "t2"]);
        assert_eq!(rules.entities, vec!["User"]);
        assert_eq!(rules.perspective, "tester");
        assert_eq!(rules.given.structure, vec!["s1"]);
        assert_eq!(rules.given.tense, "past tense");
        assert_eq!(rules.given.examples.valid, vec!["good"]);
        assert_eq!(rules.given.examples.invalid[0].reason, "why");
        assert_eq!(rules.given.feedback, vec!["fb"]);
        assert_eq!(rules.tag.requirements, vec!["tag rule"]);
        // Absent step kinds read as empty, not as errors.
        assert!(rules.when.structure.is_empty());
        assert!(rules.scenario.examples.is_empty());
    }

    #[test]
    fn malformed_fields_read_as_absent() {
        let tree = json!({
            "CONTEXT": 42,
            "TASKS": "not a list",
            "ENTITIES": [1, 2, "User"],
            "GIVEN": "not an object",
            "WHEN": {"structure": {"nested": true}, "tense": ["list"]},
        });

        let rules = RuleSet::from_value(&tree);
        assert_eq!(rules.context, "");
        assert!(rules.tasks.is_empty());
        assert_eq!(rules.entities, vec!["User"]);
        assert_eq!(rules.given, StepRules::default());
        assert!(rules.when.structure.is_empty());
        assert_eq!(rules.when.tense, "");
    }

    #[test]
    fn bad_example_defaults_missing_fields_to_empty() {
        let tree = json!({
            "SCENARIO": {"examples": {"invalid": [{"example": "Bad example"}, "not an object"]}}
        });

        let rules = RuleSet::from_value(&tree);
        assert_eq!(rules.scenario.examples.invalid.len(), 1);
        let bad = &rules.scenario.examples.invalid[0];
        assert_eq!(bad.example, "Bad example");
        assert_eq!(bad.reason, "");
        assert_eq!(bad.suggestion, "");
    }
}
