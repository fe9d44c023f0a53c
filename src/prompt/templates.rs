//! Fixed prompt text.
//!
//! Everything configurable lives in the rule files; this module holds the
//! scaffolding that never changes: block headers, the always-present
//! requirement lines of each step-kind block, the generic fallback tasks,
//! and the report-format instructions sent with every prompt.

use crate::domain::StepKind;

pub const CONTEXT_HEADER: &str = "**CONTEXT**";
pub const TASKS_HEADER: &str = "**TASKS**";
pub const GENERAL_HEADER: &str = "**GENERAL STEP REQUIREMENTS**";
pub const INPUT_HEADER: &str = "**INPUT:**";

pub const TAG_TITLE: &str = "TAG GUIDELINES";
pub const TAG_DATA_LINE: &str = "The line starts with \"@\" or the keyword \"Meta\".";

/// Task appended when the rule set names an entity vocabulary.
pub const ENTITIES_TASK_PREFIX: &str =
    "Ensure that the entities used in the Gherkin steps are from the following list: ";

const GENERIC_TASK_CUCUMBER: &str = "Ensure that the Gherkin syntax is validated based on the \
                                     best Cucumber BDD recommended format.";
const GENERIC_TASK_JBEHAVE: &str = "Ensure that the Gherkin syntax is validated based on the \
                                    best JBehave BDD recommended format.";
const GENERIC_TASK_ANY: &str = "Ensure that the Gherkin syntax is validated based on the best \
                                Cucumber BDD or JBehave BDD recommended format.";

/// Pick the generic fallback validation task for a file-extension hint:
/// `.feature` files validate against Cucumber conventions, `.story` files
/// against JBehave, anything else against both.
pub fn generic_task(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "feature" => GENERIC_TASK_CUCUMBER,
        "story" => GENERIC_TASK_JBEHAVE,
        _ => GENERIC_TASK_ANY,
    }
}

/// Appended to the general requirements when the selection uses "But".
pub const BUT_REQUIREMENT: &str = "Use \"But\" only to express a negative outcome of the step \
                                   it follows, and place it directly after the Given, When, or \
                                   Then step it qualifies.";

/// Appended to the general requirements when the selection carries
/// `<parameter>` placeholders.
pub const PLACEHOLDER_REQUIREMENT: &str = "Steps using \"<parameter>\" placeholders must be \
                                           backed by an \"Examples:\" section that defines a \
                                           column for every placeholder.";

/// An always-present requirement line: a heading plus an optional indented
/// detail bullet.
pub struct FixedRequirement {
    pub heading: &'static str,
    pub detail: Option<&'static str>,
}

/// The non-configurable scaffold of one step-kind guideline block.
pub struct StepTemplate {
    pub title: &'static str,
    pub data_line: &'static str,
    pub fixed_requirements: &'static [FixedRequirement],
    pub fixed_feedback: &'static [&'static str],
    pub has_tense: bool,
    /// Whether configured `feedback` entries extend the fixed hints
    /// (Given and When only).
    pub configurable_feedback: bool,
}

pub fn step_template(kind: StepKind) -> &'static StepTemplate {
    match kind {
        StepKind::Scenario => &SCENARIO_TEMPLATE,
        StepKind::Given => &GIVEN_TEMPLATE,
        StepKind::When => &WHEN_TEMPLATE,
        StepKind::Then => &THEN_TEMPLATE,
    }
}

static SCENARIO_TEMPLATE: StepTemplate = StepTemplate {
    title: "SCENARIO GUIDELINES",
    data_line: "The line starts with \"Scenario:\".",
    fixed_requirements: &[
        FixedRequirement {
            heading: "**Syntax:**",
            detail: Some("The scenario title must begin with the keyword \"Scenario:\"."),
        },
        FixedRequirement {
            heading: "**Clarity and Conciseness:**",
            detail: Some(
                "The scenario title should clearly communicate the scenario's purpose \
                 without unnecessary details.",
            ),
        },
    ],
    fixed_feedback: &[],
    has_tense: false,
    configurable_feedback: false,
};

static GIVEN_TEMPLATE: StepTemplate = StepTemplate {
    title: "GIVEN STEP GUIDELINES",
    data_line: "The line starts with \"Given\" or the previous line started with \"Given\" \
                and the current line starts with \"And\".",
    fixed_requirements: &[FixedRequirement {
        heading: "Given statements should establish context for the scenario.",
        detail: None,
    }],
    fixed_feedback: &["Remind users that Given steps establish preconditions that exist \
                       before the scenario begins."],
    has_tense: true,
    configurable_feedback: true,
};

static WHEN_TEMPLATE: StepTemplate = StepTemplate {
    title: "WHEN STEP GUIDELINES",
    data_line: "The line starts with \"When\" or the previous line started with \"When\" \
                and the current line starts with \"And\".",
    fixed_requirements: &[],
    fixed_feedback: &["Ensure When steps are focused on actions being taken in the current \
                       context."],
    has_tense: true,
    configurable_feedback: true,
};

static THEN_TEMPLATE: StepTemplate = StepTemplate {
    title: "THEN STEP GUIDELINES",
    data_line: "The line starts with \"Then\" or the previous line started with \"Then\" \
                and the current line starts with \"And\".",
    fixed_requirements: &[FixedRequirement {
        heading: "**Matching Actions:**",
        detail: Some(
            "The action mentioned in the Then step should correspond to the action \
             performed in the preceding When step.",
        ),
    }],
    fixed_feedback: &["Ensure Then steps describe the resulting state or change caused by \
                       the action."],
    has_tense: true,
    configurable_feedback: false,
};

/// Report-format instructions appended to every prompt, verbatim.
pub const OUTPUT_FORMAT_JSON: &str = r#"**VALIDATION REPORT FORMAT (JSON STRUCTURE):**
* The output for the Gherkin validation report must be structured as a JSON array containing objects for each line (Scenario or step) in the Gherkin syntax.
* These objects must be parsable by standard JSON parsers.
* Each object will have the following properties:
    1. **title (string, required):** The title of the line. For Scenario lines, it should be the scenario name; for Given, When, Then, And steps, it should be the actual step text.
    2. **status (string, required):** Must be either "Valid" or "Invalid", indicating the validation result for the line.
    3. **reason (string, required):** A brief explanation for why the line is invalid. Use "NA" for valid lines.
    4. **suggestion (string, required):**
        - For invalid lines:
            - Provide the corrected title of the line following the given standards.
        - For valid lines:
            - "Valid syntax": Indicates the line adheres to the Gherkin syntax.
            - "Consider refactoring": Suggests potential improvements to the line, even though it's syntactically valid (e.g., clearer wording, better keyword usage).
            - "[Specific suggestion]": Offers a tailored suggestion for improvement (e.g., "Replace 'then' with 'and' for a better flow").
* **Example:**
    ```json
    [
      {
        "title": "Scenario: Search Morningstar Indexes with valid parameters",
        "status": "Valid",
        "reason": "NA",
        "suggestion": "Valid syntax"
      },
      {
        "title": "Given an user is navigated to the morningstar index page",
        "status": "Invalid",
        "reason": "Missing 'a' before 'user'",
        "suggestion": "Given a user is navigated to the morningstar index page"
      }
    ]
    ```"#;
