//! Prompt assembly.

use crate::domain::{RuleSet, StepKind};
use crate::prompt::format::{self, SectionCounter};
use crate::prompt::templates;
use crate::selection;

/// Renders the validation prompt for one selection against a resolved
/// rule set.
///
/// Pure and single-pass: which sections appear is decided by the keywords
/// present in the selection and by which rule fields are populated, and
/// requirement numbers are consumed only by sections that render.
pub struct PromptAssembler<'a> {
    rules: &'a RuleSet,
}

impl<'a> PromptAssembler<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Assemble the full prompt for the selected text.
    ///
    /// `default_validation` is true when no override narrows the rules; it
    /// appends one generic best-practice task chosen by the file-extension
    /// hint. The selection itself is appended last, verbatim, inside the
    /// `INPUT:` wrapper.
    pub fn build_prompt(
        &self,
        selected_text: &str,
        extension: &str,
        default_validation: bool,
    ) -> String {
        let mut blocks = vec![self.context_block(extension, default_validation)];

        if selection::contains_step_keyword(selected_text) {
            if let Some(block) = self.general_requirements_block(selected_text) {
                blocks.push(block);
            }
        }

        for kind in StepKind::ALL {
            if selected_text.contains(kind.keyword()) {
                blocks.push(self.step_block(kind));
            }
        }

        if selection::has_tag_marker(selected_text) {
            if let Some(block) = self.tag_block() {
                blocks.push(block);
            }
        }

        blocks.push(templates::OUTPUT_FORMAT_JSON.to_string());
        blocks.push(format!("{}\n{selected_text}", templates::INPUT_HEADER));

        blocks.join("\n\n")
    }

    /// Context plus the numbered task list, extended by the entities task
    /// and the generic fallback task when they apply.
    fn context_block(&self, extension: &str, default_validation: bool) -> String {
        let mut lines = vec![
            templates::CONTEXT_HEADER.to_string(),
            format!("* {}", self.rules.context),
            String::new(),
            templates::TASKS_HEADER.to_string(),
        ];

        let mut number = 1;
        for task in &self.rules.tasks {
            format::push_numbered(&mut lines, 0, number, task);
            number += 1;
        }
        if !self.rules.entities.is_empty() {
            let task = format!(
                "{}{}",
                templates::ENTITIES_TASK_PREFIX,
                format::comma_list(&self.rules.entities)
            );
            format::push_numbered(&mut lines, 0, number, &task);
            number += 1;
        }
        if default_validation {
            format::push_numbered(&mut lines, 0, number, templates::generic_task(extension));
        }

        lines.join("\n")
    }

    /// Requirements that apply to every step, assembled from the rule
    /// set's `REQUIREMENTS` plus the lines the selection itself calls for.
    fn general_requirements_block(&self, selected_text: &str) -> Option<String> {
        let mut items = self.rules.requirements.clone();
        if !self.rules.perspective.trim().is_empty() {
            items.push(format!(
                "All steps must be written from the point of view of {}.",
                self.rules.perspective.trim()
            ));
        }
        if selected_text.contains(selection::BUT_KEYWORD) {
            items.push(templates::BUT_REQUIREMENT.to_string());
        }
        if selection::has_parameter_placeholder(selected_text) {
            items.push(templates::PLACEHOLDER_REQUIREMENT.to_string());
        }

        if items.is_empty() {
            return None;
        }
        let mut lines = vec![templates::GENERAL_HEADER.to_string()];
        format::push_numbered_list(&mut lines, 0, &items);
        Some(lines.join("\n"))
    }

    /// One step-kind guideline block: the fixed requirement lines, then
    /// the conditional numbered sections (structure, tense, additional
    /// requirements, examples), then the feedback trailer.
    fn step_block(&self, kind: StepKind) -> String {
        let template = templates::step_template(kind);
        let rules = self.rules.step(kind);

        let mut lines = vec![format!("**{}**", template.title)];
        format::push_bullet(&mut lines, 0, &format!("**Data:** {}", template.data_line));
        format::push_bullet(&mut lines, 0, "**Requirements:**");

        let mut counter = SectionCounter::starting_at(1);
        for fixed in template.fixed_requirements {
            format::push_numbered(&mut lines, 1, counter.take(), fixed.heading);
            if let Some(detail) = fixed.detail {
                format::push_bullet(&mut lines, 2, detail);
            }
        }

        if !rules.structure.is_empty() {
            let heading = format!(
                "**Structure (Mandatory):** The {} step should follow one of the \
                 following recommended formats:",
                kind.keyword()
            );
            format::push_numbered(&mut lines, 1, counter.take(), &heading);
            for structure in &rules.structure {
                format::push_quoted_bullet(&mut lines, 2, structure);
            }
        }

        if template.has_tense && !rules.tense.trim().is_empty() {
            format::push_numbered(&mut lines, 1, counter.take(), "**Tense:**");
            format::push_bullet(
                &mut lines,
                2,
                &format!(
                    "Ensure that {} statements are in the {}.",
                    kind.keyword(),
                    rules.tense.trim()
                ),
            );
        }

        if !rules.requirements.is_empty() {
            format::push_numbered(&mut lines, 1, counter.take(), "**Additional Requirements:**");
            for requirement in &rules.requirements {
                format::push_quoted_bullet(&mut lines, 2, requirement);
            }
        }

        if !rules.examples.is_empty() {
            format::push_numbered(&mut lines, 1, counter.take(), "**Examples:**");
            if !rules.examples.valid.is_empty() {
                format::push_bullet(&mut lines, 2, "**Good Examples:**");
                format::push_numbered_list(&mut lines, 3, &rules.examples.valid);
            }
            if !rules.examples.invalid.is_empty() {
                format::push_bullet(&mut lines, 2, "**Bad Examples:**");
                let rendered: Vec<String> = rules
                    .examples
                    .invalid
                    .iter()
                    .map(|bad| {
                        format!(
                            "{} [Reason: {}, Suggestion: {}]",
                            bad.example, bad.reason, bad.suggestion
                        )
                    })
                    .collect();
                format::push_numbered_list(&mut lines, 3, &rendered);
            }
        }

        let configured_feedback: &[String] =
            if template.configurable_feedback { rules.feedback.as_slice() } else { &[] };
        if !template.fixed_feedback.is_empty() || !configured_feedback.is_empty() {
            format::push_bullet(&mut lines, 0, "**Suggestions/Feedback:**");
            let mut feedback_number = 1;
            for hint in template.fixed_feedback {
                format::push_numbered(&mut lines, 1, feedback_number, hint);
                feedback_number += 1;
            }
            for hint in configured_feedback {
                format::push_numbered(&mut lines, 1, feedback_number, hint);
                feedback_number += 1;
            }
        }

        format::strip_blank_lines(&lines.join("\n"))
    }

    /// Tag guidelines carry requirements only, no structure, tense, or
    /// examples. The block is dropped entirely when nothing is configured.
    fn tag_block(&self) -> Option<String> {
        if self.rules.tag.requirements.is_empty() {
            return None;
        }
        let mut lines = vec![format!("**{}**", templates::TAG_TITLE)];
        format::push_bullet(&mut lines, 0, &format!("**Data:** {}", templates::TAG_DATA_LINE));
        format::push_bullet(&mut lines, 0, "**Requirements:**");
        format::push_numbered_list(&mut lines, 1, &self.rules.tag.requirements);
        Some(lines.join("\n"))
    }
}
