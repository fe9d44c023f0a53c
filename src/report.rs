//! Validation-reply parsing.
//!
//! Models wrap the JSON report in prose or code fences, so the parser
//! recovers the outermost array before deserializing. A reply element
//! missing required fields degrades to an `Invalid` record naming what
//! was missing instead of failing the whole batch.

use crate::domain::ValidationRecord;
use crate::error::ReportError;
use serde_json::Value;

pub const STATUS_VALID: &str = "Valid";
pub const STATUS_INVALID: &str = "Invalid";

const PROPERTY_TITLE: &str = "Title";
const PROPERTY_STATUS: &str = "Status";
const PROPERTY_REASON: &str = "Reason";
const PROPERTY_SUGGESTION: &str = "Suggestion";

const REQUIRED_FIELDS: [&str; 4] = ["title", "status", "reason", "suggestion"];

/// Parse the model's reply into one record per validated line.
pub fn parse_reply(reply: &str) -> Result<Vec<ValidationRecord>, ReportError> {
    let json = extract_array(reply).ok_or(ReportError::NoJsonArray)?;
    let parsed: Value = serde_json::from_str(json)?;
    let Value::Array(items) = parsed else {
        return Err(ReportError::NoJsonArray);
    };
    Ok(items.iter().map(record_from_item).collect())
}

/// The `Title|…` / `Status|…` console layout the host prints.
pub fn format_records(records: &[ValidationRecord]) -> String {
    let mut output = String::new();
    for record in records {
        output.push_str(&format!("{PROPERTY_TITLE}|{}\n", record.title));
        output.push_str(&format!("{PROPERTY_STATUS}|{}\n", record.status));
        output.push_str(&format!("{PROPERTY_REASON}|{}\n", record.reason));
        output.push_str(&format!("{PROPERTY_SUGGESTION}|{}\n", record.suggestion));
        output.push('\n');
    }
    output
}

/// Slice out the outermost `[` … `]` span.
fn extract_array(reply: &str) -> Option<&str> {
    let open = reply.find('[')?;
    let close = reply.rfind(']')?;
    (open < close).then(|| &reply[open..=close])
}

fn record_from_item(item: &Value) -> ValidationRecord {
    let title = text_field(item, "title");
    let status = text_field(item, "status");
    let reason = text_field(item, "reason");
    let suggestion = text_field(item, "suggestion");

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .zip([&title, &status, &reason, &suggestion])
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| *field)
        .collect();

    if !missing.is_empty() {
        return ValidationRecord {
            title: if title.trim().is_empty() { "Unknown".to_string() } else { title },
            status: STATUS_INVALID.to_string(),
            reason: format!("Missing required field(s): {}", missing.join(", ")),
            suggestion: "Ensure the validation reply carries title/status/reason/suggestion \
                         for each item."
                .to_string(),
        };
    }

    ValidationRecord { title, status, reason, suggestion }
}

fn text_field(item: &Value, field: &str) -> String {
    item.get(field).and_then(Value::as_str).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_clean_reply() {
        let reply = r#"[
            {"title": "Given a user exists", "status": "Valid", "reason": "NA", "suggestion": "Valid syntax"},
            {"title": "When user login", "status": "Invalid", "reason": "Missing article", "suggestion": "When the user logs in"}
        ]"#;

        let records = parse_reply(reply).expect("parse");
        assert_eq!(records.len(), 2);
        assert!(records[0].is_valid());
        assert_eq!(records[1].status, STATUS_INVALID);
        assert_eq!(records[1].suggestion, "When the user logs in");
    }

    #[test]
    fn recovers_the_array_from_fenced_prose() {
        let reply = "Here is the report:\n```json\n[{\"title\": \"t\", \"status\": \"Valid\", \
                     \"reason\": \"NA\", \"suggestion\": \"Valid syntax\"}]\n```\nDone.";
        let records = parse_reply(reply).expect("parse");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "t");
    }

    #[test]
    fn missing_fields_degrade_to_invalid_records() {
        let reply = r#"[{"title": "Given a user exists", "status": "Valid"}]"#;
        let records = parse_reply(reply).expect("parse");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, STATUS_INVALID);
        assert_eq!(records[0].reason, "Missing required field(s): reason, suggestion");
        assert_eq!(records[0].title, "Given a user exists");
    }

    #[test]
    fn fully_empty_item_reports_unknown_title() {
        let records = parse_reply("[{}]").expect("parse");
        assert_eq!(records[0].title, "Unknown");
        assert!(records[0].reason.contains("title, status, reason, suggestion"));
    }

    #[test]
    fn reply_without_an_array_is_an_error() {
        assert!(matches!(parse_reply("no json here"), Err(ReportError::NoJsonArray)));
        assert!(matches!(parse_reply("{\"not\": \"an array\"}"), Err(ReportError::NoJsonArray)));
    }

    #[test]
    fn unbalanced_json_is_an_error() {
        assert!(matches!(parse_reply("[{\"title\": "), Err(ReportError::NoJsonArray)));
        assert!(matches!(parse_reply("[{\"title\"]"), Err(ReportError::InvalidJson(_))));
    }

    #[test]
    fn formats_records_in_console_layout() {
        let records = vec![ValidationRecord {
            title: "Given a user exists".to_string(),
            status: STATUS_VALID.to_string(),
            reason: "NA".to_string(),
            suggestion: "Valid syntax".to_string(),
        }];
        let formatted = format_records(&records);
        assert_eq!(
            formatted,
            "Title|Given a user exists\nStatus|Valid\nReason|NA\nSuggestion|Valid syntax\n\n"
        );
    }
}
