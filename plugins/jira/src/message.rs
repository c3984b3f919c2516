//! Commit message rendering.

use czjira_commit::{AnswerSet, BREAKING_CHANGE};

use crate::JiraConfig;
use crate::fields;

/// Renders validated answers into a commit message.
///
/// ```text
/// type(scope)!: title [KEY-1]
///
/// BREAKING CHANGE: description
///
/// issue epic: [KEY-2]
/// issue subtasks: [KEY-3, KEY-4]
/// issue related tasks: [KEY-5]
///
/// footer
/// ```
///
/// Absent answers drop their block. Answers are not validated again here.
#[must_use]
pub fn format_message(answers: &AnswerSet, config: &JiraConfig) -> String {
    let key = issue_key_prefix(answers, config);
    let issue_number = trimmed(answers, fields::ISSUE_NUMBER).unwrap_or_default();
    let title = normalize_title(&answers.text(fields::COMMIT_TITLE).unwrap_or_default());
    let breaking = answers.flag(fields::IS_BREAKING_CHANGE);

    let mut message = match trimmed(answers, fields::COMMIT_TYPE) {
        Some(commit_type) => {
            let scope = trimmed(answers, fields::COMMIT_SCOPE)
                .map(|scope| format!("({scope})"))
                .unwrap_or_default();
            let bang = if breaking { "!" } else { "" };
            format!("{commit_type}{scope}{bang}: {title} [{key}{issue_number}]")
        }
        None => format!("{title} [{key}{issue_number}]"),
    };

    match answers.text(fields::COMMIT_DESCRIPTION) {
        Some(description) if breaking => {
            message.push_str(&format!("\n\n{BREAKING_CHANGE}: {description}"));
        }
        Some(description) => message.push_str(&format!("\n\n{description}")),
        None if breaking => message.push_str(&format!("\n\n{BREAKING_CHANGE}")),
        None => {}
    }

    let mut issue_block = false;

    if let Some(epic) = trimmed(answers, fields::ISSUE_EPIC_NUMBER) {
        message.push_str(&format!("\n\nissue epic: [{key}{epic}]"));
        issue_block = true;
    }

    if let Some(subtasks) = answers.text(fields::ISSUE_SUBTASKS) {
        let separator = if issue_block { "\n" } else { "\n\n" };
        let list = issue_list(&subtasks, &key);
        message.push_str(&format!("{separator}issue subtasks: [{list}]"));
        issue_block = true;
    }

    if let Some(related) = answers.text(fields::ISSUE_RELATED_TASKS) {
        let separator = if issue_block { "\n" } else { "\n\n" };
        let list = issue_list(&related, &key);
        message.push_str(&format!("{separator}issue related tasks: [{list}]"));
    }

    if let Some(footer) = answers.text(fields::FOOTER) {
        message.push_str(&format!("\n\n{footer}"));
    }

    message.truncate(message.trim_end().len());
    message
}

/// The answered key wins over the configured one; non-empty keys get a `-`.
fn issue_key_prefix(answers: &AnswerSet, config: &JiraConfig) -> String {
    let key = trimmed(answers, fields::JIRA_PROJECT_KEY)
        .or_else(|| config.project_key.clone())
        .unwrap_or_default();

    if key.is_empty() { key } else { format!("{key}-") }
}

fn trimmed(answers: &AnswerSet, field: &str) -> Option<String> {
    answers
        .text(field)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Lower-cases the first character, trims, then drops one trailing period.
fn normalize_title(title: &str) -> String {
    let mut chars = title.chars();
    let lowered: String = match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    };

    let trimmed = lowered.trim();
    trimmed.strip_suffix('.').unwrap_or(trimmed).to_string()
}

/// Splits on commas, trims and de-duplicates in first-seen order.
fn issue_list(raw: &str, key: &str) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for token in raw.split(',').map(str::trim) {
        if !seen.contains(&token) {
            seen.push(token);
        }
    }

    seen.iter()
        .map(|token| format!("{key}{token}"))
        .collect::<Vec<_>>()
        .join(", ")
}
