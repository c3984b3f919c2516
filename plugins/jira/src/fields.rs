//! Answer-set field names, one per question.

pub const JIRA_PROJECT_KEY: &str = "jira_project_key";
pub const ISSUE_EPIC_NUMBER: &str = "issue_epic_number";
pub const ISSUE_NUMBER: &str = "issue_number";
pub const ISSUE_SUBTASKS: &str = "issue_subtasks";
pub const ISSUE_RELATED_TASKS: &str = "issue_related_tasks";
pub const COMMIT_TYPE: &str = "commit_type";
pub const COMMIT_SCOPE: &str = "commit_scope";
pub const COMMIT_TITLE: &str = "commit_title";
pub const COMMIT_DESCRIPTION: &str = "commit_description";
pub const IS_BREAKING_CHANGE: &str = "is_breaking_change";
pub const FOOTER: &str = "footer";

/// Every field, in question order.
pub const ALL: [&str; 11] = [
    JIRA_PROJECT_KEY,
    ISSUE_EPIC_NUMBER,
    ISSUE_NUMBER,
    ISSUE_SUBTASKS,
    ISSUE_RELATED_TASKS,
    COMMIT_TYPE,
    COMMIT_SCOPE,
    COMMIT_TITLE,
    COMMIT_DESCRIPTION,
    IS_BREAKING_CHANGE,
    FOOTER,
];
