//! Answers collected for one commit-message authoring session.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single answer as produced by the host's prompt loop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// No answer (skipped question).
    #[default]
    Null,

    /// Answer to a confirm question.
    Bool(bool),

    /// Numeric answer.
    Integer(i64),

    /// Free text, selected choice or multiline answer.
    Text(String),
}

impl Answer {
    /// Returns the textual view of the answer, `None` for [`Answer::Null`].
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Null => None,
            Self::Bool(value) => Some(Cow::Owned(value.to_string())),
            Self::Integer(value) => Some(Cow::Owned(value.to_string())),
            Self::Text(value) => Some(Cow::Borrowed(value)),
        }
    }

    /// Returns true for a null answer or an empty text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(value) => value.is_empty(),
            Self::Bool(_) | Self::Integer(_) => false,
        }
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Answer {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl<T: Into<Answer>> From<Option<T>> for Answer {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Mapping from question name to answer.
///
/// Missing fields read as [`Answer::Null`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<String, Answer>,
}

impl AnswerSet {
    /// Creates an empty answer set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an answer, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, answer: impl Into<Answer>) -> Self {
        self.insert(name, answer);
        self
    }

    /// Sets an answer, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, answer: impl Into<Answer>) {
        self.answers.insert(name.into(), answer.into());
    }

    /// Returns the raw answer for a field.
    #[must_use]
    pub fn get(&self, name: &str) -> &Answer {
        const NULL: &Answer = &Answer::Null;
        self.answers.get(name).unwrap_or(NULL)
    }

    /// Returns the answer text, or `None` when the answer is absent or empty.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).as_text().filter(|text| !text.is_empty())
    }

    /// Returns the answer as a boolean flag.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        match self.get(name) {
            Answer::Null => false,
            Answer::Bool(value) => *value,
            Answer::Integer(value) => *value != 0,
            Answer::Text(value) => matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "true" | "yes" | "y"
            ),
        }
    }

    /// Iterates over the answers in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.answers.iter().map(|(name, answer)| (name.as_str(), answer))
    }

    /// Returns the number of answers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Returns true if no answer was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl<K: Into<String>, V: Into<Answer>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, answer) in iter {
            set.insert(name, answer);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_is_null() {
        let answers = AnswerSet::new();
        assert_eq!(answers.get("issue_number"), &Answer::Null);
        assert!(answers.text("issue_number").is_none());
        assert!(!answers.flag("is_breaking_change"));
    }

    #[test]
    fn test_empty_text_is_absent() {
        let answers = AnswerSet::new().with("footer", "");
        assert!(answers.text("footer").is_none());
        assert!(answers.get("footer").is_empty());
    }

    #[test]
    fn test_integer_as_text() {
        let answers = AnswerSet::new().with("issue_number", 1032_i64);
        assert_eq!(answers.text("issue_number").as_deref(), Some("1032"));
    }

    #[test]
    fn test_none_becomes_null() {
        let answers = AnswerSet::new().with("footer", None::<&str>);
        assert_eq!(answers.get("footer"), &Answer::Null);
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn test_flag_variants() {
        let answers = AnswerSet::new()
            .with("a", true)
            .with("b", false)
            .with("c", "yes")
            .with("d", "no")
            .with("e", 1_i64);

        assert!(answers.flag("a"));
        assert!(!answers.flag("b"));
        assert!(answers.flag("c"));
        assert!(!answers.flag("d"));
        assert!(answers.flag("e"));
    }

    #[test]
    fn test_from_iterator() {
        let answers: AnswerSet = [("commit_type", "feat"), ("commit_title", "add X")]
            .into_iter()
            .collect();
        assert_eq!(answers.len(), 2);
        assert_eq!(answers.text("commit_type").as_deref(), Some("feat"));
    }

    #[test]
    fn test_deserialize_json() {
        let json = r#"{
            "jira_project_key": null,
            "issue_number": "1032",
            "issue_epic_number": 959,
            "is_breaking_change": true
        }"#;
        let answers: AnswerSet = serde_json::from_str(json).unwrap();

        assert_eq!(answers.get("jira_project_key"), &Answer::Null);
        assert_eq!(answers.get("issue_number"), &Answer::from("1032"));
        assert_eq!(answers.get("issue_epic_number"), &Answer::Integer(959));
        assert!(answers.flag("is_breaking_change"));
    }

    #[test]
    fn test_deserialize_toml() {
        let toml = r#"
            issue_number = "42"
            commit_title = "Fix the thing"
            is_breaking_change = false
        "#;
        let answers: AnswerSet = toml::from_str(toml).unwrap();

        assert_eq!(answers.text("commit_title").as_deref(), Some("Fix the thing"));
        assert!(!answers.flag("is_breaking_change"));
    }

    #[test]
    fn test_iter_sorted_by_name() {
        let answers = AnswerSet::new().with("b", "2").with("a", "1");
        let names: Vec<_> = answers.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
