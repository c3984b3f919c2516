//! Question definitions handed to the host's prompt loop.

use czjira_commit::Answer;
use serde::Serialize;

use crate::Validator;

/// How a question is asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Single-line free text.
    Input,
    /// Pick one of [`Question::choices`].
    Select,
    /// Multi-line free text.
    Multiline,
    /// Yes/no.
    Confirm,
}

/// A selectable option of a [`QuestionKind::Select`] question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    /// Value stored in the answer set.
    pub value: String,
    /// Label shown to the user.
    pub name: String,
}

/// One field descriptor; its `name` is the answer-set key.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub name: &'static str,
    pub kind: QuestionKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Answer>,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validator: Option<Validator>,
}

impl Question {
    /// Creates an optional question without instruction or validator.
    #[must_use]
    pub fn new(name: &'static str, kind: QuestionKind, message: impl Into<String>) -> Self {
        Self {
            name,
            kind,
            message: message.into(),
            instruction: None,
            choices: Vec::new(),
            default: None,
            required: false,
            validator: None,
        }
    }

    /// Sets the instruction shown next to the prompt.
    #[must_use]
    pub fn instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = Some(instruction.into());
        self
    }

    /// Sets the choices of a select question.
    #[must_use]
    pub fn choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = choices;
        self
    }

    /// Sets the default answer.
    #[must_use]
    pub fn default_answer(mut self, answer: impl Into<Answer>) -> Self {
        self.default = Some(answer.into());
        self
    }

    /// Marks the question as required.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Attaches a validator.
    #[must_use]
    pub fn validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Validates an answer against this question's validator, if any.
    ///
    /// # Errors
    ///
    /// Returns the validator's failure reason.
    pub fn validate(&self, answer: &Answer) -> crate::ValidationResult {
        self.validator
            .as_ref()
            .map_or(Ok(()), |validator| validator.validate(answer))
    }
}
