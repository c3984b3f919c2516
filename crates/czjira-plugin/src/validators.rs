//! Answer validators.
//!
//! A [`Validator`] is a named, cloneable handle around a pure check of one
//! [`Answer`]. The built-in rules are [`required`], [`integer`],
//! [`integer_list`] and [`minimum_length`]; [`all_of`] chains several of them
//! and stops at the first failure.

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, LazyLock};

use czjira_commit::Answer;
use regex::Regex;
use serde::{Serialize, Serializer};
use thiserror::Error;

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+$").expect("invalid regex"));

static NOT_INTEGER_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\d,\s]").expect("invalid regex"));

/// Reason an answer was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The answer is empty.
    #[error("Answer is required.")]
    Required,

    /// The answer is not an integer.
    #[error("Value must be integer.")]
    NotInteger,

    /// The answer holds something other than digits, commas and whitespace.
    #[error("All values must be integer.")]
    NotIntegerList,

    /// The trimmed answer is shorter than `minimum` characters.
    #[error("Minimum length for this field is {minimum}")]
    TooShort {
        /// Required minimum length.
        minimum: usize,
    },
}

/// Result of validating one answer.
pub type ValidationResult = Result<(), ValidationError>;

type Check = dyn Fn(&Answer) -> ValidationResult + Send + Sync;

/// A named answer validator.
#[derive(Clone)]
pub struct Validator {
    name: Cow<'static, str>,
    check: Arc<Check>,
}

impl Validator {
    /// Creates a validator from a check function.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        F: Fn(&Answer) -> ValidationResult + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    /// Returns the validator name (e.g. `all_of[required, integer]`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Checks an answer.
    ///
    /// # Errors
    ///
    /// Returns the reason the answer was rejected.
    pub fn validate(&self, answer: &Answer) -> ValidationResult {
        (self.check)(answer)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Validator").field(&self.name).finish()
    }
}

impl Serialize for Validator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

/// Rejects null and empty answers.
#[must_use]
pub fn required() -> Validator {
    Validator::new("required", |answer| {
        if answer.is_empty() {
            Err(ValidationError::Required)
        } else {
            Ok(())
        }
    })
}

/// Accepts empty answers and base-10 integers, surrounding whitespace allowed.
#[must_use]
pub fn integer() -> Validator {
    Validator::new("integer", |answer| match answer {
        Answer::Null | Answer::Integer(_) => Ok(()),
        Answer::Bool(_) => Err(ValidationError::NotInteger),
        Answer::Text(text) if text.is_empty() || INTEGER.is_match(text.trim()) => Ok(()),
        Answer::Text(_) => Err(ValidationError::NotInteger),
    })
}

/// Accepts empty answers and text made only of digits, commas and whitespace.
///
/// This is a character check, not a per-item parse: `"1,,2"` passes.
#[must_use]
pub fn integer_list() -> Validator {
    Validator::new("integer_list", |answer| match answer {
        Answer::Null | Answer::Integer(_) => Ok(()),
        Answer::Bool(_) => Err(ValidationError::NotIntegerList),
        Answer::Text(text) if NOT_INTEGER_LIST.is_match(text) => {
            Err(ValidationError::NotIntegerList)
        }
        Answer::Text(_) => Ok(()),
    })
}

/// Rejects answers whose trimmed length is below `minimum` characters.
#[must_use]
pub fn minimum_length(minimum: usize) -> Validator {
    Validator::new(format!("minimum_length({minimum})"), move |answer| {
        let length = answer
            .as_text()
            .map_or(0, |text| text.trim().chars().count());

        if length < minimum {
            Err(ValidationError::TooShort { minimum })
        } else {
            Ok(())
        }
    })
}

/// Runs validators in order and returns the first failure.
///
/// Validators after a failing one are not evaluated.
#[must_use]
pub fn all_of(validators: Vec<Validator>) -> Validator {
    let names: Vec<&str> = validators.iter().map(Validator::name).collect();
    let name = format!("all_of[{}]", names.join(", "));

    Validator::new(name, move |answer| {
        validators
            .iter()
            .try_for_each(|validator| validator.validate(answer))
    })
}
