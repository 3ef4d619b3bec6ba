use std::fmt;
use std::str::FromStr;

use crate::{Question, QuestionKind, QuestionTypeError};

/// Canonical identity of a question variant.
///
/// A question's type travels through wire data as a string and through
/// internal fast paths as a small integer index into the fixed variant list
/// `[Text, MultipleChoice, Likert]`. This enum is the single source of truth
/// keeping the two representations from drifting: every form normalizes to
/// the same value, and unknown references fail loudly instead of defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionType {
    Text,
    MultipleChoice,
    Likert,
}

impl QuestionType {
    /// All question types, in canonical order. A type's integer form is its
    /// position in this list.
    pub const ALL: [Self; 3] = [Self::Text, Self::MultipleChoice, Self::Likert];

    /// The canonical name, e.g. `"text_question"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text_question",
            Self::MultipleChoice => "multiple_choice_question",
            Self::Likert => "likert_question",
        }
    }

    /// The position of this type in [`Self::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::Text => 0,
            Self::MultipleChoice => 1,
            Self::Likert => 2,
        }
    }

    /// Look up a type by its integer form.
    pub fn from_index(index: usize) -> Result<Self, QuestionTypeError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(QuestionTypeError::IndexOutOfRange(index))
    }
}

impl From<&QuestionKind> for QuestionType {
    fn from(kind: &QuestionKind) -> Self {
        match kind {
            QuestionKind::Text => Self::Text,
            QuestionKind::MultipleChoice(_) => Self::MultipleChoice,
            QuestionKind::Likert(_) => Self::Likert,
        }
    }
}

impl From<&Question> for QuestionType {
    fn from(question: &Question) -> Self {
        Self::from(question.kind())
    }
}

impl FromStr for QuestionType {
    type Err = QuestionTypeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|question_type| question_type.name() == name)
            .ok_or_else(|| QuestionTypeError::UnknownName(name.to_owned()))
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compare against the string form.
impl PartialEq<str> for QuestionType {
    fn eq(&self, other: &str) -> bool {
        self.name() == other
    }
}

impl PartialEq<&str> for QuestionType {
    fn eq(&self, other: &&str) -> bool {
        self.name() == *other
    }
}

impl PartialEq<String> for QuestionType {
    fn eq(&self, other: &String) -> bool {
        self.name() == other
    }
}

/// Compare against the integer form.
impl PartialEq<usize> for QuestionType {
    fn eq(&self, other: &usize) -> bool {
        self.index() == *other
    }
}
