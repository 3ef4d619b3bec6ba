use crate::QuestionType;

/// A single question in a survey.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// 1-based position among the owning survey's questions; 0 while unattached.
    index: usize,

    /// The prompt text shown to the respondent.
    content: String,

    /// The kind of question (determines input widget and answer shape).
    kind: QuestionKind,
}

impl Question {
    /// Content given to a question before the author edits it.
    pub const DEFAULT_CONTENT: &'static str = "Untitled Question";

    /// Create a new, unattached question.
    ///
    /// The owning survey assigns the index when the question is added to it.
    pub fn new(content: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            index: 0,
            content: content.into(),
            kind,
        }
    }

    /// Create a free-form text question.
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(content, QuestionKind::Text)
    }

    /// Create a multiple-choice question with the given choices.
    pub fn multiple_choice(
        content: impl Into<String>,
        choices: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(
            content,
            QuestionKind::MultipleChoice(MultipleChoiceQuestion::new(choices)),
        )
    }

    /// Create a Likert-scale question.
    pub fn likert(content: impl Into<String>, scale: LikertQuestion) -> Self {
        Self::new(content, QuestionKind::Likert(scale))
    }

    /// Get the 1-based position among the owning survey's questions.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Assign the 1-based position. Called by the owning survey, which
    /// reassigns indices wholesale whenever its question set changes.
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Get the prompt text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the prompt text.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Get a mutable reference to the question kind.
    pub fn kind_mut(&mut self) -> &mut QuestionKind {
        &mut self.kind
    }

    /// Get the canonical type of this question.
    pub fn question_type(&self) -> QuestionType {
        QuestionType::from(&self.kind)
    }

    /// Check if this question still has placeholder content.
    pub fn is_blank(&self) -> bool {
        self.content.is_empty() || self.content == Self::DEFAULT_CONTENT
    }
}

/// The kind of question, determining input widget and answer shape.
///
/// This is a closed set: Text, MultipleChoice and Likert are the only three
/// question kinds. See [`QuestionType`] for the canonical identity that
/// travels through wire data and integer fast paths.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// Free-form text answer.
    Text,

    /// Pick one of a fixed list of choices.
    MultipleChoice(MultipleChoiceQuestion),

    /// Rate on a numeric scale with labeled points.
    Likert(LikertQuestion),
}

impl QuestionKind {
    /// Check if this is a free-form text question.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }

    /// Check if this question offers a fixed set of answers to choose from.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::MultipleChoice(_) | Self::Likert(_))
    }
}

/// Configuration for a multiple-choice question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipleChoiceQuestion {
    /// The answers offered to the respondent, in display order.
    pub choices: Vec<String>,
}

impl MultipleChoiceQuestion {
    /// Create a multiple-choice configuration with the given choices.
    pub fn new(choices: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }
}

/// Configuration for a Likert-scale question.
#[derive(Debug, Clone, PartialEq)]
pub struct LikertQuestion {
    /// Lowest point on the scale.
    pub min: i64,

    /// Highest point on the scale.
    pub max: i64,

    /// Labels for the scale points, in ascending order.
    pub labels: Vec<String>,
}

impl LikertQuestion {
    /// Create a scale with the given bounds and no labels.
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min,
            max,
            labels: Vec::new(),
        }
    }

    /// Attach labels for the scale points.
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for LikertQuestion {
    /// The conventional five-point scale.
    fn default() -> Self {
        Self::new(1, 5)
    }
}
