/// Error type for question type lookups.
///
/// A silent fallback here would mis-save user data as the wrong question
/// variant, so unknown references always fail loudly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionTypeError {
    /// A name that matches none of the known question types.
    #[error("unknown question type: {0:?}")]
    UnknownName(String),

    /// An integer form outside the known type list.
    #[error("no question type with index {0}")]
    IndexOutOfRange(usize),
}

/// Error type for page break construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageBreakError {
    /// Page break positions are 1-based; zero is rejected at construction.
    #[error("page break position must be at least 1, got {before}")]
    InvalidPosition { before: usize },
}
