/// Validation failures for a survey.
///
/// The title rules apply to every survey; drafts are exempt from the
/// description requirement until they are published.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The title is shorter than the minimum.
    #[error("title must be at least {min} characters, got {len}")]
    TitleTooShort { len: usize, min: usize },

    /// The title is longer than the maximum.
    #[error("title must be at most {max} characters, got {len}")]
    TitleTooLong { len: usize, max: usize },

    /// A non-draft survey needs a real description.
    #[error("description must be at least {min} characters, got {len}")]
    DescriptionTooShort { len: usize, min: usize },
}
