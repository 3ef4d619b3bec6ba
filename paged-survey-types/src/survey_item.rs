use crate::{PageBreak, Question};

/// One entry in the flat, document-order view of a survey: either a page
/// break or a question.
///
/// This view exists for editing UIs that show the whole survey at once
/// instead of paginating it.
#[derive(Debug, Clone, PartialEq)]
pub enum SurveyItem {
    PageBreak(PageBreak),
    Question(Question),
}

impl SurveyItem {
    /// Get the question, if this item is one.
    pub fn as_question(&self) -> Option<&Question> {
        match self {
            Self::Question(question) => Some(question),
            Self::PageBreak(_) => None,
        }
    }

    /// Get the page break, if this item is one.
    pub fn as_page_break(&self) -> Option<&PageBreak> {
        match self {
            Self::PageBreak(page_break) => Some(page_break),
            Self::Question(_) => None,
        }
    }
}
