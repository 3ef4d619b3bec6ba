use crate::PageBreakError;

/// A marker recording that a new page begins before a given 1-based question
/// position.
///
/// `before` may exceed the number of questions in the survey; such a break
/// produces a valid trailing page with no questions. Several breaks may share
/// the same position, in which case all but the last of them describe empty
/// pages. Their relative order is unspecified beyond being stable.
#[derive(Debug, Clone, PartialEq)]
pub struct PageBreak {
    before: usize,
    title: Option<String>,
    description: Option<String>,
}

impl PageBreak {
    /// Create a page break whose page starts before the question at 1-based
    /// position `before`.
    ///
    /// Position 0 does not exist and is rejected here rather than at
    /// pagination time.
    pub fn new(before: usize) -> Result<Self, PageBreakError> {
        if before == 0 {
            return Err(PageBreakError::InvalidPosition { before });
        }
        Ok(Self {
            before,
            title: None,
            description: None,
        })
    }

    /// Set the title of the page this break starts.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description of the page this break starts.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The 1-based position of the first question on the new page.
    pub fn before(&self) -> usize {
        self.before
    }

    /// Get the page title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Get the page description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
