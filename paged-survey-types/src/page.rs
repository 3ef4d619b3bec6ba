use crate::Question;

/// A single page of a survey: a contiguous run of questions plus the title
/// and description of the page break that starts it.
///
/// Pages are derived from a survey's questions and page breaks on demand;
/// they are never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    number: usize,
    title: Option<String>,
    description: Option<String>,
    questions: Vec<Question>,
}

impl Page {
    /// Assemble a page. Page numbers are 1-based.
    pub fn new(
        number: usize,
        title: Option<String>,
        description: Option<String>,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            number,
            title,
            description,
            questions,
        }
    }

    /// The 1-based page number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Get the page title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Get the page description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The questions on this page, in survey order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Check if this page has no title. Implicit leading pages and breaks
    /// created without a title both show up untitled.
    pub fn is_untitled(&self) -> bool {
        self.title.as_deref().is_none_or(str::is_empty)
    }

    /// Check if this is the first page.
    pub fn is_first(&self) -> bool {
        self.number == 1
    }

    /// Check if this page has no questions. Empty pages are valid; they come
    /// from adjacent page breaks or breaks past the last question.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// The ordered pages of a survey, as computed by the pagination engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Pages {
    pages: Vec<Page>,
}

impl Pages {
    /// Wrap an ordered list of pages.
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Total number of pages. Some of them may be empty.
    pub fn count(&self) -> usize {
        self.pages.len()
    }

    /// Get the page with the given 1-based number.
    ///
    /// Out-of-range numbers return `None` rather than an error; UI code
    /// probes speculative page numbers to decide whether a "next" link exists.
    pub fn page(&self, number: usize) -> Option<&Page> {
        number.checked_sub(1).and_then(|index| self.pages.get(index))
    }

    /// Check if the given page is the last one. A page on its own cannot
    /// know this; only the full collection can.
    pub fn is_last(&self, page: &Page) -> bool {
        page.number() == self.pages.len()
    }

    /// Iterate over the pages in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.pages.iter()
    }

    /// View the pages as a slice.
    pub fn as_slice(&self) -> &[Page] {
        &self.pages
    }
}

impl IntoIterator for Pages {
    type Item = Page;
    type IntoIter = std::vec::IntoIter<Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pages {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_pages() -> Pages {
        Pages::new(vec![
            Page::new(1, None, None, vec![Question::text("First?")]),
            Page::new(2, Some("Titled".to_owned()), None, Vec::new()),
            Page::new(3, Some(String::new()), None, Vec::new()),
        ])
    }

    #[test]
    fn pages_are_one_indexed() {
        let pages = three_pages();
        assert_eq!(pages.page(1).map(Page::number), Some(1));
        assert_eq!(pages.page(3).map(Page::number), Some(3));
    }

    #[test]
    fn probing_out_of_range_returns_none() {
        let pages = three_pages();
        assert!(pages.page(0).is_none());
        assert!(pages.page(4).is_none());
    }

    #[test]
    fn empty_title_counts_as_untitled() {
        let pages = three_pages();
        assert!(pages.page(1).is_some_and(Page::is_untitled));
        assert!(pages.page(3).is_some_and(Page::is_untitled));
        assert!(!pages.page(2).is_some_and(Page::is_untitled));
    }

    #[test]
    fn first_and_last() {
        let pages = three_pages();
        let first = pages.page(1).cloned().expect("page 1 exists");
        let last = pages.page(3).cloned().expect("page 3 exists");
        assert!(first.is_first());
        assert!(!pages.is_last(&first));
        assert!(pages.is_last(&last));
    }
}
