use std::fmt;

use paged_survey_types::{Page, PageBreak, Pages, Question, SurveyItem};

use crate::ValidationError;

/// A collection of questions owned by one user, optionally divided into
/// pages by [`PageBreak`] markers.
///
/// Pages are derived, never stored: [`Survey::pages`] computes them from the
/// current questions and page breaks each time it is called. The survey is
/// plain in-memory data; persistence belongs to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Survey {
    title: String,
    description: Option<String>,
    instructions: Option<String>,
    category: Option<String>,
    owner: u64,
    draft: bool,
    private: bool,
    questions: Vec<Question>,
    page_breaks: Vec<PageBreak>,
}

impl Survey {
    /// Title given to a survey before the author edits it.
    pub const DEFAULT_TITLE: &'static str = "Untitled Survey";

    /// Minimum title length, in characters.
    pub const TITLE_MIN_CHARS: usize = 8;

    /// Maximum title length, in characters.
    pub const TITLE_MAX_CHARS: usize = 150;

    /// Minimum description length for non-draft surveys, in characters.
    pub const DESCRIPTION_MIN_CHARS: usize = 20;

    /// Create a fresh draft survey for the given owner.
    pub fn new(owner: u64) -> Self {
        Self {
            title: Self::DEFAULT_TITLE.to_owned(),
            description: None,
            instructions: None,
            category: None,
            owner,
            draft: true,
            private: false,
            questions: Vec::new(),
            page_breaks: Vec::new(),
        }
    }

    /// Get the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Get the description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Replace the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Get the instructions shown to respondents, if any.
    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    /// Replace the instructions.
    pub fn set_instructions(&mut self, instructions: impl Into<String>) {
        self.instructions = Some(instructions.into());
    }

    /// Get the category, if any.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Replace the category.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = Some(category.into());
    }

    /// The id of the owning user. The owner may no longer exist; resolving
    /// the id is the caller's concern.
    pub fn owner(&self) -> u64 {
        self.owner
    }

    /// Check if this survey is still a draft.
    pub fn is_draft(&self) -> bool {
        self.draft
    }

    /// Check if this survey is private (accessible only by its owner).
    pub fn is_private(&self) -> bool {
        self.private
    }

    /// Mark the survey private or public.
    pub fn set_private(&mut self, private: bool) {
        self.private = private;
    }

    /// Validate the survey.
    ///
    /// The title must always be within bounds. A non-draft survey must also
    /// carry a description of at least [`Self::DESCRIPTION_MIN_CHARS`]
    /// characters.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let title_len = self.title.chars().count();
        if title_len < Self::TITLE_MIN_CHARS {
            return Err(ValidationError::TitleTooShort {
                len: title_len,
                min: Self::TITLE_MIN_CHARS,
            });
        }
        if title_len > Self::TITLE_MAX_CHARS {
            return Err(ValidationError::TitleTooLong {
                len: title_len,
                max: Self::TITLE_MAX_CHARS,
            });
        }
        if !self.draft {
            let description_len = self
                .description
                .as_deref()
                .map_or(0, |description| description.chars().count());
            if description_len < Self::DESCRIPTION_MIN_CHARS {
                return Err(ValidationError::DescriptionTooShort {
                    len: description_len,
                    min: Self::DESCRIPTION_MIN_CHARS,
                });
            }
        }
        Ok(())
    }

    /// Leave draft state.
    ///
    /// The survey stays a draft if the non-draft validation rules fail.
    pub fn publish(&mut self) -> Result<(), ValidationError> {
        let was_draft = self.draft;
        self.draft = false;
        if let Err(error) = self.validate() {
            self.draft = was_draft;
            return Err(error);
        }
        Ok(())
    }

    /// The questions of this survey, ordered by index.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The number of questions in this survey.
    pub fn questions_count(&self) -> usize {
        self.questions.len()
    }

    /// Append a question, assigning it the next index.
    pub fn push_question(&mut self, mut question: Question) {
        question.set_index(self.questions.len() + 1);
        self.questions.push(question);
    }

    /// Replace the full question set.
    ///
    /// Indices are reassigned wholesale, 1..=N in the given order. Editing
    /// UIs submit the whole question list at once (order, type and content
    /// may all have changed), so matching old questions to new ones is not
    /// attempted.
    pub fn replace_questions(&mut self, questions: Vec<Question>) {
        self.questions = questions;
        for (position, question) in self.questions.iter_mut().enumerate() {
            question.set_index(position + 1);
        }
    }

    /// The page breaks of this survey, in insertion order.
    pub fn page_breaks(&self) -> &[PageBreak] {
        &self.page_breaks
    }

    /// Insert a page break and return a reference to it.
    ///
    /// Breaks may be inserted in any order and may share a position; see
    /// [`PageBreak`] for the tie and out-of-range semantics.
    pub fn insert_page_break(&mut self, page_break: PageBreak) -> &PageBreak {
        self.page_breaks.push(page_break);
        &self.page_breaks[self.page_breaks.len() - 1]
    }

    /// Replace the full page break set, e.g. when an editing UI submits the
    /// whole survey at once.
    pub fn replace_page_breaks(&mut self, page_breaks: Vec<PageBreak>) {
        self.page_breaks = page_breaks;
    }

    /// Divide the survey into pages.
    ///
    /// Every question lands on exactly one page, even when no page break
    /// precedes it in the list: a survey without page breaks is a single
    /// untitled page, and questions before the first explicit break get an
    /// implicit untitled leading page. Breaks positioned past the last
    /// question yield valid empty trailing pages.
    pub fn pages(&self) -> Pages {
        let mut page_breaks: Vec<&PageBreak> = self.page_breaks.iter().collect();
        // Stable sort: breaks sharing a position keep their insertion order,
        // which is all callers may rely on.
        page_breaks.sort_by_key(|page_break| page_break.before());

        if page_breaks.is_empty() {
            let single_page = Page::new(1, None, None, self.questions.clone());
            return Pages::new(vec![single_page]);
        }

        // Each page is (start position, originating break). The break is
        // absent only for the implicit leading page.
        let mut starts: Vec<(usize, Option<&PageBreak>)> =
            Vec::with_capacity(page_breaks.len() + 1);
        if page_breaks[0].before() != 1 {
            starts.push((1, None));
        }
        starts.extend(
            page_breaks
                .iter()
                .map(|page_break| (page_break.before(), Some(*page_break))),
        );

        let question_count = self.questions.len();
        let pages = starts
            .iter()
            .enumerate()
            .map(|(page_index, &(before, origin))| {
                // 1-based `before` positions to a half-open 0-based range,
                // clamped to the question list. Adjacent breaks and breaks
                // past the last question collapse to empty ranges.
                let start = (before - 1).min(question_count);
                let end = match starts.get(page_index + 1) {
                    Some(&(next_before, _)) => (next_before - 1).min(question_count),
                    None => question_count,
                };
                let page_questions = if start < end {
                    self.questions[start..end].to_vec()
                } else {
                    Vec::new()
                };

                Page::new(
                    page_index + 1,
                    origin.and_then(|page_break| page_break.title().map(str::to_owned)),
                    origin.and_then(|page_break| page_break.description().map(str::to_owned)),
                    page_questions,
                )
            })
            .collect();

        Pages::new(pages)
    }

    /// Get the page with the given 1-based number, if it exists.
    pub fn page(&self, number: usize) -> Option<Page> {
        self.pages().page(number).cloned()
    }

    /// The total number of pages. Some of them may be empty.
    pub fn page_count(&self) -> usize {
        self.pages().count()
    }

    /// The questions and page breaks of this survey as one flat list in
    /// document order.
    ///
    /// This is for editing UIs that do not paginate; use [`Self::pages`] to
    /// find out which questions share a page.
    pub fn items(&self) -> Vec<SurveyItem> {
        let mut items: Vec<SurveyItem> = self
            .questions
            .iter()
            .cloned()
            .map(SurveyItem::Question)
            .collect();

        let mut page_breaks: Vec<&PageBreak> = self.page_breaks.iter().collect();
        page_breaks.sort_by_key(|page_break| page_break.before());

        // Insert in ascending order with a running offset: every break
        // already placed shifts later positions by one, and the clamp keeps
        // tied trailing breaks in insertion order.
        for (inserted, page_break) in page_breaks.into_iter().enumerate() {
            let at = (page_break.before() - 1 + inserted).min(items.len());
            items.insert(at, SurveyItem::PageBreak(page_break.clone()));
        }
        items
    }

    /// Check if this survey lacks any actual content, e.g. when it has just
    /// been created to back an empty editor.
    pub fn is_blank(&self) -> bool {
        if !self.title.is_empty() && self.title != Self::DEFAULT_TITLE {
            return false;
        }
        let has_text = |field: &Option<String>| field.as_deref().is_some_and(|text| !text.is_empty());
        if has_text(&self.description) || has_text(&self.instructions) {
            return false;
        }
        self.questions.iter().all(Question::is_blank)
    }
}

impl fmt::Display for Survey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.questions.len();
        let noun = if count == 1 { "question" } else { "questions" };
        write!(f, "survey [{count} {noun}]: '{}'", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PageBreakError, QuestionType};

    fn survey_with_questions(count: usize) -> Survey {
        let mut survey = Survey::new(42);
        survey.replace_questions(
            (1..=count)
                .map(|n| Question::text(format!("Question {n}?")))
                .collect(),
        );
        survey
    }

    #[test]
    fn replace_questions_reindexes_wholesale() {
        let mut survey = survey_with_questions(3);
        let indices: Vec<usize> = survey.questions().iter().map(Question::index).collect();
        assert_eq!(indices, [1, 2, 3]);

        // Resubmitting a reordered, shrunken set starts over from 1.
        let mut reordered: Vec<Question> = survey.questions().to_vec();
        reordered.reverse();
        reordered.pop();
        survey.replace_questions(reordered);
        let indices: Vec<usize> = survey.questions().iter().map(Question::index).collect();
        assert_eq!(indices, [1, 2]);
    }

    #[test]
    fn push_question_appends_with_next_index() {
        let mut survey = survey_with_questions(2);
        survey.push_question(Question::multiple_choice("Pick one", ["a", "b"]));
        let last = survey.questions().last().expect("question was pushed");
        assert_eq!(last.index(), 3);
        assert_eq!(last.question_type(), QuestionType::MultipleChoice);
    }

    #[test]
    fn draft_skips_description_validation() {
        let mut survey = Survey::new(1);
        survey.set_title("A long enough title");
        assert_eq!(survey.validate(), Ok(()));
    }

    #[test]
    fn title_rules_apply_even_to_drafts() {
        let mut survey = Survey::new(1);
        survey.set_title("short");
        assert_eq!(
            survey.validate(),
            Err(ValidationError::TitleTooShort {
                len: 5,
                min: Survey::TITLE_MIN_CHARS
            })
        );

        survey.set_title("x".repeat(151));
        assert_eq!(
            survey.validate(),
            Err(ValidationError::TitleTooLong {
                len: 151,
                max: Survey::TITLE_MAX_CHARS
            })
        );
    }

    #[test]
    fn publish_requires_a_description() {
        let mut survey = Survey::new(1);
        survey.set_title("Commute habits 2026");

        assert_eq!(
            survey.publish(),
            Err(ValidationError::DescriptionTooShort {
                len: 0,
                min: Survey::DESCRIPTION_MIN_CHARS
            })
        );
        assert!(survey.is_draft());

        survey.set_description("How people get to work, and how they feel about it.");
        assert_eq!(survey.publish(), Ok(()));
        assert!(!survey.is_draft());
    }

    #[test]
    fn fresh_survey_is_blank() {
        let survey = Survey::new(1);
        assert!(survey.is_blank());

        let mut titled = Survey::new(1);
        titled.set_title("My commute survey");
        assert!(!titled.is_blank());

        let mut with_content = Survey::new(1);
        with_content.push_question(Question::text("Anything at all?"));
        assert!(!with_content.is_blank());
    }

    #[test]
    fn display_pluralizes_question_count() {
        let mut survey = survey_with_questions(1);
        survey.set_title("Commute habits");
        assert_eq!(survey.to_string(), "survey [1 question]: 'Commute habits'");

        let mut survey = survey_with_questions(3);
        survey.set_title("Commute habits");
        assert_eq!(survey.to_string(), "survey [3 questions]: 'Commute habits'");
    }

    #[test]
    fn items_interleaves_breaks_in_document_order() -> Result<(), PageBreakError> {
        let mut survey = survey_with_questions(3);
        survey.insert_page_break(PageBreak::new(2)?.with_title("Second page"));
        survey.insert_page_break(PageBreak::new(1)?);

        let items = survey.items();
        assert_eq!(items.len(), 5);
        assert!(items[0].as_page_break().is_some());
        assert_eq!(items[1].as_question().map(Question::index), Some(1));
        assert_eq!(
            items[2].as_page_break().and_then(PageBreak::title),
            Some("Second page")
        );
        assert_eq!(items[3].as_question().map(Question::index), Some(2));
        assert_eq!(items[4].as_question().map(Question::index), Some(3));
        Ok(())
    }

    #[test]
    fn items_clamps_breaks_past_the_end() -> Result<(), PageBreakError> {
        let mut survey = survey_with_questions(2);
        survey.insert_page_break(PageBreak::new(9)?.with_title("Tail one"));
        survey.insert_page_break(PageBreak::new(9)?.with_title("Tail two"));

        let items = survey.items();
        assert_eq!(items.len(), 4);
        assert!(items[0].as_question().is_some());
        assert!(items[1].as_question().is_some());
        // Trailing breaks keep their insertion order.
        assert_eq!(
            items[2].as_page_break().and_then(PageBreak::title),
            Some("Tail one")
        );
        assert_eq!(
            items[3].as_page_break().and_then(PageBreak::title),
            Some("Tail two")
        );
        Ok(())
    }

    #[test]
    fn items_orders_mixed_in_range_and_trailing_breaks() -> Result<(), PageBreakError> {
        let mut survey = survey_with_questions(3);
        survey.insert_page_break(PageBreak::new(2)?.with_title("Mid"));
        survey.insert_page_break(PageBreak::new(9)?.with_title("Tail one"));
        survey.insert_page_break(PageBreak::new(9)?.with_title("Tail two"));
        survey.insert_page_break(PageBreak::new(1)?.with_title("Lead"));

        let items = survey.items();
        let titles: Vec<Option<&str>> = items
            .iter()
            .map(|item| item.as_page_break().and_then(PageBreak::title))
            .collect();
        assert_eq!(
            titles,
            [
                Some("Lead"),
                None, // question 1
                Some("Mid"),
                None, // question 2
                None, // question 3
                Some("Tail one"),
                Some("Tail two"),
            ]
        );
        Ok(())
    }

    #[test]
    fn page_queries_recompute_from_the_snapshot() -> Result<(), PageBreakError> {
        let mut survey = survey_with_questions(4);
        assert_eq!(survey.page_count(), 1);

        survey.insert_page_break(PageBreak::new(3)?);
        assert_eq!(survey.page_count(), 2);
        assert_eq!(survey.page(2).map(|page| page.questions().len()), Some(2));
        assert!(survey.page(3).is_none());
        Ok(())
    }
}
