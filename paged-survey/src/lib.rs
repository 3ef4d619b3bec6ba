//! # paged-survey
//!
//! Multi-page surveys: typed questions, page breaks, and a pagination engine.
//!
//! A [`Survey`] owns an ordered list of typed questions (text,
//! multiple-choice, Likert) and a set of [`PageBreak`] markers. Pages are
//! never stored; [`Survey::pages`] derives them on demand, so the same
//! survey snapshot can be paginated repeatedly and concurrently.
//!
//! ## Usage
//!
//! ```rust
//! use paged_survey::{PageBreak, Question, Survey};
//!
//! let mut survey = Survey::new(1);
//! survey.set_title("Commute habits");
//! survey.replace_questions(vec![
//!     Question::text("How do you get to work?"),
//!     Question::text("How long does it take?"),
//!     Question::text("Would you change anything about it?"),
//! ]);
//! survey.insert_page_break(PageBreak::new(3)?.with_title("Wrapping up"));
//!
//! let pages = survey.pages();
//! assert_eq!(pages.count(), 2);
//! assert_eq!(pages.page(1).map(|page| page.questions().len()), Some(2));
//! assert_eq!(pages.page(2).and_then(|page| page.title()), Some("Wrapping up"));
//! # Ok::<(), paged_survey::PageBreakError>(())
//! ```
//!
//! The [`QuestionType`] registry gives every question variant one canonical
//! identity, convertible between its name (for form and wire data) and its
//! integer index (for fast paths), with loud failures for unknown references.

// Re-export all types from paged-survey-types
pub use paged_survey_types::*;

mod error;
pub use error::ValidationError;

mod survey;
pub use survey::Survey;
