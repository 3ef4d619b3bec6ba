//! Core types for the paged-survey crate.
//!
//! This crate provides the foundational types for multi-page surveys:
//! - `Question` and `QuestionKind` - Individual questions and their variants
//! - `QuestionType` - The closed registry of question variants
//! - `PageBreak` - Markers dividing a survey into pages
//! - `Page` and `Pages` - Derived pages, computed on demand and never stored
//! - `SurveyItem` - The flat question-or-break view for editing UIs

mod error;
pub use error::{PageBreakError, QuestionTypeError};

mod question;
pub use question::{LikertQuestion, MultipleChoiceQuestion, Question, QuestionKind};

mod question_type;
pub use question_type::QuestionType;

mod page_break;
pub use page_break::PageBreak;

mod page;
pub use page::{Page, Pages};

mod survey_item;
pub use survey_item::SurveyItem;
