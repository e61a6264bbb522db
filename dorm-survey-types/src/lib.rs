//! Core types for the dormitory survey.
//!
//! This crate provides the foundational types shared by the renderer and the server:
//! - `SurveyDefinition` - The ordered (question, choices) sequence of one survey
//! - `Question`, `QuestionKind` and `Choice` - Individual questions and their options
//! - `Responses` and `ResponseValue` - Accepted answers keyed by question order
//! - `parse_submission` - Turns posted form fields into validated `Responses`

mod response_value;
pub use response_value::ResponseValue;

mod responses;
pub use responses::Responses;

mod question;
pub use question::{Choice, Question, QuestionKind, TEXT_MAX_LENGTH};

mod survey_definition;
pub use survey_definition::{SurveyDefinition, SurveyItem};

mod submission;
pub use submission::{FieldError, SubmissionError, parse_submission};

mod error;
pub use error::SurveyError;
