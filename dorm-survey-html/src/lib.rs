//! # dorm-survey-html
//!
//! Server-side renderer for the dormitory survey page.
//!
//! Every question becomes one form group: TEXT questions a single-line input,
//! SINGLE questions a group of radio buttons. The form posts
//! `multipart/form-data` back to the server after a blocking confirmation.
//!
//! ## Example
//!
//! ```rust
//! use dorm_survey_html::{HtmlOptions, SurveyPage, render_page};
//! use dorm_survey_types::{Question, SurveyDefinition, SurveyItem};
//!
//! let survey = SurveyDefinition::new(vec![
//!     SurveyItem::new(Question::text(1, "When do you go to bed?").required(true)),
//! ])
//! .unwrap();
//!
//! let html = render_page(&SurveyPage::new(&survey), &HtmlOptions::new());
//! assert!(html.contains("name=\"1\""));
//! ```

mod gate;
pub use gate::{Confirm, ConfirmationGate};

mod generator;
pub use generator::{HtmlOptions, render_page};

mod page;
pub use page::{Banner, BannerKind, SurveyPage};

mod text;
pub use text::PageText;
