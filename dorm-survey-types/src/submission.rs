//! Parsing of posted form fields into validated responses.

use std::collections::HashMap;

use crate::{QuestionKind, Responses, SurveyDefinition, TEXT_MAX_LENGTH};

/// A rejected answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Question {order} requires an answer")]
    MissingRequired { order: u32 },

    #[error("Answer to question {order} is {length} characters long, the limit is {limit}")]
    TooLong {
        order: u32,
        length: usize,
        limit: usize,
    },

    #[error("Question {order} has no choice '{value}'")]
    InvalidChoice { order: u32, value: String },
}

impl FieldError {
    /// Order of the question the error refers to.
    pub fn order(&self) -> u32 {
        match self {
            Self::MissingRequired { order }
            | Self::TooLong { order, .. }
            | Self::InvalidChoice { order, .. } => *order,
        }
    }
}

/// All field errors of one rejected submission, in question order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", join_errors(.0))]
pub struct SubmissionError(pub Vec<FieldError>);

impl SubmissionError {
    /// Get the individual field errors.
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate posted `(name, value)` pairs against a survey.
///
/// Field names that are not question orders are ignored, as are questions
/// with an unknown kind. An empty value counts as unanswered. When a name is
/// posted more than once, the first value wins.
pub fn parse_submission<I, K, V>(
    survey: &SurveyDefinition,
    fields: I,
) -> Result<Responses, SubmissionError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut posted: HashMap<String, String> = HashMap::new();
    for (name, value) in fields {
        posted.entry(name.into()).or_insert_with(|| value.into());
    }

    let mut responses = Responses::new();
    let mut errors = Vec::new();

    for item in survey.items() {
        let question = &item.question;
        let order = question.order();
        let value = posted
            .get(&question.field_name())
            .map(String::as_str)
            .filter(|value| !value.is_empty());

        match (question.kind(), value) {
            (QuestionKind::Unknown(_), _) => {}
            (_, None) => {
                if question.is_required() {
                    errors.push(FieldError::MissingRequired { order });
                }
            }
            (QuestionKind::Text, Some(text)) => {
                let length = text.chars().count();
                if length > TEXT_MAX_LENGTH {
                    errors.push(FieldError::TooLong {
                        order,
                        length,
                        limit: TEXT_MAX_LENGTH,
                    });
                } else {
                    responses.insert(order, text);
                }
            }
            (QuestionKind::Single, Some(raw)) => {
                match raw.parse::<u32>().ok().and_then(|c| item.choice(c)) {
                    Some(choice) => responses.insert(order, choice.order),
                    None => errors.push(FieldError::InvalidChoice {
                        order,
                        value: raw.to_string(),
                    }),
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(responses)
    } else {
        Err(SubmissionError(errors))
    }
}
