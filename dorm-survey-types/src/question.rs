use std::fmt;

use serde::Deserialize;

/// Maximum number of characters accepted by a text question.
pub const TEXT_MAX_LENGTH: usize = 200;

/// A single question in a survey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Ordering key; doubles as the form field name.
    order: u32,

    /// The prompt text shown to the user.
    topic: String,

    /// Optional helper text (used as the placeholder of text inputs).
    description: Option<String>,

    /// The kind of question (determines the input control).
    kind: QuestionKind,

    /// Whether an answer must be given.
    required: bool,
}

impl Question {
    /// Create a new, optional question.
    pub fn new(order: u32, topic: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            order,
            topic: topic.into(),
            description: None,
            kind,
            required: false,
        }
    }

    /// Create a free-text question.
    pub fn text(order: u32, topic: impl Into<String>) -> Self {
        Self::new(order, topic, QuestionKind::Text)
    }

    /// Create a single-choice question.
    pub fn single(order: u32, topic: impl Into<String>) -> Self {
        Self::new(order, topic, QuestionKind::Single)
    }

    /// Set the helper text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set whether the question must be answered.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Get the ordering key.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Get the form field name (the order rendered as a string).
    pub fn field_name(&self) -> String {
        self.order.to_string()
    }

    /// Get the prompt text.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Get the helper text, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Check if an answer is mandatory.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Element id of the radio input for `choice`.
    ///
    /// The question order and the choice order are concatenated without a
    /// separator, so the survey loader checks these ids for collisions.
    pub fn choice_input_id(&self, choice: &Choice) -> String {
        format!("{}{}", self.order, choice.order)
    }
}

/// The kind of question, determining the input control.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum QuestionKind {
    /// Single-line text input.
    Text,

    /// Pick exactly one of the question's choices.
    Single,

    /// A type tag this renderer does not know; no input is produced for it.
    Unknown(String),
}

impl QuestionKind {
    /// The tag used in survey files.
    pub fn tag(&self) -> &str {
        match self {
            Self::Text => "TEXT",
            Self::Single => "SINGLE",
            Self::Unknown(tag) => tag,
        }
    }

    /// Check if this kind is one the renderer can produce an input for.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<String> for QuestionKind {
    fn from(tag: String) -> Self {
        if tag.eq_ignore_ascii_case("TEXT") {
            Self::Text
        } else if tag.eq_ignore_ascii_case("SINGLE") {
            Self::Single
        } else {
            Self::Unknown(tag)
        }
    }
}

impl From<&str> for QuestionKind {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// An option of a single-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Choice {
    /// Ordering key; submitted as the field value when selected.
    pub order: u32,

    /// Label shown next to the radio button.
    pub text: String,
}

impl Choice {
    /// Create a new choice.
    pub fn new(order: u32, text: impl Into<String>) -> Self {
        Self {
            order,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_tag() {
        assert_eq!(QuestionKind::from("TEXT"), QuestionKind::Text);
        assert_eq!(QuestionKind::from("single"), QuestionKind::Single);
        assert_eq!(
            QuestionKind::from("MULTI"),
            QuestionKind::Unknown("MULTI".to_string())
        );
    }

    #[test]
    fn unknown_kind_keeps_its_tag() {
        let kind = QuestionKind::from("RATING");
        assert!(!kind.is_known());
        assert_eq!(kind.to_string(), "RATING");
    }

    #[test]
    fn builder_methods() {
        let question = Question::text(4, "Bedtime")
            .with_description("e.g. 23:00")
            .required(true);

        assert_eq!(question.order(), 4);
        assert_eq!(question.field_name(), "4");
        assert_eq!(question.description(), Some("e.g. 23:00"));
        assert!(question.is_required());
    }

    #[test]
    fn choice_input_id_concatenates_orders() {
        let question = Question::single(3, "Snoring");
        assert_eq!(question.choice_input_id(&Choice::new(12, "Yes")), "312");
    }
}
