/// Error type for loading and validating a survey definition.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// Two questions share the same order (and therefore the same field name).
    #[error("Duplicate question order: {0}")]
    DuplicateQuestionOrder(u32),

    /// A question lists the same choice order twice.
    #[error("Question {question} has duplicate choice order {choice}")]
    DuplicateChoiceOrder { question: u32, choice: u32 },

    /// A SINGLE question has no choices, so it could never be answered.
    #[error("Question {question} is a single-choice question without choices")]
    NoChoices { question: u32 },

    /// A question that renders no radio buttons lists choices.
    #[error("Question {question} lists choices but is not a single-choice question")]
    UnexpectedChoices { question: u32 },

    /// Two rendered inputs would end up with the same element id.
    #[error("Input id '{id}' is produced by both question {first} and question {second}")]
    InputIdCollision { id: String, first: u32, second: u32 },

    /// The survey file is not valid TOML or does not match the expected shape.
    #[error("Invalid survey TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The survey file is not valid JSON or does not match the expected shape.
    #[error("Invalid survey JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SurveyError {
    /// Check if this error comes from a broken invariant rather than a parse failure.
    pub fn is_invariant(&self) -> bool {
        matches!(
            self,
            Self::DuplicateQuestionOrder(_)
                | Self::DuplicateChoiceOrder { .. }
                | Self::NoChoices { .. }
                | Self::UnexpectedChoices { .. }
                | Self::InputIdCollision { .. }
        )
    }
}
