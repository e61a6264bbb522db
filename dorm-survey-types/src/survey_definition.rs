use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use crate::{Choice, Question, QuestionKind, SurveyError};

/// A question together with its ordered choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyItem {
    pub question: Question,
    pub choices: Vec<Choice>,
}

impl SurveyItem {
    /// Create an item without choices.
    pub fn new(question: Question) -> Self {
        Self {
            question,
            choices: Vec::new(),
        }
    }

    /// Create an item with choices.
    pub fn with_choices(question: Question, choices: Vec<Choice>) -> Self {
        Self { question, choices }
    }

    /// Find the choice with the given order.
    pub fn choice(&self, order: u32) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.order == order)
    }
}

/// The ordered sequence of (question, choices) pairs making up a survey.
///
/// Insertion order drives render order. Question orders are unique and are
/// used as form field names, which `validate` enforces.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "SurveyFile")]
pub struct SurveyDefinition {
    /// Optional survey title.
    pub title: Option<String>,

    /// Optional message shown above the questions.
    pub prelude: Option<String>,

    items: Vec<SurveyItem>,
}

impl SurveyDefinition {
    /// Create a validated survey from its items.
    pub fn new(items: Vec<SurveyItem>) -> Result<Self, SurveyError> {
        let definition = Self {
            title: None,
            prelude: None,
            items,
        };
        definition.validate()?;
        Ok(definition)
    }

    /// Create an empty survey.
    pub fn empty() -> Self {
        Self {
            title: None,
            prelude: None,
            items: Vec::new(),
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the prelude message.
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = Some(prelude.into());
        self
    }

    /// Parse and validate a survey from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, SurveyError> {
        Ok(toml::from_str(source)?)
    }

    /// Parse and validate a survey from JSON.
    pub fn from_json_str(source: &str) -> Result<Self, SurveyError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Iterate over (question, choices) pairs in render order.
    pub fn iter(&self) -> impl Iterator<Item = (&Question, &[Choice])> {
        self.items
            .iter()
            .map(|item| (&item.question, item.choices.as_slice()))
    }

    /// Get the items.
    pub fn items(&self) -> &[SurveyItem] {
        &self.items
    }

    /// Find the item whose question has the given order.
    pub fn item(&self, order: u32) -> Option<&SurveyItem> {
        self.items.iter().find(|item| item.question.order() == order)
    }

    /// Check if the survey has any questions.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check the survey invariants: unique orders, unique rendered input ids,
    /// and choices present exactly on SINGLE questions.
    pub fn validate(&self) -> Result<(), SurveyError> {
        let mut orders = HashSet::new();
        let mut input_ids: HashMap<String, u32> = HashMap::new();

        for item in &self.items {
            let question = &item.question;
            if !orders.insert(question.order()) {
                return Err(SurveyError::DuplicateQuestionOrder(question.order()));
            }

            let ids = match question.kind() {
                QuestionKind::Text => {
                    if !item.choices.is_empty() {
                        return Err(SurveyError::UnexpectedChoices {
                            question: question.order(),
                        });
                    }
                    vec![question.field_name()]
                }
                QuestionKind::Single => {
                    if item.choices.is_empty() {
                        return Err(SurveyError::NoChoices {
                            question: question.order(),
                        });
                    }
                    let mut choice_orders = HashSet::new();
                    for choice in &item.choices {
                        if !choice_orders.insert(choice.order) {
                            return Err(SurveyError::DuplicateChoiceOrder {
                                question: question.order(),
                                choice: choice.order,
                            });
                        }
                    }
                    item.choices
                        .iter()
                        .map(|choice| question.choice_input_id(choice))
                        .collect()
                }
                QuestionKind::Unknown(_) => Vec::new(),
            };

            for id in ids {
                if let Some(first) = input_ids.insert(id.clone(), question.order()) {
                    return Err(SurveyError::InputIdCollision {
                        id,
                        first,
                        second: question.order(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl Default for SurveyDefinition {
    fn default() -> Self {
        Self::empty()
    }
}

/// On-disk shape of a survey file.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SurveyFile {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    prelude: Option<String>,
    #[serde(default)]
    questions: Vec<QuestionEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct QuestionEntry {
    order: u32,
    topic: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "type")]
    kind: QuestionKind,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    choices: Vec<Choice>,
}

impl QuestionEntry {
    fn into_item(self) -> SurveyItem {
        let mut question =
            Question::new(self.order, self.topic, self.kind).required(self.required);
        if let Some(description) = self.description {
            question = question.with_description(description);
        }
        SurveyItem::with_choices(question, self.choices)
    }
}

impl TryFrom<SurveyFile> for SurveyDefinition {
    type Error = SurveyError;

    fn try_from(file: SurveyFile) -> Result<Self, Self::Error> {
        let items = file
            .questions
            .into_iter()
            .map(QuestionEntry::into_item)
            .collect();

        let mut definition = Self::new(items)?;
        definition.title = file.title;
        definition.prelude = file.prelude;
        Ok(definition)
    }
}
