use std::collections::BTreeMap;

use crate::ResponseValue;

/// Accepted answers of one submission.
///
/// Keyed by question order; unanswered optional questions have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Responses {
    values: BTreeMap<u32, ResponseValue>,
}

impl Responses {
    /// Create a new empty responses collection.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Insert an answer for the question with the given order.
    pub fn insert(&mut self, order: u32, value: impl Into<ResponseValue>) {
        self.values.insert(order, value.into());
    }

    /// Get the answer for the given question order.
    pub fn get(&self, order: u32) -> Option<&ResponseValue> {
        self.values.get(&order)
    }

    /// Check if the question with the given order was answered.
    pub fn contains(&self, order: u32) -> bool {
        self.values.contains_key(&order)
    }

    /// Get the free-text answer, if the question was answered with text.
    pub fn text(&self, order: u32) -> Option<&str> {
        self.get(order).and_then(ResponseValue::as_text)
    }

    /// Get the selected choice order, if the question was answered with a choice.
    pub fn choice(&self, order: u32) -> Option<u32> {
        self.get(order).and_then(ResponseValue::as_choice)
    }

    /// Iterate over answers in question order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &ResponseValue)> {
        self.values.iter().map(|(order, value)| (*order, value))
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
