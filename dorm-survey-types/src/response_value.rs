/// A single accepted answer.
///
/// This is the value stored in `Responses` for each answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseValue {
    /// Free text (from TEXT questions).
    Text(String),

    /// The order of the selected choice (from SINGLE questions).
    Choice(u32),
}

impl ResponseValue {
    /// Try to get this value as a string reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Choice(_) => None,
        }
    }

    /// Try to get this value as a chosen choice order.
    pub fn as_choice(&self) -> Option<u32> {
        match self {
            Self::Choice(order) => Some(*order),
            Self::Text(_) => None,
        }
    }
}

impl From<String> for ResponseValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ResponseValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<u32> for ResponseValue {
    fn from(order: u32) -> Self {
        Self::Choice(order)
    }
}
