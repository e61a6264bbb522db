use serde::Deserialize;

/// User-visible fixed strings of the survey page.
///
/// Deserializable so that deployments can translate the page without code changes;
/// every missing key falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageText {
    /// Text of the blocking confirmation shown before the form is posted.
    pub confirm_message: String,

    /// Banner shown instead of the submit button once answers were accepted.
    pub success_message: String,

    /// Label of the submit button.
    pub submit_label: String,

    /// Marker appended to the topic of required questions.
    pub required_marker: String,

    /// Summary line of the collapsible help panel.
    pub help_title: String,
}

impl Default for PageText {
    fn default() -> Self {
        Self {
            confirm_message: "Submit your answers? They cannot be changed afterwards.".to_string(),
            success_message: "Thank you! Your answers have been submitted.".to_string(),
            submit_label: "Submit".to_string(),
            required_marker: "*".to_string(),
            help_title: "Help".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let text: PageText = toml::from_str(r#"submit_label = "提交""#).unwrap();

        assert_eq!(text.submit_label, "提交");
        assert_eq!(text.required_marker, PageText::default().required_marker);
    }
}
