//! HTML form generator implementation.

use dorm_survey_types::{Choice, Question, QuestionKind, TEXT_MAX_LENGTH};
use tracing::warn;

use crate::{ConfirmationGate, PageText, SurveyPage};

/// Options for HTML generation.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Title for the HTML document; falls back to the survey title.
    pub title: Option<String>,
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// Custom CSS class prefix for all generated elements.
    pub class_prefix: String,
    /// URL the form posts to; empty posts back to the current page.
    pub action: String,
    /// Fixed strings shown on the page.
    pub text: PageText,
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: None,
            include_styles: true,
            full_document: true,
            class_prefix: "survey".to_string(),
            action: String::new(),
            text: PageText::default(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the form fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set the form action URL.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Replace the page text.
    pub fn with_text(mut self, text: PageText) -> Self {
        self.text = text;
        self
    }

    /// The confirm-before-submit gate for these options.
    pub fn gate(&self) -> ConfirmationGate {
        ConfirmationGate::new(&self.text.confirm_message)
    }
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the survey page.
pub fn render_page(page: &SurveyPage<'_>, options: &HtmlOptions) -> String {
    let mut html = String::new();
    let prefix = &options.class_prefix;
    let text = &options.text;
    let title = options.title.as_ref().or(page.survey.title.as_ref());

    if options.full_document {
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );

        if let Some(title) = title {
            html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
        }

        if options.include_styles {
            html.push_str(&generate_styles(prefix));
        }

        html.push_str("</head>\n<body>\n");
    }

    // Banner
    if let Some(banner) = &page.banner {
        html.push_str(&format!(
            "<div class=\"{prefix}-banner {prefix}-banner-{}\" role=\"alert\">{}</div>\n",
            banner.kind.class_suffix(),
            escape_html(&banner.message)
        ));
    }

    // Help panel
    if !page.help_paragraphs.is_empty() {
        html.push_str(&format!("<details class=\"{prefix}-help\">\n"));
        html.push_str(&format!(
            "  <summary>{}</summary>\n",
            escape_html(&text.help_title)
        ));
        for paragraph in page.help_paragraphs {
            html.push_str(&format!("  <p>{}</p>\n", escape_html(paragraph)));
        }
        html.push_str("</details>\n");
    }

    html.push_str(&format!(
        "<form class=\"{prefix}-form\" method=\"post\" action=\"{}\" enctype=\"multipart/form-data\" onsubmit=\"return confirmSubmit();\">\n",
        escape_html(&options.action)
    ));

    // Title
    if let Some(title) = title {
        html.push_str(&format!(
            "  <h1 class=\"{prefix}-title\">{}</h1>\n",
            escape_html(title)
        ));
    }

    // Prelude
    if let Some(prelude) = &page.survey.prelude {
        html.push_str(&format!(
            "  <div class=\"{prefix}-prelude\">{}</div>\n",
            escape_html(prelude)
        ));
    }

    // Questions
    html.push_str(&format!("  <div class=\"{prefix}-questions\">\n"));
    for (question, choices) in page.survey.iter() {
        html.push_str(&generate_question(question, choices, prefix, text, 2));
    }
    html.push_str("  </div>\n");

    // Success message or submit button
    if page.submitted {
        html.push_str(&format!(
            "  <div class=\"{prefix}-success\">{}</div>\n",
            escape_html(&text.success_message)
        ));
    } else {
        html.push_str(&format!(
            "  <button type=\"submit\" class=\"{prefix}-submit\">{}</button>\n",
            escape_html(&text.submit_label)
        ));
    }

    html.push_str("</form>\n");
    html.push_str(&options.gate().script());

    if options.full_document {
        html.push_str("</body>\n</html>\n");
    }

    html
}

/// Generate HTML for a single question.
fn generate_question(
    question: &Question,
    choices: &[Choice],
    prefix: &str,
    text: &PageText,
    indent: usize,
) -> String {
    let ind = "  ".repeat(indent);
    let name = question.field_name();
    let label = format_label(question, text);
    let required = if question.is_required() {
        " required"
    } else {
        ""
    };

    let mut html = String::new();

    match question.kind() {
        QuestionKind::Text => {
            let placeholder = question
                .description()
                .map(|d| format!(" placeholder=\"{}\"", escape_html(d)))
                .unwrap_or_default();

            html.push_str(&format!("{ind}<div class=\"{prefix}-field\">\n"));
            html.push_str(&format!("{ind}  <label for=\"{name}\">{label}</label>\n"));
            html.push_str(&format!(
                "{ind}  <input type=\"text\" id=\"{name}\" name=\"{name}\" class=\"{prefix}-input\" maxlength=\"{TEXT_MAX_LENGTH}\"{placeholder}{required}>\n"
            ));
            html.push_str(&format!("{ind}</div>\n"));
        }

        QuestionKind::Single => {
            html.push_str(&format!(
                "{ind}<fieldset class=\"{prefix}-fieldset {prefix}-single\">\n"
            ));
            html.push_str(&format!("{ind}  <legend>{label}</legend>\n"));

            for choice in choices {
                let choice_id = question.choice_input_id(choice);

                html.push_str(&format!("{ind}  <div class=\"{prefix}-radio-option\">\n"));
                html.push_str(&format!(
                    "{ind}    <input type=\"radio\" id=\"{choice_id}\" name=\"{name}\" value=\"{}\"{required}>\n",
                    choice.order
                ));
                html.push_str(&format!(
                    "{ind}    <label for=\"{choice_id}\">{}</label>\n",
                    escape_html(&choice.text)
                ));
                html.push_str(&format!("{ind}  </div>\n"));
            }

            html.push_str(&format!("{ind}</fieldset>\n"));
        }

        QuestionKind::Unknown(tag) => {
            warn!(
                order = question.order(),
                kind = %tag,
                "Skipping question with unsupported type"
            );
        }
    }

    html
}

/// Format a question topic as an escaped label, numbered by its order.
fn format_label(question: &Question, text: &PageText) -> String {
    let mut label = format!("{}. {}", question.order(), escape_html(question.topic()));
    if question.is_required() && !text.required_marker.is_empty() {
        label.push_str(&format!(
            " <span class=\"required-marker\">{}</span>",
            escape_html(&text.required_marker)
        ));
    }
    label
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles.
fn generate_styles(prefix: &str) -> String {
    format!(
        r#"  <style>
    .{prefix}-form {{
      max-width: 640px;
      margin: 2rem auto;
      padding: 1rem;
      font-family: sans-serif;
    }}
    .{prefix}-prelude {{
      margin: 1rem 0;
      padding: 0.5rem;
      background: #f5f5f5;
      white-space: pre-wrap;
    }}
    .{prefix}-banner, .{prefix}-help {{
      max-width: 640px;
      margin: 1rem auto;
      padding: 0.75rem 1rem;
      border-radius: 4px;
    }}
    .{prefix}-banner-warning {{
      background: #fff3cd;
      color: #664d03;
    }}
    .{prefix}-banner-success, .{prefix}-success {{
      background: #d1e7dd;
      color: #0f5132;
    }}
    .{prefix}-help {{
      background: #f5f5f5;
    }}
    .{prefix}-field {{
      margin: 0.75rem 0;
    }}
    .{prefix}-field label {{
      display: block;
      margin-bottom: 0.25rem;
    }}
    .{prefix}-input {{
      width: 100%;
      padding: 0.5rem;
      box-sizing: border-box;
    }}
    .{prefix}-fieldset {{
      margin: 1rem 0;
      padding: 1rem;
    }}
    .{prefix}-radio-option {{
      margin: 0.25rem 0;
    }}
    .required-marker {{
      color: #b02a37;
    }}
    .{prefix}-submit {{
      margin-top: 1rem;
      padding: 0.5rem 1rem;
    }}
    .{prefix}-success {{
      margin-top: 1rem;
      padding: 0.75rem 1rem;
    }}
  </style>
"#
    )
}
