use dorm_survey_types::SurveyDefinition;

/// Severity of a banner shown above the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Warning,
    Success,
}

impl BannerKind {
    /// Map a legacy `warn_code` (1 = warning, 2 = success) to a banner kind.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Warning),
            2 => Some(Self::Success),
            _ => None,
        }
    }

    pub(crate) fn class_suffix(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Success => "success",
        }
    }
}

/// A one-line message shown above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Warning,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
        }
    }

    /// Build a banner from a legacy `warn_code`/`warn_message` pair.
    ///
    /// Returns `None` for codes other than 1 and 2.
    pub fn from_code(code: u8, message: impl Into<String>) -> Option<Self> {
        match BannerKind::from_code(code)? {
            BannerKind::Warning => Some(Self::warning(message)),
            BannerKind::Success => Some(Self::success(message)),
        }
    }
}

/// Everything one render of the survey page depends on.
#[derive(Debug, Clone)]
pub struct SurveyPage<'a> {
    /// The questions to render, in order.
    pub survey: &'a SurveyDefinition,

    /// Whether this page load follows an accepted submission.
    pub submitted: bool,

    /// Optional warning or success banner.
    pub banner: Option<Banner>,

    /// Paragraphs of the help panel; the panel is omitted when empty.
    pub help_paragraphs: &'a [String],
}

impl<'a> SurveyPage<'a> {
    /// A fresh, not yet submitted page.
    pub fn new(survey: &'a SurveyDefinition) -> Self {
        Self {
            survey,
            submitted: false,
            banner: None,
            help_paragraphs: &[],
        }
    }

    /// Set the submission state.
    pub fn submitted(mut self, submitted: bool) -> Self {
        self.submitted = submitted;
        self
    }

    /// Set the banner.
    pub fn with_banner(mut self, banner: Banner) -> Self {
        self.banner = Some(banner);
        self
    }

    /// Set the help panel paragraphs.
    pub fn with_help(mut self, paragraphs: &'a [String]) -> Self {
        self.help_paragraphs = paragraphs;
        self
    }
}
