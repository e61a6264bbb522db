use std::ops::Deref;
use std::sync::Arc;

use dorm_survey_html::{Banner, HtmlOptions, SurveyPage, render_page};
use dorm_survey_types::SurveyDefinition;

use crate::store::SubmissionStore;

#[derive(Debug)]
pub struct AppStateInner {
    pub survey: SurveyDefinition,
    pub options: HtmlOptions,
    pub help_paragraphs: Vec<String>,
    pub store: SubmissionStore,
}

/// Shared, cheaply clonable handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

impl AppState {
    pub fn new(
        survey: SurveyDefinition,
        options: HtmlOptions,
        help_paragraphs: Vec<String>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                survey,
                options,
                help_paragraphs,
                store: SubmissionStore::new(),
            }),
        }
    }

    /// Render the survey page for the given submission state and banner.
    pub fn render_page(&self, submitted: bool, banner: Option<Banner>) -> String {
        let mut page = SurveyPage::new(&self.survey)
            .submitted(submitted)
            .with_help(&self.help_paragraphs);
        page.banner = banner;
        render_page(&page, &self.options)
    }
}

impl Deref for AppState {
    type Target = AppStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
