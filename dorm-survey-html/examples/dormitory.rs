//! Dormitory survey example - render the bundled survey to a standalone HTML file.
//!
//! Run with: cargo run -p dorm-survey-html --example dormitory

use dorm_survey_html::{Banner, HtmlOptions, SurveyPage, render_page};
use dorm_survey_types::SurveyDefinition;

fn main() {
    let survey = SurveyDefinition::from_toml_str(include_str!("../../surveys/dormitory.toml"))
        .expect("bundled survey is valid");

    let help = vec![
        "Answer honestly; there are no right or wrong routines.".to_string(),
        "Questions marked with * are required.".to_string(),
    ];
    let page = SurveyPage::new(&survey)
        .with_banner(Banner::warning("The survey closes on Friday."))
        .with_help(&help);

    let html = render_page(&page, &HtmlOptions::new());

    std::fs::write("dormitory.html", &html).expect("Failed to write HTML file");

    println!("Generated dormitory.html");
}
