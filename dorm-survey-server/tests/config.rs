use std::io::Write;

use dorm_survey_server::config::load_config;
use dorm_survey_server::{Server, ServerError, load_survey};

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create file");
    file.write_all(content.as_bytes()).expect("write file");
    path
}

#[test]
fn config_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "dorm-survey.toml",
        r#"
[server]
port = 9100

[page]
help_paragraphs = ["Answer every required question."]

[page.text]
submit_label = "Send"
"#,
    );

    let cfg = load_config(&path).expect("config loads");

    assert_eq!(cfg.server.port, 9100);
    assert_eq!(cfg.page.text.submit_label, "Send");
    assert_eq!(cfg.page.text.help_title, "Help");
    assert_eq!(cfg.page.help_paragraphs.len(), 1);
    assert_eq!(cfg.log.level, "info");
}

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = load_config(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(cfg.survey.path, std::path::PathBuf::from("surveys/dormitory.toml"));
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "bad.toml", "[server]\nport = \"not a port\"\n");

    assert!(matches!(load_config(&path), Err(ServerError::Config(_))));
}

#[test]
fn survey_is_loaded_from_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let survey_path = write_file(
        &dir,
        "survey.json",
        r#"{ "questions": [ { "order": 1, "topic": "Bedtime", "type": "TEXT", "required": true } ] }"#,
    );

    let mut cfg = dorm_survey_server::config::AppConfig::default();
    cfg.survey.path = survey_path;

    let server = Server::builder().config(cfg).build().expect("server builds");
    assert_eq!(server.state().survey.len(), 1);
}

#[test]
fn bundled_survey_file_is_valid() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../surveys/dormitory.toml");
    let survey = load_survey(&path).expect("bundled survey");
    assert_eq!(survey.len(), 6);
}

#[test]
fn invalid_survey_file_is_reported_with_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "survey.toml",
        "[[questions]]\norder = 1\ntopic = \"A\"\ntype = \"TEXT\"\n\n[[questions]]\norder = 1\ntopic = \"B\"\ntype = \"TEXT\"\n",
    );

    let err = load_survey(&path).unwrap_err();
    assert!(matches!(err, ServerError::Survey { .. }));
    assert!(err.to_string().contains("survey.toml"));
}

#[test]
fn missing_survey_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_survey(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ServerError::SurveyFile { .. }));
}
