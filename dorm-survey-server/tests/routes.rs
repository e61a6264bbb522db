//! Request-level tests for the survey routes.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use dorm_survey_server::Server;
use dorm_survey_types::{Choice, Question, SurveyDefinition, SurveyItem};
use tower::ServiceExt;

const BOUNDARY: &str = "dorm-survey-test-boundary";

fn survey() -> SurveyDefinition {
    SurveyDefinition::new(vec![
        SurveyItem::new(Question::text(1, "Bedtime").required(true)),
        SurveyItem::new(Question::text(2, "Hobbies")),
        SurveyItem::with_choices(
            Question::single(3, "Snoring").required(true),
            vec![Choice::new(1, "Yes"), Choice::new(2, "No")],
        ),
    ])
    .unwrap()
    .with_title("Dormitory living habits")
}

fn server() -> Server {
    Server::builder().survey(survey()).build().unwrap()
}

fn multipart_body(fields: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body
}

fn post_form(fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(fields)))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_get_renders_fresh_form() {
    let server = server();
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let (status, html) = send(server.app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<title>Dormitory living habits</title>"));
    assert!(html.contains("type=\"submit\""));
    assert!(html.contains("enctype=\"multipart/form-data\""));
    assert_eq!(html.matches("type=\"radio\"").count(), 2);
}

#[tokio::test]
async fn test_warn_code_query_shows_banner() {
    let server = server();
    let request = Request::builder()
        .uri("/?warn_code=1&warn_message=Room%20check%20tomorrow")
        .body(Body::empty())
        .unwrap();

    let (status, html) = send(server.app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("class=\"survey-banner survey-banner-warning\""));
    assert!(html.contains("Room check tomorrow"));

    let request = Request::builder()
        .uri("/?warn_code=9&warn_message=Ignored")
        .body(Body::empty())
        .unwrap();
    let (status, html) = send(server.app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!html.contains("role=\"alert\""));
}

#[tokio::test]
async fn test_valid_submission_is_stored() {
    let server = server();

    let (status, html) = send(
        server.app(),
        post_form(&[("1", "23:30"), ("3", "2"), ("csrfmiddlewaretoken", "x")]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Your answers have been submitted"));
    assert!(!html.contains("type=\"submit\""));

    let stored = server.state().store.snapshot().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].responses.text(1), Some("23:30"));
    assert_eq!(stored[0].responses.choice(3), Some(2));
    assert!(!stored[0].responses.contains(2));
}

#[tokio::test]
async fn test_invalid_submission_shows_warning() {
    let server = server();

    let (status, html) = send(server.app(), post_form(&[("2", "chess"), ("3", "9")])).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains("class=\"survey-banner survey-banner-warning\""));
    assert!(html.contains("Question 1 requires an answer"));
    assert!(html.contains("Question 3 has no choice &#39;9&#39;"));
    assert!(html.contains("type=\"submit\""));
    assert!(server.state().store.is_empty().await);
}

#[tokio::test]
async fn test_overlong_text_is_rejected() {
    let server = server();
    let long = "z".repeat(201);

    let (status, html) = send(server.app(), post_form(&[("1", &long), ("3", "1")])).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains("the limit is 200"));
}

#[tokio::test]
async fn test_non_multipart_post_is_rejected() {
    let server = server();
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("1=23%3A30&3=1"))
        .unwrap();

    let (status, _) = send(server.app(), request).await;

    assert!(status.is_client_error());
    assert!(server.state().store.is_empty().await);
}

#[tokio::test]
async fn test_health_reports_submissions() {
    let server = server();
    send(server.app(), post_form(&[("1", "22:00"), ("3", "1")])).await;

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(server.app(), request).await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "up");
    assert_eq!(json["submissions"], 1);
}
