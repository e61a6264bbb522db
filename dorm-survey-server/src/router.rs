use axum::extract::{Multipart, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use dorm_survey_html::Banner;
use dorm_survey_types::{FieldError, parse_submission};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::ServerError;
use crate::state::AppState;

/// Build the application router.
pub fn init(state: AppState) -> Router {
    Router::new()
        .route("/", get(survey_page).post(submit_survey))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Optional banner passed in the query string, e.g. `/?warn_code=2&warn_message=Saved`.
#[derive(Debug, Default, Deserialize)]
struct BannerQuery {
    warn_code: Option<u8>,
    warn_message: Option<String>,
}

async fn survey_page(
    State(state): State<AppState>,
    Query(query): Query<BannerQuery>,
) -> Html<String> {
    let banner = query
        .warn_code
        .zip(query.warn_message)
        .and_then(|(code, message)| Banner::from_code(code, message));
    Html(state.render_page(false, banner))
}

async fn submit_survey(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ServerError> {
    let mut fields = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = field.text().await?;
        fields.push((name, value));
    }
    debug!(fields = fields.len(), "Received survey form");

    match parse_submission(&state.survey, fields) {
        Ok(responses) => {
            let answers = responses.len();
            let id = state.store.record(responses).await;
            info!(submission = id, answers, "Survey submission accepted");
            Ok(Html(state.render_page(true, None)).into_response())
        }
        Err(err) => {
            let orders: Vec<u32> = err.errors().iter().map(FieldError::order).collect();
            warn!(?orders, "Survey submission rejected: {err}");
            let page = state.render_page(false, Some(Banner::warning(err.to_string())));
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response())
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    submissions: usize,
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let body = HealthResponse {
        status: "up",
        version: env!("CARGO_PKG_VERSION"),
        submissions: state.store.len().await,
    };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}
