//! # Dormitory Survey Server
//!
//! Serves the survey page on `GET /`, accepts `multipart/form-data` answers on
//! `POST /` and reports liveness on `GET /health`. Accepted submissions are
//! kept in memory.
//!
//! ## Example
//! ```no_run
//! use dorm_survey_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(8080)
//!         .build()?
//!         .run()
//!         .await
//! }
//! ```

pub mod config;
mod error;
pub mod logger;
pub mod router;
pub mod state;
pub mod store;

pub use error::ServerError;

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use axum::Router;
use dorm_survey_html::HtmlOptions;
use dorm_survey_types::SurveyDefinition;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::state::AppState;

/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: AppConfig,
    survey: Option<SurveyDefinition>,
}

impl ServerBuilder {
    /// Set up the server's configuration.
    pub fn config(mut self, cfg: AppConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Use an in-memory survey instead of reading `survey.path`.
    pub fn survey(mut self, survey: SurveyDefinition) -> Self {
        self.survey = Some(survey);
        self
    }

    /// Consumes the builder, loading the survey file unless a survey was supplied.
    ///
    /// # Errors
    /// Returns an error if the survey file cannot be read or violates the
    /// survey invariants.
    pub fn build(self) -> Result<Server, ServerError> {
        let survey = match self.survey {
            Some(survey) => survey,
            None => load_survey(&self.cfg.survey.path)?,
        };

        let page = &self.cfg.page;
        let mut options = HtmlOptions::new()
            .with_styles(page.include_styles)
            .with_class_prefix(&page.class_prefix)
            .with_text(page.text.clone());
        options.title = page.title.clone();

        info!(questions = survey.len(), "Survey loaded");

        let address = SocketAddr::new(self.cfg.server.address, self.cfg.server.port);
        let state = AppState::new(survey, options, page.help_paragraphs.clone());

        Ok(Server { address, state })
    }
}

/// Read a survey from a `.json` file, or from TOML for any other extension.
///
/// # Errors
/// Returns [`ServerError::SurveyFile`] when the file cannot be read and
/// [`ServerError::Survey`] when its content is invalid.
pub fn load_survey(path: &Path) -> Result<SurveyDefinition, ServerError> {
    let source = std::fs::read_to_string(path).map_err(|source| ServerError::SurveyFile {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let parsed = if is_json {
        SurveyDefinition::from_json_str(&source)
    } else {
        SurveyDefinition::from_toml_str(&source)
    };

    parsed.map_err(|source| ServerError::Survey {
        path: path.to_path_buf(),
        source,
    })
}

/// A fully initialized server instance ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    address: SocketAddr,
    state: AppState,
}

impl Server {
    /// Returns a new [`ServerBuilder`] to configure the server.
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// The router serving this server's state.
    pub fn app(&self) -> Router {
        router::init(self.state.clone())
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn address(&self) -> SocketAddr {
        self.address
    }

    /// Starts the server and runs until the shutdown signal is received.
    ///
    /// # Errors
    /// Returns an error if the server fails to bind to the configured address.
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.address)
            .await
            .map_err(|source| ServerError::Bind {
                address: self.address,
                source,
            })?;

        info!("Starting HTTP server on http://{}", self.address);

        axum::serve(listener, self.app())
            .with_graceful_shutdown(async {
                match shutdown_signal().await {
                    Ok(()) => info!("Shutdown signal received, starting graceful shutdown..."),
                    Err(e) => {
                        error!("Error while waiting for shutdown signal: {e}");
                        std::future::pending::<()>().await;
                    }
                }
            })
            .await
            .context("HTTP server failed")?;

        info!("Server shutdown complete");
        Ok(())
    }
}

/// Listens for shutdown signals (Ctrl+C, SIGTERM).
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => res?,
        res = terminate => res?,
    }

    Ok(())
}
