use crate::Cli;
use anyhow::Result;
use axum::{
    Form, Json, Router,
    extract::{DefaultBodyLimit, State, rejection::FormRejection},
    http::{Method, StatusCode},
    routing::{get, post},
};
use clap::Args;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use wordcloud_render::Envelope;
use wordcloud_text::WordCloud;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 5050)]
    port: u16,

    /// Largest accepted request body
    #[arg(long, default_value_t = 2 * 1024 * 1024, value_name = "BYTES")]
    max_body_bytes: usize,
}

#[derive(Clone)]
pub struct AppState {
    cloud: Arc<WordCloud>,
}

impl AppState {
    pub fn new(cloud: WordCloud) -> Self {
        Self {
            cloud: Arc::new(cloud),
        }
    }
}

pub async fn root_handler() -> &'static str {
    "Server is running"
}

/// `POST /wordcloud` with form fields `text` and optional `limit`.
pub async fn wordcloud_handler(
    State(state): State<AppState>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> (StatusCode, Json<Envelope>) {
    let Form(fields) = match form {
        Ok(form) => form,
        Err(rejection) => {
            warn!("rejected request body: {rejection}");
            return (
                rejection.status(),
                Json(Envelope::failure(rejection.body_text())),
            );
        }
    };

    let Some(text) = fields.get("text") else {
        warn!("request without `text` field");
        return bad_request("missing form field `text`");
    };

    let limit = match fields.get("limit").map(|l| l.parse::<usize>()) {
        None => None,
        Some(Ok(limit)) if limit > 0 => Some(limit),
        Some(_) => {
            warn!("request with invalid `limit` field");
            return bad_request("form field `limit` must be a positive integer");
        }
    };

    let mut analysis = state.cloud.analyze(text);
    if let Some(limit) = limit {
        analysis.truncate(limit);
    }

    info!(
        bytes = text.len(),
        kept = analysis.kept_tokens,
        groups = analysis.group_count(),
        "generated wordcloud"
    );

    (StatusCode::OK, Json(Envelope::success(analysis.into_groups())))
}

fn bad_request(message: impl Into<String>) -> (StatusCode, Json<Envelope>) {
    (StatusCode::BAD_REQUEST, Json(Envelope::failure(message)))
}

pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/wordcloud", post(wordcloud_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn serve(state: AppState, args: &ServeArgs, quiet: bool) -> Result<()> {
    let addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {addr}: {e}"))?;

    info!("listening on {}", listener.local_addr()?);
    if !quiet {
        eprintln!("Server running on {addr}");
    }

    axum::serve(listener, router(state, args.max_body_bytes))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}

pub fn run(cli: &Cli, args: &ServeArgs) -> Result<()> {
    let config = cli.pipeline_config()?;
    let cloud = WordCloud::with_config(&config)?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(serve(AppState::new(cloud), args, cli.is_quiet()))
}
