//! HTTP front end: the web page plus the browse/preview/rename endpoints

use anyhow::{Context, Result};
use app_core::{AppConfig, BrowseRequest, RenameForm, RenameService};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use std::sync::Arc;

const INDEX_HTML: &str = include_str!("../assets/index.html");

type SharedService = Arc<RenameService>;

/// Build the application router
pub fn router(service: SharedService) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/browse", post(browse))
        .route("/preview", post(preview))
        .route("/rename", post(rename))
        .with_state(service)
}

/// Bind, optionally open the browser, and serve until Ctrl-C
pub async fn serve(config: AppConfig) -> Result<()> {
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    let url = format!("http://{}", listener.local_addr()?);
    tracing::info!("Listening on {}", url);

    if config.server.open_browser {
        if let Err(e) = open::that(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let service = Arc::new(RenameService::new(&config));

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("ImageRenamer stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn browse(
    State(service): State<SharedService>,
    Json(request): Json<BrowseRequest>,
) -> Result<Response, ServerError> {
    tracing::info!("browse: {:?}", request.path);
    let response = blocking(move || service.browse(&request)).await?;
    Ok(Json(response).into_response())
}

async fn preview(
    State(service): State<SharedService>,
    Form(form): Form<RenameForm>,
) -> Result<Response, ServerError> {
    tracing::info!("preview: {:?}", form.folder_path);
    let response = blocking(move || service.preview(&form)).await?;
    Ok(Json(response).into_response())
}

async fn rename(
    State(service): State<SharedService>,
    Form(form): Form<RenameForm>,
) -> Result<Response, ServerError> {
    tracing::info!("rename: {:?}", form.folder_path);
    let response = blocking(move || service.rename(&form)).await?;
    Ok(Json(response).into_response())
}

/// Engine calls are synchronous file system passes; keep them off the
/// async workers.
async fn blocking<T, F>(f: F) -> Result<T, ServerError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ServerError(e.into()))
}

/// Internal failure outside the engine's own error taxonomy
struct ServerError(anyhow::Error);

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "status": "error",
                "message": format!("Internal error: {}", self.0),
            })),
        )
            .into_response()
    }
}
