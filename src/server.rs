use std::future::Future;

use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use flightpath_core::{FlightPathError, FlightPathResponse};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use uuid::Uuid;

/// HTTP face of a [`FlightPathError`].
#[derive(Debug)]
pub struct ApiError(pub FlightPathError);

impl From<FlightPathError> for ApiError {
    fn from(err: FlightPathError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            FlightPathError::InvalidInput
            | FlightPathError::InvalidFlight { .. }
            | FlightPathError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            FlightPathError::EmptyInput => StatusCode::UNPROCESSABLE_ENTITY,
            FlightPathError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({ "error": self.0.to_string() }))).into_response()
    }
}

pub fn router() -> Router {
    Router::new()
        .route("/calculate", post(calculate))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
}

/// Serve [`router`] on `listener` until `shutdown` completes.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C, shutdown only by termination");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received, stopping server");
}

#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
async fn calculate(body: Bytes) -> Result<Json<FlightPathResponse>, ApiError> {
    let result = std::str::from_utf8(&body)
        .map_err(|e| FlightPathError::MalformedBody(e.to_string()))
        .and_then(|body| {
            info!(body = %body, "received request");
            crate::calculate(body)
        });

    match result {
        Ok(path) => {
            info!(
                start = %path.start,
                end = %path.end,
                resolution = %path.resolution,
                "sending response"
            );
            Ok(Json(path.into()))
        }
        Err(err) if err.is_client_error() => {
            warn!(error = %err, "rejected request");
            Err(err.into())
        }
        Err(err) => {
            error!(error = %err, "request failed");
            Err(err.into())
        }
    }
}

async fn health_check() -> &'static str {
    "OK"
}
