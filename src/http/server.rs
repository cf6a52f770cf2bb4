//! HTTP API server
//!
//! Serves the SPARQL protocol over the configured engine plus JSON endpoints
//! for broadcast services, their broadcast days and playlists.

use crate::{
    context::AppContext,
    core::Identifier,
    error::Error,
    model::{BroadcastDay, BroadcastServiceStub, Playlist},
    object_set::ObjectSetExt,
    queries,
    querying::results,
};
use axum::{
    body::Bytes,
    extract::{FromRequest, Path, Query, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Generic success response
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub message: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// First and last local broadcast day of a service
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastDaysResponse {
    pub service: BroadcastServiceStub,
    pub first_broadcast_day: Option<BroadcastDay>,
    pub last_broadcast_day: Option<BroadcastDay>,
}

/// Shared application state
pub struct AppState {
    pub context: AppContext,
}

/// SPARQL protocol parameters, read from the URL or a form body
#[derive(Debug, Default, Deserialize)]
pub struct SparqlParams {
    pub query: Option<String>,
}

/// Custom error type for API errors
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    BadGateway(String),
    NotImplemented(String),
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::NotImplemented(msg) => (StatusCode::NOT_IMPLEMENTED, msg),
            ApiError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::MalformedQuery(_)
            | Error::InvalidIdentifier(_)
            | Error::InvalidDate(_)
            | Error::UnknownTimeZone(_) => ApiError::BadRequest(err.to_string()),
            Error::TransportFailure(_) => ApiError::BadGateway(err.to_string()),
            other => {
                log::error!("Request failed: {}", other);
                ApiError::InternalError(other.to_string())
            }
        }
    }
}

/// Create the HTTP server with all routes
pub fn create_server(context: AppContext) -> Router {
    let state = Arc::new(AppState { context });

    // Configure CORS
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/sparql", get(sparql_query).post(sparql_query))
        .route("/query", get(sparql_query).post(sparql_query))
        .route("/api/services", get(list_services))
        .route("/api/services/:id/broadcast-days", get(broadcast_days))
        .route("/api/services/:id/playlist/:date", get(playlist))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(SuccessResponse { message: "sdgraph HTTP API is running".to_string() })
}

/// GET|POST /sparql - SPARQL 1.1 protocol, `SELECT` queries only
async fn sparql_query(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SparqlParams>,
    request: Request,
) -> Result<Response, ApiError> {
    let client = state.context.sparql().ok_or_else(|| {
        ApiError::NotImplemented("the SPARQL endpoint requires the embedded or remote backend".to_string())
    })?;

    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();

    let query = if let Some(query) = params.query {
        query
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        let Form(form) = Form::<SparqlParams>::from_request(request, &state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        form.query.ok_or_else(|| ApiError::BadRequest("missing query parameter".to_string()))?
    } else if content_type.starts_with("application/sparql-query") {
        let body = Bytes::from_request(request, &state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        String::from_utf8(body.to_vec()).map_err(|_| ApiError::BadRequest("request body is not UTF-8".to_string()))?
    } else {
        return Err(ApiError::BadRequest("no query given".to_string()));
    };

    let results = client.select(&query).await?;
    Ok(([(header::CONTENT_TYPE, results::MEDIA_TYPE)], results::to_json(&results).to_string()).into_response())
}

/// GET /api/services - List broadcast services
async fn list_services(State(state): State<Arc<AppState>>) -> Result<Json<Vec<BroadcastServiceStub>>, ApiError> {
    Ok(Json(queries::broadcast_services(state.context.object_set()).await?))
}

/// GET /api/services/:id/broadcast-days - First and last broadcast day
async fn broadcast_days(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<BroadcastDaysResponse>, ApiError> {
    let service = service(&state, &id).await?;
    let object_set = state.context.object_set();
    let (first_broadcast_day, last_broadcast_day) = futures_util::try_join!(
        queries::first_broadcast_day(object_set, &service),
        queries::last_broadcast_day(object_set, &service),
    )?;

    Ok(Json(BroadcastDaysResponse { service, first_broadcast_day, last_broadcast_day }))
}

/// GET /api/services/:id/playlist/:date - Playlist of one local day
async fn playlist(
    State(state): State<Arc<AppState>>,
    Path((id, date)): Path<(String, String)>,
) -> Result<Json<Playlist>, ApiError> {
    let service = service(&state, &id).await?;
    let day = BroadcastDay::parse(&date, service.broadcast_timezone.as_deref())?;
    Ok(Json(queries::playlist_for_day(state.context.object_set(), &service, &day).await?))
}

async fn service(state: &AppState, id: &str) -> Result<BroadcastServiceStub, ApiError> {
    let identifier = Identifier::parse(id)?;
    state
        .context
        .object_set()
        .fetch_stub::<BroadcastServiceStub>(&identifier)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Broadcast service '{}' not found", identifier)))
}

/// Start the HTTP server
pub async fn start_server(addr: &str, context: AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_server(context);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("sdgraph HTTP API server listening on http://{}", addr);
    println!();
    println!("Available endpoints:");
    println!("  GET|POST /sparql                                - SPARQL query protocol (JSON results)");
    println!("  GET      /api/services                          - List broadcast services");
    println!("  GET      /api/services/:id/broadcast-days       - First and last broadcast day");
    println!("  GET      /api/services/:id/playlist/:yyyy-mm-dd - Playlist of one day");
    println!("  GET      /health                                - Health check");
    println!();

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status() {
        let response = ApiError::from(Error::MalformedQuery("x".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let response = ApiError::from(Error::TransportFailure("x".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let response = ApiError::from(Error::InvariantViolation("x".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
