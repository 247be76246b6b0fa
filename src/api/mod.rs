use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use validator::Validate;

use crate::food::{FoodLookup, FoodRecord, LookupOutcome};
use crate::report::report_file_name;

const MAX_CONCURRENT_REQUESTS: usize = 64;

#[derive(Clone)]
pub struct AppState {
    lookup: FoodLookup,
    default_region: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LookupRequest {
    #[validate(length(max = 200))]
    search_term: String,
    #[validate(length(max = 100))]
    region_hint: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FoodsQuery {
    #[serde(default)]
    q: String,
}

#[derive(Serialize)]
pub struct FoodsResponse {
    count: usize,
    foods: Vec<FoodRecord>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    foods_loaded: usize,
    commentary_model: Option<String>,
}

#[derive(Serialize)]
struct ApiResponse {
    status: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiResponse { status: message.into() })).into_response()
}

/// Create and configure the API router
pub fn create_api(lookup: FoodLookup, default_region: Option<String>) -> Router {
    let state = AppState {
        lookup,
        default_region,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health_check))
        .route("/foods", get(foods_handler))
        .route("/lookup", post(lookup_handler))
        .route("/report", post(report_handler))
        .layer(cors)
        .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
        .with_state(state)
}

impl AppState {
    /// The request's region hint, or the server default when it is absent or blank.
    fn region<'a>(&'a self, request: &'a LookupRequest) -> Option<&'a str> {
        request
            .region_hint
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .or(self.default_region.as_deref())
    }
}

async fn health_check(State(state): State<AppState>) -> Response {
    log::debug!("Health check requested");
    Json(HealthResponse {
        status: "Server is running and healthy".to_string(),
        foods_loaded: state.lookup.dataset().load().len(),
        commentary_model: state.lookup.advisor().model(),
    })
    .into_response()
}

async fn foods_handler(
    State(state): State<AppState>,
    Query(query): Query<FoodsQuery>,
) -> Response {
    let foods = state.lookup.matches(query.q.trim());
    Json(FoodsResponse {
        count: foods.len(),
        foods,
    })
    .into_response()
}

async fn lookup_handler(
    State(state): State<AppState>,
    Json(request): Json<LookupRequest>,
) -> Response {
    if let Err(e) = request.validate() {
        return error_response(StatusCode::BAD_REQUEST, format!("Invalid request: {}", e));
    }

    let outcome = state
        .lookup
        .lookup(request.search_term.trim(), state.region(&request))
        .await;
    Json(outcome).into_response()
}

async fn report_handler(
    State(state): State<AppState>,
    Json(request): Json<LookupRequest>,
) -> Response {
    if let Err(e) = request.validate() {
        return error_response(StatusCode::BAD_REQUEST, format!("Invalid request: {}", e));
    }

    let report = match state
        .lookup
        .lookup(request.search_term.trim(), state.region(&request))
        .await
    {
        LookupOutcome::Found(report) => report,
        LookupOutcome::NoData => {
            return error_response(StatusCode::SERVICE_UNAVAILABLE, "No nutrition data loaded")
        }
        LookupOutcome::NoMatch { search_term } => {
            return error_response(
                StatusCode::NOT_FOUND,
                format!("No foods found for '{}'", search_term),
            )
        }
    };

    let renderer = state.lookup.renderer();
    match state.lookup.report(&report) {
        Ok(bytes) => {
            let disposition = format!(
                "attachment; filename=\"{}\"",
                report_file_name(&report.record.name, renderer.file_extension())
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, renderer.content_type().to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => {
            log::error!("Report rendering failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Report rendering failed")
        }
    }
}
