use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use amora_service::{
	Error as ServiceError, LikeRequest, LikeResponse, PairStateRequest, PairStateResponse,
	RankRequest, RankResponse, UnlikeRequest, UnlikeResponse, UpdateBioRequest, UpdateBioResponse,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/profile/update_bio", post(update_bio))
		.route("/v1/matching/rank", post(rank))
		.route("/v1/likes/create", post(like))
		.route("/v1/likes/delete", post(unlike))
		.route("/v1/pairs/state", post(pair_state))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn update_bio(
	State(state): State<AppState>,
	Json(payload): Json<UpdateBioRequest>,
) -> Result<Json<UpdateBioResponse>, ApiError> {
	let response = state.service.update_bio(payload).await?;
	Ok(Json(response))
}

async fn rank(
	State(state): State<AppState>,
	Json(payload): Json<RankRequest>,
) -> Result<Json<RankResponse>, ApiError> {
	let response = state.service.rank(payload).await?;
	Ok(Json(response))
}

async fn like(
	State(state): State<AppState>,
	Json(payload): Json<LikeRequest>,
) -> Result<Json<LikeResponse>, ApiError> {
	let response = state.service.like(payload).await?;
	Ok(Json(response))
}

async fn unlike(
	State(state): State<AppState>,
	Json(payload): Json<UnlikeRequest>,
) -> Result<Json<UnlikeResponse>, ApiError> {
	let response = state.service.unlike(payload).await?;
	Ok(Json(response))
}

async fn pair_state(
	State(state): State<AppState>,
	Json(payload): Json<PairStateRequest>,
) -> Result<Json<PairStateResponse>, ApiError> {
	let response = state.service.pair_state(payload).await?;
	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		let (status, error_code) = match &err {
			ServiceError::MissingProfile { .. } => {
				(StatusCode::PRECONDITION_FAILED, "missing_profile")
			},
			ServiceError::InvalidRequest { .. } => (StatusCode::BAD_REQUEST, "invalid_request"),
			ServiceError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
			ServiceError::Conflict { .. } => (StatusCode::CONFLICT, "conflict"),
			ServiceError::Provider { .. } => (StatusCode::BAD_GATEWAY, "provider_error"),
			ServiceError::Storage { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
		};

		Self { status, error_code: error_code.to_string(), message: err.to_string() }
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
