use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{api::app_state::AppState, error::AppError, observability::AnalyticsSink};

pub async fn get_analytics(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let snapshot = state.analytics.snapshot();
    Ok((StatusCode::OK, Json(snapshot)))
}
