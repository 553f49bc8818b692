use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::return_dto::*},
    error::AppError,
    services::returns::ReturnService,
};

pub async fn post_return(
    State(state): State<AppState>,
    Json(request): Json<ReturnRequestBody>,
) -> Result<impl IntoResponse, AppError> {
    if request.order_id.trim().is_empty() {
        return Err(AppError::Validation("order_id 不能为空".to_string()));
    }

    debug!("Processing return request for order {}", request.order_id);

    let receipt = state
        .return_service
        .process_return(&request.order_id, &request.reason)
        .await?;

    Ok((StatusCode::CREATED, Json(ReturnResponse::from(receipt))))
}
