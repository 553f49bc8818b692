use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::order_dto::*},
    error::AppError,
    storage::repository::OrderStore,
};

#[derive(Debug, Deserialize)]
pub struct ListOrdersParams {
    pub customer_id: String,
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Looking up order {}", order_id);

    let order = state
        .order_store
        .get_order(&order_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("订单不存在: {}", order_id)))?;

    Ok((StatusCode::OK, Json(OrderResponse::from(order))))
}

pub async fn list_orders(
    State(state): State<AppState>,
    Query(params): Query<ListOrdersParams>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Listing orders for customer {}", params.customer_id);

    let orders = state
        .order_store
        .get_orders_by_customer(&params.customer_id)
        .await?;

    let order_responses: Vec<OrderResponse> =
        orders.into_iter().map(OrderResponse::from).collect();

    let response = OrderListResponse {
        total: order_responses.len(),
        orders: order_responses,
    };

    Ok((StatusCode::OK, Json(response)))
}
