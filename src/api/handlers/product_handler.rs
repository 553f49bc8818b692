use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::product_dto::*},
    error::AppError,
    storage::repository::{ProductQuery, ProductStore},
};

pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    debug!(
        "Searching products (query: {:?}, category: {:?})",
        params.query, params.category
    );

    let products = state
        .product_store
        .search_products(&ProductQuery {
            query: params.query,
            category: params.category,
            limit: params.limit.unwrap_or(10),
        })
        .await?;

    let product_responses: Vec<ProductResponse> =
        products.into_iter().map(ProductResponse::from).collect();

    let response = ProductListResponse {
        total: product_responses.len(),
        products: product_responses,
    };

    Ok((StatusCode::OK, Json(response)))
}
