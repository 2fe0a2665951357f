use crate::api::errors::APIErrors;
use crate::api::request::ProductQuery;
use crate::api::response::ProductResponse;
use crate::api::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};

/// List products, newest first, optionally filtered with `?category=`
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Vec<ProductResponse>>, APIErrors> {
    let products = state.catalog.list_products(query.category.as_deref()).await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// Get product by ID
pub async fn get_product_by_id(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> Result<Json<ProductResponse>, APIErrors> {
    let product = state.catalog.get_product(product_id).await?;

    Ok(Json(ProductResponse::from(product)))
}
