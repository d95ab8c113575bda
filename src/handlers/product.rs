// src/handlers/product.rs
use std::collections::HashMap;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{info, instrument};

use crate::dtos::product::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::error::AppError;
use crate::filter::ProductFilter;
use crate::state::AppState;

// GET /products - List products, optionally filtered by name, category, available
#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let filter = ProductFilter::from_params(&params);
    let products = filter.apply(state.products.list().await?);

    info!(count = products.len(), "Returning products");
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

// GET /products/{id} - Get single product
#[instrument(skip(state))]
pub async fn get_product(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let Path(id) = id?;
    let product = state
        .products
        .get(id)
        .await?
        .ok_or_else(|| AppError::product_not_found(id))?;

    Ok(Json(ProductResponse::from(product)))
}

// POST /products - Create new product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let product = state.products.create(payload.into_new_product()?).await?;

    info!(id = product.id, "Product created");
    let location = format!("/products/{}", product.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ProductResponse::from(product)),
    ))
}

// PUT /products/{id} - Update product; omitted fields keep their values
#[instrument(skip(state, payload))]
pub async fn update_product(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<Json<ProductResponse>, AppError> {
    let Path(id) = id?;
    // Missing ids win over malformed bodies.
    if state.products.get(id).await?.is_none() {
        return Err(AppError::product_not_found(id));
    }

    let Json(payload) = payload?;
    let product = state
        .products
        .update(id, payload.into_changes()?)
        .await?
        .ok_or_else(|| AppError::product_not_found(id))?;

    info!(id, "Product updated");
    Ok(Json(ProductResponse::from(product)))
}

// DELETE /products/{id} - Delete product
#[instrument(skip(state))]
pub async fn delete_product(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    if !state.products.delete(id).await? {
        return Err(AppError::product_not_found(id));
    }

    info!(id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}
