//! 商品目录处理器

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Json,
};
use tracing::debug;

use super::{
    model::{Product, StockQuery},
    service::CatalogService,
    store::CatalogStore,
};
use crate::core::error::CatalogError;

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: CatalogService,
}

impl AppState {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            catalog_service: CatalogService::new(Arc::new(store)),
        }
    }
}

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let products: Vec<Product> = state.catalog_service.list_available().cloned().collect();
    debug!(count = products.len(), "返回可售商品");
    Json(products)
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, CatalogError> {
    state
        .catalog_service
        .get_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or(CatalogError::NotFound(id))
}

pub async fn check_stock(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<StockQuery>, QueryRejection>,
) -> Result<Json<bool>, CatalogError> {
    let Query(query) = query.map_err(|e| CatalogError::InvalidArgument(e.body_text()))?;
    let in_stock = state.catalog_service.check_stock(&id, query.quantity)?;
    debug!(%id, quantity = query.quantity, in_stock, "库存检查");
    Ok(Json(in_stock))
}

pub async fn get_product_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, CatalogError> {
    state
        .catalog_service
        .get_details(&id)
        .cloned()
        .map(Json)
        .ok_or(CatalogError::NotFound(id))
}

/// 健康检查
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "products": state.catalog_service.store().len(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
