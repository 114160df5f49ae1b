//! 商品目录应用

pub mod handler;
pub mod model;
pub mod service;
pub mod store;

use axum::{routing::get, Router};

use handler::AppState;

/// 目录 API 路由，挂载在 `/api/catalog` 下
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(handler::list_products))
        .route("/products/:id", get(handler::get_product))
        .route("/products/:id/stock", get(handler::check_stock))
        .route("/products/:id/details", get(handler::get_product_details))
}
