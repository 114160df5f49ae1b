//! # 商品目录微服务
//!
//! 基于内存中固定模拟数据的只读商品目录：
//! - 列出有库存的商品
//! - 按 ID 查询商品及其详情
//! - 检查库存是否满足请求数量

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod server;

pub use app::catalog::handler::AppState;
pub use app::catalog::model::Product;
pub use app::catalog::service::CatalogService;
pub use app::catalog::store::{CatalogStore, StoreError};
pub use crate::core::error::CatalogError;
pub use server::build_app;
