//! 商品目录查询服务

use std::sync::Arc;

use super::{model::Product, store::CatalogStore};
use crate::core::error::CatalogError;

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// 所有有库存的商品，顺序不保证
    pub fn list_available(&self) -> impl Iterator<Item = &Product> + '_ {
        self.store.iter().filter(|product| product.is_available())
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Product> {
        self.store.get(id)
    }

    /// 请求数量必须大于 0；商品不存在时视为库存为 0
    pub fn check_stock(&self, id: &str, requested_quantity: i32) -> Result<bool, CatalogError> {
        let requested = u32::try_from(requested_quantity)
            .ok()
            .filter(|&quantity| quantity > 0)
            .ok_or_else(|| {
                CatalogError::InvalidArgument(format!(
                    "数量必须大于 0，收到: {}",
                    requested_quantity
                ))
            })?;

        Ok(self
            .get_by_id(id)
            .is_some_and(|product| product.has_stock(requested)))
    }

    pub fn get_details(&self, id: &str) -> Option<&Product> {
        self.get_by_id(id)
    }
}
