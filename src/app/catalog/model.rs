//! 商品目录数据模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 目录中的商品，创建后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
        }
    }

    /// 库存大于 0 即为可售
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    pub fn has_stock(&self, requested: u32) -> bool {
        self.quantity >= requested
    }
}

/// 库存查询参数
#[derive(Debug, Deserialize)]
pub struct StockQuery {
    pub quantity: i32,
}
