//! 商品目录存储
//!
//! 进程启动时一次性构建，之后只读。

use std::collections::{hash_map::Entry, HashMap};

use rust_decimal::Decimal;

use super::model::Product;

/// 存储构建错误
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("商品 ID 重复: {0}")]
    DuplicateId(String),
}

/// 以商品 ID 为键的只读存储
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: HashMap<String, Product>,
}

impl CatalogStore {
    pub fn from_products<I>(products: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = Product>,
    {
        let mut map = HashMap::new();
        for product in products {
            match map.entry(product.id.clone()) {
                Entry::Occupied(_) => return Err(StoreError::DuplicateId(product.id)),
                Entry::Vacant(slot) => {
                    slot.insert(product);
                }
            }
        }
        Ok(Self { products: map })
    }

    /// 内置的 15 个模拟商品
    pub fn with_mock_data() -> Self {
        let products = MOCK_PRODUCTS
            .iter()
            .map(|&(id, name, cents, quantity)| {
                Product::new(id, name, Decimal::new(cents, 2), quantity)
            })
            .map(|product| (product.id.clone(), product))
            .collect();
        Self { products }
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.values()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// (id, name, price in cents, quantity)
const MOCK_PRODUCTS: [(&str, &str, i64, u32); 15] = [
    ("1", "Laptop Ryzen 7", 999_999, 50),
    ("2", "Mouse Gaming", 29_999, 100),
    ("3", "Teclado Mecánico", 59_999, 25),
    ("4", "Monitor 4K", 129_999, 15),
    ("5", "Auriculares Bluetooth", 19_999, 0),
    ("6", "Webcam HD", 14_999, 75),
    ("7", "SSD 1TB", 89_999, 30),
    ("8", "RAM 16GB DDR4", 44_999, 60),
    ("9", "Tarjeta Gráfica RTX 4060", 349_999, 8),
    ("10", "Procesador Intel i7", 219_999, 20),
    ("11", "Motherboard Gaming", 159_999, 12),
    ("12", "Fuente de Poder 750W", 79_999, 35),
    ("13", "Case Gaming RGB", 69_999, 18),
    ("14", "Cooler CPU Líquido", 99_999, 22),
    ("15", "Tablet Android 10\"", 189_999, 0),
];
