use serde::{Deserialize, Serialize};

/// Quantity below which a product counts as low stock.
const LOW_STOCK_THRESHOLD: i64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub price: f64,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl Product {
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::for_quantity(self.quantity)
    }
}

/// Stock level classification used by the inventory list badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    pub fn for_quantity(quantity: i64) -> Self {
        if quantity <= 0 {
            StockStatus::OutOfStock
        } else if quantity < LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::OutOfStock => write!(f, "Out of Stock"),
            StockStatus::LowStock => write!(f, "Low Stock"),
            StockStatus::InStock => write!(f, "In Stock"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_status_thresholds() {
        assert_eq!(StockStatus::for_quantity(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::for_quantity(1), StockStatus::LowStock);
        assert_eq!(StockStatus::for_quantity(9), StockStatus::LowStock);
        assert_eq!(StockStatus::for_quantity(10), StockStatus::InStock);
    }

    #[test]
    fn product_parses_with_sparse_fields() {
        let product: Product = serde_json::from_str(r#"{"name": "Rice 5kg"}"#).unwrap();
        assert_eq!(product.name, "Rice 5kg");
        assert_eq!(product.quantity, 0);
        assert_eq!(product.stock_status(), StockStatus::OutOfStock);
    }
}
