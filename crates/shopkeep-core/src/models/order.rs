use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "customerName")]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub total: f64,
    pub status: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "productId", default)]
    pub product_id: i64,
    #[serde(rename = "productName")]
    pub product_name: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(rename = "unitPrice", default)]
    pub unit_price: f64,
}

/// Body for `POST /api/v1/order`.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    #[serde(rename = "customerName")]
    pub customer_name: Option<String>,
    pub items: Vec<OrderItem>,
}
