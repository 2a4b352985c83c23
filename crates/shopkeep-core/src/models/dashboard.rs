use serde::{Deserialize, Serialize};

use super::{Order, Product};

/// Headline metrics from `GET /api/v1/dashboard/overview`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardOverview {
    #[serde(default)]
    pub sales: f64,
    #[serde(rename = "inventoryValue", default)]
    pub inventory_value: f64,
    #[serde(default)]
    pub profits: f64,
    #[serde(default)]
    pub expenses: f64,
}

/// Everything a full refresh pulls down in one go.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub overview: DashboardOverview,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
}
