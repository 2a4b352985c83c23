//! Data models for the business-management backend.
//!
//! This module contains the structures used to represent backend
//! payloads:
//!
//! - Auth types: `LoginRequest`, `LoginResponse`, `RegisterRequest`, `Profile`
//! - `DashboardOverview`: the four headline metrics
//! - `Product`, `StockStatus`: inventory items and stock classification
//! - `Order`, `OrderItem`: sales orders
//! - Assistant types: insight/email/marketing request and response shapes

pub mod assistant;
pub mod auth;
pub mod dashboard;
pub mod inventory;
pub mod order;

pub use assistant::{
    AiRequest, AiResponse, EmailRequest, EmailResponse, InsightRequest, InsightResponse,
    MarketingRequest, MarketingResponse,
};
pub use auth::{LoginRequest, LoginResponse, Profile, RegisterRequest};
pub use dashboard::{DashboardOverview, Snapshot};
pub use inventory::{Product, StockStatus};
pub use order::{NewOrder, Order, OrderItem};
