use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::OrderItem;

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct RegisterQuery {
    /// UTC calendar day (YYYY-MM-DD) the orders were created on.
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClosedOrder {
    pub order_id: Uuid,
    pub table_number: i32,
    pub covers: i32,
    pub use_count: i32,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    #[schema(value_type = String, example = "22.00")]
    pub total: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Register {
    /// Newest first.
    pub orders: Vec<ClosedOrder>,
    pub order_count: u64,
    #[schema(value_type = String, example = "57.50")]
    pub total_revenue: Decimal,
}
