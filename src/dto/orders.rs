use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::{
    models::{Order, OrderItem},
    receipt::ReceiptPartition,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddItemRequest {
    pub table_id: Uuid,
    pub product_id: Uuid,
    /// Dough name, e.g. "Cereali"; unknown names add no surcharge.
    pub dough_type: Option<String>,
    /// Unknown ids are ignored.
    #[serde(default)]
    pub extra_ids: Vec<Uuid>,
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct RemoveItemQuery {
    /// When given, the item must belong to this table's active order.
    pub table_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RemovedItem {
    pub id: Uuid,
    pub order_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderWithItems {
    pub order: Order,
    pub items: Vec<OrderItem>,
    #[schema(value_type = String, example = "22.00")]
    pub total: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReceiptTable {
    pub id: Uuid,
    pub number: i32,
    pub covers: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Receipt {
    pub order: Order,
    pub table: ReceiptTable,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub partition: ReceiptPartition,
}
