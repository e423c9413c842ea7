use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    entity::{
        dining_tables, dough_types, extras, order_item_extras, order_items, orders, products,
        sea_orm_active_enums::{Category, ProductType, TableStatus},
    },
    money,
    receipt,
};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    #[schema(value_type = String, example = "9.00")]
    pub price: Decimal,
    pub category: Category,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub customizable: bool,
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: money::round(model.price),
            category: model.category,
            product_type: model.product_type,
            customizable: model.customizable,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DoughType {
    pub id: Uuid,
    pub name: String,
    #[schema(value_type = String, example = "2.00")]
    pub additional_price: Decimal,
}

impl From<dough_types::Model> for DoughType {
    fn from(model: dough_types::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            additional_price: money::round(model.additional_price),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Extra {
    pub id: Uuid,
    pub name: String,
    #[schema(value_type = String, example = "1.50")]
    pub price: Decimal,
}

impl From<extras::Model> for Extra {
    fn from(model: extras::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: money::round(model.price),
        }
    }
}

/// A dining table with figures derived from its active order.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Table {
    pub id: Uuid,
    pub number: i32,
    pub status: TableStatus,
    pub covers: i32,
    pub use_count: i32,
    pub item_count: u64,
    #[schema(value_type = String, example = "22.00")]
    pub total: Decimal,
}

impl Table {
    pub fn new(model: dining_tables::Model, items: &[OrderItem]) -> Self {
        Self {
            id: model.id,
            number: model.number,
            status: model.status,
            covers: model.covers,
            use_count: model.use_count,
            item_count: items.len() as u64,
            total: receipt::order_total(items),
        }
    }
}

/// Lifecycle stage derived from the `sent` and `closed` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Open,
    Sent,
    Closed,
}

impl OrderStatus {
    pub fn of(sent: bool, closed: bool) -> Self {
        match (sent, closed) {
            (_, true) => OrderStatus::Closed,
            (true, false) => OrderStatus::Sent,
            (false, false) => OrderStatus::Open,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub table_id: Uuid,
    pub covers: i32,
    pub created_at: DateTime<Utc>,
    pub sent: bool,
    pub closed: bool,
    pub status: OrderStatus,
}

impl From<orders::Model> for Order {
    fn from(model: orders::Model) -> Self {
        Self {
            id: model.id,
            table_id: model.table_id,
            covers: model.covers,
            created_at: model.created_at.with_timezone(&Utc),
            sent: model.sent,
            closed: model.closed,
            status: OrderStatus::of(model.sent, model.closed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OrderItemExtra {
    pub id: Uuid,
    pub name: String,
    #[schema(value_type = String, example = "2.50")]
    pub price: Decimal,
}

impl From<order_item_extras::Model> for OrderItemExtra {
    fn from(model: order_item_extras::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: money::round(model.price),
        }
    }
}

/// A line item with its customizations resolved.
///
/// `is_gluten_free` and `customizations` are recomputed from the stored
/// fields every time an item is read; they are never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub name: String,
    #[schema(value_type = String, example = "11.00")]
    pub price: Decimal,
    #[schema(value_type = String, example = "13.00")]
    pub total_price: Decimal,
    pub dough_type: Option<String>,
    pub product_type: ProductType,
    pub is_gluten_free: bool,
    pub extras: Vec<OrderItemExtra>,
    pub customizations: Vec<String>,
}

impl OrderItem {
    pub fn new(model: order_items::Model, extras: Vec<order_item_extras::Model>) -> Self {
        let extras: Vec<OrderItemExtra> = extras.into_iter().map(OrderItemExtra::from).collect();
        let customizations = receipt::customizations(
            model.dough_type.as_deref(),
            extras.iter().map(|e| e.name.as_str()),
        );
        Self {
            id: model.id,
            order_id: model.order_id,
            product_id: model.product_id,
            is_gluten_free: receipt::is_gluten_free(model.dough_type.as_deref()),
            name: model.name,
            price: money::round(model.price),
            total_price: money::round(model.total_price),
            dough_type: model.dough_type,
            product_type: model.product_type,
            extras,
            customizations,
        }
    }
}
