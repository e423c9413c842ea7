use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    dto::orders::OrderWithItems,
    models::{Order, Table},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct OpenTableRequest {
    pub table_id: Uuid,
    /// Party size, 1 to 20.
    pub covers: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OpenedTable {
    pub table: Table,
    pub order: Order,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TableDetail {
    pub table: Table,
    pub active_order: Option<OrderWithItems>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct TableList {
    #[schema(value_type = Vec<Table>)]
    pub items: Vec<Table>,
}
