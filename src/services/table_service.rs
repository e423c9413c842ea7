use std::collections::HashMap;

use chrono::Utc;
use sea_orm::sea_query::LockType;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    audit,
    dto::tables::{OpenTableRequest, OpenedTable, TableDetail},
    entity::{
        dining_tables::{
            ActiveModel as TableActive, Column as TableCol, Entity as DiningTables,
            Model as TableModel,
        },
        orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel},
        sea_orm_active_enums::TableStatus,
    },
    error::{AppError, AppResult},
    models::{Order, Table},
    services::order_service::{find_active_order, load_items, order_with_items},
    state::AppState,
};

pub const MIN_COVERS: i32 = 1;
pub const MAX_COVERS: i32 = 20;

pub fn validate_covers(covers: i32) -> AppResult<()> {
    if !(MIN_COVERS..=MAX_COVERS).contains(&covers) {
        return Err(AppError::Validation(format!(
            "covers must be between {MIN_COVERS} and {MAX_COVERS}, got {covers}"
        )));
    }
    Ok(())
}

/// Every table in service, by number, with its active order's item count and total.
pub async fn list_tables(state: &AppState) -> AppResult<Vec<Table>> {
    let tables = DiningTables::find()
        .filter(TableCol::Closed.eq(false))
        .order_by_asc(TableCol::Number)
        .all(&state.orm)
        .await?;

    let table_ids: Vec<Uuid> = tables.iter().map(|t| t.id).collect();
    let active_orders: HashMap<Uuid, Uuid> = Orders::find()
        .filter(
            Condition::all()
                .add(OrderCol::TableId.is_in(table_ids))
                .add(OrderCol::Closed.eq(false)),
        )
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|o| (o.table_id, o.id))
        .collect();

    let order_ids: Vec<Uuid> = active_orders.values().copied().collect();
    let mut items = load_items(&state.orm, &order_ids).await?;

    let tables = tables
        .into_iter()
        .map(|table| {
            let table_items = active_orders
                .get(&table.id)
                .and_then(|order_id| items.remove(order_id))
                .unwrap_or_default();
            Table::new(table, &table_items)
        })
        .collect();
    Ok(tables)
}

pub async fn get_table(state: &AppState, id: Uuid) -> AppResult<TableDetail> {
    let table = DiningTables::find_by_id(id)
        .one(&state.orm)
        .await?
        .filter(|t| !t.closed)
        .ok_or(AppError::NotFound("Table"))?;

    let active_order = match find_active_order(&state.orm, id).await? {
        Some(order) => Some(order_with_items(&state.orm, order).await?),
        None => None,
    };

    let items = active_order
        .as_ref()
        .map(|o| o.items.as_slice())
        .unwrap_or_default();
    Ok(TableDetail {
        table: Table::new(table, items),
        active_order,
    })
}

/// Lock a table row for the rest of the transaction.
///
/// Lock order is table row, then order row. Every path that locks both
/// (`close_table`, `order_service::close_order`) must follow it.
async fn lock_table<C>(db: &C, id: Uuid) -> AppResult<TableModel>
where
    C: ConnectionTrait,
{
    DiningTables::find_by_id(id)
        .lock(LockType::Update)
        .one(db)
        .await?
        .filter(|t| !t.closed)
        .ok_or(AppError::NotFound("Table"))
}

/// Seat a party: mark the table occupied and start its order.
///
/// The table row is locked for the whole transaction, so of two concurrent
/// opens on one table the second sees it occupied and fails with `Conflict`.
/// The partial unique index on `orders` backs this up.
pub async fn open_table(state: &AppState, payload: OpenTableRequest) -> AppResult<OpenedTable> {
    validate_covers(payload.covers)?;

    let txn = state.orm.begin().await?;
    let table = lock_table(&txn, payload.table_id).await?;

    if table.status == TableStatus::Occupied
        || find_active_order(&txn, table.id).await?.is_some()
    {
        return Err(AppError::Conflict(format!(
            "table {} is already occupied",
            table.number
        )));
    }

    let use_count = table.use_count + 1;
    let mut active: TableActive = table.into();
    active.status = Set(TableStatus::Occupied);
    active.covers = Set(payload.covers);
    active.use_count = Set(use_count);
    let table = active.update(&txn).await?;

    let order = OrderActive {
        id: Set(Uuid::new_v4()),
        table_id: Set(table.id),
        covers: Set(table.covers),
        sent: Set(false),
        closed: Set(false),
        created_at: Set(Utc::now().into()),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    tracing::info!(
        table_id = %table.id,
        number = table.number,
        covers = table.covers,
        use_count = table.use_count,
        order_id = %order.id,
        "table opened"
    );
    audit::record(
        &state.orm,
        "table_open",
        "dining_tables",
        serde_json::json!({
            "table_id": table.id,
            "covers": table.covers,
            "order_id": order.id,
        }),
    )
    .await;

    Ok(OpenedTable {
        table: Table::new(table, &[]),
        order: order.into(),
    })
}

/// Close `order` and reset `table` to free. Both rows must already be locked by the caller.
pub(crate) async fn end_session<C>(
    db: &C,
    order: OrderModel,
    table: TableModel,
) -> AppResult<OrderModel>
where
    C: ConnectionTrait,
{
    let sent = order.sent;
    let mut order: OrderActive = order.into();
    order.closed = Set(true);
    let order = order.update(db).await?;

    let mut table: TableActive = table.into();
    table.status = Set(TableStatus::Free);
    table.covers = Set(0);
    let table = table.update(db).await?;

    tracing::info!(
        table_id = %table.id,
        number = table.number,
        order_id = %order.id,
        sent,
        "table closed"
    );
    Ok(order)
}

/// Close the table's active order and free the table. History is kept.
pub async fn close_table(state: &AppState, id: Uuid) -> AppResult<Order> {
    let txn = state.orm.begin().await?;
    let table = lock_table(&txn, id).await?;

    let order = find_active_order(&txn, table.id)
        .await?
        .ok_or_else(|| {
            AppError::Conflict(format!("table {} has no active order", table.number))
        })?;

    let order = end_session(&txn, order, table).await?;

    txn.commit().await?;

    audit::record(
        &state.orm,
        "table_close",
        "dining_tables",
        serde_json::json!({ "table_id": id, "order_id": order.id }),
    )
    .await;

    Ok(order.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_bounds_are_inclusive() {
        assert!(validate_covers(1).is_ok());
        assert!(validate_covers(20).is_ok());
    }

    #[test]
    fn covers_outside_bounds_are_rejected() {
        for covers in [0, 21, -3] {
            assert!(matches!(
                validate_covers(covers),
                Err(AppError::Validation(_))
            ));
        }
    }
}
