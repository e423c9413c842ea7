use std::collections::HashMap;

use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveTime, Utc};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::{
    dto::register::{ClosedOrder, Register, RegisterQuery},
    entity::{
        dining_tables::{Column as TableCol, Entity as DiningTables, Model as TableModel},
        orders::{Column as OrderCol, Entity as Orders},
    },
    error::{AppError, AppResult},
    money, receipt,
    services::order_service::load_items,
    state::AppState,
};

/// Read-only ledger of closed orders, newest first, with total revenue.
pub async fn list_closed_orders(state: &AppState, query: RegisterQuery) -> AppResult<Register> {
    let mut condition = Condition::all().add(OrderCol::Closed.eq(true));
    if let Some(date) = query.date {
        let (start, end) = day_bounds(date)?;
        condition = condition
            .add(OrderCol::CreatedAt.gte(start))
            .add(OrderCol::CreatedAt.lt(end));
    }

    let orders = Orders::find()
        .filter(condition)
        .order_by_desc(OrderCol::CreatedAt)
        .all(&state.orm)
        .await?;

    let order_ids: Vec<Uuid> = orders.iter().map(|o| o.id).collect();
    let table_ids: Vec<Uuid> = orders.iter().map(|o| o.table_id).collect();

    let tables: HashMap<Uuid, TableModel> = DiningTables::find()
        .filter(TableCol::Id.is_in(table_ids))
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|t| (t.id, t))
        .collect();
    let mut items = load_items(&state.orm, &order_ids).await?;

    let mut closed = Vec::with_capacity(orders.len());
    for order in orders {
        let table = tables
            .get(&order.table_id)
            .ok_or(AppError::NotFound("Table"))?;
        let order_items = items.remove(&order.id).unwrap_or_default();
        closed.push(ClosedOrder {
            order_id: order.id,
            table_number: table.number,
            covers: order.covers,
            use_count: table.use_count,
            created_at: order.created_at.with_timezone(&Utc),
            total: receipt::order_total(&order_items),
            items: order_items,
        });
    }

    let total_revenue = money::sum(closed.iter().map(|o| o.total));
    Ok(Register {
        order_count: closed.len() as u64,
        orders: closed,
        total_revenue,
    })
}

/// `[00:00, next 00:00)` of a UTC calendar day.
fn day_bounds(date: NaiveDate) -> AppResult<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
    let next = date
        .checked_add_days(Days::new(1))
        .ok_or_else(|| AppError::Validation(format!("date {date} is out of range")))?;
    let start = date.and_time(NaiveTime::MIN).and_utc().fixed_offset();
    let end = next.and_time(NaiveTime::MIN).and_utc().fixed_offset();
    Ok((start, end))
}
