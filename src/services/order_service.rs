use std::collections::HashMap;

use chrono::Utc;
use sea_orm::sea_query::LockType;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    audit,
    dto::orders::{AddItemRequest, OrderWithItems, Receipt, ReceiptTable, RemovedItem},
    entity::{
        dining_tables::Entity as DiningTables,
        dough_types::{Column as DoughCol, Entity as DoughTypes},
        extras::{Column as ExtraCol, Entity as Extras, Model as ExtraModel},
        order_item_extras::{
            ActiveModel as ItemExtraActive, Column as ItemExtraCol, Entity as OrderItemExtras,
            Model as ItemExtraModel,
        },
        order_items::{ActiveModel as OrderItemActive, Column as OrderItemCol, Entity as OrderItems},
        orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel},
        products::Entity as Products,
    },
    error::{AppError, AppResult},
    models::{Order, OrderItem},
    receipt,
    services::table_service,
    state::AppState,
};

/// The unique non-closed order of a table, if any.
pub async fn find_active_order<C>(db: &C, table_id: Uuid) -> AppResult<Option<OrderModel>>
where
    C: ConnectionTrait,
{
    let order = Orders::find()
        .filter(
            Condition::all()
                .add(OrderCol::TableId.eq(table_id))
                .add(OrderCol::Closed.eq(false)),
        )
        .one(db)
        .await?;
    Ok(order)
}

/// Resolved items per order id, each list in insertion order.
pub async fn load_items<C>(db: &C, order_ids: &[Uuid]) -> AppResult<HashMap<Uuid, Vec<OrderItem>>>
where
    C: ConnectionTrait,
{
    if order_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let items = OrderItems::find()
        .filter(OrderItemCol::OrderId.is_in(order_ids.to_vec()))
        .order_by_asc(OrderItemCol::LineNo)
        .all(db)
        .await?;

    let item_ids: Vec<Uuid> = items.iter().map(|i| i.id).collect();
    let mut extras_by_item: HashMap<Uuid, Vec<ItemExtraModel>> = HashMap::new();
    if !item_ids.is_empty() {
        for extra in OrderItemExtras::find()
            .filter(ItemExtraCol::OrderItemId.is_in(item_ids))
            .order_by_asc(ItemExtraCol::Position)
            .all(db)
            .await?
        {
            extras_by_item
                .entry(extra.order_item_id)
                .or_default()
                .push(extra);
        }
    }

    let mut by_order: HashMap<Uuid, Vec<OrderItem>> = HashMap::new();
    for item in items {
        let extras = extras_by_item.remove(&item.id).unwrap_or_default();
        by_order
            .entry(item.order_id)
            .or_default()
            .push(OrderItem::new(item, extras));
    }
    Ok(by_order)
}

pub(crate) async fn order_with_items<C>(db: &C, order: OrderModel) -> AppResult<OrderWithItems>
where
    C: ConnectionTrait,
{
    let items = load_items(db, &[order.id])
        .await?
        .remove(&order.id)
        .unwrap_or_default();
    Ok(OrderWithItems {
        total: receipt::order_total(&items),
        order: order.into(),
        items,
    })
}

/// Extras by id in request order; unknown and repeated ids are dropped.
async fn resolve_extras<C>(db: &C, extra_ids: &[Uuid]) -> AppResult<Vec<ExtraModel>>
where
    C: ConnectionTrait,
{
    if extra_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut found: HashMap<Uuid, ExtraModel> = Extras::find()
        .filter(ExtraCol::Id.is_in(extra_ids.to_vec()))
        .all(db)
        .await?
        .into_iter()
        .map(|e| (e.id, e))
        .collect();

    let resolved: Vec<ExtraModel> = extra_ids.iter().filter_map(|id| found.remove(id)).collect();
    if resolved.len() < extra_ids.len() {
        tracing::debug!(
            requested = extra_ids.len(),
            resolved = resolved.len(),
            "unresolved or repeated extra ids ignored"
        );
    }
    Ok(resolved)
}

/// Price a product with its customizations and append it to an open order.
///
/// Runs entirely on `db`; callers pass a transaction so the item and its
/// extras are written together.
pub async fn add_item_to_order<C>(
    db: &C,
    order_id: Uuid,
    product_id: Uuid,
    dough_type: Option<&str>,
    extra_ids: &[Uuid],
) -> AppResult<OrderItem>
where
    C: ConnectionTrait,
{
    let order = Orders::find_by_id(order_id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound("Order"))?;
    if order.closed {
        return Err(AppError::Conflict("order is already closed".into()));
    }

    let product = Products::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound("Product"))?;

    let dough = match dough_type.map(str::trim).filter(|d| !d.is_empty()) {
        Some(name) => {
            let dough = DoughTypes::find()
                .filter(DoughCol::Name.eq(name))
                .one(db)
                .await?;
            if dough.is_none() {
                tracing::debug!(dough_type = name, "unknown dough type ignored");
            }
            dough
        }
        None => None,
    };
    let extras = resolve_extras(db, extra_ids).await?;

    let total_price = receipt::line_total(
        product.price,
        dough.as_ref().map(|d| d.additional_price),
        extras.iter().map(|e| e.price),
    );

    let line_no = OrderItems::find()
        .filter(OrderItemCol::OrderId.eq(order.id))
        .order_by_desc(OrderItemCol::LineNo)
        .one(db)
        .await?
        .map_or(1, |last| last.line_no + 1);

    let item = OrderItemActive {
        id: Set(Uuid::new_v4()),
        order_id: Set(order.id),
        product_id: Set(product.id),
        line_no: Set(line_no),
        name: Set(product.name),
        price: Set(product.price),
        total_price: Set(total_price),
        dough_type: Set(dough.map(|d| d.name)),
        product_type: Set(product.product_type),
        created_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await?;

    let mut item_extras = Vec::with_capacity(extras.len());
    for (position, extra) in extras.into_iter().enumerate() {
        let row = ItemExtraActive {
            id: Set(Uuid::new_v4()),
            order_item_id: Set(item.id),
            position: Set(position as i32),
            name: Set(extra.name),
            price: Set(extra.price),
        }
        .insert(db)
        .await?;
        item_extras.push(row);
    }

    Ok(OrderItem::new(item, item_extras))
}

/// Add an item to the active order of `payload.table_id`, in one transaction.
pub async fn add_item(state: &AppState, payload: AddItemRequest) -> AppResult<OrderItem> {
    let txn = state.orm.begin().await?;

    DiningTables::find_by_id(payload.table_id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound("Table"))?;

    // Row lock keeps a concurrent close from slipping in between.
    let order = Orders::find()
        .filter(
            Condition::all()
                .add(OrderCol::TableId.eq(payload.table_id))
                .add(OrderCol::Closed.eq(false)),
        )
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound("Active order"))?;

    let item = add_item_to_order(
        &txn,
        order.id,
        payload.product_id,
        payload.dough_type.as_deref(),
        &payload.extra_ids,
    )
    .await?;

    txn.commit().await?;

    tracing::info!(
        table_id = %payload.table_id,
        order_id = %item.order_id,
        item_id = %item.id,
        product = %item.name,
        total_price = %item.total_price,
        "item added"
    );
    audit::record(
        &state.orm,
        "order_item_add",
        "order_items",
        serde_json::json!({
            "order_id": item.order_id,
            "item_id": item.id,
            "product_id": item.product_id,
            "total_price": item.total_price,
        }),
    )
    .await;

    Ok(item)
}

/// Delete a line item and its extras.
///
/// With `table_id`, the item must belong to that table's order. Items of a
/// closed order are part of the ledger and cannot be removed.
pub async fn remove_item(
    state: &AppState,
    item_id: Uuid,
    table_id: Option<Uuid>,
) -> AppResult<RemovedItem> {
    let txn = state.orm.begin().await?;

    let item = OrderItems::find_by_id(item_id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound("Order item"))?;

    let order = Orders::find_by_id(item.order_id)
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound("Order"))?;

    if let Some(table_id) = table_id {
        if order.table_id != table_id {
            return Err(AppError::Conflict(
                "item does not belong to this table's order".into(),
            ));
        }
    }
    if order.closed {
        return Err(AppError::Conflict(
            "items of a closed order cannot be removed".into(),
        ));
    }

    OrderItemExtras::delete_many()
        .filter(ItemExtraCol::OrderItemId.eq(item.id))
        .exec(&txn)
        .await?;
    let order_id = item.order_id;
    item.delete(&txn).await?;

    txn.commit().await?;

    tracing::info!(order_id = %order_id, item_id = %item_id, "item removed");
    audit::record(
        &state.orm,
        "order_item_remove",
        "order_items",
        serde_json::json!({ "order_id": order_id, "item_id": item_id }),
    )
    .await;

    Ok(RemovedItem {
        id: item_id,
        order_id,
    })
}

pub async fn get_active_order(state: &AppState, table_id: Uuid) -> AppResult<OrderWithItems> {
    DiningTables::find_by_id(table_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Table"))?;

    let order = find_active_order(&state.orm, table_id)
        .await?
        .ok_or(AppError::NotFound("Active order"))?;

    order_with_items(&state.orm, order).await
}

pub async fn get_order(state: &AppState, order_id: Uuid) -> AppResult<OrderWithItems> {
    let order = Orders::find_by_id(order_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Order"))?;

    order_with_items(&state.orm, order).await
}

/// Mark an order as sent to kitchen and pizzeria. Re-sending is a no-op.
pub async fn send_order(state: &AppState, order_id: Uuid) -> AppResult<Order> {
    let txn = state.orm.begin().await?;

    let order = Orders::find_by_id(order_id)
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound("Order"))?;

    if order.closed {
        return Err(AppError::Conflict("order is already closed".into()));
    }
    if order.sent {
        txn.commit().await?;
        tracing::debug!(order_id = %order_id, "order already sent");
        return Ok(order.into());
    }

    let mut active: OrderActive = order.into();
    active.sent = Set(true);
    let order = active.update(&txn).await?;

    txn.commit().await?;

    tracing::info!(order_id = %order.id, table_id = %order.table_id, "order sent");
    audit::record(
        &state.orm,
        "order_send",
        "orders",
        serde_json::json!({ "order_id": order.id, "table_id": order.table_id }),
    )
    .await;

    Ok(order.into())
}

/// Close an order by id and free its table, in one transaction.
pub async fn close_order(state: &AppState, order_id: Uuid) -> AppResult<Order> {
    let txn = state.orm.begin().await?;

    let table_id = Orders::find_by_id(order_id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound("Order"))?
        .table_id;

    // Table first, then order: same lock order as `close_table`.
    let table = DiningTables::find_by_id(table_id)
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound("Table"))?;

    let order = Orders::find_by_id(order_id)
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound("Order"))?;

    if order.closed {
        return Err(AppError::Conflict("order is already closed".into()));
    }

    let order = table_service::end_session(&txn, order, table).await?;

    txn.commit().await?;

    audit::record(
        &state.orm,
        "order_close",
        "orders",
        serde_json::json!({ "order_id": order.id, "table_id": order.table_id }),
    )
    .await;

    Ok(order.into())
}

pub async fn get_receipt(state: &AppState, order_id: Uuid) -> AppResult<Receipt> {
    let order = Orders::find_by_id(order_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Order"))?;

    let table = DiningTables::find_by_id(order.table_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Table"))?;

    let items = load_items(&state.orm, &[order.id])
        .await?
        .remove(&order.id)
        .unwrap_or_default();

    let table = ReceiptTable {
        id: table.id,
        number: table.number,
        covers: order.covers,
    };
    Ok(Receipt {
        order: order.into(),
        table,
        generated_at: Utc::now(),
        partition: receipt::partition(&items),
    })
}
