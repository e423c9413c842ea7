#![allow(dead_code)]

use anyhow::Context;
use ristorante_api::{
    db::{create_orm_conn, run_migrations},
    dto::{orders::AddItemRequest, tables::OpenTableRequest},
    entity::{DiningTables, Extras, Products, dining_tables, extras, products},
    models::{Order, OrderItem},
    seed,
    services::{order_service, table_service},
    state::AppState,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

/// Fresh in-memory database, migrated and seeded like production.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&orm).await?;
    seed::seed(&orm).await?;
    Ok(AppState::new(orm))
}

pub async fn table_id(state: &AppState, number: i32) -> anyhow::Result<Uuid> {
    let table = DiningTables::find()
        .filter(dining_tables::Column::Number.eq(number))
        .one(&state.orm)
        .await?
        .with_context(|| format!("table {number} not seeded"))?;
    Ok(table.id)
}

pub async fn product_id(state: &AppState, name: &str) -> anyhow::Result<Uuid> {
    let product = Products::find()
        .filter(products::Column::Name.eq(name))
        .one(&state.orm)
        .await?
        .with_context(|| format!("product {name} not seeded"))?;
    Ok(product.id)
}

pub async fn extra_id(state: &AppState, name: &str) -> anyhow::Result<Uuid> {
    let extra = Extras::find()
        .filter(extras::Column::Name.eq(name))
        .one(&state.orm)
        .await?
        .with_context(|| format!("extra {name} not seeded"))?;
    Ok(extra.id)
}

/// Open table `number` and return its id and new order.
pub async fn open(state: &AppState, number: i32, covers: i32) -> anyhow::Result<(Uuid, Order)> {
    let table_id = table_id(state, number).await?;
    let opened = table_service::open_table(state, OpenTableRequest { table_id, covers }).await?;
    Ok((table_id, opened.order))
}

pub async fn add(
    state: &AppState,
    table_id: Uuid,
    product: &str,
    dough_type: Option<&str>,
    extra_ids: Vec<Uuid>,
) -> anyhow::Result<OrderItem> {
    let product_id = product_id(state, product).await?;
    let item = order_service::add_item(
        state,
        AddItemRequest {
            table_id,
            product_id,
            dough_type: dough_type.map(str::to_owned),
            extra_ids,
        },
    )
    .await?;
    Ok(item)
}

pub fn names(items: &[OrderItem]) -> Vec<&str> {
    items.iter().map(|i| i.name.as_str()).collect()
}
