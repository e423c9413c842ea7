mod common;

use chrono::Utc;
use ristorante_api::{
    dto::tables::OpenTableRequest,
    entity::{
        AuditLogs, DiningTables, Orders, audit_logs, dining_tables, orders,
        sea_orm_active_enums::TableStatus,
    },
    error::AppError,
    models::OrderStatus,
    services::{order_service, table_service},
};
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use uuid::Uuid;

#[tokio::test]
async fn open_table_seats_party_and_starts_order() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let table_id = common::table_id(&state, 1).await?;

    let opened =
        table_service::open_table(&state, OpenTableRequest { table_id, covers: 4 }).await?;

    assert_eq!(opened.table.status, TableStatus::Occupied);
    assert_eq!(opened.table.covers, 4);
    assert_eq!(opened.table.use_count, 1);
    assert_eq!(opened.order.table_id, table_id);
    assert_eq!(opened.order.covers, 4);
    assert_eq!(opened.order.status, OrderStatus::Open);

    let detail = table_service::get_table(&state, table_id).await?;
    let active = detail.active_order.expect("active order");
    assert_eq!(active.order.id, opened.order.id);
    assert!(active.items.is_empty());
    assert_eq!(active.total, dec!(0));

    let audited = AuditLogs::find()
        .filter(audit_logs::Column::Action.eq("table_open"))
        .count(&state.orm)
        .await?;
    assert_eq!(audited, 1);
    Ok(())
}

#[tokio::test]
async fn covers_out_of_range_leave_table_untouched() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let table_id = common::table_id(&state, 2).await?;

    for covers in [0, 21] {
        let err = table_service::open_table(&state, OpenTableRequest { table_id, covers })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "covers={covers}: {err:?}");
    }

    let detail = table_service::get_table(&state, table_id).await?;
    assert_eq!(detail.table.status, TableStatus::Free);
    assert_eq!(detail.table.covers, 0);
    assert_eq!(detail.table.use_count, 0);
    assert!(detail.active_order.is_none());
    Ok(())
}

#[tokio::test]
async fn unknown_table_is_not_found() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let err = table_service::open_table(
        &state,
        OpenTableRequest {
            table_id: Uuid::new_v4(),
            covers: 2,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound("Table")));

    let err = table_service::close_table(&state, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound("Table")));
    Ok(())
}

#[tokio::test]
async fn opening_an_occupied_table_conflicts() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let (table_id, _) = common::open(&state, 4, 2).await?;

    let err = table_service::open_table(&state, OpenTableRequest { table_id, covers: 3 })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "{err:?}");

    let live_orders = Orders::find()
        .filter(orders::Column::TableId.eq(table_id))
        .filter(orders::Column::Closed.eq(false))
        .count(&state.orm)
        .await?;
    assert_eq!(live_orders, 1);

    let detail = table_service::get_table(&state, table_id).await?;
    assert_eq!(detail.table.covers, 2);
    assert_eq!(detail.table.use_count, 1);
    Ok(())
}

#[tokio::test]
async fn storage_rejects_a_second_live_order() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let (table_id, _) = common::open(&state, 5, 2).await?;

    let err = orders::ActiveModel {
        id: Set(Uuid::new_v4()),
        table_id: Set(table_id),
        covers: Set(2),
        sent: Set(false),
        closed: Set(false),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await
    .unwrap_err();

    assert!(matches!(AppError::from(err), AppError::Conflict(_)));
    Ok(())
}

#[tokio::test]
async fn close_table_frees_it_and_keeps_history() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let (table_id, order) = common::open(&state, 6, 3).await?;
    common::add(&state, table_id, "Margherita", None, vec![]).await?;

    let closed = table_service::close_table(&state, table_id).await?;
    assert_eq!(closed.id, order.id);
    assert!(closed.closed);
    assert_eq!(closed.status, OrderStatus::Closed);
    assert_eq!(closed.covers, 3);

    let detail = table_service::get_table(&state, table_id).await?;
    assert_eq!(detail.table.status, TableStatus::Free);
    assert_eq!(detail.table.covers, 0);
    assert!(detail.active_order.is_none());

    let history = order_service::get_order(&state, order.id).await?;
    assert_eq!(common::names(&history.items), vec!["Margherita"]);
    assert_eq!(history.total, dec!(9.00));

    let err = table_service::close_table(&state, table_id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    Ok(())
}

#[tokio::test]
async fn reopening_counts_every_use() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let (table_id, first) = common::open(&state, 7, 2).await?;
    table_service::close_table(&state, table_id).await?;

    let reopened =
        table_service::open_table(&state, OpenTableRequest { table_id, covers: 5 }).await?;

    assert_eq!(reopened.table.use_count, 2);
    assert_eq!(reopened.table.covers, 5);
    assert_ne!(reopened.order.id, first.id);
    Ok(())
}

#[tokio::test]
async fn list_tables_reports_active_order_figures() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let (table_id, _) = common::open(&state, 3, 2).await?;
    common::add(&state, table_id, "Margherita", None, vec![]).await?;
    common::add(&state, table_id, "Diavola", Some("Cereali"), vec![]).await?;

    let tables = table_service::list_tables(&state).await?;

    let numbers: Vec<i32> = tables.iter().map(|t| t.number).collect();
    assert_eq!(numbers, (1..=12).collect::<Vec<_>>());

    let third = &tables[2];
    assert_eq!(third.status, TableStatus::Occupied);
    assert_eq!(third.item_count, 2);
    assert_eq!(third.total.to_string(), "22.00");

    let first = &tables[0];
    assert_eq!(first.status, TableStatus::Free);
    assert_eq!(first.item_count, 0);
    assert_eq!(first.total, dec!(0));
    Ok(())
}

#[tokio::test]
async fn soft_deleted_tables_are_hidden_everywhere() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let table_id = common::table_id(&state, 12).await?;

    let table = DiningTables::find_by_id(table_id)
        .one(&state.orm)
        .await?
        .expect("seeded table");
    let mut table: dining_tables::ActiveModel = table.into();
    table.closed = Set(true);
    table.update(&state.orm).await?;

    let err = table_service::get_table(&state, table_id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("Table")));

    let err = table_service::open_table(&state, OpenTableRequest { table_id, covers: 2 })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound("Table")));

    let tables = table_service::list_tables(&state).await?;
    assert_eq!(tables.len(), 11);
    assert!(tables.iter().all(|t| t.id != table_id));
    Ok(())
}
