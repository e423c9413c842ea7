mod common;

use ristorante_api::{dto::register::RegisterQuery, services::{register_service, table_service}};
use rust_decimal_macros::dec;

#[tokio::test]
async fn empty_register_has_no_revenue() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let register = register_service::list_closed_orders(&state, RegisterQuery::default()).await?;

    assert!(register.orders.is_empty());
    assert_eq!(register.order_count, 0);
    assert_eq!(register.total_revenue.to_string(), "0.00");
    Ok(())
}

#[tokio::test]
async fn register_sums_closed_orders_newest_first() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    // 9.00 + 13.00
    let (third, _) = common::open(&state, 3, 2).await?;
    common::add(&state, third, "Margherita", None, vec![]).await?;
    common::add(&state, third, "Diavola", Some("Cereali"), vec![]).await?;

    // 15.50 + 14.00 + 6.00
    let (fifth, _) = common::open(&state, 5, 4).await?;
    let porcini = common::extra_id(&state, "Funghi porcini").await?;
    common::add(&state, fifth, "Diavola", Some("Cereali"), vec![porcini]).await?;
    common::add(&state, fifth, "Penne all'Arrabbiata", None, vec![]).await?;
    common::add(&state, fifth, "Tiramisù", None, vec![]).await?;

    // Still seated: must not be counted.
    let (seventh, _) = common::open(&state, 7, 2).await?;
    common::add(&state, seventh, "Caprese", None, vec![]).await?;

    table_service::close_table(&state, third).await?;
    table_service::close_table(&state, fifth).await?;

    let register = register_service::list_closed_orders(&state, RegisterQuery::default()).await?;

    assert_eq!(register.order_count, 2);
    assert_eq!(register.total_revenue.to_string(), "57.50");

    let newest = &register.orders[0];
    assert_eq!(newest.table_number, 5);
    assert_eq!(newest.covers, 4);
    assert_eq!(newest.use_count, 1);
    assert_eq!(newest.total, dec!(35.50));
    assert_eq!(newest.items.len(), 3);
    assert_eq!(newest.items[0].customizations, vec!["Cereali", "Funghi porcini"]);

    let oldest = &register.orders[1];
    assert_eq!(oldest.table_number, 3);
    assert_eq!(oldest.covers, 2);
    assert_eq!(oldest.total, dec!(22.00));
    assert!(newest.created_at >= oldest.created_at);
    Ok(())
}

#[tokio::test]
async fn register_filters_by_day() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let (table_id, _) = common::open(&state, 1, 2).await?;
    common::add(&state, table_id, "Margherita", None, vec![]).await?;
    table_service::close_table(&state, table_id).await?;

    let all = register_service::list_closed_orders(&state, RegisterQuery::default()).await?;
    let day = all.orders[0].created_at.date_naive();

    let same_day =
        register_service::list_closed_orders(&state, RegisterQuery { date: Some(day) }).await?;
    assert_eq!(same_day.order_count, 1);
    assert_eq!(same_day.total_revenue, dec!(9.00));

    let day_before = day.pred_opt().expect("valid date");
    let earlier =
        register_service::list_closed_orders(&state, RegisterQuery { date: Some(day_before) })
            .await?;
    assert_eq!(earlier.order_count, 0);
    assert_eq!(earlier.total_revenue, dec!(0));
    Ok(())
}
