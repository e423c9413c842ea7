mod common;

use ristorante_api::{
    dto::catalog::ProductQuery,
    entity::sea_orm_active_enums::{Category, ProductType},
    error::AppError,
    seed,
    services::catalog_service,
};
use rust_decimal_macros::dec;
use uuid::Uuid;

#[tokio::test]
async fn seeding_twice_inserts_nothing_new() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    assert!(!seed::is_empty(&state.orm).await?);

    let report = seed::seed(&state.orm).await?;
    assert_eq!(report.inserted(), 0);

    let products = catalog_service::list_products(&state, ProductQuery::default()).await?;
    assert_eq!(products.len(), 18);
    Ok(())
}

#[tokio::test]
async fn products_filter_by_category_in_menu_order() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let pizzas = catalog_service::list_products(
        &state,
        ProductQuery {
            category: Some(Category::Pizza),
        },
    )
    .await?;

    assert_eq!(pizzas.len(), 6);
    assert_eq!(pizzas[0].name, "Margherita");
    assert_eq!(pizzas[0].price.to_string(), "9.00");
    assert!(
        pizzas
            .iter()
            .all(|p| p.product_type == ProductType::Pizzeria && p.customizable)
    );
    Ok(())
}

#[tokio::test]
async fn categories_follow_menu_order() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let categories = catalog_service::list_categories(&state).await?;

    assert_eq!(
        categories,
        vec![
            Category::Antipasti,
            Category::Pasta,
            Category::Pizza,
            Category::Dessert
        ]
    );
    Ok(())
}

#[tokio::test]
async fn dough_types_and_extras_carry_prices() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let doughs = catalog_service::list_dough_types(&state).await?;
    let names: Vec<&str> = doughs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Classica", "Napoli", "Cereali", "Senza Glutine"]);
    assert_eq!(doughs[2].additional_price, dec!(2.00));

    let extras = catalog_service::list_extras(&state).await?;
    assert_eq!(extras.len(), 4);
    assert_eq!(extras[0].name, "Mozzarella senza lattosio");
    assert_eq!(extras[0].price.to_string(), "1.50");
    Ok(())
}

#[tokio::test]
async fn product_lookup() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let id = common::product_id(&state, "Diavola").await?;

    let product = catalog_service::get_product(&state, id).await?;
    assert_eq!(product.price, dec!(11.00));

    let err = catalog_service::get_product(&state, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound("Product")));
    Ok(())
}
