use ristorante_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    seed,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let report = seed::seed(&orm).await?;
    println!(
        "Seed completed. Tables: {}, products: {}, dough types: {}, extras: {}",
        report.tables, report.products, report.dough_types, report.extras
    );
    Ok(())
}
