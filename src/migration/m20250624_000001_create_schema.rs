use sea_orm::{ConnectionTrait, Schema};
use sea_orm_migration::prelude::*;

use crate::entity::{
    AuditLogs, DiningTables, DoughTypes, Extras, OrderItemExtras, OrderItems, Orders, Products,
    order_items, orders,
};

/// Postgres and SQLite both accept partial indexes; this is the storage-level
/// guard for "at most one non-closed order per table".
const ONE_ACTIVE_ORDER_PER_TABLE: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
     idx_orders_one_active_per_table ON orders (table_id) WHERE NOT closed";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());

        // Parents before children so foreign keys resolve.
        manager
            .create_table(schema.create_table_from_entity(DiningTables))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(Products))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(DoughTypes))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(Extras))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(Orders))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(OrderItems))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(OrderItemExtras))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(AuditLogs))
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_table_id")
                    .table(Orders)
                    .col(orders::Column::TableId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_order_items_order_id")
                    .table(OrderItems)
                    .col(order_items::Column::OrderId)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(ONE_ACTIVE_ORDER_PER_TABLE)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table(manager, AuditLogs).await?;
        drop_table(manager, OrderItemExtras).await?;
        drop_table(manager, OrderItems).await?;
        drop_table(manager, Orders).await?;
        drop_table(manager, Extras).await?;
        drop_table(manager, DoughTypes).await?;
        drop_table(manager, Products).await?;
        drop_table(manager, DiningTables).await
    }
}

async fn drop_table<T>(manager: &SchemaManager<'_>, table: T) -> Result<(), DbErr>
where
    T: IntoTableRef,
{
    manager
        .drop_table(Table::drop().table(table).if_exists().to_owned())
        .await
}
