pub mod audit_logs;
pub mod dining_tables;
pub mod dough_types;
pub mod extras;
pub mod order_item_extras;
pub mod order_items;
pub mod orders;
pub mod products;
pub mod sea_orm_active_enums;

pub use audit_logs::Entity as AuditLogs;
pub use dining_tables::Entity as DiningTables;
pub use dough_types::Entity as DoughTypes;
pub use extras::Entity as Extras;
pub use order_item_extras::Entity as OrderItemExtras;
pub use order_items::Entity as OrderItems;
pub use orders::Entity as Orders;
pub use products::Entity as Products;
