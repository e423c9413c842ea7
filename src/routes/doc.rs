use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        catalog::{CategoryList, DoughTypeList, ExtraList, ProductList, ProductQuery},
        orders::{
            AddItemRequest, OrderWithItems, Receipt, ReceiptTable, RemoveItemQuery, RemovedItem,
        },
        register::{ClosedOrder, Register, RegisterQuery},
        tables::{OpenTableRequest, OpenedTable, TableDetail, TableList},
    },
    entity::sea_orm_active_enums::{Category, ProductType, TableStatus},
    models::{DoughType, Extra, Order, OrderItem, OrderItemExtra, OrderStatus, Product, Table},
    receipt::ReceiptPartition,
    response::{ApiResponse, Meta},
    routes::{catalog, health, orders, register, tables},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        tables::list_tables,
        tables::get_table,
        tables::open_table,
        tables::close_table,
        catalog::list_products,
        catalog::list_categories,
        catalog::get_product,
        catalog::list_dough_types,
        catalog::list_extras,
        orders::add_item,
        orders::remove_item,
        orders::get_table_order,
        orders::get_order,
        orders::send_order,
        orders::close_order,
        orders::get_receipt,
        register::get_register
    ),
    components(
        schemas(
            Category,
            ProductType,
            TableStatus,
            Product,
            DoughType,
            Extra,
            Table,
            Order,
            OrderStatus,
            OrderItem,
            OrderItemExtra,
            ReceiptPartition,
            OpenTableRequest,
            OpenedTable,
            TableDetail,
            TableList,
            ProductQuery,
            ProductList,
            CategoryList,
            DoughTypeList,
            ExtraList,
            AddItemRequest,
            RemoveItemQuery,
            RemovedItem,
            OrderWithItems,
            ReceiptTable,
            Receipt,
            RegisterQuery,
            ClosedOrder,
            Register,
            Meta,
            ApiResponse<Table>,
            ApiResponse<TableList>,
            ApiResponse<OrderWithItems>,
            ApiResponse<Receipt>,
            ApiResponse<Register>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Tables", description = "Dining room and table sessions"),
        (name = "Catalog", description = "Menu, dough types and extras"),
        (name = "Orders", description = "Order taking, sending and receipts"),
        (name = "Register", description = "Closed orders and revenue"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
