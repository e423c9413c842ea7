use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, post},
};
use uuid::Uuid;

use crate::{
    dto::orders::{AddItemRequest, OrderWithItems, Receipt, RemoveItemQuery, RemovedItem},
    error::AppResult,
    extract::ValidJson,
    models::{Order, OrderItem},
    response::{ApiResponse, Meta},
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add-item", post(add_item))
        .route("/items/{id}", delete(remove_item))
        .route("/table/{table_id}", get(get_table_order))
        .route("/{id}", get(get_order))
        .route("/{id}/send", post(send_order))
        .route("/{id}/close", post(close_order))
        .route("/{id}/receipt", get(get_receipt))
}

#[utoipa::path(
    post,
    path = "/api/orders/add-item",
    request_body = AddItemRequest,
    responses(
        (status = 200, description = "Item priced and added to the table's active order", body = ApiResponse<OrderItem>),
        (status = 404, description = "Table, active order or product not found"),
        (status = 422, description = "Malformed body"),
    ),
    tag = "Orders"
)]
pub async fn add_item(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<AddItemRequest>,
) -> AppResult<Json<ApiResponse<OrderItem>>> {
    let item = order_service::add_item(&state, payload).await?;
    Ok(Json(ApiResponse::success(
        "Item added successfully",
        item,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/orders/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Order item ID"),
        RemoveItemQuery
    ),
    responses(
        (status = 200, description = "Item removed", body = ApiResponse<RemovedItem>),
        (status = 404, description = "Item not found"),
        (status = 409, description = "Item belongs to another table or to a closed order"),
    ),
    tag = "Orders"
)]
pub async fn remove_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<RemoveItemQuery>,
) -> AppResult<Json<ApiResponse<RemovedItem>>> {
    let removed = order_service::remove_item(&state, id, query.table_id).await?;
    Ok(Json(ApiResponse::success(
        "Item removed successfully",
        removed,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    get,
    path = "/api/orders/table/{table_id}",
    params(
        ("table_id" = Uuid, Path, description = "Table ID")
    ),
    responses(
        (status = 200, description = "Active order of the table", body = ApiResponse<OrderWithItems>),
        (status = 404, description = "Table not found or no active order"),
    ),
    tag = "Orders"
)]
pub async fn get_table_order(
    State(state): State<AppState>,
    Path(table_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<OrderWithItems>>> {
    let data = order_service::get_active_order(&state, table_id).await?;
    Ok(Json(ApiResponse::success("OK", data, Some(Meta::empty()))))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order with items", body = ApiResponse<OrderWithItems>),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<OrderWithItems>>> {
    let data = order_service::get_order(&state, id).await?;
    Ok(Json(ApiResponse::success("OK", data, Some(Meta::empty()))))
}

#[utoipa::path(
    post,
    path = "/api/orders/{id}/send",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order sent to kitchen and pizzeria", body = ApiResponse<Order>),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Order already closed"),
    ),
    tag = "Orders"
)]
pub async fn send_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = order_service::send_order(&state, id).await?;
    Ok(Json(ApiResponse::success(
        "Order sent successfully",
        order,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    post,
    path = "/api/orders/{id}/close",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order closed, table freed", body = ApiResponse<Order>),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Order already closed"),
    ),
    tag = "Orders"
)]
pub async fn close_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = order_service::close_order(&state, id).await?;
    Ok(Json(ApiResponse::success(
        "Order closed successfully",
        order,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}/receipt",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Receipt split by station with dough summary", body = ApiResponse<Receipt>),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn get_receipt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Receipt>>> {
    let data = order_service::get_receipt(&state, id).await?;
    Ok(Json(ApiResponse::success("Receipt", data, Some(Meta::empty()))))
}
