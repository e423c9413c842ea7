use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    dto::tables::{OpenTableRequest, OpenedTable, TableDetail, TableList},
    error::AppResult,
    extract::ValidJson,
    models::Order,
    response::{ApiResponse, Meta},
    services::table_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tables))
        .route("/open", post(open_table))
        .route("/{id}", get(get_table))
        .route("/{id}/close", post(close_table))
}

#[utoipa::path(
    get,
    path = "/api/tables",
    responses(
        (status = 200, description = "Tables in service with active-order figures", body = ApiResponse<TableList>)
    ),
    tag = "Tables"
)]
pub async fn list_tables(State(state): State<AppState>) -> AppResult<Json<ApiResponse<TableList>>> {
    let items = table_service::list_tables(&state).await?;
    let meta = Meta::count(items.len());
    Ok(Json(ApiResponse::success(
        "Tables",
        TableList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    get,
    path = "/api/tables/{id}",
    params(
        ("id" = Uuid, Path, description = "Table ID")
    ),
    responses(
        (status = 200, description = "Table with its active order", body = ApiResponse<TableDetail>),
        (status = 404, description = "Table not found"),
    ),
    tag = "Tables"
)]
pub async fn get_table(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<TableDetail>>> {
    let data = table_service::get_table(&state, id).await?;
    Ok(Json(ApiResponse::success("Table", data, Some(Meta::empty()))))
}

#[utoipa::path(
    post,
    path = "/api/tables/open",
    request_body = OpenTableRequest,
    responses(
        (status = 200, description = "Table opened, order created", body = ApiResponse<OpenedTable>),
        (status = 404, description = "Table not found"),
        (status = 409, description = "Table already occupied"),
        (status = 422, description = "Covers out of range or malformed body"),
    ),
    tag = "Tables"
)]
pub async fn open_table(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<OpenTableRequest>,
) -> AppResult<Json<ApiResponse<OpenedTable>>> {
    let data = table_service::open_table(&state, payload).await?;
    Ok(Json(ApiResponse::success(
        "Table opened successfully",
        data,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    post,
    path = "/api/tables/{id}/close",
    params(
        ("id" = Uuid, Path, description = "Table ID")
    ),
    responses(
        (status = 200, description = "Active order closed, table freed", body = ApiResponse<Order>),
        (status = 404, description = "Table not found"),
        (status = 409, description = "Table has no active order"),
    ),
    tag = "Tables"
)]
pub async fn close_table(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = table_service::close_table(&state, id).await?;
    Ok(Json(ApiResponse::success(
        "Table closed successfully",
        order,
        Some(Meta::empty()),
    )))
}
