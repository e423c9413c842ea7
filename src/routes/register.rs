use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    dto::register::{Register, RegisterQuery},
    error::AppResult,
    response::{ApiResponse, Meta},
    services::register_service,
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/register",
    params(RegisterQuery),
    responses(
        (status = 200, description = "Closed orders, newest first, with total revenue", body = ApiResponse<Register>)
    ),
    tag = "Register"
)]
pub async fn get_register(
    State(state): State<AppState>,
    Query(query): Query<RegisterQuery>,
) -> AppResult<Json<ApiResponse<Register>>> {
    let data = register_service::list_closed_orders(&state, query).await?;
    let meta = Meta::count(data.orders.len());
    Ok(Json(ApiResponse::success("Register", data, Some(meta))))
}
