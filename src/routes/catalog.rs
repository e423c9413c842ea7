use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::catalog::{CategoryList, DoughTypeList, ExtraList, ProductList, ProductQuery},
    error::AppResult,
    models::Product,
    response::{ApiResponse, Meta},
    services::catalog_service,
    state::AppState,
};

pub fn product_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/categories", get(list_categories))
        .route("/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Menu products, optionally for one category", body = ApiResponse<ProductList>)
    ),
    tag = "Catalog"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let items = catalog_service::list_products(&state, query).await?;
    let meta = Meta::count(items.len());
    Ok(Json(ApiResponse::success(
        "Products",
        ProductList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    get,
    path = "/api/products/categories",
    responses(
        (status = 200, description = "Menu categories in menu order", body = ApiResponse<CategoryList>)
    ),
    tag = "Catalog"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CategoryList>>> {
    let items = catalog_service::list_categories(&state).await?;
    let meta = Meta::count(items.len());
    Ok(Json(ApiResponse::success(
        "Categories",
        CategoryList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Catalog"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = catalog_service::get_product(&state, id).await?;
    Ok(Json(ApiResponse::success("Product", product, None)))
}

#[utoipa::path(
    get,
    path = "/api/dough-types",
    responses(
        (status = 200, description = "Pizza dough types", body = ApiResponse<DoughTypeList>)
    ),
    tag = "Catalog"
)]
pub async fn list_dough_types(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<DoughTypeList>>> {
    let items = catalog_service::list_dough_types(&state).await?;
    let meta = Meta::count(items.len());
    Ok(Json(ApiResponse::success(
        "Dough types",
        DoughTypeList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    get,
    path = "/api/extras",
    responses(
        (status = 200, description = "Pizza extras", body = ApiResponse<ExtraList>)
    ),
    tag = "Catalog"
)]
pub async fn list_extras(State(state): State<AppState>) -> AppResult<Json<ApiResponse<ExtraList>>> {
    let items = catalog_service::list_extras(&state).await?;
    let meta = Meta::count(items.len());
    Ok(Json(ApiResponse::success(
        "Extras",
        ExtraList { items },
        Some(meta),
    )))
}
