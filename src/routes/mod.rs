use axum::{Router, routing::get};

use crate::state::AppState;

pub mod catalog;
pub mod doc;
pub mod health;
pub mod orders;
pub mod register;
pub mod tables;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/tables", tables::router())
        .nest("/products", catalog::product_router())
        .route("/dough-types", get(catalog::list_dough_types))
        .route("/extras", get(catalog::list_extras))
        .nest("/orders", orders::router())
        .route("/register", get(register::get_register))
}
