use sea_orm::{ColumnTrait, EntityTrait, Iterable, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::{
    dto::catalog::ProductQuery,
    entity::{
        dough_types::{Column as DoughCol, Entity as DoughTypes},
        extras::{Column as ExtraCol, Entity as Extras},
        products::{Column as ProdCol, Entity as Products},
        sea_orm_active_enums::Category,
    },
    error::{AppError, AppResult},
    models::{DoughType, Extra, Product},
    state::AppState,
};

pub async fn list_products(state: &AppState, query: ProductQuery) -> AppResult<Vec<Product>> {
    let mut finder = Products::find();
    if let Some(category) = query.category {
        finder = finder.filter(ProdCol::Category.eq(category));
    }

    let items = finder
        .order_by_asc(ProdCol::Position)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();
    Ok(items)
}

pub async fn get_product(state: &AppState, id: Uuid) -> AppResult<Product> {
    Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Product::from)
        .ok_or(AppError::NotFound("Product"))
}

/// Categories that have at least one product, in menu order.
pub async fn list_categories(state: &AppState) -> AppResult<Vec<Category>> {
    let present: Vec<Category> = Products::find()
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|p| p.category)
        .collect();

    Ok(Category::iter().filter(|c| present.contains(c)).collect())
}

pub async fn list_dough_types(state: &AppState) -> AppResult<Vec<DoughType>> {
    let items = DoughTypes::find()
        .order_by_asc(DoughCol::Position)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(DoughType::from)
        .collect();
    Ok(items)
}

pub async fn list_extras(state: &AppState) -> AppResult<Vec<Extra>> {
    let items = Extras::find()
        .order_by_asc(ExtraCol::Position)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Extra::from)
        .collect();
    Ok(items)
}
