use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    entity::sea_orm_active_enums::Category,
    models::{DoughType, Extra, Product},
};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ProductQuery {
    /// Only list products of this menu section.
    pub category: Option<Category>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CategoryList {
    #[schema(value_type = Vec<Category>)]
    pub items: Vec<Category>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct DoughTypeList {
    #[schema(value_type = Vec<DoughType>)]
    pub items: Vec<DoughType>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ExtraList {
    #[schema(value_type = Vec<Extra>)]
    pub items: Vec<Extra>,
}
