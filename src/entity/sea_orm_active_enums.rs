use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    #[sea_orm(string_value = "free")]
    Free,
    #[sea_orm(string_value = "occupied")]
    Occupied,
}

/// Menu section a product is listed under.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[sea_orm(string_value = "antipasti")]
    Antipasti,
    #[sea_orm(string_value = "pasta")]
    Pasta,
    #[sea_orm(string_value = "pizza")]
    Pizza,
    #[sea_orm(string_value = "dessert")]
    Dessert,
}

/// Where a product is prepared; drives the receipt partition.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    #[sea_orm(string_value = "kitchen")]
    Kitchen,
    #[sea_orm(string_value = "pizzeria")]
    Pizzeria,
}
