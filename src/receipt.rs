//! Pricing and receipt computation over resolved line items.
//!
//! Nothing here touches storage: every function is a pure computation over
//! values the services have already loaded.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{entity::sea_orm_active_enums::ProductType, models::OrderItem, money};

/// Reserved dough name marking a gluten-free pizza.
pub const GLUTEN_FREE_DOUGH: &str = "Senza Glutine";

/// Preparation station an item is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Station {
    Kitchen,
    Pizzeria,
    GlutenFree,
}

impl Station {
    pub fn classify(product_type: ProductType, dough_type: Option<&str>) -> Self {
        match product_type {
            ProductType::Kitchen => Station::Kitchen,
            ProductType::Pizzeria if is_gluten_free(dough_type) => Station::GlutenFree,
            ProductType::Pizzeria => Station::Pizzeria,
        }
    }
}

pub fn is_gluten_free(dough_type: Option<&str>) -> bool {
    dough_type == Some(GLUTEN_FREE_DOUGH)
}

/// Dough type first (when set), then extras in the order they were attached.
pub fn customizations<'a>(
    dough_type: Option<&'a str>,
    extras: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    dough_type
        .filter(|d| !d.is_empty())
        .into_iter()
        .chain(extras)
        .map(str::to_owned)
        .collect()
}

/// `base + dough surcharge + sum(extras)`; an unresolved dough contributes 0.
pub fn line_total(
    base_price: Decimal,
    dough_surcharge: Option<Decimal>,
    extra_prices: impl IntoIterator<Item = Decimal>,
) -> Decimal {
    money::sum(
        std::iter::once(base_price)
            .chain(dough_surcharge)
            .chain(extra_prices),
    )
}

pub fn order_total(items: &[OrderItem]) -> Decimal {
    money::sum(items.iter().map(|item| item.total_price))
}

/// Items split by station, in insertion order, with per-dough counts.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct ReceiptPartition {
    pub kitchen_items: Vec<OrderItem>,
    pub pizzeria_items: Vec<OrderItem>,
    pub gluten_free_items: Vec<OrderItem>,
    /// Pizzeria items per dough name; items without a dough are not counted.
    pub dough_summary: BTreeMap<String, u32>,
    #[schema(value_type = String, example = "22.00")]
    pub total: Decimal,
}

pub fn partition(items: &[OrderItem]) -> ReceiptPartition {
    let mut receipt = ReceiptPartition {
        total: order_total(items),
        ..Default::default()
    };

    for item in items {
        let dough = item.dough_type.as_deref();
        match Station::classify(item.product_type, dough) {
            Station::Kitchen => receipt.kitchen_items.push(item.clone()),
            Station::Pizzeria => receipt.pizzeria_items.push(item.clone()),
            Station::GlutenFree => receipt.gluten_free_items.push(item.clone()),
        }

        if item.product_type == ProductType::Pizzeria {
            if let Some(dough) = dough.filter(|d| !d.is_empty()) {
                *receipt.dough_summary.entry(dough.to_owned()).or_insert(0) += 1;
            }
        }
    }

    receipt
}
