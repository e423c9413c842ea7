//! Reference data: the menu, dough types, extras and the dining room.
//!
//! Seeding is idempotent. Rows are matched by their natural key (table number,
//! product/dough/extra name) and only missing ones are inserted.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set, TransactionTrait,
};
use uuid::Uuid;

use crate::entity::{
    dining_tables::{self, Entity as DiningTables},
    dough_types::{self, Entity as DoughTypes},
    extras::{self, Entity as Extras},
    products::{self, Entity as Products},
    sea_orm_active_enums::{Category, ProductType, TableStatus},
};

pub const TABLE_COUNT: i32 = 12;

/// (name, price in cents, category, type, customizable)
const PRODUCTS: &[(&str, i64, Category, ProductType, bool)] = &[
    ("Bruschetta al Pomodoro", 800, Category::Antipasti, ProductType::Kitchen, false),
    ("Antipasto Misto", 1200, Category::Antipasti, ProductType::Kitchen, false),
    ("Caprese", 1000, Category::Antipasti, ProductType::Kitchen, false),
    ("Frittura di Mare", 1200, Category::Antipasti, ProductType::Kitchen, false),
    ("Spaghetti alla Carbonara", 1400, Category::Pasta, ProductType::Kitchen, false),
    ("Penne all'Arrabbiata", 1400, Category::Pasta, ProductType::Kitchen, false),
    ("Tagliatelle ai Funghi Porcini", 1600, Category::Pasta, ProductType::Kitchen, false),
    ("Risotto ai Frutti di Mare", 1800, Category::Pasta, ProductType::Kitchen, false),
    ("Margherita", 900, Category::Pizza, ProductType::Pizzeria, true),
    ("Diavola", 1100, Category::Pizza, ProductType::Pizzeria, true),
    ("Quattro Formaggi", 1200, Category::Pizza, ProductType::Pizzeria, true),
    ("Capricciosa", 1300, Category::Pizza, ProductType::Pizzeria, true),
    ("Napoletana", 1000, Category::Pizza, ProductType::Pizzeria, true),
    ("Prosciutto e Funghi", 1200, Category::Pizza, ProductType::Pizzeria, true),
    ("Tiramisù", 600, Category::Dessert, ProductType::Kitchen, false),
    ("Panna Cotta", 600, Category::Dessert, ProductType::Kitchen, false),
    ("Cannoli Siciliani", 700, Category::Dessert, ProductType::Kitchen, false),
    ("Gelato Artigianale", 600, Category::Dessert, ProductType::Kitchen, false),
];

const DOUGH_TYPES: &[(&str, i64)] = &[
    ("Classica", 0),
    ("Napoli", 0),
    ("Cereali", 200),
    ("Senza Glutine", 200),
];

const EXTRAS: &[(&str, i64)] = &[
    ("Mozzarella senza lattosio", 150),
    ("Bufala", 200),
    ("Funghi porcini", 250),
    ("Prosciutto crudo", 200),
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub tables: usize,
    pub products: usize,
    pub dough_types: usize,
    pub extras: usize,
}

impl SeedReport {
    pub fn inserted(&self) -> usize {
        self.tables + self.products + self.dough_types + self.extras
    }
}

fn cents(amount: i64) -> Decimal {
    Decimal::new(amount, 2)
}

/// True when no dining table exists yet.
pub async fn is_empty(db: &DatabaseConnection) -> Result<bool, sea_orm::DbErr> {
    Ok(DiningTables::find().count(db).await? == 0)
}

pub async fn seed(db: &DatabaseConnection) -> Result<SeedReport, sea_orm::DbErr> {
    let txn = db.begin().await?;
    let mut report = SeedReport::default();

    for number in 1..=TABLE_COUNT {
        let exists = DiningTables::find()
            .filter(dining_tables::Column::Number.eq(number))
            .one(&txn)
            .await?
            .is_some();
        if exists {
            continue;
        }
        dining_tables::ActiveModel {
            id: Set(Uuid::new_v4()),
            number: Set(number),
            status: Set(TableStatus::Free),
            covers: Set(0),
            use_count: Set(0),
            closed: Set(false),
            created_at: Set(Utc::now().into()),
        }
        .insert(&txn)
        .await?;
        report.tables += 1;
    }

    for (position, (name, price, category, product_type, customizable)) in
        PRODUCTS.iter().enumerate()
    {
        let exists = Products::find()
            .filter(products::Column::Name.eq(*name))
            .one(&txn)
            .await?
            .is_some();
        if exists {
            continue;
        }
        products::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            price: Set(cents(*price)),
            category: Set(*category),
            product_type: Set(*product_type),
            customizable: Set(*customizable),
            position: Set(position as i32),
        }
        .insert(&txn)
        .await?;
        report.products += 1;
    }

    for (position, (name, price)) in DOUGH_TYPES.iter().enumerate() {
        let exists = DoughTypes::find()
            .filter(dough_types::Column::Name.eq(*name))
            .one(&txn)
            .await?
            .is_some();
        if exists {
            continue;
        }
        dough_types::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            additional_price: Set(cents(*price)),
            position: Set(position as i32),
        }
        .insert(&txn)
        .await?;
        report.dough_types += 1;
    }

    for (position, (name, price)) in EXTRAS.iter().enumerate() {
        let exists = Extras::find()
            .filter(extras::Column::Name.eq(*name))
            .one(&txn)
            .await?
            .is_some();
        if exists {
            continue;
        }
        extras::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            price: Set(cents(*price)),
            position: Set(position as i32),
        }
        .insert(&txn)
        .await?;
        report.extras += 1;
    }

    txn.commit().await?;

    tracing::info!(
        tables = report.tables,
        products = report.products,
        dough_types = report.dough_types,
        extras = report.extras,
        "seed applied"
    );
    Ok(report)
}
