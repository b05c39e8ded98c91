use sea_orm::FromQueryResult;
use sea_orm::entity::prelude::*;

use crate::domain::Sale;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub delivery: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Row read back with `price + delivery AS total` projected by the database
#[derive(Debug, Clone, FromQueryResult)]
pub struct SaleWithTotal {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub delivery: f64,
    pub total: f64,
}

impl From<SaleWithTotal> for Sale {
    fn from(row: SaleWithTotal) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            delivery: row.delivery,
            total: row.total,
        }
    }
}
