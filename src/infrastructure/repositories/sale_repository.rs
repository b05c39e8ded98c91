//! SeaORM implementation of SaleRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect, Select, Set};

use crate::domain::{DomainError, NewSale, Sale, SaleRepository};
use crate::models::sale::{ActiveModel, Column, Entity as SaleEntity, SaleWithTotal};

/// SeaORM-based implementation of SaleRepository
pub struct SeaOrmSaleRepository {
    db: DatabaseConnection,
}

impl SeaOrmSaleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Project the stored columns plus `price + delivery AS total`
fn with_total(select: Select<SaleEntity>) -> Select<SaleEntity> {
    select
        .select_only()
        .columns([Column::Id, Column::Name, Column::Price, Column::Delivery])
        .column_as(
            Expr::col(Column::Price).add(Expr::col(Column::Delivery)),
            "total",
        )
}

#[async_trait]
impl SaleRepository for SeaOrmSaleRepository {
    async fn find_all(&self) -> Result<Vec<Sale>, DomainError> {
        let rows = with_total(SaleEntity::find())
            .into_model::<SaleWithTotal>()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(Sale::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Sale>, DomainError> {
        let row = with_total(SaleEntity::find_by_id(id))
            .into_model::<SaleWithTotal>()
            .one(&self.db)
            .await?;

        Ok(row.map(Sale::from))
    }

    async fn create(&self, input: NewSale) -> Result<Sale, DomainError> {
        let sale = ActiveModel {
            name: Set(input.name.clone()),
            price: Set(input.price),
            delivery: Set(input.delivery),
            ..Default::default()
        };

        let result = SaleEntity::insert(sale).exec(&self.db).await?;

        Ok(Sale::from_input(result.last_insert_id, input))
    }

    async fn update(&self, id: i32, input: NewSale) -> Result<Sale, DomainError> {
        let result = SaleEntity::update_many()
            .col_expr(Column::Name, Expr::value(input.name.clone()))
            .col_expr(Column::Price, Expr::value(input.price))
            .col_expr(Column::Delivery, Expr::value(input.delivery))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(Sale::from_input(id, input))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = SaleEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}
