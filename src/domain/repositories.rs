//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use super::DomainError;

/// Sale data for API responses
///
/// `total` is never persisted; it is always `price + delivery` of the stored row.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Sale {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub delivery: f64,
    /// Kept uppercase on the wire for compatibility with existing clients
    #[serde(rename = "TOTAL")]
    pub total: f64,
}

impl Sale {
    /// Build the response for a row written with `input` under `id`
    pub fn from_input(id: i32, input: NewSale) -> Self {
        let total = input.total();
        Self {
            id,
            name: input.name,
            price: input.price,
            delivery: input.delivery,
            total,
        }
    }
}

/// Validated writable fields of a sale (Create and Update replace all three)
#[derive(Debug, Clone, PartialEq)]
pub struct NewSale {
    pub name: String,
    pub price: f64,
    pub delivery: f64,
}

impl NewSale {
    pub fn total(&self) -> f64 {
        self.price + self.delivery
    }
}

/// Repository trait for Sale entity
///
/// Every method issues exactly one SQL statement.
#[async_trait]
pub trait SaleRepository: Send + Sync {
    /// Find all sales in database-default order
    async fn find_all(&self) -> Result<Vec<Sale>, DomainError>;

    /// Find a sale by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Sale>, DomainError>;

    /// Insert a new sale and return it with its generated id
    async fn create(&self, input: NewSale) -> Result<Sale, DomainError>;

    /// Replace name, price and delivery of an existing sale.
    /// Returns `DomainError::NotFound` when no row has this id.
    async fn update(&self, id: i32, input: NewSale) -> Result<Sale, DomainError>;

    /// Delete a sale by ID.
    /// Returns `DomainError::NotFound` when no row has this id.
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}
