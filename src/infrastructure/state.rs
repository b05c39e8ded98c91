//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::SaleRepository;
use crate::infrastructure::SeaOrmSaleRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Sale repository, backed by the shared connection pool
    pub sale_repo: Arc<dyn SaleRepository>,
}

impl AppState {
    /// Create a new AppState backed by the given pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_repository(Arc::new(SeaOrmSaleRepository::new(db)))
    }

    /// Create an AppState around any repository implementation
    pub fn with_repository(sale_repo: Arc<dyn SaleRepository>) -> Self {
        Self { sale_repo }
    }
}
