//! Repository implementations using SeaORM

mod sale_repository;

pub use sale_repository::SeaOrmSaleRepository;
