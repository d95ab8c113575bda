//! Product storage.
//!
//! Handlers only see `dyn ProductRepository`; the backend is picked at
//! start-up from configuration.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::product::{NewProduct, Product, ProductChanges};

pub use memory::InMemoryProductRepository;
pub use postgres::PgProductRepository;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every stored product, in creation order.
    async fn list(&self) -> Result<Vec<Product>, AppError>;

    async fn get(&self, id: i64) -> Result<Option<Product>, AppError>;

    async fn create(&self, product: NewProduct) -> Result<Product, AppError>;

    /// Returns `None` when no product has this id.
    async fn update(&self, id: i64, changes: ProductChanges) -> Result<Option<Product>, AppError>;

    /// Returns `false` when no product has this id.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
