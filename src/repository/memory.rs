use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ProductRepository;
use crate::error::AppError;
use crate::models::product::{NewProduct, Product, ProductChanges};

#[derive(Debug, Default)]
struct Inner {
    products: BTreeMap<i64, Product>,
    last_id: i64,
}

/// Process-local store. Ids start at 1 and are never reused, so iterating
/// the map by key yields creation order.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    inner: RwLock<Inner>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.products.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Product>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.products.get(&id).cloned())
    }

    async fn create(&self, product: NewProduct) -> Result<Product, AppError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let product = product.into_product(inner.last_id);
        inner.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: i64, changes: ProductChanges) -> Result<Option<Product>, AppError> {
        let mut inner = self.inner.write().await;
        Ok(inner.products.get_mut(&id).map(|product| {
            product.apply(changes);
            product.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        Ok(inner.products.remove(&id).is_some())
    }
}
