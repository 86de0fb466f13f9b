use super::ProductStore;
use crate::errors::StorageError;
use crate::models;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local store, kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<Vec<models::Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    #[tracing::instrument(name = "Insert product in memory.", skip(self))]
    async fn insert(&self, product: models::NewProduct) -> Result<models::Product, StorageError> {
        let product = product.into_product(Uuid::new_v4(), Utc::now());
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    #[tracing::instrument(name = "List products in memory.", skip(self))]
    async fn list(
        &self,
        filter: models::PriceFilter,
    ) -> Result<Vec<models::Product>, StorageError> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|product| filter.matches(product))
            .cloned()
            .collect())
    }

    #[tracing::instrument(name = "Fetch product from memory.", skip(self))]
    async fn fetch(&self, id: Uuid) -> Result<Option<models::Product>, StorageError> {
        let products = self.products.read().await;
        Ok(products.iter().find(|product| product.id == id).cloned())
    }

    #[tracing::instrument(name = "Update product description in memory.", skip(self))]
    async fn update_description(
        &self,
        id: Uuid,
        description: Option<String>,
    ) -> Result<Option<models::Product>, StorageError> {
        let mut products = self.products.write().await;
        Ok(products
            .iter_mut()
            .find(|product| product.id == id)
            .map(|product| {
                product.description = description;
                product.clone()
            }))
    }

    #[tracing::instrument(name = "Delete product from memory.", skip(self))]
    async fn delete(&self, id: Uuid) -> Result<bool, StorageError> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|product| product.id != id);
        Ok(products.len() != before)
    }
}
