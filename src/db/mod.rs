//! Storage backends for products.
//!
//! Route handlers only see [`ProductStore`]; the concrete backend is picked
//! at startup from [`crate::configuration::StorageKind`].

use crate::errors::StorageError;
use crate::models;
use async_trait::async_trait;
use uuid::Uuid;

mod memory;
mod postgres;

pub use memory::InMemoryProductStore;
pub use postgres::PgProductStore;

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persist a validated product, assigning its id and creation time.
    async fn insert(&self, product: models::NewProduct) -> Result<models::Product, StorageError>;

    /// Products matching `filter`, oldest first.
    async fn list(&self, filter: models::PriceFilter)
        -> Result<Vec<models::Product>, StorageError>;

    async fn fetch(&self, id: Uuid) -> Result<Option<models::Product>, StorageError>;

    /// Replace the description. `None` when no product has this id.
    async fn update_description(
        &self,
        id: Uuid,
        description: Option<String>,
    ) -> Result<Option<models::Product>, StorageError>;

    /// `true` when a product was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, StorageError>;
}
