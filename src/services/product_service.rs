use crate::db::ProductStore;
use crate::errors::ProductError;
use crate::forms::{DescriptionForm, ProductForm};
use crate::helpers::ProductValidator;
use crate::models::{PriceFilter, PriceFilterMode, Product};
use std::sync::Arc;
use uuid::Uuid;

/// Product operations shared by the HTTP handlers.
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
    validator: ProductValidator,
    price_filter: PriceFilterMode,
}

impl ProductService {
    pub fn new(
        store: Arc<dyn ProductStore>,
        validator: ProductValidator,
        price_filter: PriceFilterMode,
    ) -> Self {
        Self {
            store,
            validator,
            price_filter,
        }
    }

    #[tracing::instrument(name = "Create product.", skip(self))]
    pub async fn create(&self, form: &ProductForm) -> Result<Product, ProductError> {
        let product = self.validator.validate(form).map_err(|err| {
            tracing::debug!("Invalid product received: {}", err);
            err
        })?;

        let product = self.store.insert(product).await?;
        tracing::info!("Product {} has been saved", product.id);
        Ok(product)
    }

    /// List products, narrowed by the raw `price` query parameter.
    #[tracing::instrument(name = "List products.", skip(self))]
    pub async fn list(&self, price: Option<&str>) -> Result<Vec<Product>, ProductError> {
        let filter = PriceFilter::from_query(price, self.price_filter)?;
        Ok(self.store.list(filter).await?)
    }

    #[tracing::instrument(name = "Get product.", skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Option<Product>, ProductError> {
        Ok(self.store.fetch(id).await?)
    }

    #[tracing::instrument(name = "Update product description.", skip(self))]
    pub async fn update_description(
        &self,
        id: Uuid,
        form: DescriptionForm,
    ) -> Result<Option<Product>, ProductError> {
        Ok(self.store.update_description(id, form.description).await?)
    }

    #[tracing::instrument(name = "Delete product.", skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<bool, ProductError> {
        Ok(self.store.delete(id).await?)
    }
}
