use super::ProductStore;
use crate::errors::StorageError;
use crate::models;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS product (
        id UUID PRIMARY KEY,
        seq BIGSERIAL,
        title TEXT NOT NULL,
        price DOUBLE PRECISION,
        phone TEXT,
        description TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const SELECT_COLUMNS: &str = "SELECT id, title, price, phone, description, created_at FROM product";

#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `product` table when it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|err| {
                tracing::error!("Failed to create product table: {:?}", err);
                err.into()
            })
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn insert(&self, product: models::NewProduct) -> Result<models::Product, StorageError> {
        let query_span = tracing::info_span!("Saving new product into the database");
        sqlx::query_as::<_, models::Product>(
            r#"
            INSERT INTO product (id, title, price, phone, description, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING id, title, price, phone, description, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(product.title)
        .bind(product.price)
        .bind(product.phone)
        .bind(product.description)
        .fetch_one(&self.pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            err.into()
        })
    }

    async fn list(
        &self,
        filter: models::PriceFilter,
    ) -> Result<Vec<models::Product>, StorageError> {
        let query_span = tracing::info_span!("Fetch products.", filter = ?filter);
        let sql = match filter.sql_condition() {
            Some(condition) => format!("{} WHERE {} ORDER BY seq", SELECT_COLUMNS, condition),
            None => format!("{} ORDER BY seq", SELECT_COLUMNS),
        };

        let mut query = sqlx::query_as::<_, models::Product>(&sql);
        if let Some(value) = filter.value() {
            query = query.bind(value);
        }

        query
            .fetch_all(&self.pool)
            .instrument(query_span)
            .await
            .map_err(|err| {
                tracing::error!("Failed to fetch products, error: {:?}", err);
                err.into()
            })
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<models::Product>, StorageError> {
        tracing::info!("Fetch product {}", id);
        let sql = format!("{} WHERE id = $1", SELECT_COLUMNS);
        sqlx::query_as::<_, models::Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Failed to fetch product, error: {:?}", err);
                err.into()
            })
    }

    async fn update_description(
        &self,
        id: Uuid,
        description: Option<String>,
    ) -> Result<Option<models::Product>, StorageError> {
        let query_span = tracing::info_span!("Updating product description");
        sqlx::query_as::<_, models::Product>(
            r#"
            UPDATE product
            SET description = $2
            WHERE id = $1
            RETURNING id, title, price, phone, description, created_at
            "#,
        )
        .bind(id)
        .bind(description)
        .fetch_optional(&self.pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            err.into()
        })
    }

    #[tracing::instrument(name = "Delete product.", skip(self))]
    async fn delete(&self, id: Uuid) -> Result<bool, StorageError> {
        sqlx::query::<sqlx::Postgres>("DELETE FROM product WHERE id = $1;")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|result| result.rows_affected() > 0)
            .map_err(|err| {
                tracing::error!("Failed to delete product: {:?}", err);
                err.into()
            })
    }
}
