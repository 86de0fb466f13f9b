use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid, // assigned by the store on insert
    pub title: String,
    pub price: Option<f64>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A product that passed validation. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub price: Option<f64>,
    pub phone: Option<String>,
    pub description: Option<String>,
}

impl NewProduct {
    pub fn into_product(self, id: Uuid, created_at: DateTime<Utc>) -> Product {
        Product {
            id,
            title: self.title,
            price: self.price,
            phone: self.phone,
            description: self.description,
            created_at,
        }
    }
}
