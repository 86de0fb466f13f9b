//! Listing predicate built from the optional `price` query parameter.
//!
//! The predicate is plain data: the in-memory store evaluates it with
//! [`PriceFilter::matches`], the Postgres store renders it with
//! [`PriceFilter::sql_condition`].

use crate::errors::ProductError;
use crate::models::Product;
use serde_derive::{Deserialize, Serialize};

/// How a present `price` parameter narrows the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceFilterMode {
    /// `price < v OR price > v`: every priced product except exact matches.
    #[default]
    ExcludeEqual,
    /// `price > v`.
    GreaterThan,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceFilter {
    All,
    NotEqual(f64),
    GreaterThan(f64),
}

impl PriceFilter {
    /// Parse the raw query value. Absent and empty values mean no filter.
    pub fn from_query(raw: Option<&str>, mode: PriceFilterMode) -> Result<Self, ProductError> {
        let raw = match raw.map(str::trim) {
            None | Some("") => return Ok(PriceFilter::All),
            Some(raw) => raw,
        };

        let value = raw
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| {
                ProductError::BadRequest(format!("price must be a number, got {:?}", raw))
            })?;

        Ok(match mode {
            PriceFilterMode::ExcludeEqual => PriceFilter::NotEqual(value),
            PriceFilterMode::GreaterThan => PriceFilter::GreaterThan(value),
        })
    }

    /// Products without a price never match a price filter.
    pub fn matches(&self, product: &Product) -> bool {
        match (self, product.price) {
            (PriceFilter::All, _) => true,
            (_, None) => false,
            (PriceFilter::NotEqual(value), Some(price)) => price < *value || price > *value,
            (PriceFilter::GreaterThan(value), Some(price)) => price > *value,
        }
    }

    /// SQL condition with `$1` bound to [`PriceFilter::value`]. `NULL` prices
    /// fall out of both comparisons, same as [`PriceFilter::matches`].
    pub fn sql_condition(&self) -> Option<&'static str> {
        match self {
            PriceFilter::All => None,
            PriceFilter::NotEqual(_) => Some("(price < $1 OR price > $1)"),
            PriceFilter::GreaterThan(_) => Some("price > $1"),
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            PriceFilter::All => None,
            PriceFilter::NotEqual(value) | PriceFilter::GreaterThan(value) => Some(*value),
        }
    }
}
