use crate::errors::ValidationError;
use crate::forms::ProductForm;
use crate::models::NewProduct;
use serde_derive::{Deserialize, Serialize};
use serde_valid::Validate;

pub const TITLE_MIN_LENGTH: usize = 8;
pub const PRICE_MIN: f64 = 10.0;
pub const PRICE_MAX: f64 = 200.0;

/// Rule set applied to new products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// Title of at least [`TITLE_MIN_LENGTH`] characters, price within
    /// [`PRICE_MIN`]..=[`PRICE_MAX`].
    #[default]
    Strict,
    /// Any non-empty title, any finite price.
    Lenient,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductValidator {
    policy: ValidationPolicy,
}

impl ProductValidator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    /// Check a candidate product and hand back the fields to persist.
    /// Fields are checked in order title, price, phone; the first failure wins.
    pub fn validate(&self, form: &ProductForm) -> Result<NewProduct, ValidationError> {
        let title = self.check_title(form.title.as_deref())?;
        let price = self.check_price(form.price)?;

        // the phone pattern is the only rule declared on the form itself
        if let Err(errors) = form.validate() {
            tracing::debug!("Phone rejected: {}", errors);
            return Err(ValidationError::new(
                "phone",
                format!(
                    "{} is not a standard format",
                    form.phone.as_deref().unwrap_or_default()
                ),
            ));
        }

        Ok(NewProduct {
            title,
            price,
            phone: form.phone.clone(),
            description: form.description.clone(),
        })
    }

    fn check_title(&self, title: Option<&str>) -> Result<String, ValidationError> {
        let title = match title {
            Some(title) if !title.trim().is_empty() => title,
            _ => return Err(ValidationError::new("title", "The title is required.")),
        };

        let length = title.chars().count();
        if self.policy == ValidationPolicy::Strict && length < TITLE_MIN_LENGTH {
            return Err(ValidationError::new(
                "title",
                format!(
                    "{} is too short, must be at least {} characters",
                    title, TITLE_MIN_LENGTH
                ),
            ));
        }

        Ok(title.to_string())
    }

    fn check_price(&self, price: Option<f64>) -> Result<Option<f64>, ValidationError> {
        let price = match price {
            None => return Ok(None),
            Some(price) => price,
        };

        if !price.is_finite() {
            return Err(ValidationError::new(
                "price",
                format!("Must be a number, got {}", price),
            ));
        }

        if self.policy == ValidationPolicy::Strict {
            if price < PRICE_MIN {
                return Err(ValidationError::new(
                    "price",
                    format!("Must be at least {}, got {}", PRICE_MIN, price),
                ));
            }
            if price > PRICE_MAX {
                return Err(ValidationError::new(
                    "price",
                    format!("Must be at most {}, got {}", PRICE_MAX, price),
                ));
            }
        }

        Ok(Some(price))
    }
}
