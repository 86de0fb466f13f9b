use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_valid::Validate;

/// Raw product as posted by a client, before any policy is applied.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductForm {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: Option<f64>,
    #[validate(pattern = r"^\d{3}-\d{3}-\d{4}$")]
    pub phone: Option<String>,
    pub description: Option<String>,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionForm {
    pub description: Option<String>,
}

#[derive(Default, Debug, Deserialize)]
pub struct ListQuery {
    pub price: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

/// Urlencoded bodies carry prices as text; an empty field means no price.
fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawPrice>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawPrice::Number(price)) => Ok(Some(price)),
        Some(RawPrice::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawPrice::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("price must be a number, got {:?}", text))),
    }
}
