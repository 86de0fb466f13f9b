pub(crate) mod json;
pub mod product_validator;

pub use json::*;
pub use product_validator::{ProductValidator, ValidationPolicy};
