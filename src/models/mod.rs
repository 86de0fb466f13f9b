mod price_filter;
mod product;

pub use price_filter::*;
pub use product::*;
