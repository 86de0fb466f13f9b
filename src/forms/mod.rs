mod payload;
pub mod product;

pub use payload::Payload;
pub use product::*;
