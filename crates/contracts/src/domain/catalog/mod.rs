pub mod category;
pub mod coffee;
pub mod stock;
pub mod wine;

pub use category::{ProductCategory, ProductKey};
pub use wine::distinct_values;
