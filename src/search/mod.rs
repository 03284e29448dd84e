mod error;
mod evaluator;
mod products;
mod selection;

pub use error::SearchError;
pub use evaluator::{filter_products, product_matches};
pub use products::{load_products, Product, FREQUENCY_RANGE_KEY};
pub use selection::Selection;
