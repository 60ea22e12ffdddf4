pub mod alias_expander;
pub mod fuzzy_matcher;
pub mod price_selector;
pub mod text_normalizer;

pub use fuzzy_matcher::ProductMatcher;
pub use price_selector::{coerce_value, select_price, SelectedPrice};
