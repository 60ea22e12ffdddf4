pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-exports for easy external access
pub use entities::{CatalogItem, PriceBlock, PriceEntry};
pub use repositories::CatalogSource;
pub use services::ProductMatcher;
pub use value_objects::QueryVariants;
