pub mod external;

pub use external::CatalogClient;
