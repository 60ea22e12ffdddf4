mod catalog_source;

pub use catalog_source::CatalogSource;
