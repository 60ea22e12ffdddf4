pub mod application;
pub mod commands;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::PricingService;
pub use commands::PricingTools;
pub use config::PricingConfig;
pub use infrastructure::CatalogClient;
