pub mod catalog;
pub mod retry;

pub use catalog::CatalogClient;
pub use retry::{with_retry, RetryPolicy};
