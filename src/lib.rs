//! Tool server exposing cloud price-list lookups to an AI agent host.
//!
//! The interesting part lives in `modules::pricing`: a fuzzy product-name
//! search and SKU-resolution pipeline over a paginated public price-list
//! API, with currency validation and alternate-currency enrichment.

pub mod modules;
pub mod server;
pub mod shared;
