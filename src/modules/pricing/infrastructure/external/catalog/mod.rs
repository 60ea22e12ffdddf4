mod client;
mod dto;

pub use client::CatalogClient;
pub use dto::{CatalogPage, PageLink};
