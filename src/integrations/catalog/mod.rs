pub mod client;

pub use client::{CatalogApi, HttpCatalogClient, RawRecord, DEFAULT_CATALOG_URL};

#[cfg(test)]
pub use client::MockCatalogApi;
