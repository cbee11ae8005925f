// src/integrations/mod.rs
//
// External endpoint clients (catalog + identity).

pub mod catalog;
pub mod identity;

pub use catalog::{CatalogApi, HttpCatalogClient, RawRecord, DEFAULT_CATALOG_URL};
pub use identity::{IdentityClient, LoginRequest, RegisterRequest};
