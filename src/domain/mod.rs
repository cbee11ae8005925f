// src/domain/mod.rs
//
// Domain types shared across the state layer.

pub mod catalog;
pub mod session;
pub mod validation;

pub use catalog::{
    derive_category, derive_status, placeholder_image, CatalogEntry, CatalogState, CatalogStatus,
    Category, EntryStatus,
};
pub use session::Identity;
pub use validation::{validate_login, validate_signup, FieldError, LoginForm, SignupForm};
