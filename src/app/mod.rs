// src/app/mod.rs
//
// Composition root: state ownership and process-start hydration.

pub mod bootstrap;
pub mod state;

pub use bootstrap::bootstrap;
pub use state::AppState;
