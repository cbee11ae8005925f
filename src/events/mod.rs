// src/events/mod.rs
//
// In-process publish/subscribe signaling.

pub mod bus;
pub mod names;

pub use bus::{EventBus, Subscription};
