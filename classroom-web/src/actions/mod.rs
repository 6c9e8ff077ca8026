//! Async operations that talk to the backend and then transition a store.
//!
//! Each action applies its pending transition, awaits the backend, and applies
//! the fulfilled or rejected transition. Nothing is retried, deduplicated or
//! cancelled; overlapping calls land in arrival order.

pub mod resource;
pub mod session;
pub mod upload;
