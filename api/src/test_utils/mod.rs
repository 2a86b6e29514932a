//! Test utilities
//!
//! Hand-written in-memory port implementations and test fixtures.
//!
//! Services hold their ports as `Arc<dyn ...>`, so the same in-memory
//! repositories drive both service tests and the axum-test handler tests.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
