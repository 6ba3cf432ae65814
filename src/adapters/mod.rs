//! Adapters - Implementations of port interfaces.
//!
//! - `postgres` - sqlx-backed stores
//! - `memory` - in-memory stores for tests and local runs
//! - `http` - axum REST surface

pub mod http;
pub mod memory;
pub mod postgres;
