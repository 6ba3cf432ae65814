//! Command and query handlers, one module per feature area.

pub mod plan;
pub mod profile;
