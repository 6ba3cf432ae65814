//! Domain layer - pure business logic.
//!
//! No I/O happens here. The nutrition module derives energy and macro
//! targets from a biometric profile; the planning module assigns recipes
//! to meal slots against those targets.

pub mod foundation;
pub mod nutrition;
pub mod planning;
