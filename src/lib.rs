//! Nutriplan - Meal Planning Backend
//!
//! This crate computes nutritional targets from a user's biometric profile
//! and assembles a one-day meal plan by greedy calorie matching over a
//! recipe catalog.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
