//! Core finance logic for Budgetdash.
//!
//! This crate contains pure business logic with ZERO terminal or config-loading
//! dependencies. All domain types, classification rules, and calculations live here.
//!
//! # Modules
//!
//! - `summary` - Derived monthly totals and status tiers
//! - `input` - The input form and its change events
//! - `chart` - Breakdown, category, and comparison series
//! - `dashboard` - Metric cards and status messages

pub mod chart;
pub mod dashboard;
pub mod input;
pub mod summary;
