//! Chart series for the dashboard.
//!
//! This module provides data for:
//! - The expense breakdown donut
//! - Per-category bars
//! - The income vs expenses comparison

pub mod series;
pub mod types;

pub use series::ChartBuilder;
pub use types::*;
