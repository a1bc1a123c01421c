//! Shared types, errors, and configuration for Budgetdash.
//!
//! This crate provides common types used across all other crates:
//! - Money types with decimal precision and currency formatting
//! - Percentage helpers
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use self::config::{AppConfig, CategoryConfig, DashboardConfig, category_key};
pub use error::{AppError, AppResult};
