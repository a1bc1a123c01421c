//! Dashboard view model.
//!
//! This module provides the data a presenter needs:
//! - Summary metric cards
//! - Chart series
//! - Status messages

pub mod types;
pub mod view;

pub use types::*;
pub use view::ViewOptions;
