//! # Geodraw Core
//!
//! Core types and utilities shared by the geodraw crates: the error taxonomy,
//! distance units and measurement formatting, numeric constants, and the
//! shared-handle aliases used to keep mode instances identity-stable.

pub mod constants;
pub mod error;
pub mod types;
pub mod units;

pub use error::{Error, Result};

pub use units::{format_area, format_distance, DistanceUnit};

// Re-export type aliases for convenience
pub use types::{same_instance, shared, LocalCallback, Shared};
