//! # Scholar Shared
//!
//! Common error and configuration types used across all Scholar crates.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;
