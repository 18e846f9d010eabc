//! # Scholar Adapter Layer
//!
//! Implementations of the domain's `Repository` port.
//!
//! ## Structure
//!
//! - `repository/json_file` - one JSON file per record type
//! - `repository/in_memory` - volatile store, no backing file

pub mod repository;

pub use repository::{in_memory::InMemoryRepository, json_file::JsonFileRepository};
