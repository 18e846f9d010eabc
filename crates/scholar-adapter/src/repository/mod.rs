//! Persistence Adapters - Repository implementations
//!
//! These implement the repository port from scholar-domain.

pub mod in_memory;
pub mod json_file;
