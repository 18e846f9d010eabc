//! # Scholar CLI
//!
//! Console front end for the student/instructor registry: an interactive
//! menu plus a handful of one-shot subcommands.

pub mod commands;
pub mod interactive;
pub mod prompt;
pub mod registry;
pub mod render;
