//! Shared building blocks for the toolbelt crates: errors, configuration and logging.

pub mod config;
pub mod error;
pub mod logging;
