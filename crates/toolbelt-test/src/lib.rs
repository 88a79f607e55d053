//! Toolbelt - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `toolbelt_test::` paths.

pub mod component {
    pub use toolbelt_core::*;
    pub use toolbelt_util::*;
}

pub use toolbelt_serde as adapters;
