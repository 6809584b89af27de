//! `rosty` - add, list and remove entries in the hosts file.
//!
//! The binary in `main.rs` is a thin wrapper around [`engine::run`]; every
//! component is exposed here so the integration tests can drive them against
//! temporary files.

pub mod args;
pub mod backup;
pub mod cli;
pub mod display;
pub mod engine;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod prompt;
pub mod reporter;
pub mod store;
