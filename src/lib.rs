//! SpotiCards (workspace facade crate).
//!
//! Re-exports the workspace crates as `spoticards::{core, types, storage, input, term}`
//! and hosts the pieces the binary is built from: configuration, the command
//! line, logging setup, and the [`app::PlayApp`] controller that drives a
//! session from player actions.

pub use spoticards_core as core;
pub use spoticards_input as input;
pub use spoticards_storage as storage;
pub use spoticards_term as term;
pub use spoticards_types as types;

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
