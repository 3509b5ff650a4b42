//! Command-line interface for the draughts engine.
//! This module is not part of the public library API.

pub mod args;
pub mod commands;

pub use args::Draughts;
