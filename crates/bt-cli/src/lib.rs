//! Command-line front end for the attendance engine.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
