//! Command-line interface for Pomidorka.
//!
//! This module contains:
//! - Argument definitions (clap derive)
//! - Terminal display utilities

pub mod commands;
pub mod display;

pub use commands::Cli;
pub use display::Display;
