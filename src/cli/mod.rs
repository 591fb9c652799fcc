//! Command-line interface module.
//!
//! Provides argument parsing, the request pipeline, and output formatting.

pub mod args;
pub mod commands;
pub mod present;
