//! Command-line client for a SOAP Person management service.
//!
//! One invocation builds a single SOAP envelope from command-line flags, posts
//! it to the service, decodes the XML reply, and prints the result.

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod logging;
pub mod state;

pub use error::{ClientError, Result};
