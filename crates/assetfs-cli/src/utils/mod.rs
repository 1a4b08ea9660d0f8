//! Utility functions shared across CLI commands.

mod args;
pub mod ui;

pub use args::{OUTPUT_FLAG, escape_passthrough, partition_args};
