//! CLI command implementations.

mod generate;

pub use generate::{GenerateArgs, run_generate};
