//! Core types, errors, and shared functionality.

mod errors;
mod mode;
mod types;

pub use assetfs_patch::AssetMode;
pub use errors::*;
pub use mode::*;
pub use types::*;
