//! The generator run and the patch step that follows it.

mod patch;
mod runner;
mod scratch;

pub use patch::patch_scratch;
pub use runner::{child_args, resolve_program, run_generator};
pub use scratch::{ScratchRedirect, remove_scratch};
