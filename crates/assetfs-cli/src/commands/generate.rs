//! Generate command implementation.

use crate::core::{CliError, detect_mode};
use crate::generation::{ScratchRedirect, child_args, patch_scratch, resolve_program, run_generator};
use crate::utils::{partition_args, ui};
use assetfs_toml::AssetFsConfig;
use clap::Parser;
use std::ffi::OsString;

/// Arguments for the generate command.
#[derive(Debug, Default, Parser)]
pub struct GenerateArgs {
    /// Arguments for go-bindata. `-o <file>` names the patched output,
    /// everything else is forwarded unchanged.
    ///
    /// Parse through [`escape_passthrough`](crate::utils::escape_passthrough)
    /// so a leading `--` reaches the generator too.
    #[arg(
        value_name = "BINDATA_ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<OsString>,
}

/// Run the generate command.
pub fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let cwd = std::env::current_dir()?;
    let config = AssetFsConfig::discover(&cwd)?;

    let mode = detect_mode(&args.args);
    let set = partition_args(&args.args, &config.default_output)?;
    tracing::debug!(
        %mode,
        output = %set.output_path.display(),
        passthrough = ?set.passthrough,
        "parsed arguments"
    );

    let program = resolve_program(&config.generator.program)?;
    let redirect = ScratchRedirect::allocate(&set.output_path)?;

    let child = child_args(&config.generator, redirect.scratch_path(), &set.passthrough);
    run_generator(&program, &child)?;

    let summary = patch_scratch(redirect, mode)?;
    ui::print_generated(&summary);

    Ok(())
}
