//! Locating and running the external bindata generator.

use crate::core::{CliError, GeneratorFailedError, GeneratorNotFoundError, GeneratorSpawnError};
use crate::utils::OUTPUT_FLAG;
use assetfs_toml::GeneratorConfig;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Finds the generator executable.
///
/// A program containing a path separator is used as given; a bare name is
/// searched for on `PATH`.
pub fn resolve_program(program: &str) -> Result<PathBuf, GeneratorNotFoundError> {
    let not_found = || GeneratorNotFoundError {
        program: program.to_string(),
    };

    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return if is_executable(candidate) {
            Ok(candidate.to_path_buf())
        } else {
            Err(not_found())
        };
    }

    let search_path = env::var_os("PATH").ok_or_else(not_found)?;
    env::split_paths(&search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| executable_names(program).map(move |name| dir.join(name)))
        .find(|path| is_executable(path))
        .ok_or_else(not_found)
}

/// Builds the generator argv: configured leading args, the scratch redirect,
/// then the forwarded arguments.
pub fn child_args(config: &GeneratorConfig, scratch: &Path, passthrough: &[OsString]) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::with_capacity(config.args.len() + 2 + passthrough.len());
    args.extend(config.args.iter().map(OsString::from));
    args.push(OsString::from(OUTPUT_FLAG));
    args.push(scratch.as_os_str().to_os_string());
    args.extend(passthrough.iter().cloned());
    args
}

/// Runs the generator with inherited stdio and waits for it.
///
/// There is no timeout: a generator that never exits keeps the run waiting.
pub fn run_generator(program: &Path, args: &[OsString]) -> Result<(), CliError> {
    tracing::info!(program = %program.display(), ?args, "running generator");

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| GeneratorSpawnError {
            program: program.to_path_buf(),
            source,
        })?;

    if !status.success() {
        return Err(GeneratorFailedError {
            program: program.to_path_buf(),
            status: status.to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(windows)]
fn executable_names(program: &str) -> impl Iterator<Item = String> + '_ {
    let has_extension = Path::new(program).extension().is_some();
    std::iter::once(program.to_string())
        .chain((!has_extension).then(|| format!("{}.exe", program)))
}

#[cfg(not(windows))]
fn executable_names(program: &str) -> impl Iterator<Item = String> + '_ {
    std::iter::once(program.to_string())
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt as _;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
