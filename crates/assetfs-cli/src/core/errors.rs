//! CLI error types using miette for readable diagnostics.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Error when the generator executable cannot be located.
#[derive(Debug, Diagnostic, Error)]
#[error("cannot find generator executable `{program}`")]
#[diagnostic(
    code(assetfs::generator::not_found),
    help(
        "Install Go and make sure `go` is on PATH, or point [generator].program in \
         assetfs.toml at the bindata executable"
    )
)]
pub struct GeneratorNotFoundError {
    /// The program name or path that was looked up.
    pub program: String,
}

/// Error when the generator process cannot be started.
#[derive(Debug, Diagnostic, Error)]
#[error("failed to start generator {}", program.display())]
#[diagnostic(code(assetfs::generator::spawn))]
pub struct GeneratorSpawnError {
    /// The resolved executable.
    pub program: PathBuf,

    #[source]
    pub source: std::io::Error,
}

/// Error when the generator exits unsuccessfully.
#[derive(Debug, Diagnostic, Error)]
#[error("go-bindata: {status}")]
#[diagnostic(
    code(assetfs::generator::failed),
    help("The generator's own output above explains the failure; the output file was not patched")
)]
pub struct GeneratorFailedError {
    /// The resolved executable.
    pub program: PathBuf,

    /// The exit status as reported by the OS (e.g. `exit status: 2`).
    pub status: String,
}

/// Error when `-o` is the last argument.
#[derive(Debug, Diagnostic, Error)]
#[error("`-o` requires a file path")]
#[diagnostic(
    code(assetfs::args::missing_output),
    help("Pass the output file right after the flag, e.g. `-o bindata.go`")
)]
pub struct MissingOutputValueError;

/// Error when the scratch file cannot be allocated.
#[derive(Debug, Diagnostic, Error)]
#[error("cannot create temporary file")]
#[diagnostic(code(assetfs::scratch::create))]
pub struct ScratchCreateError {
    #[source]
    pub source: std::io::Error,
}

/// Error when the output file cannot be created.
#[derive(Debug, Diagnostic, Error)]
#[error("cannot create output file {}", path.display())]
#[diagnostic(code(assetfs::output::create))]
pub struct OutputCreateError {
    /// The requested output path.
    pub path: PathBuf,

    #[source]
    pub source: std::io::Error,
}

/// Error when the output path names the scratch file itself.
#[derive(Debug, Diagnostic, Error)]
#[error("output file {} is the scratch file", path.display())]
#[diagnostic(
    code(assetfs::output::collision),
    help("Choose an output path outside the temporary directory")
)]
pub struct OutputCollisionError {
    /// The requested output path.
    pub path: PathBuf,
}

#[derive(Debug, Diagnostic, Error)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    GeneratorNotFound(#[from] GeneratorNotFoundError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    GeneratorSpawn(#[from] GeneratorSpawnError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    GeneratorFailed(#[from] GeneratorFailedError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    MissingOutputValue(#[from] MissingOutputValueError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    ScratchCreate(#[from] ScratchCreateError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    OutputCreate(#[from] OutputCreateError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    OutputCollision(#[from] OutputCollisionError),

    #[error("invalid assetfs configuration: {0}")]
    #[diagnostic(code(assetfs::config))]
    Config(#[from] assetfs_toml::AssetFsConfigError),

    #[error("{0}")]
    #[diagnostic(
        code(assetfs::patch::io),
        help("The output file may be partially written; run the command again")
    )]
    Patch(#[from] assetfs_patch::error::PatchError),

    #[error("IO error: {0}")]
    #[diagnostic(code(assetfs::io))]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic as _;

    #[test]
    fn test_transparent_variants_keep_codes() {
        let err = CliError::from(GeneratorNotFoundError {
            program: "go".to_string(),
        });

        assert_eq!(err.to_string(), "cannot find generator executable `go`");
        assert_eq!(
            err.code().map(|code| code.to_string()),
            Some("assetfs::generator::not_found".to_string())
        );
        assert!(err.help().is_some());
    }

    #[test]
    fn test_generator_failure_carries_exit_status() {
        let err = CliError::from(GeneratorFailedError {
            program: PathBuf::from("/usr/bin/go"),
            status: "exit status: 2".to_string(),
        });

        assert_eq!(err.to_string(), "go-bindata: exit status: 2");
    }
}
