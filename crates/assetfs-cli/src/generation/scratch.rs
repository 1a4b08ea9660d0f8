//! Scratch file that receives the raw generator output, and the final output
//! file the patched source is copied into.

use crate::core::{CliError, OutputCollisionError, OutputCreateError, ScratchCreateError};
use crate::utils::ui;
use fs_err as fs;
use std::path::{Path, PathBuf};
use tempfile::TempPath;

const SCRATCH_PREFIX: &str = "assetfs-";
const SCRATCH_SUFFIX: &str = ".go";

/// The two files of a run, allocated before the generator starts.
///
/// The scratch file is removed when this (or the [`TempPath`] taken out of it)
/// is dropped, so an aborted run does not leave it behind.
#[derive(Debug)]
pub struct ScratchRedirect {
    scratch: TempPath,
    output: fs::File,
}

impl ScratchRedirect {
    /// Creates an empty scratch file in the system temp directory, closes it,
    /// then creates (or truncates) `output_path` and keeps it open.
    pub fn allocate(output_path: &Path) -> Result<Self, CliError> {
        let scratch = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .suffix(SCRATCH_SUFFIX)
            .tempfile()
            .map_err(|source| ScratchCreateError { source })?
            .into_temp_path();

        if same_location(output_path, &scratch) {
            return Err(OutputCollisionError {
                path: output_path.to_path_buf(),
            }
            .into());
        }

        let output = fs::File::create(output_path).map_err(|source| OutputCreateError {
            path: output_path.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            scratch = %scratch.display(),
            output = %output_path.display(),
            "allocated scratch and output files"
        );

        Ok(Self { scratch, output })
    }

    pub fn scratch_path(&self) -> &Path {
        &self.scratch
    }

    pub fn output_path(&self) -> &Path {
        self.output.path()
    }

    pub fn into_parts(self) -> (TempPath, fs::File) {
        (self.scratch, self.output)
    }
}

/// Deletes the scratch file, reporting but not propagating failures.
pub fn remove_scratch(scratch: TempPath) {
    let path = scratch.to_path_buf();
    match scratch.close() {
        Ok(()) => tracing::debug!(scratch = %path.display(), "removed scratch file"),
        Err(err) => {
            tracing::debug!(scratch = %path.display(), error = %err, "cannot remove scratch file");
            ui::print_cleanup_failed(&path, &err);
        },
    }
}

fn same_location(output_path: &Path, scratch: &Path) -> bool {
    let absolute = |path: &Path| -> PathBuf {
        std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
    };
    absolute(output_path) == absolute(scratch)
}
