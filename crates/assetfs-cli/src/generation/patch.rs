use crate::core::{AssetMode, CliError, GenerateSummary};
use crate::generation::scratch::{ScratchRedirect, remove_scratch};
use crate::utils::ui;
use assetfs_patch::error::PatchError;
use fs_err as fs;
use std::io::{BufReader, BufWriter};

/// Copies the generator output into the final file and appends the adapter.
///
/// Order matters: the scratch handle is closed and the file deleted before
/// the adapter is written, and the output is closed last. Some platforms
/// refuse to delete a file that is still open.
pub fn patch_scratch(redirect: ScratchRedirect, mode: AssetMode) -> Result<GenerateSummary, CliError> {
    let output_path = redirect.output_path().to_path_buf();
    let (scratch, output) = redirect.into_parts();
    let mut writer = BufWriter::new(output);

    let scratch_file = fs::File::open(scratch.to_path_buf()).map_err(PatchError::Read)?;
    // `inject_import` takes the reader by value and drops it on return.
    let outcome = assetfs_patch::inject_import(BufReader::new(scratch_file), &mut writer, mode)?;

    remove_scratch(scratch);

    if !outcome.import_injected {
        tracing::debug!(
            output = %output_path.display(),
            "import block marker not found, adapter import not added"
        );
        ui::print_marker_missing(&output_path);
    }

    assetfs_patch::write_adapter(&mut writer, mode)?;

    let output = writer
        .into_inner()
        .map_err(|err| PatchError::Write(err.into_error()))?;
    drop(output);

    tracing::info!(
        output = %output_path.display(),
        %mode,
        lines = outcome.lines,
        bytes = outcome.bytes,
        "patched generator output"
    );

    Ok(GenerateSummary {
        output_path,
        mode,
        lines: outcome.lines,
    })
}
