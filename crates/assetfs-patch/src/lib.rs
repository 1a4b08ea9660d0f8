#![doc = include_str!("../README.md")]

use std::io::{BufRead, Write};

pub mod adapter;
pub mod error;
mod mode;

pub use mode::AssetMode;

use error::PatchError;

/// Line that opens the import block in generated Go source.
pub const IMPORT_BLOCK_MARKER: &[u8] = b"import (";

/// Summary of a single pass over the generator output.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PatchOutcome {
    /// Number of logical lines copied from the input.
    pub lines: usize,
    /// Number of bytes copied from the input (injected text excluded).
    pub bytes: u64,
    /// Whether the mode-specific import was written after the marker line.
    pub import_injected: bool,
}

/// Copies `reader` into `writer`, adding the mode's import line once.
///
/// Lines are reassembled with `read_until`, so a line longer than the reader's
/// buffer is still compared as a whole. The import goes right after the first
/// line that equals [`IMPORT_BLOCK_MARKER`] once its `\n` or `\r\n` terminator
/// is removed. Nothing else is changed, including a missing final newline.
///
/// The reader is consumed and dropped before this returns.
pub fn inject_import<R, W>(
    mut reader: R,
    writer: &mut W,
    mode: AssetMode,
) -> Result<PatchOutcome, PatchError>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let mut outcome = PatchOutcome::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = reader.read_until(b'\n', &mut line).map_err(PatchError::Read)?;
        if read == 0 {
            break;
        }

        writer.write_all(&line).map_err(PatchError::Write)?;
        outcome.lines += 1;
        outcome.bytes += read as u64;

        if !outcome.import_injected && is_import_marker(&line) {
            if !line.ends_with(b"\n") {
                writer.write_all(b"\n").map_err(PatchError::Write)?;
            }
            writer
                .write_all(mode.import_line().as_bytes())
                .map_err(PatchError::Write)?;
            outcome.import_injected = true;
            tracing::debug!(line = outcome.lines, %mode, "injected import after marker");
        }
    }

    Ok(outcome)
}

/// Appends the mode's `assetFS()` constructor.
pub fn write_adapter<W>(writer: &mut W, mode: AssetMode) -> Result<(), PatchError>
where
    W: Write + ?Sized,
{
    writer
        .write_all(mode.adapter_block().as_bytes())
        .map_err(PatchError::Write)
}

/// Runs [`inject_import`] and [`write_adapter`] back to back.
pub fn patch<R, W>(reader: R, writer: &mut W, mode: AssetMode) -> Result<PatchOutcome, PatchError>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let outcome = inject_import(reader, writer, mode)?;
    write_adapter(writer, mode)?;
    Ok(outcome)
}

fn is_import_marker(line: &[u8]) -> bool {
    strip_terminator(line) == IMPORT_BLOCK_MARKER
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = match line.split_last() {
        Some((b'\n', rest)) => rest,
        _ => line,
    };
    match line.split_last() {
        Some((b'\r', rest)) => rest,
        _ => line,
    }
}
