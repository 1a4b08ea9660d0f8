use assetfs_patch::AssetMode;
use std::ffi::OsString;
use std::path::PathBuf;

/// Command line split into the patched output location and what the generator receives.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArgumentSet {
    /// Where the patched source is written.
    pub output_path: PathBuf,
    /// Arguments forwarded to the generator in their original order.
    pub passthrough: Vec<OsString>,
}

/// Result of a completed run.
#[derive(Clone, Debug)]
pub struct GenerateSummary {
    /// The patched output file.
    pub output_path: PathBuf,
    /// The adapter flavour that was appended.
    pub mode: AssetMode,
    /// Lines copied from the generator output.
    pub lines: usize,
}
