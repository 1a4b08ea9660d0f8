use crate::core::{ArgumentSet, MissingOutputValueError};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Flag that names the patched output file.
pub const OUTPUT_FLAG: &str = "-o";

const OUTPUT_FLAG_JOINED: &str = "-o=";

const ESCAPE: &str = "--";

/// Prepends `--` to everything after the binary name so clap hands every
/// token to the positional list, a literal `--` included.
pub fn escape_passthrough<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut argv = argv.into_iter().map(Into::into);
    let mut escaped = Vec::new();
    escaped.extend(argv.next());
    escaped.push(OsString::from(ESCAPE));
    escaped.extend(argv);
    escaped
}

/// Pulls `-o <path>` (or `-o=<path>`) out of the raw arguments.
///
/// Everything else, `-debug` and `--` included, is kept in order for the
/// generator. The last output flag wins; without one the output is
/// `default_output`. Arguments need not be valid UTF-8.
pub fn partition_args<S: AsRef<OsStr>>(
    raw: &[S],
    default_output: &Path,
) -> Result<ArgumentSet, MissingOutputValueError> {
    let mut output_path = None;
    let mut passthrough = Vec::with_capacity(raw.len());
    let mut args = raw.iter().map(AsRef::as_ref);

    while let Some(arg) = args.next() {
        if arg == OUTPUT_FLAG {
            let value = args.next().ok_or(MissingOutputValueError)?;
            output_path = Some(PathBuf::from(value));
        } else if let Some(value) = strip_joined_output_flag(arg) {
            output_path = Some(PathBuf::from(value));
        } else {
            passthrough.push(arg.to_os_string());
        }
    }

    Ok(ArgumentSet {
        output_path: output_path.unwrap_or_else(|| default_output.to_path_buf()),
        passthrough,
    })
}

fn strip_joined_output_flag(arg: &OsStr) -> Option<&OsStr> {
    let value = arg
        .as_encoded_bytes()
        .strip_prefix(OUTPUT_FLAG_JOINED.as_bytes())?;
    // SAFETY: the split is right after the ASCII `=`, and `value` comes from
    // `as_encoded_bytes` on a valid `OsStr`.
    Some(unsafe { OsStr::from_encoded_bytes_unchecked(value) })
}
