use assetfs_patch::AssetMode;
use clap::{Arg, ArgAction, Command};
use std::ffi::OsStr;

/// Arguments starting with this select the build mode.
pub const DEBUG_FLAG_PREFIX: &str = "-debug";

const DEBUG_ARG_ID: &str = "debug";

/// Derives the build mode from the raw command line.
///
/// Only tokens starting with `-debug` are looked at; they are fed to a
/// one-flag parser that understands `-debug` and `-debug=<bool>`, the last
/// occurrence winning. Anything it rejects, such as `-debugger` or
/// `-debug=yes` or a value that is not UTF-8, leaves the run in
/// [`AssetMode::Embedded`].
pub fn detect_mode<S: AsRef<OsStr>>(args: &[S]) -> AssetMode {
    let debug_args: Vec<String> = args
        .iter()
        .map(AsRef::as_ref)
        .filter_map(normalize_debug_arg)
        .collect();

    if debug_args.is_empty() {
        return AssetMode::Embedded;
    }

    match debug_flag_parser().try_get_matches_from(&debug_args) {
        Ok(matches) => {
            let debug = matches.get_one::<bool>(DEBUG_ARG_ID).copied().unwrap_or(false);
            AssetMode::from_debug_flag(debug)
        },
        Err(err) => {
            tracing::debug!(
                args = ?debug_args,
                error = ?err.kind(),
                "ignoring unparseable debug flag"
            );
            AssetMode::Embedded
        },
    }
}

/// Rewrites `-debug[...]` into the `--debug=<value>` form clap expects.
///
/// Invalid UTF-8 is replaced, which makes the token fail to parse.
fn normalize_debug_arg(arg: &OsStr) -> Option<String> {
    let rest = arg
        .as_encoded_bytes()
        .strip_prefix(DEBUG_FLAG_PREFIX.as_bytes())?;
    if rest.is_empty() {
        Some("--debug=true".to_string())
    } else {
        Some(format!("-{}", arg.to_string_lossy()))
    }
}

fn debug_flag_parser() -> Command {
    Command::new("assetfs-debug")
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .args_override_self(true)
        .arg(
            Arg::new(DEBUG_ARG_ID)
                .long("debug")
                .num_args(1)
                .require_equals(true)
                .value_parser(parse_flag_bool)
                .action(ArgAction::Set),
        )
}

/// Boolean spellings accepted by Go's `strconv.ParseBool`.
fn parse_flag_bool(value: &str) -> Result<bool, String> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(format!("invalid boolean value '{}'", other)),
    }
}
