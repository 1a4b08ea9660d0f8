#![cfg(unix)]

use assert_fs::prelude::*;
use assetfs_patch::AssetMode;
use predicates::prelude::*;
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt as _;
use std::os::unix::fs::PermissionsExt as _;
use std::path::{Path, PathBuf};

const FIXTURE: &str = "package main\n\nimport (\n\t\"fmt\"\n)\n\nvar _bintree = 1\n";

/// Writes `body` as a stand-in generator and an `assetfs.toml` pointing at it.
fn setup(body: &str) -> assert_fs::TempDir {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("fixture.go").write_str(FIXTURE).unwrap();

    let script = temp.child("fake-bindata");
    script.write_str(body).unwrap();
    std::fs::set_permissions(script.path(), std::fs::Permissions::from_mode(0o755)).unwrap();

    temp.child("assetfs.toml")
        .write_str(&format!(
            "[generator]\nprogram = \"{}\"\nargs = []\n",
            script.path().display()
        ))
        .unwrap();

    temp
}

/// Copies `fixture.go` from the working directory to the path after `-o`.
const COPYING_GENERATOR: &str = r#"#!/bin/sh
printf '%s\n' "$@" > args.txt
out=""
while [ $# -gt 0 ]; do
    if [ "$1" = "-o" ]; then
        out="$2"
        shift
    fi
    shift
done
cat fixture.go > "$out"
"#;

fn setup_copying() -> assert_fs::TempDir {
    setup(COPYING_GENERATOR)
}

fn assetfs(temp: &assert_fs::TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("assetfs");
    cmd.current_dir(temp.path())
        .env_remove("ASSETFS_CONFIG")
        .env_remove("ASSETFS_LOG");
    cmd
}

fn recorded_args(temp: &assert_fs::TempDir) -> Vec<String> {
    std::fs::read_to_string(temp.path().join("args.txt"))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn expected(mode: AssetMode) -> String {
    format!(
        "package main\n\nimport (\n{}\t\"fmt\"\n)\n\nvar _bintree = 1\n{}",
        mode.import_line(),
        mode.adapter_block()
    )
}

#[test]
fn test_embedded_output() {
    let temp = setup_copying();

    assetfs(&temp)
        .args(["-pkg", "main", "-o", "out.go", "static/"])
        .assert()
        .success();

    temp.child("out.go").assert(expected(AssetMode::Embedded));
}

#[test]
fn test_debug_output() {
    let temp = setup_copying();

    assetfs(&temp)
        .args(["-debug", "-o", "out.go", "static/"])
        .assert()
        .success();

    temp.child("out.go").assert(expected(AssetMode::Debug));
}

#[test]
fn test_debug_false_is_embedded() {
    let temp = setup_copying();

    assetfs(&temp)
        .args(["-debug=false", "-o", "out.go"])
        .assert()
        .success();

    temp.child("out.go").assert(expected(AssetMode::Embedded));
}

#[test]
fn test_default_output_is_bindata_go() {
    let temp = setup_copying();

    assetfs(&temp).arg("static/").assert().success();

    temp.child("bindata.go").assert(expected(AssetMode::Embedded));
}

#[test]
fn test_arguments_forwarded_without_output_flag() {
    let temp = setup_copying();

    assetfs(&temp)
        .args(["-debug", "-pkg", "web", "-o", "out.go", "static/..."])
        .assert()
        .success();

    let args = recorded_args(&temp);
    assert_eq!(args.len(), 6);
    assert_eq!(args[0], "-o");
    assert_ne!(PathBuf::from(&args[1]), temp.path().join("out.go"));
    assert_eq!(args[2..], ["-debug", "-pkg", "web", "static/..."]);
}

#[test]
fn test_leading_double_dash_is_forwarded() {
    let temp = setup_copying();

    assetfs(&temp)
        .args(["--", "-odd-dir"])
        .assert()
        .success();

    let args = recorded_args(&temp);
    assert_eq!(args[2..], ["--", "-odd-dir"]);
    temp.child("bindata.go").assert(expected(AssetMode::Embedded));
}

#[test]
fn test_non_utf8_argument_is_forwarded() {
    let temp = setup_copying();

    assetfs(&temp)
        .arg("-pkg")
        .arg(OsStr::from_bytes(b"a\xffb"))
        .args(["-o", "out.go"])
        .assert()
        .success();

    let recorded = std::fs::read(temp.path().join("args.txt")).unwrap();
    assert!(recorded.ends_with(b"\n-pkg\na\xffb\n"), "{:?}", recorded);
    temp.child("out.go").assert(expected(AssetMode::Embedded));
}

#[test]
fn test_scratch_file_is_removed() {
    let temp = setup_copying();

    assetfs(&temp).args(["-o", "out.go"]).assert().success();

    let args = recorded_args(&temp);
    assert!(!Path::new(&args[1]).exists(), "scratch left behind: {}", args[1]);
}

#[test]
fn test_missing_marker_warns_and_appends_adapter() {
    let temp = setup_copying();
    temp.child("fixture.go")
        .write_str("package main\n\nvar x = 1\n")
        .unwrap();

    assetfs(&temp)
        .args(["-o", "out.go"])
        .assert()
        .success()
        .stderr(predicate::str::contains("import (").count(1));

    temp.child("out.go").assert(format!(
        "package main\n\nvar x = 1\n{}",
        AssetMode::Embedded.adapter_block()
    ));
}

#[test]
fn test_generator_failure_exits_with_one() {
    let temp = setup("#!/bin/sh\necho 'bindata: no input paths' >&2\nexit 2\n");

    assetfs(&temp)
        .args(["-o", "out.go", "static/"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("bindata: no input paths"))
        .stderr(predicate::str::contains("go-bindata"));

    // Created before the generator ran, never patched.
    temp.child("out.go").assert("");
}

#[test]
fn test_missing_generator_exits_with_one() {
    let temp = setup("#!/bin/sh\n");
    temp.child("assetfs.toml")
        .write_str("[generator]\nprogram = \"assetfs-test-no-such-generator\"\n")
        .unwrap();

    assetfs(&temp)
        .args(["-o", "out.go"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("assetfs-test-no-such-generator"));

    temp.child("out.go").assert(predicate::path::missing());
}

#[test]
fn test_trailing_output_flag_exits_with_one() {
    let temp = setup_copying();

    assetfs(&temp)
        .args(["static/", "-o"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("-o"));

    temp.child("args.txt").assert(predicate::path::missing());
}

#[test]
fn test_invalid_config_exits_with_one() {
    let temp = setup_copying();
    temp.child("assetfs.toml")
        .write_str("default_output = 3\n")
        .unwrap();

    assetfs(&temp).arg("static/").assert().code(1);
}

#[test]
fn test_config_env_var_overrides_discovery() {
    let temp = setup_copying();
    let config = temp.child("other.toml");
    config
        .write_str(&format!(
            "default_output = \"assets.go\"\n[generator]\nprogram = \"{}\"\nargs = []\n",
            temp.path().join("fake-bindata").display()
        ))
        .unwrap();

    assetfs(&temp)
        .env("ASSETFS_CONFIG", config.path())
        .assert()
        .success();

    temp.child("assets.go").assert(expected(AssetMode::Embedded));
}
