#![doc = include_str!("../README.md")]

use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "assetfs.toml";

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "ASSETFS_CONFIG";

/// Output file written when `-o` is absent.
pub const DEFAULT_OUTPUT: &str = "bindata.go";

pub const DEFAULT_GENERATOR_PROGRAM: &str = "go";

pub const DEFAULT_GENERATOR_ARGS: [&str; 2] = ["run", "github.com/sour-is/go-assetfs/cmd/bindata"];

#[derive(Debug, Error)]
pub enum AssetFsConfigError {
    /// Configuration file named explicitly but missing.
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
    /// `generator.program` is blank.
    #[error("generator.program must not be empty")]
    EmptyProgram,
}

/// How the external bindata generator is started.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Executable name (searched on `PATH`) or path.
    pub program: String,
    /// Leading arguments, placed before `-o <scratch>`.
    pub args: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_GENERATOR_PROGRAM.to_string(),
            args: DEFAULT_GENERATOR_ARGS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// The configuration for `assetfs`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetFsConfig {
    /// Output path used when the command line has no `-o`.
    pub default_output: PathBuf,
    /// Generator invocation.
    pub generator: GeneratorConfig,
}

impl Default for AssetFsConfig {
    fn default() -> Self {
        Self {
            default_output: PathBuf::from(DEFAULT_OUTPUT),
            generator: GeneratorConfig::default(),
        }
    }
}

impl AssetFsConfig {
    /// Reads the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, AssetFsConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(AssetFsConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config: AssetFsConfig = toml::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Finds the configuration for a run started in `dir`.
    ///
    /// `ASSETFS_CONFIG` wins and must point at an existing file. Otherwise
    /// `dir/assetfs.toml` is read if present, and defaults are used if not.
    pub fn discover(dir: &Path) -> Result<Self, AssetFsConfigError> {
        if let Some(explicit) = env::var_os(CONFIG_ENV_VAR).filter(|value| !value.is_empty()) {
            return Self::read_from_path(PathBuf::from(explicit));
        }

        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::read_from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), AssetFsConfigError> {
        if self.generator.program.trim().is_empty() {
            return Err(AssetFsConfigError::EmptyProgram);
        }
        Ok(())
    }
}
