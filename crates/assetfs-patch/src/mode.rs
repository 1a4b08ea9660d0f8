use crate::adapter;

/// Which filesystem backend the generated `assetFS()` returns.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AssetMode {
    /// Serve the bytes compiled into the binary.
    #[default]
    Embedded,
    /// Serve files straight from disk.
    Debug,
}

impl AssetMode {
    /// Maps the value of the `-debug` flag to a mode.
    pub fn from_debug_flag(debug: bool) -> Self {
        if debug { Self::Debug } else { Self::Embedded }
    }

    /// Import spec added to the generated import block, newline included.
    pub fn import_line(self) -> &'static str {
        match self {
            Self::Embedded => adapter::ASSETFS_IMPORT_LINE,
            Self::Debug => adapter::NET_HTTP_IMPORT_LINE,
        }
    }

    /// Go source appended after the generator output.
    pub fn adapter_block(self) -> &'static str {
        match self {
            Self::Embedded => adapter::EMBEDDED_ADAPTER,
            Self::Debug => adapter::DEBUG_ADAPTER,
        }
    }
}
