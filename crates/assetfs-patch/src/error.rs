use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("failed to read generator output: {0}")]
    Read(std::io::Error),

    #[error("failed to write patched source: {0}")]
    Write(std::io::Error),
}
