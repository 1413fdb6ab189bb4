use thiserror::Error;

#[derive(Debug, Error)]
pub enum PagecountError {
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] globset::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
