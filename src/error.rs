use thiserror::Error;

/// Errors raised while sizing the board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment override was not a positive integer.
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidOverride { var: &'static str, value: String },
    /// The board would have no cells.
    #[error("board must have a positive size, got {width}x{height}")]
    EmptyBoard { width: usize, height: usize },
    /// The board would not fit in memory. `height` is in terminal rows.
    #[error("board of {width}x{height} is too large (limit {limit} cells)")]
    BoardTooLarge {
        width: usize,
        height: usize,
        limit: usize,
    },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}
