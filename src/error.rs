use std::path::PathBuf;

/// Errors surfaced by board construction, move application and search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid board size {size} (minimum is 5)")]
    InvalidBoardSize { size: usize },

    #[error("{cells} cells do not form a square board")]
    CellCountMismatch { cells: usize },

    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("empty is not a player mark")]
    InvalidMark,

    #[error("unknown cell symbol '{0}'")]
    InvalidSymbol(String),

    #[error("no legal moves left on the board")]
    NoLegalMoves,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
