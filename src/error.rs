use std::path::PathBuf;

/// Errors raised by board operations.
///
/// `ColumnFull` is an expected, recoverable condition ("try another
/// column"); the AI policies branch on it when probing simulated boards.
/// The other variants indicate bad input or a bug in a caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board needs at least 3 rows and 3 columns, got {rows}x{cols}")]
    InvalidConfiguration { rows: usize, cols: usize },

    #[error("position ({row}, {column}) is outside the {rows}x{cols} board")]
    InvalidPosition {
        row: usize,
        column: usize,
        rows: usize,
        cols: usize,
    },

    #[error("only player markers can be inserted")]
    InvalidSymbol,

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// Errors that can occur while running a game session.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("board error: {0}")]
    Board(#[from] BoardError),

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::InvalidConfiguration { rows: 2, cols: 10 };
        assert_eq!(
            err.to_string(),
            "board needs at least 3 rows and 3 columns, got 2x10"
        );

        let err = BoardError::ColumnFull { column: 4 };
        assert_eq!(err.to_string(), "column 4 is full");
    }

    #[test]
    fn test_invalid_position_display() {
        let err = BoardError::InvalidPosition {
            row: 9,
            column: 3,
            rows: 9,
            cols: 10,
        };
        assert_eq!(err.to_string(), "position (9, 3) is outside the 9x10 board");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("rows must be >= 3".to_string());
        assert_eq!(err.to_string(), "config validation error: rows must be >= 3");
    }

    #[test]
    fn test_game_error_wraps_board_error() {
        let err = GameError::from(BoardError::InvalidSymbol);
        assert_eq!(
            err.to_string(),
            "board error: only player markers can be inserted"
        );
    }
}
