use std::path::PathBuf;

/// Caller contract violations surfaced by the board and move strategies.
///
/// Neither variant is recoverable at runtime: the session layer owns input
/// validation and is expected to check legality (and fullness) before
/// invoking the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("illegal move {mv} (legal: {legal:?})")]
    IllegalMove { mv: usize, legal: Vec<usize> },

    #[error("no legal moves left to select from")]
    EmptyMoveSet,
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
    fn test_engine_error_display() {
        let err = EngineError::IllegalMove {
            mv: 7,
            legal: vec![0, 1, 2],
        };
        assert_eq!(err.to_string(), "illegal move 7 (legal: [0, 1, 2])");
        assert_eq!(
            EngineError::EmptyMoveSet.to_string(),
            "no legal moves left to select from"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("games must be > 0".to_string());
        assert_eq!(err.to_string(), "config validation error: games must be > 0");
    }
}
