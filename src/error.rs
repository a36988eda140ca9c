//! Error types for Game Studio
//!
//! The simulation itself never fails: every tick is total over its inputs.
//! Errors only come from the edges of the crate (config and scene files,
//! render backends, registry edits).

use std::io;

/// Errors produced outside the per-frame simulation.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("render surface error: {0}")]
    Surface(String),

    #[error("unknown object: {0}")]
    UnknownObject(String),

    #[error("invalid name: {0:?}")]
    InvalidName(String),

    #[error("unsupported scene version: {found} (newest known is {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let e = GameError::Config("floor above canvas".into());
        assert_eq!(format!("{e}"), "config error: floor above canvas");
    }

    #[test]
    fn test_unknown_object_display() {
        let e = GameError::UnknownObject("42".into());
        assert_eq!(e.to_string(), "unknown object: 42");
    }

    #[test]
    fn test_invalid_name_is_quoted() {
        let e = GameError::InvalidName(String::new());
        assert_eq!(e.to_string(), "invalid name: \"\"");
    }

    #[test]
    fn test_version_display() {
        let e = GameError::UnsupportedVersion {
            found: 9,
            supported: 1,
        };
        assert_eq!(
            e.to_string(),
            "unsupported scene version: 9 (newest known is 1)"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = io::Error::new(io::ErrorKind::NotFound, "missing");
        let e: GameError = io.into();
        assert!(matches!(e, GameError::Io(_)));
    }
}
