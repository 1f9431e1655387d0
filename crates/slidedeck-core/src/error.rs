//! Error types for loading decks.

use std::path::PathBuf;

use thiserror::Error;

use crate::slide::SlideId;

/// Errors that can occur while loading or validating a deck.
#[derive(Debug, Error)]
pub enum DeckError {
    /// Deck file not found.
    #[error("Deck not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Deck file could not be parsed.
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// The deck has no slides.
    #[error("Deck has no slides")]
    Empty,

    /// Two slides share an id.
    #[error("Duplicate slide id: {id}")]
    DuplicateId { id: SlideId },

    /// A slide has an empty id.
    #[error("Slide {position} has a blank id")]
    BlankId { position: usize },

    /// A slide has an empty title.
    #[error("Slide {id} has a blank title")]
    BlankTitle { id: SlideId },
}

impl DeckError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// Create a parse error with path context.
    pub fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_error_io() {
        let err = DeckError::io(
            "/decks/missing.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, DeckError::NotFound { .. }));

        let err = DeckError::io(
            "/decks/locked.toml",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, DeckError::Io { .. }));
    }

    #[test]
    fn test_error_messages() {
        let err = DeckError::DuplicateId {
            id: SlideId::new("intro"),
        };
        assert_eq!(err.to_string(), "Duplicate slide id: intro");
        assert_eq!(DeckError::Empty.to_string(), "Deck has no slides");
    }
}
