//! Error taxonomy for the font collection

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// What a [`CollectionError::NotFound`] was looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundKind {
    Favorite,
    Folder,
}

impl fmt::Display for NotFoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundKind::Favorite => f.write_str("favorite"),
            NotFoundKind::Folder => f.write_str("folder"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("{kind} '{name}' not found")]
    NotFound { kind: NotFoundKind, name: String },

    #[error("a folder named '{0}' already exists")]
    DuplicateFolder(String),

    /// Informational: the membership already exists, nothing changed.
    #[error("'{font}' is already in folder '{folder}'")]
    AlreadyMember { folder: String, font: String },

    #[error("collection document {} is unreadable: {reason}", path.display())]
    CorruptState { path: PathBuf, reason: String },

    #[error("failed to {operation} {}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CollectionError {
    pub(crate) fn folder_not_found(name: &str) -> Self {
        CollectionError::NotFound {
            kind: NotFoundKind::Folder,
            name: name.to_string(),
        }
    }

    pub(crate) fn favorite_not_found(name: &str) -> Self {
        CollectionError::NotFound {
            kind: NotFoundKind::Favorite,
            name: name.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CollectionError>;
