//! Error types for the sequence editor.

use crate::widget::widgets::OperationKind;

/// Result type alias for sequence and editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;

/// Errors that can occur while editing a sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    /// An index was outside the bounds of the sequence.
    #[error("Index {index} is out of bounds for a sequence of length {len}")]
    InvalidIndex { index: usize, len: usize },

    /// A move referenced a position outside the sequence.
    #[error("Cannot move item from {from} to {to} in a sequence of length {len}")]
    InvalidMove { from: usize, to: usize, len: usize },

    /// The item is already part of the sequence.
    #[error("Item is already present in the sequence at index {index}")]
    DuplicateItem { index: usize },

    /// The view factory could not build a content view.
    #[error("Failed to construct the view for the item at index {index}: {source}")]
    ViewConstruction {
        index: usize,
        #[source]
        source: ViewConstructionError,
    },

    /// The operation is not part of the editor's operation table.
    #[error("Operation '{0}' is not supported by this editor")]
    UnsupportedOperation(OperationKind),

    /// A command menu has no entry with the given text.
    #[error("No menu entry labelled '{0}'")]
    UnknownMenuEntry(String),

    /// The item a control was built for is no longer in the sequence.
    #[error("The item is no longer part of the edited sequence")]
    StaleItem,

    /// The editor owning an operation or control has been dropped.
    #[error("The sequence editor has been dropped")]
    EditorDropped,

    /// The editor options could not be parsed.
    #[error("Invalid editor options: {0}")]
    Config(String),
}

impl EditorError {
    /// Create an index error.
    pub fn invalid_index(index: usize, len: usize) -> Self {
        Self::InvalidIndex { index, len }
    }

    /// Create a move error.
    pub fn invalid_move(from: usize, to: usize, len: usize) -> Self {
        Self::InvalidMove { from, to, len }
    }
}

/// Raised by a view factory that cannot build a content view for an item.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ViewConstructionError {
    message: String,
}

impl ViewConstructionError {
    /// Create a construction error with a reason.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The reason reported by the factory.
    pub fn message(&self) -> &str {
        &self.message
    }
}
