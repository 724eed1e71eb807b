//! Prelude module for Horizon Sequence.
//!
//! ```ignore
//! use horizon_sequence::prelude::*;
//! ```
//!
//! This provides access to:
//! - Sequence model (`Sequence`, `Item`, `ItemKind`, `Change`)
//! - Editor widgets (`SequenceEditor`, `FoldableEditor`, `CommandMenu`, ...)
//! - Collaborator contracts (`RenderHost`, `ViewFactory`, `HeadlessHost`)
//! - Configuration and errors (`EditorOptions`, `EditorError`)
//!
//! `Result` is not re-exported; the crate alias lives at
//! `horizon_sequence::Result`.

// ============================================================================
// Signal/Slot and Object System
// ============================================================================

pub use horizon_sequence_core::{ConnectionId, ObjectId, Signal};

// ============================================================================
// Sequence Model
// ============================================================================

pub use crate::model::{Change, Item, ItemKind, Sequence, SequenceBatch};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::widgets::{
    CommandMenu, FoldableEditor, ItemControl, MenuCommand, MenuItem, MenuStyle, OperationKind,
    OperationSet, Operations, PlaceholderAction, SequenceEditor,
};
pub use crate::widget::{HeadlessHost, LayoutConstraints, RenderHost, ViewFactory};

// ============================================================================
// Configuration and Errors
// ============================================================================

pub use crate::config::EditorOptions;
pub use crate::error::{EditorError, ViewConstructionError};
