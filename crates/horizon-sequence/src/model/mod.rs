//! Sequence model for Horizon Sequence.
//!
//! This module provides the observable data side of the editor:
//!
//! - `Item`: Identity-compared handle to an element of a sequence
//! - `ItemKind`: The kinds of item the user can create
//! - `Sequence`: Ordered, mutable collection with a change signal
//! - `Change`: Tagged notification payload describing one mutation
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────┐  Change  ┌──────────────────┐  attach/detach  ┌────────────┐
//! │  Sequence   │─────────>│  SequenceEditor  │────────────────>│ RenderHost │
//! └─────────────┘          └──────────────────┘                 └────────────┘
//!       ^                          │
//!       │   insert/remove/move     │ item controls, command menu
//!       └──────────────────────────┘
//! ```
//!
//! Editors never write to their own view mapping from UI actions: operations
//! mutate the sequence, and the resulting [`Change`] drives every update.

mod change;
mod item;
mod sequence;

pub use change::Change;
pub use item::{Item, ItemKind};
pub use sequence::{Sequence, SequenceBatch};
