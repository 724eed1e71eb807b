//! Horizon Sequence - incrementally reconciled sequence editor widgets.
//!
//! A [`SequenceEditor`](widget::widgets::SequenceEditor) keeps a column of
//! editable item views synchronized with an observable
//! [`Sequence`](model::Sequence). Every mutation of the sequence arrives as a
//! [`Change`](model::Change) and is applied in place: rows are only built for
//! added items and only torn down for removed ones, moves keep every row, and
//! batches of changes cost a single relayout.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_sequence::prelude::*;
//!
//! struct Views;
//!
//! impl ViewFactory<u32> for Views {
//!     fn view_for(&self, _: &Item<u32>) -> Result<ObjectId, ViewConstructionError> {
//!         Ok(ObjectId::next())
//!     }
//!     fn discard_view(&self, _: &Item<u32>) {}
//!     fn create_item(&self, _: ItemKind) -> Option<Item<u32>> {
//!         Some(Item::new(0))
//!     }
//! }
//!
//! let sequence = Arc::new(Sequence::from_values([1u32, 2, 3]));
//! let editor = SequenceEditor::new(
//!     sequence.clone(),
//!     Arc::new(Views),
//!     Arc::new(HeadlessHost::new()),
//!     EditorOptions::default(),
//! );
//!
//! editor.move_to(2, 0).unwrap();
//! let order: Vec<u32> = editor.items_in_view_order().iter().map(|i| **i).collect();
//! assert_eq!(order, [3, 1, 2]);
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod prelude;
pub mod widget;

pub use horizon_sequence_core::{logging, ObjectId, Signal};

pub use config::EditorOptions;
pub use error::{EditorError, Result, ViewConstructionError};
