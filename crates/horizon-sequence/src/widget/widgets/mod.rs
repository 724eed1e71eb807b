//! Editor widgets.
//!
//! - [`SequenceEditor`]: Mirrors a sequence as rows of item controls and content views
//! - [`ItemControl`]: Per-row button opening the command menu
//! - [`CommandMenu`]: Contextual menu of the commands valid for one index
//! - [`Operations`]: The editor's capability table
//! - [`Placeholder`]: Shown in place of an empty sequence
//! - [`FoldableEditor`]: Folds an editor behind a label

mod command_menu;
mod foldable;
mod item_control;
mod operations;
mod placeholder;
mod sequence_editor;

pub use command_menu::{CommandMenu, MenuAction, MenuCommand, MenuItem, MenuStyle};
pub use foldable::FoldableEditor;
pub use item_control::ItemControl;
pub use operations::{AddFn, MoveFn, OperationKind, OperationSet, Operations, RemoveFn};
pub use placeholder::{Placeholder, PlaceholderAction};
pub use sequence_editor::{RelayoutSuspension, SequenceEditor};
