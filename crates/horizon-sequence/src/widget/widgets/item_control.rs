//! Per-item control button.
//!
//! Each row of a sequence editor starts with an [`ItemControl`]. Activating
//! it opens a [`CommandMenu`] for the control's item at the index the item
//! currently has in the live sequence, so a control never goes stale when
//! items before it are inserted, removed or moved.

use std::sync::Weak;

use horizon_sequence_core::logging::targets;
use horizon_sequence_core::{ObjectId, Signal};
use parking_lot::Mutex;

use crate::error::{EditorError, Result};
use crate::model::Item;
use crate::widget::{RenderHost, WidgetBase};

use super::command_menu::CommandMenu;
use super::sequence_editor::EditorShared;

/// The button at the start of an editor row.
///
/// # Signals
///
/// - [`activated`](ItemControl::activated): Emitted with the resolved index
///   when the control opens its menu
pub struct ItemControl<T> {
    base: Mutex<WidgetBase>,
    item: Item<T>,
    editor: Weak<EditorShared<T>>,

    /// Signal emitted when the control is activated.
    pub activated: Signal<usize>,
}

impl<T: Send + Sync + 'static> ItemControl<T> {
    pub(crate) fn new(item: Item<T>, editor: Weak<EditorShared<T>>) -> Self {
        Self {
            base: Mutex::new(WidgetBase::new("ItemControl")),
            item,
            editor,
            activated: Signal::new(),
        }
    }

    /// Get the control's object ID.
    pub fn object_id(&self) -> ObjectId {
        self.base.lock().object_id()
    }

    /// The item this control edits.
    pub fn item(&self) -> &Item<T> {
        &self.item
    }

    /// Check if the control is shown.
    pub fn is_visible(&self) -> bool {
        self.base.lock().is_visible()
    }

    /// The item's current index, looked up by identity in the live sequence.
    pub fn current_index(&self) -> Result<usize> {
        let editor = self.editor.upgrade().ok_or(EditorError::EditorDropped)?;
        editor
            .sequence()
            .index_of(&self.item)
            .ok_or(EditorError::StaleItem)
    }

    /// Open the command menu for this control's item.
    ///
    /// Returns `Ok(None)` when the editor has no operations, in which case the
    /// control is hidden and nothing is offered.
    pub fn activate(&self) -> Result<Option<CommandMenu>> {
        let editor = self.editor.upgrade().ok_or(EditorError::EditorDropped)?;
        if editor.operations().is_empty() {
            return Ok(None);
        }

        let sequence = editor.sequence();
        let index = sequence.index_of(&self.item).ok_or(EditorError::StaleItem)?;
        let len = sequence.len();
        tracing::debug!(target: targets::MENU, index, len, "item control activated");
        self.activated.emit(index);

        let options = editor.options();
        let mut menu = CommandMenu::new(index, len, editor.operations().clone(), editor.host())
            .with_kinds(&options.item_kinds)
            .with_style(options.menu.clone());
        menu.popup(self.object_id());
        Ok(Some(menu))
    }

    pub(crate) fn place(&self, host: &dyn RenderHost, editor: ObjectId, visible: bool) {
        let mut base = self.base.lock();
        base.attach(host, editor);
        base.set_visible(host, visible);
    }

    pub(crate) fn destroy(&self, host: &dyn RenderHost) {
        self.base.lock().destroy(host);
    }
}

impl<T> std::fmt::Debug for ItemControl<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemControl")
            .field("base", &*self.base.lock())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(ItemControl<String>: Send, Sync);
