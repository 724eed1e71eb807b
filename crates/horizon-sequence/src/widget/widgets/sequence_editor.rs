//! The sequence editor: an incrementally reconciled list of item views.
//!
//! A [`SequenceEditor`] keeps one row per item of a [`Sequence`]: an
//! [`ItemControl`] on the left and a content view built by the
//! [`ViewFactory`] on the right. It subscribes to the sequence's change
//! signal and applies each [`Change`] in place instead of rebuilding:
//!
//! - `Added` builds rows for the new items only, then relayouts.
//! - `Removed` tears down the rows of the removed items only, then relayouts.
//! - `Moved` keeps every row; only the layout order changes. A move nested
//!   in a batch never relayouts on its own.
//! - `Collapsed` applies its sub-changes in order and relayouts once.
//! - `Replaced` rebinds to another sequence and repopulates.
//!
//! While the sequence is empty and `addBefore` is bound, a [`Placeholder`] is
//! shown instead of the rows.
//!
//! # Re-entrancy
//!
//! Operations mutate the sequence, and the sequence notifies the editor
//! synchronously before the operation returns. The editor's state lock is
//! therefore never held while the sequence is mutated, while a signal is
//! emitted or while [`RenderHost::request_relayout`] runs.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_sequence::prelude::*;
//!
//! struct Views;
//!
//! impl ViewFactory<String> for Views {
//!     fn view_for(&self, _: &Item<String>) -> Result<ObjectId, ViewConstructionError> {
//!         Ok(ObjectId::next())
//!     }
//!     fn discard_view(&self, _: &Item<String>) {}
//!     fn create_item(&self, kind: ItemKind) -> Option<Item<String>> {
//!         Some(Item::new(kind.label().to_owned()))
//!     }
//! }
//!
//! let sequence = Arc::new(Sequence::<String>::empty());
//! let host = Arc::new(HeadlessHost::new());
//! let editor = SequenceEditor::new(
//!     sequence.clone(),
//!     Arc::new(Views),
//!     host.clone(),
//!     EditorOptions::default(),
//! );
//! assert!(editor.is_placeholder_visible());
//!
//! editor.activate_placeholder(ItemKind::Pulse).unwrap();
//! assert_eq!(editor.entry_count(), 1);
//! assert!(!editor.is_placeholder_visible());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};

use horizon_sequence_core::logging::{span_names, targets};
use horizon_sequence_core::{ConnectionId, ObjectId, PerfSpan, Signal};
use parking_lot::Mutex;

use crate::config::EditorOptions;
use crate::error::{EditorError, Result};
use crate::model::{Change, Item, ItemKind, Sequence};
use crate::widget::{
    LayoutConstraints, LayoutInvalidator, LayoutRow, RenderHost, ViewFactory, WidgetBase,
};

use super::item_control::ItemControl;
use super::operations::{OperationKind, OperationSet, Operations};
use super::placeholder::{Placeholder, PlaceholderAction};

// ============================================================================
// Editor State
// ============================================================================

/// One row of the editor: a control and the content view it edits.
struct ViewEntry<T> {
    control: Arc<ItemControl<T>>,
    content: WidgetBase,
}

struct EditorState<T> {
    sequence: Arc<Sequence<T>>,
    connection: Option<ConnectionId>,
    entries: HashMap<Item<T>, ViewEntry<T>>,
    placeholder: Placeholder,
    invalidator: LayoutInvalidator,
    last_error: Option<EditorError>,
    destroyed: bool,
}

/// What must happen once the state lock is released.
#[must_use]
struct Deferred {
    relayout: bool,
    error: Option<EditorError>,
}

/// State shared between the editor handle, its controls and its operations.
pub(crate) struct EditorShared<T> {
    id: ObjectId,
    self_weak: Weak<EditorShared<T>>,
    host: Arc<dyn RenderHost>,
    factory: Arc<dyn ViewFactory<T>>,
    options: EditorOptions,
    operations: Operations,
    state: Mutex<EditorState<T>>,
    error_occurred: Signal<EditorError>,
}

impl<T: Send + Sync + 'static> EditorShared<T> {
    pub(crate) fn sequence(&self) -> Arc<Sequence<T>> {
        self.state.lock().sequence.clone()
    }

    pub(crate) fn operations(&self) -> &Operations {
        &self.operations
    }

    pub(crate) fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub(crate) fn host(&self) -> Arc<dyn RenderHost> {
        self.host.clone()
    }

    fn controls_visible(&self) -> bool {
        !self.operations.is_empty()
    }

    /// The placeholder tracks the rows; items without a row do not count.
    fn wants_placeholder(&self, state: &EditorState<T>) -> bool {
        state.entries.is_empty() && self.operations.supports(OperationKind::AddBefore)
    }

    // =========================================================================
    // Subscription
    // =========================================================================

    fn connect(&self, state: &mut EditorState<T>) {
        let weak = self.self_weak.clone();
        let source = Arc::downgrade(&state.sequence);
        let id = state.sequence.changed.connect(move |change| {
            if let Some(shared) = weak.upgrade() {
                shared.on_sequence_changed(&source, change);
            }
        });
        state.connection = Some(id);
    }

    fn disconnect(&self, state: &mut EditorState<T>) {
        if let Some(id) = state.connection.take() {
            state.sequence.changed.disconnect(id);
        }
    }

    fn on_sequence_changed(&self, source: &Weak<Sequence<T>>, change: &Change<T>) {
        let deferred = {
            let mut state = self.state.lock();
            if state.destroyed || !std::ptr::eq(source.as_ptr(), Arc::as_ptr(&state.sequence)) {
                tracing::trace!(
                    target: targets::EDITOR,
                    editor = %self.id,
                    "ignoring change from an unbound sequence"
                );
                return;
            }
            let result = self.apply_change(&mut state, change, true);
            self.settle(&mut state, result)
        };
        self.flush(deferred);
    }

    /// Records the outcome of a change and collects the follow-up work.
    fn settle(&self, state: &mut EditorState<T>, result: Result<()>) -> Deferred {
        let error = result.err();
        if let Some(err) = &error {
            state.last_error = Some(err.clone());
        }
        Deferred {
            relayout: state.invalidator.take_request(),
            error,
        }
    }

    /// Runs follow-up work with no lock held.
    fn flush(&self, deferred: Deferred) {
        if deferred.relayout {
            tracing::trace!(target: targets::EDITOR, editor = %self.id, "requesting relayout");
            self.host.request_relayout(self.id);
        }
        if let Some(err) = deferred.error {
            tracing::error!(target: targets::EDITOR, editor = %self.id, error = %err, "change could not be applied");
            self.error_occurred.emit(err);
        }
    }

    // =========================================================================
    // Change Application
    // =========================================================================

    fn apply_change(
        &self,
        state: &mut EditorState<T>,
        change: &Change<T>,
        outermost: bool,
    ) -> Result<()> {
        let _perf = PerfSpan::new(span_names::APPLY_CHANGE);
        tracing::debug!(
            target: targets::EDITOR,
            editor = %self.id,
            kind = change.kind_name(),
            outermost,
            "applying change"
        );

        let result = match change {
            Change::Added(added) => {
                let mut added = added.clone();
                added.sort_by_key(|(index, _)| *index);
                // Parentage changes at every depth; a batch's suspension
                // folds these into its single request.
                state.invalidator.invalidate();
                added
                    .iter()
                    .try_for_each(|(index, item)| self.add_entry(state, *index, item))
            }
            Change::Removed(removed) => {
                state.invalidator.invalidate();
                for (index, item) in removed {
                    match state.entries.remove(item) {
                        Some(entry) => self.drop_entry(item, entry),
                        None => tracing::trace!(
                            target: targets::EDITOR,
                            index,
                            "removed item had no row"
                        ),
                    }
                }
                Ok(())
            }
            Change::Moved { .. } => {
                if outermost {
                    state.invalidator.invalidate();
                }
                Ok(())
            }
            Change::Collapsed(changes) => {
                state.invalidator.suspend();
                let mut first_error = None;
                for sub in changes {
                    if let Err(err) = self.apply_change(state, sub, false) {
                        first_error.get_or_insert(err);
                    }
                }
                state.invalidator.resume();
                if outermost {
                    state.invalidator.invalidate();
                }
                first_error.map_or(Ok(()), Err)
            }
            Change::Replaced(sequence) => return self.rebind(state, sequence.clone()),
        };

        self.sync_placeholder(state, false);
        result
    }

    fn add_entry(&self, state: &mut EditorState<T>, index: usize, item: &Item<T>) -> Result<()> {
        if state.entries.contains_key(item) {
            tracing::trace!(target: targets::EDITOR, index, "item already has a row");
            return Ok(());
        }

        let view = self
            .factory
            .view_for(item)
            .map_err(|source| EditorError::ViewConstruction { index, source })?;

        let control = Arc::new(ItemControl::new(item.clone(), self.self_weak.clone()));
        control.place(self.host.as_ref(), self.id, self.controls_visible());

        let mut content = WidgetBase::with_id(view, "ContentView");
        content.attach(self.host.as_ref(), self.id);
        content.show(self.host.as_ref());

        state
            .entries
            .insert(item.clone(), ViewEntry { control, content });
        Ok(())
    }

    fn drop_entry(&self, item: &Item<T>, mut entry: ViewEntry<T>) {
        entry.control.destroy(self.host.as_ref());
        entry.content.detach(self.host.as_ref());
        self.factory.discard_view(item);
    }

    fn clear_entries(&self, state: &mut EditorState<T>) {
        let order = state.sequence.items();
        for item in &order {
            if let Some(entry) = state.entries.remove(item) {
                self.drop_entry(item, entry);
            }
        }
        // Rows whose item left the sequence without a notification.
        for (item, entry) in std::mem::take(&mut state.entries) {
            self.drop_entry(&item, entry);
        }
    }

    fn populate(&self, state: &mut EditorState<T>) -> Result<()> {
        let _perf = PerfSpan::new(span_names::POPULATE);
        let mut first_error = None;
        for (index, item) in state.sequence.items().iter().enumerate() {
            if let Err(err) = self.add_entry(state, index, item) {
                first_error.get_or_insert(err);
            }
        }
        self.sync_placeholder(state, false);
        state.invalidator.invalidate();
        first_error.map_or(Ok(()), Err)
    }

    fn rebind(&self, state: &mut EditorState<T>, sequence: Arc<Sequence<T>>) -> Result<()> {
        tracing::debug!(
            target: targets::EDITOR,
            editor = %self.id,
            old_len = state.sequence.len(),
            new_len = sequence.len(),
            "rebinding to a new sequence"
        );
        self.disconnect(state);
        self.clear_entries(state);
        state.placeholder.remove(self.host.as_ref());
        state.sequence = sequence;
        self.connect(state);
        self.populate(state)
    }

    fn sync_placeholder(&self, state: &mut EditorState<T>, force: bool) {
        if self.wants_placeholder(state) {
            if force || !state.placeholder.is_attached() {
                state.placeholder.show_in(self.host.as_ref(), self.id);
            }
        } else {
            state.placeholder.remove(self.host.as_ref());
        }
    }

    fn teardown(&self) {
        let mut state = self.state.lock();
        if state.destroyed {
            return;
        }
        self.disconnect(&mut state);
        self.clear_entries(&mut state);
        state.placeholder.remove(self.host.as_ref());
        state.destroyed = true;
        tracing::debug!(target: targets::EDITOR, editor = %self.id, "editor torn down");
    }

    // =========================================================================
    // Operations
    // =========================================================================

    fn build_operations(weak: &Weak<Self>, enabled: OperationSet) -> Operations {
        let mut operations = Operations::new();
        if enabled.add_before {
            let weak = weak.clone();
            operations = operations.with_add_before(move |index, kind| {
                let shared = weak.upgrade().ok_or(EditorError::EditorDropped)?;
                let len = shared.sequence().len();
                if index > len {
                    return Err(EditorError::invalid_index(index, len));
                }
                shared.create_and_insert(index, kind)
            });
        }
        if enabled.add_after {
            let weak = weak.clone();
            operations = operations.with_add_after(move |index, kind| {
                let shared = weak.upgrade().ok_or(EditorError::EditorDropped)?;
                let len = shared.sequence().len();
                if index >= len {
                    return Err(EditorError::invalid_index(index, len));
                }
                shared.create_and_insert(index + 1, kind)
            });
        }
        if enabled.remove {
            let weak = weak.clone();
            operations = operations.with_remove(move |index| {
                let shared = weak.upgrade().ok_or(EditorError::EditorDropped)?;
                shared.sequence().remove_item(index).map(drop)
            });
        }
        if enabled.move_to {
            let weak = weak.clone();
            operations = operations.with_move_to(move |from, to| {
                let shared = weak.upgrade().ok_or(EditorError::EditorDropped)?;
                shared.sequence().move_item(from, to)
            });
        }
        operations
    }

    /// Asks the factory for a new item and inserts it at `index`.
    ///
    /// A construction failure raised while the editor handles the resulting
    /// `Added` change is returned to the caller.
    fn create_and_insert(&self, index: usize, kind: ItemKind) -> Result<Option<usize>> {
        let Some(item) = self.factory.create_item(kind) else {
            tracing::debug!(target: targets::EDITOR, editor = %self.id, %kind, "item creation cancelled");
            return Ok(None);
        };

        let sequence = self.sequence();
        // An error nobody has taken yet stays in place; only the error this
        // insert raises is handed to the caller.
        let pending = self.state.lock().last_error.take();
        let inserted = sequence.insert_item(index, item);
        let raised = {
            let mut state = self.state.lock();
            let raised = state.last_error.take();
            state.last_error = pending;
            raised
        };
        inserted?;
        match raised {
            Some(err) => Err(err),
            None => Ok(Some(index)),
        }
    }
}

// ============================================================================
// SequenceEditor
// ============================================================================

/// A widget that mirrors a [`Sequence`] as a column of editable rows.
///
/// # Signals
///
/// - [`error_occurred`](SequenceEditor::error_occurred): Emitted when a change
///   could not be fully applied, typically because the factory failed to
///   build a content view
pub struct SequenceEditor<T: Send + Sync + 'static> {
    shared: Arc<EditorShared<T>>,
}

impl<T: Send + Sync + 'static> SequenceEditor<T> {
    /// Create an editor for `sequence` and populate it.
    ///
    /// Construction failures during population are available from
    /// [`take_error`](Self::take_error); the rows of the remaining items are
    /// still built.
    pub fn new(
        sequence: Arc<Sequence<T>>,
        factory: Arc<dyn ViewFactory<T>>,
        host: Arc<dyn RenderHost>,
        options: EditorOptions,
    ) -> Self {
        let shared = Arc::new_cyclic(|weak: &Weak<EditorShared<T>>| EditorShared {
            id: ObjectId::next(),
            self_weak: weak.clone(),
            operations: EditorShared::build_operations(weak, options.operations),
            state: Mutex::new(EditorState {
                sequence,
                connection: None,
                entries: HashMap::new(),
                placeholder: Placeholder::new(
                    options.placeholder_label.clone(),
                    &options.item_kinds,
                ),
                invalidator: LayoutInvalidator::new(),
                last_error: None,
                destroyed: false,
            }),
            host,
            factory,
            options,
            error_occurred: Signal::new(),
        });

        let deferred = {
            let mut state = shared.state.lock();
            shared.connect(&mut state);
            let result = shared.populate(&mut state);
            shared.settle(&mut state, result)
        };
        shared.flush(deferred);

        tracing::debug!(
            target: targets::EDITOR,
            editor = %shared.id,
            operations = ?shared.operations.supported(),
            "sequence editor created"
        );
        Self { shared }
    }

    /// Get the editor's object ID. Rows and the placeholder are parented
    /// under it.
    pub fn object_id(&self) -> ObjectId {
        self.shared.id
    }

    /// The sequence currently being edited.
    pub fn sequence(&self) -> Arc<Sequence<T>> {
        self.shared.sequence()
    }

    /// The editor's operation table.
    pub fn operations(&self) -> &Operations {
        &self.shared.operations
    }

    /// The options the editor was built with.
    pub fn options(&self) -> &EditorOptions {
        &self.shared.options
    }

    /// Signal emitted when a change could not be fully applied.
    pub fn error_occurred(&self) -> &Signal<EditorError> {
        &self.shared.error_occurred
    }

    /// Take the last error raised while applying a change.
    pub fn take_error(&self) -> Option<EditorError> {
        self.shared.state.lock().last_error.take()
    }

    // =========================================================================
    // Reconciliation
    // =========================================================================

    /// Edit another sequence, discarding every row of the current one.
    ///
    /// Returns the first construction failure raised while repopulating.
    pub fn set_sequence(&self, sequence: Arc<Sequence<T>>) -> Result<()> {
        let change = Change::Replaced(sequence);
        let (result, deferred) = {
            let mut state = self.shared.state.lock();
            if state.destroyed {
                return Err(EditorError::EditorDropped);
            }
            let result = self.shared.apply_change(&mut state, &change, true);
            let deferred = self.shared.settle(&mut state, result.clone());
            (result, deferred)
        };
        self.shared.flush(deferred);
        result
    }

    /// Re-assert parentage and visibility of every view without rebuilding.
    ///
    /// Issues exactly one relayout request, unless a
    /// [`suspend_relayout`](Self::suspend_relayout) guard is alive, in which
    /// case the request is issued when the last guard drops.
    pub fn refresh(&self) {
        let _perf = PerfSpan::new(span_names::REFRESH);
        let shared = &self.shared;
        let deferred = {
            let mut state = shared.state.lock();
            if state.destroyed {
                return;
            }
            state.invalidator.suspend();
            let host = shared.host.as_ref();
            let controls_visible = shared.controls_visible();
            for item in state.sequence.items() {
                if let Some(entry) = state.entries.get_mut(&item) {
                    entry.control.place(host, shared.id, controls_visible);
                    entry.content.attach(host, shared.id);
                    entry.content.show(host);
                }
            }
            shared.sync_placeholder(&mut state, true);
            state.invalidator.resume();
            state.invalidator.invalidate();
            shared.settle(&mut state, Ok(()))
        };
        shared.flush(deferred);
    }

    /// Hold back relayout requests until the returned guard is dropped.
    ///
    /// Guards nest; the request owed by everything that happened meanwhile
    /// is issued once, when the last guard drops.
    pub fn suspend_relayout(&self) -> RelayoutSuspension<T> {
        self.shared.state.lock().invalidator.suspend();
        RelayoutSuspension {
            shared: self.shared.clone(),
        }
    }

    /// Describe the layout of the current rows.
    ///
    /// With no rows the placeholder is laid out alone when `addBefore` is
    /// bound. This follows the rows, not the sequence, so a sequence whose
    /// views all failed to build still offers the placeholder.
    ///
    /// Pure: calling it never changes the editor or the host.
    pub fn layout_constraints(&self) -> LayoutConstraints {
        let state = self.shared.state.lock();
        if state.entries.is_empty() {
            return if self.shared.wants_placeholder(&state) {
                LayoutConstraints::placeholder(state.placeholder.object_id())
            } else {
                LayoutConstraints::empty()
            };
        }

        let rows = state
            .sequence
            .items()
            .iter()
            .filter_map(|item| state.entries.get(item))
            .map(|entry| LayoutRow {
                control: entry.control.object_id(),
                content: entry.content.object_id(),
            })
            .collect();
        LayoutConstraints::rows(rows)
    }

    /// Tear the editor down: unsubscribe and release every view.
    ///
    /// Also happens on drop.
    pub fn destroy(&self) {
        self.shared.teardown();
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Insert a new item of `kind` before `index`.
    ///
    /// Returns the insertion index, or `None` if creation was cancelled.
    pub fn add_before(&self, index: usize, kind: ItemKind) -> Result<Option<usize>> {
        self.shared.operations.add_before(index, kind)
    }

    /// Insert a new item of `kind` after `index`.
    pub fn add_after(&self, index: usize, kind: ItemKind) -> Result<Option<usize>> {
        self.shared.operations.add_after(index, kind)
    }

    /// Remove the item at `index`.
    pub fn remove(&self, index: usize) -> Result<()> {
        self.shared.operations.remove(index)
    }

    /// Move the item at `from` to `to`; `to` may equal the length.
    pub fn move_to(&self, from: usize, to: usize) -> Result<()> {
        self.shared.operations.move_to(from, to)
    }

    /// The placeholder's add actions.
    pub fn placeholder_actions(&self) -> Vec<PlaceholderAction> {
        self.shared.state.lock().placeholder.actions().to_vec()
    }

    /// Run the placeholder action creating an item of `kind`.
    pub fn activate_placeholder(&self, kind: ItemKind) -> Result<Option<usize>> {
        tracing::debug!(target: targets::MENU, %kind, "placeholder activated");
        self.add_before(0, kind)
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Number of rows.
    pub fn entry_count(&self) -> usize {
        self.shared.state.lock().entries.len()
    }

    /// Check whether `item` has a row.
    pub fn contains(&self, item: &Item<T>) -> bool {
        self.shared.state.lock().entries.contains_key(item)
    }

    /// The items with a row, in the order they are laid out.
    pub fn items_in_view_order(&self) -> Vec<Item<T>> {
        let state = self.shared.state.lock();
        state
            .sequence
            .items()
            .into_iter()
            .filter(|item| state.entries.contains_key(item))
            .collect()
    }

    /// The control of `item`'s row.
    pub fn control_for(&self, item: &Item<T>) -> Option<Arc<ItemControl<T>>> {
        self.shared
            .state
            .lock()
            .entries
            .get(item)
            .map(|entry| entry.control.clone())
    }

    /// The content view of `item`'s row.
    pub fn content_view_for(&self, item: &Item<T>) -> Option<ObjectId> {
        self.shared
            .state
            .lock()
            .entries
            .get(item)
            .map(|entry| entry.content.object_id())
    }

    /// Get the placeholder's object ID.
    pub fn placeholder_id(&self) -> ObjectId {
        self.shared.state.lock().placeholder.object_id()
    }

    /// Check if the placeholder is parented and shown.
    pub fn is_placeholder_visible(&self) -> bool {
        self.shared.state.lock().placeholder.is_shown()
    }

    /// One line per row, for logs.
    pub fn debug_rows(&self) -> Vec<String> {
        let layout = self.layout_constraints();
        if let Some(placeholder) = layout.placeholder_view() {
            return vec![format!("placeholder {placeholder}")];
        }
        layout
            .item_rows()
            .iter()
            .enumerate()
            .map(|(index, row)| format!("{index}: control {} | content {}", row.control, row.content))
            .collect()
    }
}

impl<T: Send + Sync + 'static> Drop for SequenceEditor<T> {
    fn drop(&mut self) {
        self.shared.teardown();
    }
}

impl<T: Send + Sync + 'static> fmt::Debug for SequenceEditor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceEditor")
            .field("id", &self.shared.id)
            .field("entries", &self.entry_count())
            .field("operations", &self.shared.operations)
            .finish()
    }
}

static_assertions::assert_impl_all!(SequenceEditor<String>: Send, Sync);

// ============================================================================
// RelayoutSuspension
// ============================================================================

/// Guard returned by [`SequenceEditor::suspend_relayout`].
#[must_use = "relayout resumes as soon as the guard is dropped"]
pub struct RelayoutSuspension<T: Send + Sync + 'static> {
    shared: Arc<EditorShared<T>>,
}

impl<T: Send + Sync + 'static> Drop for RelayoutSuspension<T> {
    fn drop(&mut self) {
        let deferred = {
            let mut state = self.shared.state.lock();
            state.invalidator.resume();
            self.shared.settle(&mut state, Ok(()))
        };
        self.shared.flush(deferred);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViewConstructionError;
    use crate::widget::HeadlessHost;

    struct Views;

    impl ViewFactory<u32> for Views {
        fn view_for(&self, _: &Item<u32>) -> std::result::Result<ObjectId, ViewConstructionError> {
            Ok(ObjectId::next())
        }

        fn discard_view(&self, _: &Item<u32>) {}

        fn create_item(&self, _: ItemKind) -> Option<Item<u32>> {
            Some(Item::new(99))
        }
    }

    fn build_editor(values: &[u32], options: EditorOptions) -> (SequenceEditor<u32>, Arc<HeadlessHost>) {
        let host = Arc::new(HeadlessHost::new());
        let sequence = Arc::new(Sequence::from_values(values.iter().copied()));
        let editor = SequenceEditor::new(sequence, Arc::new(Views), host.clone(), options);
        (editor, host)
    }

    #[test]
    fn test_population_builds_rows_in_order() {
        let (editor, host) = build_editor(&[1, 2, 3], EditorOptions::default());
        assert_eq!(editor.entry_count(), 3);
        assert_eq!(host.children_of(editor.object_id()).len(), 6);
        assert!(!editor.is_placeholder_visible());
        assert_eq!(host.relayout_count(editor.object_id()), 1);

        let values: Vec<u32> = editor.items_in_view_order().iter().map(|i| **i).collect();
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn test_read_only_editor_hides_controls() {
        let (editor, _host) = build_editor(&[], EditorOptions::read_only());
        assert!(!editor.is_placeholder_visible());
        assert!(editor.layout_constraints().is_empty());

        let (editor, _host) = editor_with_item(EditorOptions::read_only());
        let item = editor.sequence().get(0).unwrap();
        let control = editor.control_for(&item).unwrap();
        assert!(!control.is_visible());
        assert!(control.activate().unwrap().is_none());
    }

    fn editor_with_item(options: EditorOptions) -> (SequenceEditor<u32>, Arc<HeadlessHost>) {
        build_editor(&[7], options)
    }

    #[test]
    fn test_unsupported_operations_are_rejected() {
        let (editor, _host) = build_editor(&[1], EditorOptions::read_only());
        assert_eq!(
            editor.remove(0),
            Err(EditorError::UnsupportedOperation(OperationKind::Remove))
        );
        assert_eq!(editor.sequence().len(), 1);
    }

    #[test]
    fn test_add_validates_index_before_creating() {
        let (editor, _host) = build_editor(&[1, 2], EditorOptions::default());
        assert_eq!(
            editor.add_before(3, ItemKind::Pulse),
            Err(EditorError::invalid_index(3, 2))
        );
        assert_eq!(
            editor.add_after(2, ItemKind::Pulse),
            Err(EditorError::invalid_index(2, 2))
        );
        assert_eq!(editor.add_after(1, ItemKind::Pulse), Ok(Some(2)));
        assert_eq!(*editor.sequence().get(2).unwrap(), 99);
    }

    #[test]
    fn test_destroy_releases_everything() {
        let (editor, host) = build_editor(&[1, 2], EditorOptions::default());
        let sequence = editor.sequence();
        editor.destroy();

        assert!(host.children_of(editor.object_id()).is_empty());
        assert_eq!(sequence.changed.connection_count(), 0);
        assert_eq!(editor.entry_count(), 0);

        // Changes after teardown are ignored.
        sequence.push_item(Item::new(3)).unwrap();
        assert_eq!(editor.entry_count(), 0);
    }

    #[test]
    fn test_drop_disconnects() {
        let (editor, _host) = build_editor(&[1], EditorOptions::default());
        let sequence = editor.sequence();
        assert_eq!(sequence.changed.connection_count(), 1);
        drop(editor);
        assert_eq!(sequence.changed.connection_count(), 0);
    }
}
