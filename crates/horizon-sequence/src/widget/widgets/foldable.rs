//! A sequence editor that can be folded behind a label.
//!
//! [`FoldableEditor`] is a checkable group in the style of a group box: while
//! folded only a static label is shown, while unfolded the editor surface is.
//! Unfolding refreshes the editor, since the host may have dropped views of a
//! hidden subtree.

use std::sync::Arc;

use horizon_sequence_core::{ObjectId, Signal};

use crate::widget::{RenderHost, WidgetBase};

use super::sequence_editor::SequenceEditor;

/// Wraps a [`SequenceEditor`] with a fold toggle.
///
/// # Signals
///
/// - [`toggled`](FoldableEditor::toggled): Emitted with the new folded state
pub struct FoldableEditor<T: Send + Sync + 'static> {
    base: WidgetBase,
    surface: WidgetBase,
    label: WidgetBase,
    label_text: String,
    editor: SequenceEditor<T>,
    host: Arc<dyn RenderHost>,
    folded: bool,

    /// Signal emitted when the folded state changes.
    pub toggled: Signal<bool>,
}

impl<T: Send + Sync + 'static> FoldableEditor<T> {
    /// Wrap `editor`, starting in the folded state its options ask for.
    pub fn new(editor: SequenceEditor<T>, host: Arc<dyn RenderHost>) -> Self {
        let label_text = editor.options().folded_label.clone();
        let folded = editor.options().start_folded;
        let mut foldable = Self {
            base: WidgetBase::new("FoldableEditor"),
            surface: WidgetBase::with_id(editor.object_id(), "SequenceEditor"),
            label: WidgetBase::new("FoldedLabel"),
            label_text,
            editor,
            host,
            folded,
            toggled: Signal::new(),
        };
        foldable.apply_state();
        foldable
    }

    /// Get the wrapper's object ID. The editor surface and the folded label
    /// are parented under it.
    pub fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }

    /// Get the folded label's object ID.
    pub fn label_id(&self) -> ObjectId {
        self.label.object_id()
    }

    /// The text shown while folded.
    pub fn label_text(&self) -> &str {
        &self.label_text
    }

    /// The wrapped editor.
    pub fn editor(&self) -> &SequenceEditor<T> {
        &self.editor
    }

    /// Check if the editor is folded away.
    pub fn is_folded(&self) -> bool {
        self.folded
    }

    /// Fold or unfold the editor.
    pub fn set_folded(&mut self, folded: bool) {
        if self.folded == folded {
            return;
        }
        self.folded = folded;
        self.apply_state();
        if !folded {
            self.editor.refresh();
        }
        tracing::debug!(
            target: horizon_sequence_core::logging::targets::EDITOR,
            editor = %self.editor.object_id(),
            folded,
            "fold state changed"
        );
        self.toggled.emit(folded);
    }

    /// Hide the editor behind the folded label.
    pub fn fold(&mut self) {
        self.set_folded(true);
    }

    /// Show the editor again and refresh it.
    pub fn unfold(&mut self) {
        self.set_folded(false);
    }

    /// Flip the folded state.
    pub fn toggle(&mut self) {
        self.set_folded(!self.folded);
    }

    /// Unwrap the editor, detaching it from the wrapper.
    pub fn into_editor(mut self) -> SequenceEditor<T> {
        let host = self.host.clone();
        self.surface.detach(host.as_ref());
        self.label.destroy(host.as_ref());
        self.editor
    }

    fn apply_state(&mut self) {
        let host = self.host.clone();
        let host = host.as_ref();
        let parent = self.base.object_id();
        if self.folded {
            self.surface.hide(host);
            self.surface.detach(host);
            self.label.attach(host, parent);
            self.label.show(host);
        } else {
            self.label.hide(host);
            self.label.detach(host);
            self.surface.attach(host, parent);
            self.surface.show(host);
        }
    }
}

impl<T: Send + Sync + 'static> std::fmt::Debug for FoldableEditor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FoldableEditor")
            .field("folded", &self.folded)
            .field("editor", &self.editor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorOptions;
    use crate::error::ViewConstructionError;
    use crate::model::{Item, ItemKind, Sequence};
    use crate::widget::{HeadlessHost, ViewFactory};
    use parking_lot::Mutex;

    struct Views;

    impl ViewFactory<&'static str> for Views {
        fn view_for(
            &self,
            _: &Item<&'static str>,
        ) -> std::result::Result<ObjectId, ViewConstructionError> {
            Ok(ObjectId::next())
        }

        fn discard_view(&self, _: &Item<&'static str>) {}

        fn create_item(&self, _: ItemKind) -> Option<Item<&'static str>> {
            None
        }
    }

    fn foldable(options: EditorOptions) -> (FoldableEditor<&'static str>, Arc<HeadlessHost>) {
        let host = Arc::new(HeadlessHost::new());
        let sequence = Arc::new(Sequence::from_values(["a", "b"]));
        let editor = SequenceEditor::new(sequence, Arc::new(Views), host.clone(), options);
        (FoldableEditor::new(editor, host.clone()), host)
    }

    #[test]
    fn test_starts_unfolded() {
        let (foldable, host) = foldable(EditorOptions::default());
        assert!(!foldable.is_folded());
        assert_eq!(
            host.children_of(foldable.object_id()),
            vec![foldable.editor().object_id()]
        );
        assert!(host.is_visible(foldable.editor().object_id()));
    }

    #[test]
    fn test_fold_shows_label() {
        let (mut foldable, host) =
            foldable(EditorOptions::default().with_start_folded(true).with_folded_label("Pulses"));
        assert!(foldable.is_folded());
        assert_eq!(foldable.label_text(), "Pulses");
        assert_eq!(host.children_of(foldable.object_id()), vec![foldable.label_id()]);
        assert!(!host.is_visible(foldable.editor().object_id()));

        foldable.unfold();
        assert_eq!(
            host.children_of(foldable.object_id()),
            vec![foldable.editor().object_id()]
        );
        assert!(!host.is_visible(foldable.label_id()));
    }

    #[test]
    fn test_unfold_refreshes_editor() {
        let (mut foldable, host) = foldable(EditorOptions::default().with_start_folded(true));
        let editor_id = foldable.editor().object_id();
        let before = host.relayout_count(editor_id);

        foldable.unfold();
        assert_eq!(host.relayout_count(editor_id), before + 1);

        foldable.fold();
        assert_eq!(host.relayout_count(editor_id), before + 1);
    }

    #[test]
    fn test_toggled_signal() {
        let (mut foldable, _host) = foldable(EditorOptions::default());
        let states = Arc::new(Mutex::new(Vec::new()));
        let sink = states.clone();
        foldable.toggled.connect(move |folded| sink.lock().push(*folded));

        foldable.toggle();
        foldable.toggle();
        foldable.unfold();
        assert_eq!(*states.lock(), [true, false]);
    }
}
