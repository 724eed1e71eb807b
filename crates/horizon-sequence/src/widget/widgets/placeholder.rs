//! The view an editor shows in place of an empty sequence.

use horizon_sequence_core::ObjectId;

use crate::model::ItemKind;
use crate::widget::{RenderHost, WidgetBase};

/// One "Add <Kind>" action of the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderAction {
    /// Displayed text, such as "Add Pulse".
    pub text: String,
    /// The kind of item the action creates.
    pub kind: ItemKind,
}

/// Per-editor singleton shown while the sequence is empty and insertion is
/// supported.
#[derive(Debug)]
pub struct Placeholder {
    base: WidgetBase,
    label: String,
    actions: Vec<PlaceholderAction>,
}

impl Placeholder {
    /// Create a detached placeholder offering one action per kind.
    pub fn new(label: impl Into<String>, kinds: &[ItemKind]) -> Self {
        Self {
            base: WidgetBase::new("Placeholder"),
            label: label.into(),
            actions: kinds
                .iter()
                .map(|kind| PlaceholderAction {
                    text: format!("Add {}", kind.label()),
                    kind: *kind,
                })
                .collect(),
        }
    }

    /// Get the placeholder's object ID.
    pub fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }

    /// The label shown above the actions.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The add actions, in kind order.
    pub fn actions(&self) -> &[PlaceholderAction] {
        &self.actions
    }

    /// Find the action with `text`.
    pub fn action(&self, text: &str) -> Option<&PlaceholderAction> {
        self.actions.iter().find(|action| action.text == text)
    }

    /// Check if the placeholder is parented under an editor.
    pub fn is_attached(&self) -> bool {
        self.base.parent_id().is_some()
    }

    /// Check if the placeholder is parented and shown.
    pub fn is_shown(&self) -> bool {
        self.is_attached() && self.base.is_visible()
    }

    pub(crate) fn show_in(&mut self, host: &dyn RenderHost, editor: ObjectId) {
        self.base.attach(host, editor);
        self.base.show(host);
    }

    pub(crate) fn remove(&mut self, host: &dyn RenderHost) {
        if self.is_attached() {
            self.base.hide(host);
            self.base.detach(host);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::HeadlessHost;

    #[test]
    fn test_actions_per_kind() {
        let placeholder = Placeholder::new("Empty", &ItemKind::ALL);
        let texts: Vec<_> = placeholder.actions().iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, ["Add Pulse", "Add Sequence"]);
        assert_eq!(
            placeholder.action("Add Sequence").map(|a| a.kind),
            Some(ItemKind::Sequence)
        );
    }

    #[test]
    fn test_show_and_remove() {
        let host = HeadlessHost::new();
        let editor = ObjectId::next();
        let mut placeholder = Placeholder::new("Empty", &[ItemKind::Pulse]);

        placeholder.show_in(&host, editor);
        assert!(placeholder.is_shown());
        assert_eq!(host.children_of(editor), vec![placeholder.object_id()]);

        placeholder.remove(&host);
        assert!(!placeholder.is_attached());
        assert!(host.children_of(editor).is_empty());
        assert!(!host.is_visible(placeholder.object_id()));
    }
}
