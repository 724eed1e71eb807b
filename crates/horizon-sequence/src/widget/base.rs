//! Widget base implementation.
//!
//! `WidgetBase` holds the state every editor widget shares: its id, a debug
//! name, the parent it is attached to and whether it is shown. It is also the
//! single place where that state is pushed to the [`RenderHost`], so the host
//! and the widget never disagree about parentage or visibility.

use horizon_sequence_core::ObjectId;

use super::host::RenderHost;

/// The base implementation for all editor widgets.
///
/// New widgets start detached and hidden.
pub struct WidgetBase {
    /// The widget's unique id.
    id: ObjectId,

    /// Human-readable name for logs.
    name: String,

    /// The view this widget is attached to.
    parent: Option<ObjectId>,

    /// Whether the widget is shown.
    visible: bool,
}

impl WidgetBase {
    /// Create a widget base with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(ObjectId::next(), name)
    }

    /// Create a widget base for a view whose id was allocated elsewhere,
    /// such as a content view vended by a factory.
    pub fn with_id(id: ObjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            parent: None,
            visible: false,
        }
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// Get the widget's unique object ID.
    #[inline]
    pub fn object_id(&self) -> ObjectId {
        self.id
    }

    /// Get the widget's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    // =========================================================================
    // Parentage
    // =========================================================================

    /// Get the parent widget's object ID.
    pub fn parent_id(&self) -> Option<ObjectId> {
        self.parent
    }

    /// Attach this widget under `parent`.
    ///
    /// Always forwarded to the host, so this can be used to re-assert a
    /// parent the host may have lost.
    pub fn attach(&mut self, host: &dyn RenderHost, parent: ObjectId) {
        self.parent = Some(parent);
        host.attach(self.id, parent);
    }

    /// Detach this widget from its parent, if it has one.
    pub fn detach(&mut self, host: &dyn RenderHost) {
        if self.parent.take().is_some() {
            host.detach(self.id);
        }
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Check if the widget is shown.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the widget.
    ///
    /// The host is always updated, even when the state is unchanged.
    /// Returns whether the visibility actually changed.
    pub fn set_visible(&mut self, host: &dyn RenderHost, visible: bool) -> bool {
        host.set_visible(self.id, visible);
        std::mem::replace(&mut self.visible, visible) != visible
    }

    /// Show the widget.
    pub fn show(&mut self, host: &dyn RenderHost) {
        self.set_visible(host, true);
    }

    /// Hide the widget.
    pub fn hide(&mut self, host: &dyn RenderHost) {
        self.set_visible(host, false);
    }

    /// Destroy the widget's view in the host.
    pub fn destroy(&mut self, host: &dyn RenderHost) {
        host.destroy(self.id);
        self.parent = None;
        self.visible = false;
    }
}

impl std::fmt::Debug for WidgetBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetBase")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("parent", &self.parent)
            .field("visible", &self.visible)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{HeadlessHost, HostEvent};

    #[test]
    fn test_new_widget_is_detached_and_hidden() {
        let widget = WidgetBase::new("Label");
        assert_eq!(widget.name(), "Label");
        assert_eq!(widget.parent_id(), None);
        assert!(!widget.is_visible());
    }

    #[test]
    fn test_state_is_pushed_to_host() {
        let host = HeadlessHost::new();
        let root = ObjectId::next();
        let mut widget = WidgetBase::new("Control");

        widget.attach(&host, root);
        assert!(widget.set_visible(&host, true));
        assert!(!widget.set_visible(&host, true));
        assert_eq!(host.parent_of(widget.object_id()), Some(root));
        assert!(host.is_visible(widget.object_id()));

        widget.detach(&host);
        widget.detach(&host);
        let detaches = host
            .events()
            .into_iter()
            .filter(|event| matches!(event, HostEvent::Detach(_)))
            .count();
        assert_eq!(detaches, 1);
    }

    #[test]
    fn test_destroy_resets_state() {
        let host = HeadlessHost::new();
        let mut widget = WidgetBase::with_id(ObjectId::next(), "Content");
        widget.attach(&host, ObjectId::next());
        widget.show(&host);
        widget.destroy(&host);

        assert!(host.is_destroyed(widget.object_id()));
        assert_eq!(widget.parent_id(), None);
        assert!(!widget.is_visible());
    }
}
