//! Collaborator contracts consumed by the editor widgets.
//!
//! - [`RenderHost`]: the rendering/layout engine. It owns the real widget tree
//!   and is told explicitly which view is parented under which, which views
//!   are shown, and when a relayout is needed.
//! - [`ViewFactory`]: the root view that vends content views for items and
//!   creates new items on request.
//!
//! [`HeadlessHost`] is an in-memory `RenderHost` that records the resulting
//! tree. It backs headless tools and the test suites.

use std::collections::{HashMap, HashSet};

use horizon_sequence_core::ObjectId;
use parking_lot::Mutex;

use crate::error::ViewConstructionError;
use crate::model::{Item, ItemKind};

/// The rendering collaborator.
///
/// All calls are idempotent: attaching a view to the parent it already has,
/// or showing a visible view, must be harmless. Implementations must not call
/// back into the editor from `attach`, `detach`, `set_visible` or `destroy`.
/// `request_relayout` is always invoked with no editor lock held, so it may
/// query [`SequenceEditor::layout_constraints`](super::widgets::SequenceEditor::layout_constraints)
/// synchronously. Every change to an editor's rows or placeholder is followed
/// by a relayout request once the change settles; the host need not infer one
/// from `attach` or `detach`.
pub trait RenderHost: Send + Sync {
    /// Parent `child` under `parent`.
    fn attach(&self, child: ObjectId, parent: ObjectId);

    /// Remove `child` from its parent.
    fn detach(&self, child: ObjectId);

    /// Show or hide a view.
    fn set_visible(&self, view: ObjectId, visible: bool);

    /// Destroy a view owned by the widget tree.
    fn destroy(&self, view: ObjectId);

    /// Ask the host to recompute the layout of `root`.
    fn request_relayout(&self, root: ObjectId);
}

/// The root-view collaborator that builds content views and new items.
pub trait ViewFactory<T>: Send + Sync {
    /// Build (or fetch) the content view for `item`.
    fn view_for(&self, item: &Item<T>) -> Result<ObjectId, ViewConstructionError>;

    /// Release the content view previously vended for `item`.
    fn discard_view(&self, item: &Item<T>);

    /// Create a new item of `kind`, usually by prompting the user.
    ///
    /// Returns `None` when the user cancels.
    fn create_item(&self, kind: ItemKind) -> Option<Item<T>>;
}

/// A call received by a [`HeadlessHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// `attach(child, parent)`
    Attach(ObjectId, ObjectId),
    /// `detach(child)`
    Detach(ObjectId),
    /// `set_visible(view, visible)`
    SetVisible(ObjectId, bool),
    /// `destroy(view)`
    Destroy(ObjectId),
    /// `request_relayout(root)`
    RequestRelayout(ObjectId),
}

#[derive(Debug, Default)]
struct HeadlessState {
    parents: HashMap<ObjectId, ObjectId>,
    visible: HashSet<ObjectId>,
    destroyed: HashSet<ObjectId>,
    relayouts: HashMap<ObjectId, usize>,
    events: Vec<HostEvent>,
}

/// An in-memory render host that tracks parentage, visibility and relayout
/// requests without drawing anything.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    state: Mutex<HeadlessState>,
}

impl HeadlessHost {
    /// Create an empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// The parent `view` is attached to.
    pub fn parent_of(&self, view: ObjectId) -> Option<ObjectId> {
        self.state.lock().parents.get(&view).copied()
    }

    /// Whether `view` is currently shown.
    pub fn is_visible(&self, view: ObjectId) -> bool {
        self.state.lock().visible.contains(&view)
    }

    /// Whether `view` has been destroyed.
    pub fn is_destroyed(&self, view: ObjectId) -> bool {
        self.state.lock().destroyed.contains(&view)
    }

    /// Views attached under `parent`, sorted by id.
    pub fn children_of(&self, parent: ObjectId) -> Vec<ObjectId> {
        let mut children: Vec<ObjectId> = self
            .state
            .lock()
            .parents
            .iter()
            .filter(|(_, p)| **p == parent)
            .map(|(child, _)| *child)
            .collect();
        children.sort();
        children
    }

    /// Number of relayout requests received for `root`.
    pub fn relayout_count(&self, root: ObjectId) -> usize {
        self.state.lock().relayouts.get(&root).copied().unwrap_or(0)
    }

    /// Every call received so far, in order.
    pub fn events(&self) -> Vec<HostEvent> {
        self.state.lock().events.clone()
    }

    /// Forget the recorded call log, keeping the tree.
    pub fn clear_events(&self) {
        self.state.lock().events.clear();
    }

    /// Snapshot of `(view, parent, visible)` for every attached view, sorted.
    pub fn tree_snapshot(&self) -> Vec<(ObjectId, ObjectId, bool)> {
        let state = self.state.lock();
        let mut snapshot: Vec<_> = state
            .parents
            .iter()
            .map(|(child, parent)| (*child, *parent, state.visible.contains(child)))
            .collect();
        snapshot.sort();
        snapshot
    }
}

impl RenderHost for HeadlessHost {
    fn attach(&self, child: ObjectId, parent: ObjectId) {
        let mut state = self.state.lock();
        state.parents.insert(child, parent);
        state.events.push(HostEvent::Attach(child, parent));
    }

    fn detach(&self, child: ObjectId) {
        let mut state = self.state.lock();
        state.parents.remove(&child);
        state.events.push(HostEvent::Detach(child));
    }

    fn set_visible(&self, view: ObjectId, visible: bool) {
        let mut state = self.state.lock();
        if visible {
            state.visible.insert(view);
        } else {
            state.visible.remove(&view);
        }
        state.events.push(HostEvent::SetVisible(view, visible));
    }

    fn destroy(&self, view: ObjectId) {
        let mut state = self.state.lock();
        state.parents.remove(&view);
        state.visible.remove(&view);
        // Destruction cascades to children.
        let children: Vec<ObjectId> = state
            .parents
            .iter()
            .filter(|(_, parent)| **parent == view)
            .map(|(child, _)| *child)
            .collect();
        for child in children {
            state.parents.remove(&child);
        }
        state.destroyed.insert(view);
        state.events.push(HostEvent::Destroy(view));
    }

    fn request_relayout(&self, root: ObjectId) {
        let mut state = self.state.lock();
        *state.relayouts.entry(root).or_insert(0) += 1;
        state.events.push(HostEvent::RequestRelayout(root));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_tracks_tree() {
        let host = HeadlessHost::new();
        let root = ObjectId::next();
        let a = ObjectId::next();
        let b = ObjectId::next();

        host.attach(a, root);
        host.attach(b, root);
        host.set_visible(a, true);

        assert_eq!(host.parent_of(a), Some(root));
        assert_eq!(host.children_of(root), vec![a, b]);
        assert!(host.is_visible(a));
        assert!(!host.is_visible(b));

        host.detach(b);
        assert_eq!(host.children_of(root), vec![a]);
        assert_eq!(host.tree_snapshot(), vec![(a, root, true)]);
    }

    #[test]
    fn test_destroy_cascades() {
        let host = HeadlessHost::new();
        let root = ObjectId::next();
        let child = ObjectId::next();
        host.attach(child, root);
        host.destroy(root);

        assert!(host.is_destroyed(root));
        assert_eq!(host.parent_of(child), None);
    }

    #[test]
    fn test_relayout_counter() {
        let host = HeadlessHost::new();
        let root = ObjectId::next();
        host.request_relayout(root);
        host.request_relayout(root);
        assert_eq!(host.relayout_count(root), 2);
        assert_eq!(host.relayout_count(ObjectId::next()), 0);
        assert_eq!(host.events().len(), 2);
        host.clear_events();
        assert!(host.events().is_empty());
    }
}
