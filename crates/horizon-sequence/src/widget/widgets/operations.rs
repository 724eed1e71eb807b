//! The operation table of a sequence editor.
//!
//! [`Operations`] maps the four editing commands to closures bound to one
//! editor. A missing closure means the capability is unsupported; such
//! commands are never offered by the UI and fail with
//! [`EditorError::UnsupportedOperation`] when invoked directly.
//!
//! Operations only ever mutate the sequence. The editor's views follow from
//! the change notifications that mutation produces.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};
use crate::model::ItemKind;

/// Closure behind `addBefore` and `addAfter`.
///
/// Returns the index the new item was inserted at, or `None` when creation
/// was cancelled.
pub type AddFn = Arc<dyn Fn(usize, ItemKind) -> Result<Option<usize>> + Send + Sync>;

/// Closure behind `remove`.
pub type RemoveFn = Arc<dyn Fn(usize) -> Result<()> + Send + Sync>;

/// Closure behind `moveTo`.
pub type MoveFn = Arc<dyn Fn(usize, usize) -> Result<()> + Send + Sync>;

/// Names of the editing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Insert a new item before an index.
    AddBefore,
    /// Insert a new item after an index.
    AddAfter,
    /// Remove the item at an index.
    Remove,
    /// Move an item to another position.
    MoveTo,
}

impl OperationKind {
    /// Every operation, in table order.
    pub const ALL: [OperationKind; 4] = [
        OperationKind::AddBefore,
        OperationKind::AddAfter,
        OperationKind::Remove,
        OperationKind::MoveTo,
    ];

    /// The command name used in logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            OperationKind::AddBefore => "addBefore",
            OperationKind::AddAfter => "addAfter",
            OperationKind::Remove => "remove",
            OperationKind::MoveTo => "moveTo",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which operations an editor should bind, as read from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationSet {
    /// Bind `addBefore`.
    pub add_before: bool,
    /// Bind `addAfter`.
    pub add_after: bool,
    /// Bind `remove`.
    pub remove: bool,
    /// Bind `moveTo`.
    pub move_to: bool,
}

impl OperationSet {
    /// Every operation enabled.
    pub const fn all() -> Self {
        Self {
            add_before: true,
            add_after: true,
            remove: true,
            move_to: true,
        }
    }

    /// A read-only editor.
    pub const fn none() -> Self {
        Self {
            add_before: false,
            add_after: false,
            remove: false,
            move_to: false,
        }
    }

    /// Check whether `kind` is enabled.
    pub fn contains(&self, kind: OperationKind) -> bool {
        match kind {
            OperationKind::AddBefore => self.add_before,
            OperationKind::AddAfter => self.add_after,
            OperationKind::Remove => self.remove,
            OperationKind::MoveTo => self.move_to,
        }
    }

    /// Enable or disable `kind`.
    pub fn with(mut self, kind: OperationKind, enabled: bool) -> Self {
        match kind {
            OperationKind::AddBefore => self.add_before = enabled,
            OperationKind::AddAfter => self.add_after = enabled,
            OperationKind::Remove => self.remove = enabled,
            OperationKind::MoveTo => self.move_to = enabled,
        }
        self
    }
}

impl Default for OperationSet {
    fn default() -> Self {
        Self::all()
    }
}

/// The capability table bound to one editor.
///
/// Constant once the editor is built.
#[derive(Clone, Default)]
pub struct Operations {
    add_before: Option<AddFn>,
    add_after: Option<AddFn>,
    remove: Option<RemoveFn>,
    move_to: Option<MoveFn>,
}

impl Operations {
    /// An empty table; the editor is read-only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `addBefore` closure using builder pattern.
    pub fn with_add_before(
        mut self,
        f: impl Fn(usize, ItemKind) -> Result<Option<usize>> + Send + Sync + 'static,
    ) -> Self {
        self.add_before = Some(Arc::new(f));
        self
    }

    /// Set the `addAfter` closure using builder pattern.
    pub fn with_add_after(
        mut self,
        f: impl Fn(usize, ItemKind) -> Result<Option<usize>> + Send + Sync + 'static,
    ) -> Self {
        self.add_after = Some(Arc::new(f));
        self
    }

    /// Set the `remove` closure using builder pattern.
    pub fn with_remove(mut self, f: impl Fn(usize) -> Result<()> + Send + Sync + 'static) -> Self {
        self.remove = Some(Arc::new(f));
        self
    }

    /// Set the `moveTo` closure using builder pattern.
    pub fn with_move_to(
        mut self,
        f: impl Fn(usize, usize) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        self.move_to = Some(Arc::new(f));
        self
    }

    /// Check whether `kind` is bound.
    pub fn supports(&self, kind: OperationKind) -> bool {
        match kind {
            OperationKind::AddBefore => self.add_before.is_some(),
            OperationKind::AddAfter => self.add_after.is_some(),
            OperationKind::Remove => self.remove.is_some(),
            OperationKind::MoveTo => self.move_to.is_some(),
        }
    }

    /// The bound operations, in table order.
    pub fn supported(&self) -> Vec<OperationKind> {
        OperationKind::ALL
            .into_iter()
            .filter(|kind| self.supports(*kind))
            .collect()
    }

    /// Check whether nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.add_before.is_none()
            && self.add_after.is_none()
            && self.remove.is_none()
            && self.move_to.is_none()
    }

    /// Insert a new item of `kind` before `index`.
    pub fn add_before(&self, index: usize, kind: ItemKind) -> Result<Option<usize>> {
        let f = self
            .add_before
            .as_ref()
            .ok_or(EditorError::UnsupportedOperation(OperationKind::AddBefore))?;
        f(index, kind)
    }

    /// Insert a new item of `kind` after `index`.
    pub fn add_after(&self, index: usize, kind: ItemKind) -> Result<Option<usize>> {
        let f = self
            .add_after
            .as_ref()
            .ok_or(EditorError::UnsupportedOperation(OperationKind::AddAfter))?;
        f(index, kind)
    }

    /// Remove the item at `index`.
    pub fn remove(&self, index: usize) -> Result<()> {
        let f = self
            .remove
            .as_ref()
            .ok_or(EditorError::UnsupportedOperation(OperationKind::Remove))?;
        f(index)
    }

    /// Move the item at `from` to `to`.
    pub fn move_to(&self, from: usize, to: usize) -> Result<()> {
        let f = self
            .move_to
            .as_ref()
            .ok_or(EditorError::UnsupportedOperation(OperationKind::MoveTo))?;
        f(from, to)
    }
}

impl fmt::Debug for Operations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operations")
            .field("supported", &self.supported())
            .finish()
    }
}

static_assertions::assert_impl_all!(Operations: Send, Sync);
