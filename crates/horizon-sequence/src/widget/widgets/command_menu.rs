//! Contextual command menu for a single item.
//!
//! [`CommandMenu`] is built for one index of a sequence and exposes only the
//! commands that the operation table supports and that make sense at that
//! position:
//!
//! ```text
//! Add before  >  Pulse | Sequence      (iff addBefore)
//! Add after   >  Pulse | Sequence      (iff addAfter)
//! ───────────
//! Delete                                (iff remove)
//! ───────────
//! Move to top / Move up                 (iff moveTo and index > 0)
//! Move down / Move to bottom            (iff moveTo and index < len - 1)
//! ```
//!
//! Triggering an entry invokes the operation with the captured index and
//! closes the menu. The menu never touches the editor's views; those follow
//! from the change the operation causes.

use std::sync::Arc;

use horizon_sequence_core::logging::targets;
use horizon_sequence_core::{ObjectId, Signal};
use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};
use crate::model::ItemKind;
use crate::widget::{RenderHost, WidgetBase};

use super::operations::{OperationKind, Operations};

// ============================================================================
// MenuCommand
// ============================================================================

/// A command a menu entry runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    /// Insert a new item of the kind before the menu's index.
    AddBefore(ItemKind),
    /// Insert a new item of the kind after the menu's index.
    AddAfter(ItemKind),
    /// Remove the item at the menu's index.
    Delete,
    /// Move the item to the first position.
    MoveToTop,
    /// Swap the item with its predecessor.
    MoveUp,
    /// Swap the item with its successor.
    MoveDown,
    /// Move the item to the last position.
    MoveToBottom,
}

impl MenuCommand {
    /// The operation this command invokes.
    pub fn operation(self) -> OperationKind {
        match self {
            MenuCommand::AddBefore(_) => OperationKind::AddBefore,
            MenuCommand::AddAfter(_) => OperationKind::AddAfter,
            MenuCommand::Delete => OperationKind::Remove,
            MenuCommand::MoveToTop
            | MenuCommand::MoveUp
            | MenuCommand::MoveDown
            | MenuCommand::MoveToBottom => OperationKind::MoveTo,
        }
    }

    /// The `moveTo` target for a move command at `index` in a sequence of
    /// `len` items.
    pub fn move_target(self, index: usize, len: usize) -> Option<usize> {
        match self {
            MenuCommand::MoveToTop => Some(0),
            MenuCommand::MoveUp => index.checked_sub(1),
            MenuCommand::MoveDown => Some(index + 1),
            MenuCommand::MoveToBottom => Some(len),
            _ => None,
        }
    }
}

// ============================================================================
// MenuItem
// ============================================================================

/// A clickable menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuAction {
    /// Displayed text.
    pub text: String,
    /// What the entry runs.
    pub command: MenuCommand,
}

/// An entry in a command menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    /// A clickable entry.
    Action(MenuAction),
    /// A visual separator line.
    Separator,
    /// A nested list of entries.
    Submenu {
        /// The title of the submenu.
        title: String,
        /// The entries of the submenu.
        items: Vec<MenuItem>,
    },
}

impl MenuItem {
    /// Check if this is a separator.
    pub fn is_separator(&self) -> bool {
        matches!(self, MenuItem::Separator)
    }

    /// The displayed text, if the entry has one.
    pub fn display_text(&self) -> Option<&str> {
        match self {
            MenuItem::Action(action) => Some(&action.text),
            MenuItem::Submenu { title, .. } => Some(title),
            MenuItem::Separator => None,
        }
    }

    fn collect_commands(&self, out: &mut Vec<MenuCommand>) {
        match self {
            MenuItem::Action(action) => out.push(action.command),
            MenuItem::Submenu { items, .. } => {
                for item in items {
                    item.collect_commands(out);
                }
            }
            MenuItem::Separator => {}
        }
    }
}

// ============================================================================
// Menu Style
// ============================================================================

/// Labels used by the command menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuStyle {
    /// Title of the insert-before submenu.
    pub add_before: String,
    /// Title of the insert-after submenu.
    pub add_after: String,
    /// Text of the delete entry.
    pub delete: String,
    /// Text of the move-to-top entry.
    pub move_to_top: String,
    /// Text of the move-up entry.
    pub move_up: String,
    /// Text of the move-down entry.
    pub move_down: String,
    /// Text of the move-to-bottom entry.
    pub move_to_bottom: String,
    /// Whether groups are divided by separators.
    pub separators: bool,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            add_before: "Add before".into(),
            add_after: "Add after".into(),
            delete: "Delete".into(),
            move_to_top: "Move to top".into(),
            move_up: "Move up".into(),
            move_down: "Move down".into(),
            move_to_bottom: "Move to bottom".into(),
            separators: true,
        }
    }
}

impl MenuStyle {
    /// Set the delete label using builder pattern.
    pub fn with_delete(mut self, text: impl Into<String>) -> Self {
        self.delete = text.into();
        self
    }

    fn move_label(&self, command: MenuCommand) -> &str {
        match command {
            MenuCommand::MoveToTop => &self.move_to_top,
            MenuCommand::MoveUp => &self.move_up,
            MenuCommand::MoveDown => &self.move_down,
            _ => &self.move_to_bottom,
        }
    }
}

// ============================================================================
// CommandMenu
// ============================================================================

/// A popup menu of the commands available for one item.
///
/// # Signals
///
/// - [`triggered`](CommandMenu::triggered): Emitted after a command ran
/// - [`about_to_hide`](CommandMenu::about_to_hide): Emitted before the menu closes
pub struct CommandMenu {
    base: WidgetBase,
    host: Arc<dyn RenderHost>,
    index: usize,
    len: usize,
    operations: Operations,
    kinds: Vec<ItemKind>,
    style: MenuStyle,
    items: Vec<MenuItem>,

    /// Signal emitted after a command ran successfully.
    pub triggered: Signal<MenuCommand>,
    /// Signal emitted before the menu is hidden.
    pub about_to_hide: Signal<()>,
}

impl CommandMenu {
    /// Build the menu for the item at `index` of a sequence of `len` items.
    ///
    /// Every item kind is offered until [`with_kinds`](Self::with_kinds)
    /// narrows it down.
    pub fn new(
        index: usize,
        len: usize,
        operations: Operations,
        host: Arc<dyn RenderHost>,
    ) -> Self {
        let mut menu = Self {
            base: WidgetBase::new("CommandMenu"),
            host,
            index,
            len,
            operations,
            kinds: ItemKind::ALL.to_vec(),
            style: MenuStyle::default(),
            items: Vec::new(),
            triggered: Signal::new(),
            about_to_hide: Signal::new(),
        };
        menu.rebuild();
        menu
    }

    /// Set the offered item kinds using builder pattern.
    pub fn with_kinds(mut self, kinds: &[ItemKind]) -> Self {
        self.kinds = kinds.to_vec();
        self.rebuild();
        self
    }

    /// Set the labels using builder pattern.
    pub fn with_style(mut self, style: MenuStyle) -> Self {
        self.style = style;
        self.rebuild();
        self
    }

    /// Get the menu's object ID.
    pub fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }

    /// The index the menu was built for.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The top-level entries.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Check if the menu has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Every command reachable from the menu, submenus included.
    pub fn commands(&self) -> Vec<MenuCommand> {
        let mut out = Vec::new();
        for item in &self.items {
            item.collect_commands(&mut out);
        }
        out
    }

    /// Check whether `command` is offered.
    pub fn offers(&self, command: MenuCommand) -> bool {
        self.commands().contains(&command)
    }

    /// Find the top-level entry with `text`.
    pub fn find(&self, text: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.display_text() == Some(text))
    }

    /// Find a clickable entry by its text, searching submenus as well.
    pub fn find_action(&self, text: &str) -> Option<&MenuAction> {
        fn search<'a>(items: &'a [MenuItem], text: &str) -> Option<&'a MenuAction> {
            items.iter().find_map(|item| match item {
                MenuItem::Action(action) if action.text == text => Some(action),
                MenuItem::Submenu { items, .. } => search(items, text),
                _ => None,
            })
        }
        search(&self.items, text)
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Show the menu anchored to `anchor`.
    pub fn popup(&mut self, anchor: ObjectId) {
        let host = self.host.clone();
        self.base.attach(host.as_ref(), anchor);
        self.base.show(host.as_ref());
    }

    /// Close the menu.
    pub fn close(&mut self) {
        if self.base.is_visible() {
            self.about_to_hide.emit(());
            let host = self.host.clone();
            self.base.hide(host.as_ref());
            self.base.detach(host.as_ref());
        }
    }

    /// Check if the menu is shown.
    pub fn is_visible(&self) -> bool {
        self.base.is_visible()
    }

    // =========================================================================
    // Command Triggering
    // =========================================================================

    /// Run `command` against the captured index and close the menu.
    ///
    /// Commands the menu does not offer are rejected without touching the
    /// sequence. The menu closes whether or not the operation succeeds.
    pub fn trigger(&mut self, command: MenuCommand) -> Result<()> {
        if !self.operations.supports(command.operation()) {
            return Err(EditorError::UnsupportedOperation(command.operation()));
        }
        if !self.offers(command) {
            return Err(match command.move_target(self.index, self.len) {
                Some(to) => EditorError::invalid_move(self.index, to, self.len),
                None => EditorError::UnsupportedOperation(command.operation()),
            });
        }

        tracing::debug!(
            target: targets::MENU,
            ?command,
            index = self.index,
            "menu command triggered"
        );
        let result = self.run(command);
        self.close();
        if result.is_ok() {
            self.triggered.emit(command);
        }
        result
    }

    /// Run the entry with the given text.
    pub fn trigger_text(&mut self, text: &str) -> Result<()> {
        let command = self
            .find_action(text)
            .map(|action| action.command)
            .ok_or_else(|| {
                tracing::warn!(target: targets::MENU, text, "no menu entry with this text");
                EditorError::UnknownMenuEntry(text.to_owned())
            })?;
        self.trigger(command)
    }

    fn run(&self, command: MenuCommand) -> Result<()> {
        let index = self.index;
        match command {
            MenuCommand::AddBefore(kind) => self.operations.add_before(index, kind).map(drop),
            MenuCommand::AddAfter(kind) => self.operations.add_after(index, kind).map(drop),
            MenuCommand::Delete => self.operations.remove(index),
            MenuCommand::MoveToTop
            | MenuCommand::MoveUp
            | MenuCommand::MoveDown
            | MenuCommand::MoveToBottom => {
                let to = command
                    .move_target(index, self.len)
                    .ok_or_else(|| EditorError::invalid_move(index, 0, self.len))?;
                self.operations.move_to(index, to)
            }
        }
    }

    // =========================================================================
    // Entry Construction
    // =========================================================================

    fn rebuild(&mut self) {
        let mut groups: Vec<Vec<MenuItem>> = Vec::new();

        let mut adds = Vec::new();
        if self.operations.supports(OperationKind::AddBefore) && !self.kinds.is_empty() {
            adds.push(self.kind_submenu(&self.style.add_before, MenuCommand::AddBefore));
        }
        if self.operations.supports(OperationKind::AddAfter) && !self.kinds.is_empty() {
            adds.push(self.kind_submenu(&self.style.add_after, MenuCommand::AddAfter));
        }
        groups.push(adds);

        if self.operations.supports(OperationKind::Remove) {
            groups.push(vec![self.action(&self.style.delete, MenuCommand::Delete)]);
        }

        if self.operations.supports(OperationKind::MoveTo) {
            let last = self.len.saturating_sub(1);
            let mut moves = Vec::new();
            if self.index > 0 {
                moves.push(MenuCommand::MoveToTop);
                moves.push(MenuCommand::MoveUp);
            }
            if self.index < last {
                moves.push(MenuCommand::MoveDown);
                moves.push(MenuCommand::MoveToBottom);
            }
            groups.push(
                moves
                    .into_iter()
                    .map(|command| self.action(self.style.move_label(command), command))
                    .collect(),
            );
        }

        self.items.clear();
        for group in groups.into_iter().filter(|group| !group.is_empty()) {
            if self.style.separators && !self.items.is_empty() {
                self.items.push(MenuItem::Separator);
            }
            self.items.extend(group);
        }
    }

    fn kind_submenu(&self, title: &str, command: fn(ItemKind) -> MenuCommand) -> MenuItem {
        MenuItem::Submenu {
            title: title.to_owned(),
            items: self
                .kinds
                .iter()
                .map(|kind| self.action(kind.label(), command(*kind)))
                .collect(),
        }
    }

    fn action(&self, text: &str, command: MenuCommand) -> MenuItem {
        MenuItem::Action(MenuAction {
            text: text.to_owned(),
            command,
        })
    }
}

impl Drop for CommandMenu {
    fn drop(&mut self) {
        let host = self.host.clone();
        self.base.destroy(host.as_ref());
    }
}

impl std::fmt::Debug for CommandMenu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandMenu")
            .field("index", &self.index)
            .field("len", &self.len)
            .field("items", &self.items)
            .finish()
    }
}
