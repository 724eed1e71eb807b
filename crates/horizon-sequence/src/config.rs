//! Editor configuration.
//!
//! [`EditorOptions`] is plain data: which operations the editor binds, which
//! item kinds it offers and the labels it shows. It can be built in code or
//! read from a TOML document.
//!
//! ```toml
//! item_kinds = ["pulse"]
//! placeholder_label = "No pulses yet"
//! start_folded = true
//!
//! [operations]
//! add_before = true
//! add_after = true
//! remove = true
//! move_to = false
//!
//! [menu]
//! delete = "Remove pulse"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};
use crate::model::ItemKind;
use crate::widget::widgets::{MenuStyle, OperationSet};

/// Options controlling how a sequence editor behaves and what it shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Operations bound into the editor's operation table.
    pub operations: OperationSet,
    /// Item kinds offered by the add submenus and the placeholder.
    pub item_kinds: Vec<ItemKind>,
    /// Text shown above the placeholder's add actions.
    pub placeholder_label: String,
    /// Text shown while a foldable editor is folded.
    pub folded_label: String,
    /// Whether a foldable editor starts folded.
    pub start_folded: bool,
    /// Command menu labels.
    pub menu: MenuStyle,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            operations: OperationSet::all(),
            item_kinds: ItemKind::ALL.to_vec(),
            placeholder_label: "Empty sequence".into(),
            folded_label: "...".into(),
            start_folded: false,
            menu: MenuStyle::default(),
        }
    }
}

impl EditorOptions {
    /// Create options with every operation and item kind enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for an editor that only displays its sequence.
    pub fn read_only() -> Self {
        Self::default().with_operations(OperationSet::none())
    }

    /// Parse options from a TOML document.
    ///
    /// Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|err| EditorError::Config(err.message().to_owned()))
    }

    /// Serialize the options to a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|err| EditorError::Config(err.to_string()))
    }

    /// Set the operations using builder pattern.
    pub fn with_operations(mut self, operations: OperationSet) -> Self {
        self.operations = operations;
        self
    }

    /// Set the offered item kinds using builder pattern.
    pub fn with_item_kinds(mut self, kinds: impl Into<Vec<ItemKind>>) -> Self {
        self.item_kinds = kinds.into();
        self
    }

    /// Set the placeholder label using builder pattern.
    pub fn with_placeholder_label(mut self, label: impl Into<String>) -> Self {
        self.placeholder_label = label.into();
        self
    }

    /// Set the folded label using builder pattern.
    pub fn with_folded_label(mut self, label: impl Into<String>) -> Self {
        self.folded_label = label.into();
        self
    }

    /// Set the initial folded state using builder pattern.
    pub fn with_start_folded(mut self, folded: bool) -> Self {
        self.start_folded = folded;
        self
    }

    /// Set the menu labels using builder pattern.
    pub fn with_menu_style(mut self, style: MenuStyle) -> Self {
        self.menu = style;
        self
    }
}
