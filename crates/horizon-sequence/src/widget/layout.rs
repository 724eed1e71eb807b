//! Declarative layout descriptions handed to the render host.
//!
//! The editor never positions views itself. It describes the arrangement it
//! wants as a list of [`Constraint`]s and the host's constraint solver turns
//! that into geometry.

use horizon_sequence_core::ObjectId;

/// A single layout requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Place the views side by side, left to right.
    HBox(Vec<ObjectId>),
    /// Stack the nested constraints top to bottom.
    VBox(Vec<Constraint>),
    /// Align the top edges of the views.
    AlignTop(Vec<ObjectId>),
    /// Let a single view take the whole area.
    Fill(ObjectId),
}

/// One row of an editor: an item control next to its content view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRow {
    /// The item control on the left.
    pub control: ObjectId,
    /// The content view on the right.
    pub content: ObjectId,
}

/// The complete layout description of an editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutConstraints {
    rows: Vec<LayoutRow>,
    placeholder: Option<ObjectId>,
}

impl LayoutConstraints {
    /// A description that lays out nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A description showing only the placeholder view.
    pub fn placeholder(view: ObjectId) -> Self {
        Self {
            rows: Vec::new(),
            placeholder: Some(view),
        }
    }

    /// A description stacking `rows` in order.
    pub fn rows(rows: Vec<LayoutRow>) -> Self {
        Self {
            rows,
            placeholder: None,
        }
    }

    /// The item rows, top to bottom.
    pub fn item_rows(&self) -> &[LayoutRow] {
        &self.rows
    }

    /// The placeholder view, if it is the only thing laid out.
    pub fn placeholder_view(&self) -> Option<ObjectId> {
        self.placeholder
    }

    /// Whether nothing is laid out.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.placeholder.is_none()
    }

    /// The content views in row order.
    pub fn content_order(&self) -> Vec<ObjectId> {
        self.rows.iter().map(|row| row.content).collect()
    }

    /// Expand the description into solver constraints.
    ///
    /// Rows become horizontal pairs inside one vertical stack, and each pair
    /// gets its top edges aligned.
    pub fn constraints(&self) -> Vec<Constraint> {
        if let Some(view) = self.placeholder {
            return vec![Constraint::Fill(view)];
        }
        if self.rows.is_empty() {
            return Vec::new();
        }

        let stack = Constraint::VBox(
            self.rows
                .iter()
                .map(|row| Constraint::HBox(vec![row.control, row.content]))
                .collect(),
        );
        let mut constraints = Vec::with_capacity(self.rows.len() + 1);
        constraints.push(stack);
        constraints.extend(
            self.rows
                .iter()
                .map(|row| Constraint::AlignTop(vec![row.control, row.content])),
        );
        constraints
    }
}
