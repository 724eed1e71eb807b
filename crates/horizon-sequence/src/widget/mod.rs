//! Widget layer for Horizon Sequence.
//!
//! This module provides the view side of the editor:
//!
//! - [`RenderHost`] and [`ViewFactory`]: the collaborators the editor drives
//! - [`WidgetBase`]: Common parentage and visibility bookkeeping
//! - [`LayoutConstraints`]: Declarative layout handed to the host
//! - [`LayoutInvalidator`]: Relayout coalescing with nested suspension
//! - [`widgets`]: The editor, its item controls, menus and wrappers
//!
//! # Overview
//!
//! Widgets here never draw or measure anything. They keep track of which view
//! is parented under which and which views are shown, push that state to a
//! [`RenderHost`], and describe the arrangement they want through
//! [`LayoutConstraints`]. The host turns both into pixels.

mod base;
mod host;
mod invalidation;
mod layout;
pub mod widgets;

pub use base::WidgetBase;
pub use host::{HeadlessHost, HostEvent, RenderHost, ViewFactory};
pub use invalidation::LayoutInvalidator;
pub use layout::{Constraint, LayoutConstraints, LayoutRow};
