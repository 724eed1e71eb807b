//! Core systems for Horizon Sequence.
//!
//! This crate provides the foundational components shared by the sequence
//! editor widgets:
//!
//! - **Signal/Slot System**: Type-safe, re-entrancy tolerant notifications
//! - **Object Identity**: Process-unique ids for every view
//! - **Logging**: Tracing targets, span names and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_sequence_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod object;
pub mod signal;

pub use logging::PerfSpan;
pub use object::ObjectId;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
