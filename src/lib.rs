//! Rowbind - diff-driven settings lists for egui.
//!
//! Describes a settings screen as an ordered list of heterogeneous row
//! descriptors, diffs replacement snapshots against the displayed one, and
//! applies only the resulting insertions, removals, moves, and updates to a
//! retained list of render handles. An egui frontend draws the handles and
//! routes interaction back through them; a themed error screen with a retry
//! action is included.

pub mod binder;
pub mod diff;
pub mod error;
pub mod model;
pub mod render;
pub mod ui;

// Re-export commonly used types
pub use binder::{ListBinder, Slot, ViewList};
pub use diff::{DiffStrategy, EditOp, EditScript, KeyedDiff};
pub use error::BindError;
pub use model::{IconId, RowKey, RowKind, SettingsRow};
pub use render::{GenericViewFactory, RenderHandle, ViewFactory};
pub use ui::theme::Theme;
