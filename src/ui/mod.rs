//! egui frontend: theme, list rendering, and the error screen.

pub mod error_view;
pub mod list_view;
pub mod theme;

pub use error_view::{ErrorView, ErrorViewAction};
pub use list_view::SettingsListView;
pub use theme::{Theme, ThemeVariant};
