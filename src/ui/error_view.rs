//! Full-screen error state with a retry action.

use egui::{Align, Color32, Layout, RichText, Stroke, Ui, Vec2};

use crate::ui::theme::Theme;

/// Result of showing an [`ErrorView`] for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorViewAction {
    /// No interaction this frame.
    None,
    /// The retry button was clicked.
    Retry,
}

/// Centered error screen: title, message, and an accent-outlined retry
/// button, all coloured from the injected theme.
pub struct ErrorView<'a> {
    theme: &'a Theme,
    title: &'a str,
    message: &'a str,
}

impl<'a> ErrorView<'a> {
    pub fn new(theme: &'a Theme, title: &'a str, message: &'a str) -> Self {
        Self {
            theme,
            title,
            message,
        }
    }

    /// Render the error screen.
    pub fn show(self, ui: &mut Ui) -> ErrorViewAction {
        let mut action = ErrorViewAction::None;

        ui.painter()
            .rect_filled(ui.max_rect(), 0.0, self.theme.background);

        ui.with_layout(Layout::top_down(Align::Center), |ui| {
            ui.add_space(ui.available_height() * 0.3);
            ui.label(
                RichText::new(self.title)
                    .size(22.0)
                    .strong()
                    .color(self.theme.error),
            );
            ui.add_space(8.0);
            ui.label(RichText::new(self.message).color(self.theme.text_secondary));
            ui.add_space(24.0);

            let retry = egui::Button::new(RichText::new("Retry").color(self.theme.accent))
                .fill(Color32::TRANSPARENT)
                .stroke(Stroke::new(1.0, self.theme.accent))
                .min_size(Vec2::new(120.0, 36.0));
            if ui.add(retry).clicked() {
                action = ErrorViewAction::Retry;
            }
        });

        action
    }
}
