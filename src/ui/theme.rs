//! Theme values for the settings UI.
//!
//! The theme is a plain value injected wherever it is needed (binder, views,
//! gallery); there is no global accessor. `visuals()` projects the palette
//! onto egui for application-wide styling.

use egui::{Color32, Visuals};

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

/// Palette and variant for the settings UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub variant: ThemeVariant,
    /// Screen background.
    pub background: Color32,
    /// Row / card background.
    pub card: Color32,
    /// Primary text.
    pub text_primary: Color32,
    /// Secondary text (subtitles, headers).
    pub text_secondary: Color32,
    /// Accent for interactive elements.
    pub accent: Color32,
    /// Error text and outlines.
    pub error: Color32,
    /// Hairline borders.
    pub border: Color32,
}

impl Theme {
    /// Dark palette.
    pub fn dark() -> Self {
        Self {
            variant: ThemeVariant::Dark,
            background: Color32::from_rgb(18, 18, 24),
            card: Color32::from_rgb(32, 32, 42),
            text_primary: Color32::from_rgb(238, 238, 244),
            text_secondary: Color32::from_rgb(158, 158, 170),
            accent: Color32::from_rgb(88, 145, 250),
            error: Color32::from_rgb(234, 82, 70),
            border: Color32::from_rgb(58, 58, 70),
        }
    }

    /// Light palette.
    pub fn light() -> Self {
        Self {
            variant: ThemeVariant::Light,
            background: Color32::from_rgb(250, 250, 252),
            card: Color32::from_rgb(242, 242, 246),
            text_primary: Color32::from_rgb(30, 30, 38),
            text_secondary: Color32::from_rgb(98, 98, 108),
            accent: Color32::from_rgb(26, 115, 232),
            error: Color32::from_rgb(198, 52, 42),
            border: Color32::from_rgb(216, 216, 224),
        }
    }

    /// egui visuals derived from this palette.
    pub fn visuals(&self) -> Visuals {
        let mut visuals = match self.variant {
            ThemeVariant::Dark => Visuals::dark(),
            ThemeVariant::Light => Visuals::light(),
        };

        visuals.window_fill = self.background;
        visuals.panel_fill = self.background;
        visuals.faint_bg_color = self.card;
        visuals.extreme_bg_color = self.background;

        visuals.widgets.noninteractive.bg_fill = self.card;
        visuals.widgets.inactive.bg_fill = self.card;
        visuals.widgets.active.bg_fill = self.accent;

        visuals.selection.bg_fill = self.accent.linear_multiply(0.4);
        visuals.selection.stroke.color = self.accent;

        visuals.widgets.noninteractive.fg_stroke.color = self.text_primary;
        visuals.widgets.inactive.fg_stroke.color = self.text_secondary;
        visuals.widgets.hovered.fg_stroke.color = self.text_primary;
        visuals.widgets.active.fg_stroke.color = self.text_primary;

        visuals.widgets.noninteractive.bg_stroke.color = self.border;
        visuals.widgets.inactive.bg_stroke.color = self.border;

        visuals
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default().variant, ThemeVariant::Dark);
    }

    #[test]
    fn test_visuals_follow_palette() {
        let theme = Theme::light();
        let visuals = theme.visuals();
        assert_eq!(visuals.panel_fill, theme.background);
        assert_eq!(visuals.selection.stroke.color, theme.accent);
    }
}
