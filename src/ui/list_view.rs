//! egui frontend for the settings list.
//!
//! Draws the binder's live slots inside a vertical scroll area and routes
//! user interaction back through the render handles, which own the wired
//! callbacks and the disabled-row suppression.

use egui::{Align, Layout, RichText, ScrollArea, Sense, Ui, Vec2};

use crate::binder::ListBinder;
use crate::model::{IconId, RowKey};
use crate::render::{
    HeaderView, RenderHandle, SettingView, SwitchSettingView, SwitchView, ViewFactory,
};
use crate::ui::theme::Theme;

/// Renders a [`ListBinder`]'s view list.
pub struct SettingsListView<'a, F: ViewFactory> {
    binder: &'a mut ListBinder<F>,
}

impl<'a, F: ViewFactory> SettingsListView<'a, F> {
    pub fn new(binder: &'a mut ListBinder<F>) -> Self {
        Self { binder }
    }

    /// Render the list, consuming any pending scroll-to-top request.
    pub fn show(self, ui: &mut Ui) {
        let theme = *self.binder.theme();
        let views = self.binder.views_mut();

        let mut scroll_area = ScrollArea::vertical().auto_shrink([false, false]);
        if views.take_scroll_to_top() {
            scroll_area = scroll_area.vertical_scroll_offset(0.0);
        }

        scroll_area.show(ui, |ui| {
            for slot in views.slots_mut() {
                let key = slot.key();
                match slot.handle_mut() {
                    RenderHandle::Header(view) => draw_header(ui, view, &theme),
                    RenderHandle::Switch(view) => draw_switch(ui, key, view),
                    RenderHandle::Setting(view) => draw_setting(ui, key, view, &theme),
                    RenderHandle::SwitchSetting(view) => {
                        draw_switch_setting(ui, key, view, &theme)
                    }
                }
            }
        });
    }
}

fn draw_header(ui: &mut Ui, view: &HeaderView, theme: &Theme) {
    ui.add_space(14.0);
    ui.label(
        RichText::new(view.text.as_str())
            .size(13.0)
            .strong()
            .color(theme.text_secondary),
    );
    ui.add_space(4.0);
}

fn draw_switch(ui: &mut Ui, key: RowKey, view: &mut SwitchView) {
    ui.push_id(key, |ui| {
        let mut checked = view.checked;
        if ui.checkbox(&mut checked, view.text.as_str()).changed() {
            view.set_checked_from_user(checked);
        }
    });
    ui.add_space(2.0);
}

fn draw_setting(ui: &mut Ui, key: RowKey, view: &SettingView, theme: &Theme) {
    let response = ui
        .push_id(key, |ui| {
            ui.horizontal(|ui| {
                if let Some(icon) = view.icon {
                    draw_icon(ui, icon, theme);
                }
                ui.vertical(|ui| {
                    ui.label(RichText::new(view.title.as_str()).color(theme.text_primary));
                    if view.subtitle_visible() {
                        ui.label(
                            RichText::new(view.subtitle.as_str())
                                .small()
                                .color(theme.text_secondary),
                        );
                    }
                });
            });
        })
        .response;
    if response.interact(Sense::click()).clicked() {
        view.press();
    }
    ui.add_space(2.0);
}

fn draw_switch_setting(ui: &mut Ui, key: RowKey, view: &mut SwitchSettingView, theme: &Theme) {
    let inner = ui.push_id(key, |ui| {
        ui.add_enabled_ui(view.enabled, |ui| {
            ui.horizontal(|ui| {
                if let Some(icon) = view.icon {
                    draw_icon(ui, icon, theme);
                }
                ui.vertical(|ui| {
                    ui.label(RichText::new(view.title.as_str()).color(theme.text_primary));
                    if view.subtitle_visible() {
                        ui.label(
                            RichText::new(view.subtitle.as_str())
                                .small()
                                .color(theme.text_secondary),
                        );
                    }
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let mut checked = view.checked;
                    ui.checkbox(&mut checked, "").changed().then_some(checked)
                })
                .inner
            })
            .inner
        })
        .inner
    });

    if let Some(checked) = inner.inner {
        view.set_checked_from_user(checked);
    } else if inner.response.interact(Sense::click()).clicked() {
        // Clicking the row body flips the switch, like the switch itself.
        view.toggle_from_user();
    }
    ui.add_space(2.0);
}

fn draw_icon(ui: &mut Ui, _icon: IconId, theme: &Theme) {
    // Icon resolution belongs to the host; a placeholder marks the slot.
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(18.0), Sense::hover());
    ui.painter().rect_filled(rect, 4.0, theme.accent);
}
