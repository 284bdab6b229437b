//! Rowbind gallery - demo application.
//!
//! Shows a settings list bound through [`ListBinder`]: rows rebuild from
//! shared state whenever a callback marks it dirty, and the binder diffs the
//! replacement snapshot so only changed rows re-bind. A "Simulate failure"
//! row switches to the themed error screen.

use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;
use rowbind::ui::{ErrorView, ErrorViewAction, SettingsListView};
use rowbind::{GenericViewFactory, IconId, ListBinder, SettingsRow, Theme};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// State the demo rows read from and write to through their callbacks.
#[derive(Debug, Clone)]
struct GalleryState {
    notifications: bool,
    auto_sync: bool,
    sync_allowed: bool,
    developer_mode: bool,
    show_error: bool,
    dirty: bool,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            notifications: true,
            auto_sync: false,
            sync_allowed: true,
            developer_mode: false,
            show_error: false,
            dirty: true,
        }
    }
}

struct GalleryApp {
    binder: ListBinder<GenericViewFactory>,
    state: Rc<RefCell<GalleryState>>,
}

impl GalleryApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let theme = Theme::dark();
        cc.egui_ctx.set_visuals(theme.visuals());
        Self {
            binder: ListBinder::new(GenericViewFactory, theme),
            state: Rc::new(RefCell::new(GalleryState::default())),
        }
    }

    fn build_rows(state: &Rc<RefCell<GalleryState>>) -> Vec<SettingsRow> {
        let current = state.borrow().clone();

        let on_notifications = {
            let state = Rc::clone(state);
            move |on| {
                let mut s = state.borrow_mut();
                s.notifications = on;
                s.dirty = true;
            }
        };
        let on_auto_sync = {
            let state = Rc::clone(state);
            move |on| {
                let mut s = state.borrow_mut();
                s.auto_sync = on;
                s.dirty = true;
            }
        };
        let on_allow_sync = {
            let state = Rc::clone(state);
            move |on| {
                let mut s = state.borrow_mut();
                s.sync_allowed = on;
                s.dirty = true;
            }
        };
        let on_simulate_failure = {
            let state = Rc::clone(state);
            move || {
                let mut s = state.borrow_mut();
                s.show_error = true;
                s.dirty = true;
            }
        };
        let on_developer_mode = {
            let state = Rc::clone(state);
            move |on| {
                let mut s = state.borrow_mut();
                s.developer_mode = on;
                s.dirty = true;
            }
        };

        vec![
            SettingsRow::header("General"),
            SettingsRow::switch_setting(
                "Notifications",
                "Alert when a sync completes",
                Some(IconId(1)),
                current.notifications,
                true,
                on_notifications,
            ),
            SettingsRow::switch_setting(
                "Allow syncing",
                "Master switch for the sync service",
                Some(IconId(2)),
                current.sync_allowed,
                true,
                on_allow_sync,
            ),
            SettingsRow::switch_setting(
                "Sync automatically",
                if current.sync_allowed {
                    "Sync in the background every hour"
                } else {
                    "Enable syncing first"
                },
                Some(IconId(3)),
                current.auto_sync,
                current.sync_allowed,
                on_auto_sync,
            ),
            SettingsRow::header("About"),
            SettingsRow::setting(
                "Version",
                concat!("rowbind ", env!("CARGO_PKG_VERSION")),
                None,
                || {},
            ),
            SettingsRow::setting(
                "Simulate failure",
                "Open the error screen",
                Some(IconId(4)),
                on_simulate_failure,
            ),
            SettingsRow::switch("Developer mode", current.developer_mode, on_developer_mode),
        ]
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.borrow().dirty {
            self.state.borrow_mut().dirty = false;
            let rows = Self::build_rows(&self.state);
            if let Err(err) = self.binder.update(rows, false) {
                tracing::error!(%err, "failed to update settings list");
            }
        }

        let show_error = self.state.borrow().show_error;
        egui::CentralPanel::default().show(ctx, |ui| {
            if show_error {
                let theme = *self.binder.theme();
                let action = ErrorView::new(
                    &theme,
                    "Connection lost",
                    "The sync service is unreachable. Check your network and try again.",
                )
                .show(ui);
                if action == ErrorViewAction::Retry {
                    let mut s = self.state.borrow_mut();
                    s.show_error = false;
                    s.dirty = true;
                }
            } else {
                SettingsListView::new(&mut self.binder).show(ui);
            }
        });
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting rowbind gallery v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title("Rowbind Gallery"),
        ..Default::default()
    };

    eframe::run_native(
        "Rowbind Gallery",
        options,
        Box::new(|cc| Ok(Box::new(GalleryApp::new(cc)))),
    )
}
