//! Render handles and the view factory.
//!
//! A [`RenderHandle`] is the retained per-slot view state: the displayed
//! fields plus the currently wired interaction callbacks. Handles are created
//! empty by a [`ViewFactory`], bound to a row, and reused across updates when
//! the slot's identity key and kind are unchanged. Rebinding drops the
//! previous callbacks before attaching the new ones, so a callback can only
//! fire while its row remains bound to that handle.

use crate::error::BindError;
use crate::model::{ChangeCallback, ClickCallback, IconId, RowKind, SettingsRow};

/// View state for a header row.
#[derive(Debug, Clone, Default)]
pub struct HeaderView {
    pub text: String,
}

/// View state for a standalone switch row.
#[derive(Default)]
pub struct SwitchView {
    pub text: String,
    pub checked: bool,
    on_changed: Option<ChangeCallback>,
}

impl SwitchView {
    /// User toggled the switch. Updates state and notifies the row owner.
    pub fn set_checked_from_user(&mut self, checked: bool) {
        self.checked = checked;
        if let Some(on_changed) = &self.on_changed {
            on_changed(checked);
        }
    }
}

/// View state for a clickable text setting row.
#[derive(Default)]
pub struct SettingView {
    pub title: String,
    pub subtitle: String,
    pub icon: Option<IconId>,
    on_click: Option<ClickCallback>,
}

impl SettingView {
    /// User clicked the row.
    pub fn press(&self) {
        if let Some(on_click) = &self.on_click {
            on_click();
        }
    }

    /// Subtitles are hidden when empty.
    pub fn subtitle_visible(&self) -> bool {
        !self.subtitle.is_empty()
    }
}

/// View state for a switch setting row.
#[derive(Default)]
pub struct SwitchSettingView {
    pub title: String,
    pub subtitle: String,
    pub icon: Option<IconId>,
    pub checked: bool,
    pub enabled: bool,
    on_changed: Option<ChangeCallback>,
}

impl SwitchSettingView {
    /// User toggled the embedded switch. Suppressed while the row is
    /// disabled: state does not change and the callback is not invoked.
    pub fn set_checked_from_user(&mut self, checked: bool) {
        if !self.enabled {
            return;
        }
        self.checked = checked;
        if let Some(on_changed) = &self.on_changed {
            on_changed(checked);
        }
    }

    /// User clicked the row body; flips the switch when enabled.
    pub fn toggle_from_user(&mut self) {
        let next = !self.checked;
        self.set_checked_from_user(next);
    }

    /// Subtitles are hidden when empty.
    pub fn subtitle_visible(&self) -> bool {
        !self.subtitle.is_empty()
    }
}

/// Retained view state for one list slot.
///
/// Each variant pairs with exactly one [`SettingsRow`] variant; binding any
/// other pairing is a contract violation.
pub enum RenderHandle {
    Header(HeaderView),
    Switch(SwitchView),
    Setting(SettingView),
    SwitchSetting(SwitchSettingView),
}

impl RenderHandle {
    /// The row kind this handle renders.
    pub fn kind(&self) -> RowKind {
        match self {
            RenderHandle::Header(_) => RowKind::Header,
            RenderHandle::Switch(_) => RowKind::Switch,
            RenderHandle::Setting(_) => RowKind::Setting,
            RenderHandle::SwitchSetting(_) => RowKind::SwitchSetting,
        }
    }

    /// Populate this handle from a row and rewire its callbacks.
    pub fn bind(&mut self, row: &SettingsRow) -> Result<(), BindError> {
        match (self, row) {
            (RenderHandle::Header(view), SettingsRow::Header(header)) => {
                view.text.clone_from(&header.text);
                Ok(())
            }
            (RenderHandle::Switch(view), SettingsRow::Switch(switch)) => {
                view.on_changed = None;
                view.text.clone_from(&switch.text);
                view.checked = switch.checked;
                view.on_changed = Some(switch.on_changed.clone());
                Ok(())
            }
            (RenderHandle::Setting(view), SettingsRow::Setting(setting)) => {
                view.on_click = None;
                view.title.clone_from(&setting.title);
                view.subtitle.clone_from(&setting.subtitle);
                view.icon = setting.icon;
                view.on_click = Some(setting.on_click.clone());
                Ok(())
            }
            (RenderHandle::SwitchSetting(view), SettingsRow::SwitchSetting(setting)) => {
                view.on_changed = None;
                view.title.clone_from(&setting.title);
                view.subtitle.clone_from(&setting.subtitle);
                view.icon = setting.icon;
                view.checked = setting.checked;
                view.enabled = setting.enabled;
                view.on_changed = Some(setting.on_changed.clone());
                Ok(())
            }
            (handle, row) => Err(BindError::HandleMismatch {
                handle: handle.kind(),
                row: row.kind(),
            }),
        }
    }
}

/// Constructs fresh, empty render handles for a row kind.
pub trait ViewFactory {
    fn create(&mut self, kind: RowKind) -> Result<RenderHandle, BindError>;
}

/// Factory covering the built-in row kinds.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericViewFactory;

impl ViewFactory for GenericViewFactory {
    fn create(&mut self, kind: RowKind) -> Result<RenderHandle, BindError> {
        Ok(match kind {
            RowKind::Header => RenderHandle::Header(HeaderView::default()),
            RowKind::Switch => RenderHandle::Switch(SwitchView::default()),
            RowKind::Setting => RenderHandle::Setting(SettingView::default()),
            RowKind::SwitchSetting => RenderHandle::SwitchSetting(SwitchSettingView::default()),
        })
    }
}
