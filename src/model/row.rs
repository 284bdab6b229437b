//! Row descriptors for the settings list.
//!
//! A settings screen is described as an ordered `Vec<SettingsRow>`. Each row
//! carries a stable identity key used for diffing, a type tag used for view
//! dispatch, and the display/interaction data for its variant.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Reference to an icon supplied by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconId(pub u32);

/// Callback invoked with the new state when a switch is toggled.
pub type ChangeCallback = Rc<dyn Fn(bool)>;

/// Callback invoked when an interactive row is clicked.
pub type ClickCallback = Rc<dyn Fn()>;

/// Type tag for a row variant, with a stable numeric index.
///
/// Adding a row variant means extending this enum, [`SettingsRow`], and
/// `RenderHandle`; the exhaustive matches make a missed spot a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    Header,
    Switch,
    Setting,
    SwitchSetting,
}

impl RowKind {
    /// All known row kinds, in tag order.
    pub const ALL: [RowKind; 4] = [
        RowKind::Header,
        RowKind::Switch,
        RowKind::Setting,
        RowKind::SwitchSetting,
    ];

    /// Stable numeric index of this kind.
    pub fn index(self) -> u16 {
        match self {
            RowKind::Header => 0,
            RowKind::Switch => 1,
            RowKind::Setting => 2,
            RowKind::SwitchSetting => 3,
        }
    }

    /// Look up a kind from its numeric index.
    pub fn from_index(index: u16) -> Option<RowKind> {
        RowKind::ALL.into_iter().find(|kind| kind.index() == index)
    }
}

/// Stable identity key for a row.
///
/// Keys must be unique within a snapshot; the binder does not validate this
/// (it is a construction-time contract on the caller).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(pub u64);

impl RowKey {
    /// Derive a key from a row's natural label.
    pub fn from_label(label: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        label.hash(&mut hasher);
        RowKey(hasher.finish())
    }

    /// Fixed per-kind key for variants without a natural label.
    pub fn from_kind(kind: RowKind) -> Self {
        RowKey(kind.index() as u64)
    }
}

/// Section header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub text: String,
}

/// Standalone switch row.
#[derive(Clone)]
pub struct Switch {
    pub text: String,
    pub checked: bool,
    pub on_changed: ChangeCallback,
}

/// Clickable text setting with optional subtitle and icon.
#[derive(Clone)]
pub struct Setting {
    pub title: String,
    pub subtitle: String,
    pub icon: Option<IconId>,
    pub on_click: ClickCallback,
}

/// Setting row with an embedded switch and an enabled/disabled state.
#[derive(Clone)]
pub struct SwitchSetting {
    pub title: String,
    pub subtitle: String,
    pub icon: Option<IconId>,
    pub checked: bool,
    pub enabled: bool,
    pub on_changed: ChangeCallback,
}

/// A row in the settings list.
#[derive(Clone)]
pub enum SettingsRow {
    Header(Header),
    Switch(Switch),
    Setting(Setting),
    SwitchSetting(SwitchSetting),
}

impl SettingsRow {
    /// Create a section header row.
    pub fn header(text: impl Into<String>) -> Self {
        SettingsRow::Header(Header { text: text.into() })
    }

    /// Create a standalone switch row.
    pub fn switch(
        text: impl Into<String>,
        checked: bool,
        on_changed: impl Fn(bool) + 'static,
    ) -> Self {
        SettingsRow::Switch(Switch {
            text: text.into(),
            checked,
            on_changed: Rc::new(on_changed),
        })
    }

    /// Create a clickable text setting row.
    pub fn setting(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        icon: Option<IconId>,
        on_click: impl Fn() + 'static,
    ) -> Self {
        SettingsRow::Setting(Setting {
            title: title.into(),
            subtitle: subtitle.into(),
            icon,
            on_click: Rc::new(on_click),
        })
    }

    /// Create a switch setting row.
    pub fn switch_setting(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        icon: Option<IconId>,
        checked: bool,
        enabled: bool,
        on_changed: impl Fn(bool) + 'static,
    ) -> Self {
        SettingsRow::SwitchSetting(SwitchSetting {
            title: title.into(),
            subtitle: subtitle.into(),
            icon,
            checked,
            enabled,
            on_changed: Rc::new(on_changed),
        })
    }

    /// The type tag of this row.
    pub fn kind(&self) -> RowKind {
        match self {
            SettingsRow::Header(_) => RowKind::Header,
            SettingsRow::Switch(_) => RowKind::Switch,
            SettingsRow::Setting(_) => RowKind::Setting,
            SettingsRow::SwitchSetting(_) => RowKind::SwitchSetting,
        }
    }

    /// Stable identity key for this row.
    ///
    /// Every built-in variant carries a natural label and derives its key
    /// from it; [`RowKey::from_kind`] remains for variants without one.
    /// Uniqueness across a snapshot is the caller's contract.
    pub fn identity_key(&self) -> RowKey {
        match self {
            SettingsRow::Header(header) => RowKey::from_label(&header.text),
            SettingsRow::Switch(switch) => RowKey::from_label(&switch.text),
            SettingsRow::Setting(setting) => RowKey::from_label(&setting.title),
            SettingsRow::SwitchSetting(setting) => RowKey::from_label(&setting.title),
        }
    }

    /// Whether two rows display identically.
    ///
    /// Compares display and interaction data only; callbacks cannot be
    /// compared and are rewired on every bind instead.
    pub fn content_eq(&self, other: &SettingsRow) -> bool {
        match (self, other) {
            (SettingsRow::Header(a), SettingsRow::Header(b)) => a.text == b.text,
            (SettingsRow::Switch(a), SettingsRow::Switch(b)) => {
                a.text == b.text && a.checked == b.checked
            }
            (SettingsRow::Setting(a), SettingsRow::Setting(b)) => {
                a.title == b.title && a.subtitle == b.subtitle && a.icon == b.icon
            }
            (SettingsRow::SwitchSetting(a), SettingsRow::SwitchSetting(b)) => {
                a.title == b.title
                    && a.subtitle == b.subtitle
                    && a.icon == b.icon
                    && a.checked == b.checked
                    && a.enabled == b.enabled
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Switch")
            .field("text", &self.text)
            .field("checked", &self.checked)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Setting")
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for SwitchSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwitchSetting")
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("icon", &self.icon)
            .field("checked", &self.checked)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for SettingsRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsRow::Header(header) => header.fmt(f),
            SettingsRow::Switch(switch) => switch.fmt(f),
            SettingsRow::Setting(setting) => setting.fmt(f),
            SettingsRow::SwitchSetting(setting) => setting.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_index_round_trip() {
        for kind in RowKind::ALL {
            assert_eq!(RowKind::from_index(kind.index()), Some(kind));
        }
        assert_eq!(RowKind::from_index(99), None);
    }

    #[test]
    fn test_identity_key_is_stable() {
        let row = SettingsRow::setting("Account", "Manage your account", None, || {});
        let key = row.identity_key();
        for _ in 0..16 {
            assert_eq!(row.identity_key(), key);
        }
    }

    #[test]
    fn test_identity_key_follows_title() {
        let a = SettingsRow::setting("Account", "one", None, || {});
        let b = SettingsRow::setting("Account", "two", Some(IconId(4)), || {});
        let c = SettingsRow::setting("Privacy", "", None, || {});
        assert_eq!(a.identity_key(), b.identity_key());
        assert_ne!(a.identity_key(), c.identity_key());
    }

    #[test]
    fn test_headers_and_switches_key_on_their_label() {
        let general = SettingsRow::header("General");
        let about = SettingsRow::header("About");
        assert_ne!(general.identity_key(), about.identity_key());

        let switch = SettingsRow::switch("Enabled", true, |_| {});
        assert_eq!(switch.identity_key(), RowKey::from_label("Enabled"));
    }

    #[test]
    fn test_ordinal_keys_are_distinct_per_kind() {
        let keys: Vec<RowKey> = RowKind::ALL.into_iter().map(RowKey::from_kind).collect();
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_content_eq_ignores_callbacks() {
        let a = SettingsRow::switch("Enabled", true, |_| {});
        let b = SettingsRow::switch("Enabled", true, |_| panic!("never called"));
        assert!(a.content_eq(&b));
    }

    #[test]
    fn test_content_eq_detects_field_changes() {
        let a = SettingsRow::setting("Account", "subtitle", Some(IconId(1)), || {});
        let b = SettingsRow::setting("Account", "subtitle", Some(IconId(2)), || {});
        assert!(!a.content_eq(&b));

        let c = SettingsRow::switch_setting("Sync", "", None, true, true, |_| {});
        let d = SettingsRow::switch_setting("Sync", "", None, true, false, |_| {});
        assert!(!c.content_eq(&d));
    }

    #[test]
    fn test_content_eq_differs_across_variants() {
        let header = SettingsRow::header("General");
        let switch = SettingsRow::switch("General", false, |_| {});
        assert!(!header.content_eq(&switch));
    }
}
