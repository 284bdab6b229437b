//! Data model for settings lists.

pub mod row;

pub use row::{
    ChangeCallback, ClickCallback, Header, IconId, RowKey, RowKind, Setting, SettingsRow, Switch,
    SwitchSetting,
};
