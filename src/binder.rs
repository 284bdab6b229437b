//! Diff-driven list binder.
//!
//! The binder owns the currently displayed row snapshot and the live
//! [`ViewList`] of render handles. [`ListBinder::update`] diffs a replacement
//! snapshot against the current one and applies the resulting edit script,
//! creating handles on insert, rebinding on update, and relocating (never
//! recreating) handles on move.

use crate::diff::{DiffStrategy, EditOp, KeyedDiff};
use crate::error::BindError;
use crate::model::{RowKey, RowKind, SettingsRow};
use crate::render::{RenderHandle, ViewFactory};
use crate::ui::theme::Theme;

/// One live list position: identity, kind, and the retained handle.
pub struct Slot {
    key: RowKey,
    kind: RowKind,
    handle: RenderHandle,
}

impl Slot {
    pub fn key(&self) -> RowKey {
        self.key
    }

    pub fn kind(&self) -> RowKind {
        self.kind
    }

    pub fn handle(&self) -> &RenderHandle {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut RenderHandle {
        &mut self.handle
    }
}

/// The live view surface: ordered slots plus a pending scroll request.
#[derive(Default)]
pub struct ViewList {
    slots: Vec<Slot>,
    scroll_to_top: bool,
}

impl ViewList {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [Slot] {
        &mut self.slots
    }

    /// Whether a scroll to the top is pending.
    pub fn scroll_requested(&self) -> bool {
        self.scroll_to_top
    }

    /// Consume the pending scroll request. Frontends call this once per
    /// frame and reset their scroll offset when it returns true.
    pub fn take_scroll_to_top(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_top)
    }

    fn insert(&mut self, index: usize, slot: Slot) {
        self.slots.insert(index, slot);
    }

    fn remove(&mut self, index: usize) {
        self.slots.remove(index);
    }

    fn relocate(&mut self, from: usize, to: usize) {
        let slot = self.slots.remove(from);
        self.slots.insert(to, slot);
    }
}

/// Maintains a settings list: snapshot, diffing, and render dispatch.
///
/// Single-threaded by construction: rows and handles hold `Rc` callbacks and
/// are not `Send`, so all updates and interaction callbacks are serialized on
/// the UI thread by the type system.
pub struct ListBinder<F: ViewFactory> {
    rows: Vec<SettingsRow>,
    views: ViewList,
    factory: F,
    diff: Box<dyn DiffStrategy<SettingsRow>>,
    theme: Theme,
}

impl<F: ViewFactory> ListBinder<F> {
    /// Create an empty binder with the default keyed diff strategy.
    ///
    /// The theme is injected here and carried for the lifetime of the
    /// binder; views read it at draw time.
    pub fn new(factory: F, theme: Theme) -> Self {
        Self::with_diff(factory, theme, Box::new(KeyedDiff))
    }

    /// Create an empty binder with a custom diff strategy.
    pub fn with_diff(factory: F, theme: Theme, diff: Box<dyn DiffStrategy<SettingsRow>>) -> Self {
        Self {
            rows: Vec::new(),
            views: ViewList::default(),
            factory,
            diff,
            theme,
        }
    }

    /// Replace the displayed snapshot with `new_rows`.
    ///
    /// Diffs the current snapshot against the new one (identity: same
    /// [`RowKey`]; content: same key and equal display fields), applies the
    /// edit script to the live view list, and requests a scroll to the top
    /// if the row count changed or `force_scroll_to_top` is set.
    ///
    /// Precondition: identity keys in `new_rows` are unique. Errors are
    /// contract violations from the factory or bind dispatch and abort the
    /// update immediately.
    pub fn update(
        &mut self,
        new_rows: Vec<SettingsRow>,
        force_scroll_to_top: bool,
    ) -> Result<(), BindError> {
        let script = self.diff.diff(
            &self.rows,
            &new_rows,
            &|a, b| a.identity_key() == b.identity_key(),
            &|a, b| a.identity_key() == b.identity_key() && a.content_eq(b),
        );
        tracing::debug!(
            ops = script.len(),
            old = self.rows.len(),
            new = new_rows.len(),
            "applying edit script"
        );

        let count_changed = self.rows.len() != new_rows.len();
        for op in script {
            match op {
                EditOp::Insert { index, item } => {
                    let mut handle = self.factory.create(item.kind())?;
                    handle.bind(&item)?;
                    self.views.insert(
                        index,
                        Slot {
                            key: item.identity_key(),
                            kind: item.kind(),
                            handle,
                        },
                    );
                }
                EditOp::Remove { index } => self.views.remove(index),
                EditOp::Move { from, to } => self.views.relocate(from, to),
                EditOp::Update { index, item } => {
                    self.views.slots[index].handle.bind(&item)?;
                }
            }
        }

        self.rows = new_rows;
        if count_changed || force_scroll_to_top {
            self.views.scroll_to_top = true;
        }
        Ok(())
    }

    /// Number of rows currently displayed.
    pub fn item_count(&self) -> usize {
        self.rows.len()
    }

    /// Identity key of the row at `position`.
    pub fn identity_key(&self, position: usize) -> RowKey {
        self.rows[position].identity_key()
    }

    /// Type tag of the row at `position`.
    pub fn kind(&self, position: usize) -> RowKind {
        self.rows[position].kind()
    }

    /// Construct a fresh handle for a numeric type tag.
    ///
    /// Unknown tags are a programming-contract violation and fail with
    /// [`BindError::UnknownKind`].
    pub fn create_renderer(&mut self, type_tag: u16) -> Result<RenderHandle, BindError> {
        let kind = RowKind::from_index(type_tag).ok_or(BindError::UnknownKind(type_tag))?;
        self.factory.create(kind)
    }

    /// The current snapshot.
    pub fn rows(&self) -> &[SettingsRow] {
        &self.rows
    }

    /// The live view surface.
    pub fn views(&self) -> &ViewList {
        &self.views
    }

    /// Mutable access for frontends that draw the slots and consume the
    /// scroll request.
    pub fn views_mut(&mut self) -> &mut ViewList {
        &mut self.views
    }

    /// The injected theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}
