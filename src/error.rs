//! Contract-violation errors.

use crate::model::RowKind;

/// Errors raised by the binder and render dispatch.
///
/// Every variant indicates a caller bug, never a recoverable runtime
/// condition; the failing operation aborts immediately and nothing is
/// retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// A numeric type tag did not map to any known row kind.
    #[error("unknown row type tag {0}")]
    UnknownKind(u16),

    /// A render handle was paired with a row of a different kind.
    #[error("cannot bind {row:?} row to {handle:?} handle")]
    HandleMismatch { handle: RowKind, row: RowKind },
}
