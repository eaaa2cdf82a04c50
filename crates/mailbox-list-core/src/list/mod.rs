//! The selectable mailbox list controller.
//!
//! [`MailboxList`] owns the current snapshot of items plus a trailing footer
//! row, the selection, the pending overlays and the host hooks. Hosts feed it
//! snapshots and gestures, then drain [`RenderRequest`]s to refresh rows.

mod controller;
mod diff;
mod gesture;
mod row;

pub use controller::MailboxList;
pub use diff::{SnapshotDiff, diff_snapshots};
pub use gesture::Gesture;
pub use row::{RenderRequest, RowBindContext, RowKind};
