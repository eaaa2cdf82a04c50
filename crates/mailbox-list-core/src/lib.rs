//! # mailbox-list-core
//!
//! Core logic for a selectable mailbox list.
//!
//! This crate provides:
//! - Mailbox item, label and location models
//! - Pending upload/send overlays that alter per-row rendering
//! - The multi-item **selection state machine** (`Normal` / `Selecting`)
//! - The **list controller** owning the snapshot, the footer row and the host hooks
//! - Gesture routing (avatar tap, body tap, long press)
//! - Id-keyed snapshot diffing for incremental re-rendering
//!
//! All operations are synchronous and expect to be driven from a single
//! event-dispatch thread. Data fetching belongs to the host.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
pub mod item;
pub mod list;
pub mod overlay;
pub mod selection;

pub use error::{Error, Result};
pub use item::{ItemId, Label, LabelId, MailboxItem, MessageLocation};
pub use list::{
    Gesture, MailboxList, RenderRequest, RowBindContext, RowKind, SnapshotDiff, diff_snapshots,
};
pub use overlay::{PendingSend, PendingSendOverlay, PendingUploadOverlay};
pub use selection::{SelectionMode, SelectionSet, SelectionTransition};
