//! Message types for screen events.
//!
//! Data updates and row gestures both arrive as messages and are applied to
//! the screen one at a time.

use mailbox_list_core::{Gesture, ItemId, Label, MailboxItem, MessageLocation, PendingSend};

/// Screen messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Data source
    /// A new snapshot of the mailbox replaces the current one.
    SnapshotLoaded(Vec<MailboxItem>),
    /// Known labels were (re)loaded.
    LabelsLoaded(Vec<Label>),
    /// Items with attachment uploads in flight.
    PendingUploadsLoaded(Vec<ItemId>),
    /// Outgoing send records.
    PendingSendsLoaded(Vec<PendingSend>),

    // Navigation
    /// The user switched to another location.
    LocationChanged(MessageLocation),

    // Row input
    /// A gesture on the row at the given position.
    Gesture(Gesture, usize),
    /// The bulk-action bar was dismissed.
    DismissSelection,
}
