//! Row descriptions handed to the rendering layer.

use crate::{Label, MailboxItem, MessageLocation};

/// What a list position holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// A mailbox item.
    Item,
    /// The trailing loading row.
    Footer,
}

/// Request to redraw rows, fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderRequest {
    /// Every row may have changed.
    RefreshAll,
    /// Only the row at this position changed.
    RefreshRow(usize),
}

/// Everything needed to render one item row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowBindContext<'a> {
    /// Row position.
    pub position: usize,
    /// Item displayed by the row.
    pub item: &'a MailboxItem,
    /// An outgoing send for this item has not completed.
    pub is_being_sent: bool,
    /// An attachment upload for this item is in flight.
    pub is_uploading: bool,
    /// The item is selected.
    pub is_selected: bool,
    /// At least one item is selected.
    pub is_selection_mode_active: bool,
    /// Current location hint.
    pub location: MessageLocation,
    /// The item's labels that are known to the list.
    pub labels: Vec<&'a Label>,
}
