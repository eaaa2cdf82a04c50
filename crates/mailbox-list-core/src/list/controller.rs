//! List controller state and operations.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace, warn};

use super::diff::{SnapshotDiff, diff_snapshots};
use super::row::{RenderRequest, RowBindContext, RowKind};
use crate::{
    Error, ItemId, Label, LabelId, MailboxItem, MessageLocation, PendingSend, PendingSendOverlay,
    PendingUploadOverlay, Result, SelectionMode, SelectionSet, SelectionTransition,
};

type ModeChangeHook = Box<dyn FnMut(SelectionMode)>;
type SelectionChangedHook = Box<dyn FnMut()>;
type ItemOpenedHook = Box<dyn FnMut(&MailboxItem)>;

/// Controller for a selectable mailbox list.
///
/// Rows `0..len` are items, row `len` is the footer. All operations run on
/// the caller's thread and never block.
#[derive(Default)]
pub struct MailboxList {
    items: Vec<MailboxItem>,
    selection: SelectionSet,
    pending_uploads: Option<PendingUploadOverlay>,
    pending_sends: Option<PendingSendOverlay>,
    location: MessageLocation,
    labels: HashMap<LabelId, Label>,
    on_selection_mode_change: Option<ModeChangeHook>,
    on_selection_changed: Option<SelectionChangedHook>,
    on_item_opened: Option<ItemOpenedHook>,
    render_requests: Vec<RenderRequest>,
}

impl std::fmt::Debug for MailboxList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailboxList")
            .field("items", &self.items.len())
            .field("selection", &self.selection)
            .field("pending_uploads", &self.pending_uploads)
            .field("pending_sends", &self.pending_sends)
            .field("location", &self.location)
            .field("labels", &self.labels.len())
            .field("selection_enabled", &self.is_selection_enabled())
            .field("render_requests", &self.render_requests)
            .finish()
    }
}

impl MailboxList {
    /// Creates an empty list with no hooks registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the selection-mode hook.
    pub fn set_on_selection_mode_change(&mut self, hook: impl FnMut(SelectionMode) + 'static) {
        self.on_selection_mode_change = Some(Box::new(hook));
    }

    /// Registers the hook fired on membership changes inside selection mode.
    pub fn set_on_selection_changed(&mut self, hook: impl FnMut() + 'static) {
        self.on_selection_changed = Some(Box::new(hook));
    }

    /// Registers the hook fired when a row is opened outside selection mode.
    pub fn set_on_item_opened(&mut self, hook: impl FnMut(&MailboxItem) + 'static) {
        self.on_item_opened = Some(Box::new(hook));
    }

    /// Selection needs both selection hooks.
    #[must_use]
    pub const fn is_selection_enabled(&self) -> bool {
        self.on_selection_mode_change.is_some() && self.on_selection_changed.is_some()
    }

    /// Replaces the snapshot wholesale.
    ///
    /// The selection is left as is, so ids absent from the new snapshot stay
    /// selected. Returns the id-keyed diff against the previous snapshot.
    pub fn replace_list(&mut self, items: Vec<MailboxItem>) -> SnapshotDiff {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(&item.id) {
                warn!(item = %item.id, "Duplicate item id in snapshot");
            }
        }

        let diff = diff_snapshots(&self.items, &items);
        debug!(
            previous = self.items.len(),
            current = items.len(),
            inserted = diff.inserted.len(),
            removed = diff.removed.len(),
            changed = diff.changed.len(),
            "Replaced mailbox list"
        );
        self.items = items;
        diff
    }

    /// Items in the current snapshot.
    #[must_use]
    pub fn items(&self) -> &[MailboxItem] {
        &self.items
    }

    /// Number of rows, footer included.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.items.len() + 1
    }

    /// What the row at `position` holds.
    ///
    /// # Errors
    ///
    /// Returns `PositionOutOfRange` past the footer.
    pub fn row_kind(&self, position: usize) -> Result<RowKind> {
        match position.cmp(&self.items.len()) {
            std::cmp::Ordering::Less => Ok(RowKind::Item),
            std::cmp::Ordering::Equal => Ok(RowKind::Footer),
            std::cmp::Ordering::Greater => Err(Error::PositionOutOfRange {
                position,
                row_count: self.row_count(),
            }),
        }
    }

    /// The item at `position`.
    ///
    /// # Errors
    ///
    /// Returns `NotAnItemRow` for the footer and `PositionOutOfRange` past it.
    pub fn item(&self, position: usize) -> Result<&MailboxItem> {
        match self.row_kind(position)? {
            RowKind::Item => Ok(&self.items[position]),
            RowKind::Footer => Err(Error::NotAnItemRow { position }),
        }
    }

    /// Selects or deselects `id`, notifying the host.
    ///
    /// Returns `false` without touching anything when selection is not
    /// enabled. `position` only targets the row refresh.
    pub fn toggle_selection(&mut self, id: &ItemId, position: usize) -> bool {
        if !self.is_selection_enabled() {
            debug!(item = %id, "Selection disabled, ignoring toggle");
            return false;
        }

        let transition = self.selection.toggle(id);
        match transition {
            SelectionTransition::Started | SelectionTransition::Ended => {
                if let (Some(mode), Some(hook)) = (
                    transition.mode_change(),
                    self.on_selection_mode_change.as_mut(),
                ) {
                    hook(mode);
                }
                self.request_render(RenderRequest::RefreshAll);
            }
            SelectionTransition::Changed => {
                if let Some(hook) = self.on_selection_changed.as_mut() {
                    hook();
                }
                self.request_render(RenderRequest::RefreshRow(position));
            }
        }
        true
    }

    /// Clears the selection and refreshes every row.
    ///
    /// Unlike deselecting the last item, this does not fire the mode hook:
    /// the host ends selection mode itself before calling it.
    pub fn end_selection_mode(&mut self) {
        debug!(cleared = self.selection.len(), "Ending selection mode");
        self.selection.clear();
        self.request_render(RenderRequest::RefreshAll);
    }

    /// Whether at least one id is selected.
    #[must_use]
    pub fn is_selection_mode_active(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Selected ids, stale ones included.
    #[must_use]
    pub const fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Selected items resolved against the current snapshot, in selection
    /// order. Ids with no matching item are skipped.
    #[must_use]
    pub fn selected_items(&self) -> Vec<&MailboxItem> {
        self.selection
            .iter()
            .filter_map(|id| self.items.iter().find(|item| &item.id == id))
            .collect()
    }

    /// Replaces the pending-upload overlay and refreshes every row.
    pub fn set_pending_uploads(&mut self, ids: impl IntoIterator<Item = ItemId>) {
        let overlay = PendingUploadOverlay::new(ids);
        trace!(uploads = overlay.len(), "Pending uploads updated");
        self.pending_uploads = Some(overlay);
        self.request_render(RenderRequest::RefreshAll);
    }

    /// Replaces the pending-send overlay and refreshes every row.
    pub fn set_pending_sends(&mut self, records: impl IntoIterator<Item = PendingSend>) {
        let overlay = PendingSendOverlay::new(records);
        trace!(sends = overlay.len(), "Pending sends updated");
        self.pending_sends = Some(overlay);
        self.request_render(RenderRequest::RefreshAll);
    }

    /// Replaces the known labels and refreshes every row.
    pub fn set_labels(&mut self, labels: impl IntoIterator<Item = Label>) {
        self.labels = labels
            .into_iter()
            .map(|label| (label.id.clone(), label))
            .collect();
        self.request_render(RenderRequest::RefreshAll);
    }

    /// Sets the location hint. Rows pick it up on their next render.
    pub const fn set_location(&mut self, location: MessageLocation) {
        self.location = location;
    }

    /// Current location hint.
    #[must_use]
    pub const fn location(&self) -> MessageLocation {
        self.location
    }

    /// Computes what the row at `position` should display.
    ///
    /// # Errors
    ///
    /// Returns `NotAnItemRow` for the footer and `PositionOutOfRange` past it.
    pub fn row_bind_context(&self, position: usize) -> Result<RowBindContext<'_>> {
        let item = self.item(position)?;
        let is_being_sent = self
            .pending_sends
            .as_ref()
            .is_some_and(|overlay| overlay.is_being_sent(&item.id));
        let is_uploading = self
            .pending_uploads
            .as_ref()
            .is_some_and(|overlay| overlay.is_uploading(&item.id));
        let labels = item
            .label_ids
            .iter()
            .filter_map(|id| self.labels.get(id))
            .collect();

        Ok(RowBindContext {
            position,
            item,
            is_being_sent,
            is_uploading,
            is_selected: self.selection.contains(&item.id),
            is_selection_mode_active: self.is_selection_mode_active(),
            location: self.location,
            labels,
        })
    }

    /// Whether any item in `start..=end` has one of `ids`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if `start > end` and `PositionOutOfRange` if
    /// `end` is not an item position.
    pub fn items_within_range(&self, ids: &[ItemId], start: usize, end: usize) -> Result<bool> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        if end >= self.items.len() {
            return Err(Error::PositionOutOfRange {
                position: end,
                row_count: self.items.len(),
            });
        }
        Ok(self.items[start..=end]
            .iter()
            .any(|item| ids.contains(&item.id)))
    }

    /// Drains queued render requests, oldest first.
    pub fn take_render_requests(&mut self) -> Vec<RenderRequest> {
        std::mem::take(&mut self.render_requests)
    }

    pub(super) fn open_item(&mut self, position: usize) -> Result<bool> {
        if self.row_kind(position)? == RowKind::Footer {
            return Err(Error::NotAnItemRow { position });
        }
        let item = &self.items[position];
        let Some(hook) = self.on_item_opened.as_mut() else {
            return Ok(false);
        };
        debug!(item = %item.id, position, "Opening item");
        hook(item);
        Ok(true)
    }

    fn request_render(&mut self, request: RenderRequest) {
        trace!(?request, "Render requested");
        self.render_requests.push(request);
    }
}
