//! Mailbox screen: hosts the list controller.
//!
//! Follows the Elm architecture: `update` applies one [`Message`], reacts to
//! the notifications the list fired while handling it, then redraws the rows
//! the list asked for.

use std::cell::RefCell;
use std::rc::Rc;

use mailbox_list_core::{
    ItemId, MailboxList, MessageLocation, RenderRequest, RowKind, SelectionMode,
};
use tracing::{debug, info, warn};

use crate::message::Message;
use crate::view;

/// Notifications collected from the list hooks.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Notice {
    Mode(SelectionMode),
    SelectionChanged,
    Opened(ItemId),
}

/// A redrawn row, ready to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// Row position.
    pub position: usize,
    /// Rendered text.
    pub text: String,
}

/// Screen state around the mailbox list.
#[derive(Debug)]
pub struct MailboxScreen {
    /// The list controller.
    list: MailboxList,
    /// Notifications fired by the list during the current update.
    notices: Rc<RefCell<Vec<Notice>>>,
    /// Whether the bulk-action bar is shown.
    action_bar_visible: bool,
    /// Title of the bulk-action bar.
    action_bar_title: String,
    /// Last item opened.
    opened_item: Option<ItemId>,
    /// Error from the last update, if any.
    error_message: Option<String>,
}

impl MailboxScreen {
    /// Create a screen showing `location`, with every list hook wired up.
    #[must_use]
    pub fn new(location: MessageLocation) -> Self {
        let notices = Rc::new(RefCell::new(Vec::new()));
        let mut list = MailboxList::new();
        list.set_location(location);

        let sink = Rc::clone(&notices);
        list.set_on_selection_mode_change(move |mode| sink.borrow_mut().push(Notice::Mode(mode)));
        let sink = Rc::clone(&notices);
        list.set_on_selection_changed(move || sink.borrow_mut().push(Notice::SelectionChanged));
        let sink = Rc::clone(&notices);
        list.set_on_item_opened(move |item| sink.borrow_mut().push(Notice::Opened(item.id.clone())));

        Self {
            list,
            notices,
            action_bar_visible: false,
            action_bar_title: String::new(),
            opened_item: None,
            error_message: None,
        }
    }

    /// Apply a message and return the rows that need redrawing.
    pub fn update(&mut self, message: Message) -> Vec<RenderedRow> {
        self.error_message = None;
        match message {
            Message::SnapshotLoaded(items) => {
                let diff = self.list.replace_list(items);
                // Inserted or removed rows shift every position below them.
                if !diff.inserted.is_empty() || !diff.removed.is_empty() || diff.reordered {
                    return self.render_all();
                }
                return diff
                    .changed
                    .into_iter()
                    .filter_map(|position| self.render_row(position))
                    .collect();
            }
            Message::LabelsLoaded(labels) => self.list.set_labels(labels),
            Message::PendingUploadsLoaded(ids) => self.list.set_pending_uploads(ids),
            Message::PendingSendsLoaded(records) => self.list.set_pending_sends(records),
            Message::LocationChanged(location) => {
                self.list.set_location(location);
                return self.render_all();
            }
            Message::Gesture(gesture, position) => {
                match self.list.handle_gesture(gesture, position) {
                    Ok(true) => {}
                    Ok(false) => debug!(?gesture, position, "Gesture not handled"),
                    Err(e) => {
                        warn!(?gesture, position, error = %e, "Rejected gesture");
                        self.error_message = Some(e.to_string());
                    }
                }
            }
            Message::DismissSelection => {
                self.action_bar_visible = false;
                self.action_bar_title.clear();
                self.list.end_selection_mode();
            }
        }

        self.apply_notices();
        self.render_requested()
    }

    /// Render every row, footer included.
    #[must_use]
    pub fn render_all(&self) -> Vec<RenderedRow> {
        (0..self.list.row_count())
            .filter_map(|position| self.render_row(position))
            .collect()
    }

    /// Whether the bulk-action bar is shown.
    #[must_use]
    pub const fn action_bar_visible(&self) -> bool {
        self.action_bar_visible
    }

    /// Title of the bulk-action bar.
    #[must_use]
    pub fn action_bar_title(&self) -> &str {
        &self.action_bar_title
    }

    /// Last item opened.
    #[must_use]
    pub const fn opened_item(&self) -> Option<&ItemId> {
        self.opened_item.as_ref()
    }

    /// Error from the last update.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// The hosted list.
    #[must_use]
    pub const fn list(&self) -> &MailboxList {
        &self.list
    }

    fn apply_notices(&mut self) {
        let notices = std::mem::take(&mut *self.notices.borrow_mut());
        for notice in notices {
            match notice {
                Notice::Mode(SelectionMode::Started) => {
                    self.action_bar_visible = true;
                    self.refresh_action_bar_title();
                }
                Notice::Mode(SelectionMode::Ended) => {
                    self.action_bar_visible = false;
                    self.action_bar_title.clear();
                }
                Notice::SelectionChanged => self.refresh_action_bar_title(),
                Notice::Opened(id) => {
                    info!(item = %id, "Opened item");
                    self.opened_item = Some(id);
                }
            }
        }
    }

    fn refresh_action_bar_title(&mut self) {
        self.action_bar_title = format!("{} selected", self.list.selected_items().len());
    }

    fn render_requested(&mut self) -> Vec<RenderedRow> {
        let requests = self.list.take_render_requests();
        if requests.contains(&RenderRequest::RefreshAll) {
            return self.render_all();
        }

        let mut positions: Vec<usize> = requests
            .into_iter()
            .filter_map(|request| match request {
                RenderRequest::RefreshRow(position) => Some(position),
                RenderRequest::RefreshAll => None,
            })
            .collect();
        positions.sort_unstable();
        positions.dedup();
        positions
            .into_iter()
            .filter_map(|position| self.render_row(position))
            .collect()
    }

    fn render_row(&self, position: usize) -> Option<RenderedRow> {
        let text = match self.list.row_kind(position).ok()? {
            RowKind::Item => view::item_row(&self.list.row_bind_context(position).ok()?),
            RowKind::Footer => view::footer_row(position),
        };
        Some(RenderedRow { position, text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MailboxFixture;
    use mailbox_list_core::Gesture;

    fn loaded_screen() -> MailboxScreen {
        let mut screen = MailboxScreen::new(MessageLocation::Inbox);
        let fixture = MailboxFixture::mock();
        screen.update(Message::LabelsLoaded(fixture.labels));
        screen.update(Message::SnapshotLoaded(fixture.items));
        screen
    }

    #[test]
    fn test_snapshot_renders_items_and_footer() {
        let mut screen = MailboxScreen::new(MessageLocation::Inbox);
        let rows = screen.update(Message::SnapshotLoaded(MailboxFixture::mock().items));

        assert_eq!(rows.len(), 6);
        assert!(rows[5].text.contains("loading more"));
    }

    #[test]
    fn test_unchanged_snapshot_redraws_nothing() {
        let mut screen = loaded_screen();
        let rows = screen.update(Message::SnapshotLoaded(MailboxFixture::mock().items));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_changed_item_redraws_its_row() {
        let mut screen = loaded_screen();
        let mut items = MailboxFixture::mock().items;
        items[4].is_read = true;

        let rows = screen.update(Message::SnapshotLoaded(items));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].position, 4);
    }

    #[test]
    fn test_tap_opens_item() {
        let mut screen = loaded_screen();
        let rows = screen.update(Message::Gesture(Gesture::BodyTap, 2));

        assert_eq!(screen.opened_item(), Some(&ItemId::from("m3")));
        assert!(rows.is_empty());
        assert!(!screen.action_bar_visible());
    }

    #[test]
    fn test_long_press_shows_action_bar() {
        let mut screen = loaded_screen();
        let rows = screen.update(Message::Gesture(Gesture::BodyLongPress, 0));

        assert!(screen.action_bar_visible());
        assert_eq!(screen.action_bar_title(), "1 selected");
        assert_eq!(rows.len(), 6);
        assert!(rows[0].text.contains("[x]"));
        assert!(rows[1].text.contains("[ ]"));
    }

    #[test]
    fn test_second_selection_redraws_one_row() {
        let mut screen = loaded_screen();
        screen.update(Message::Gesture(Gesture::BodyLongPress, 0));

        let rows = screen.update(Message::Gesture(Gesture::AvatarTap, 3));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].position, 3);
        assert!(rows[0].text.contains("[x]"));
        assert_eq!(screen.action_bar_title(), "2 selected");
    }

    #[test]
    fn test_deselecting_last_hides_action_bar() {
        let mut screen = loaded_screen();
        screen.update(Message::Gesture(Gesture::AvatarTap, 1));
        screen.update(Message::Gesture(Gesture::AvatarTap, 1));

        assert!(!screen.action_bar_visible());
        assert!(screen.list().selection().is_empty());
    }

    #[test]
    fn test_dismiss_selection_clears_everything() {
        let mut screen = loaded_screen();
        screen.update(Message::Gesture(Gesture::AvatarTap, 0));
        screen.update(Message::Gesture(Gesture::AvatarTap, 1));

        let rows = screen.update(Message::DismissSelection);

        assert!(!screen.action_bar_visible());
        assert!(screen.list().selection().is_empty());
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|row| !row.text.contains("[x]")));
    }

    #[test]
    fn test_gesture_on_footer_sets_error() {
        let mut screen = loaded_screen();
        let rows = screen.update(Message::Gesture(Gesture::BodyTap, 5));

        assert!(rows.is_empty());
        assert!(screen.error_message().is_some());
    }

    #[test]
    fn test_overlays_show_status() {
        let mut screen = loaded_screen();
        let fixture = MailboxFixture::mock();
        screen.update(Message::PendingUploadsLoaded(fixture.pending_uploads));
        let rows = screen.update(Message::PendingSendsLoaded(fixture.pending_sends));

        assert!(rows[1].text.contains("uploading attachments..."));
        assert!(rows[3].text.contains("sending..."));
        assert!(!rows[0].text.contains("sending..."));
    }

    #[test]
    fn test_location_change_redraws() {
        let mut screen = loaded_screen();
        let rows = screen.update(Message::LocationChanged(MessageLocation::Sent));

        assert_eq!(rows.len(), 6);
        assert!(rows[3].text.contains("Alice Brown"));
    }
}
