//! Text rendering of list rows.

use mailbox_list_core::RowBindContext;

const CORRESPONDENT_WIDTH: usize = 18;

/// Renders an item row as a single line.
#[must_use]
pub fn item_row(row: &RowBindContext<'_>) -> String {
    let item = row.item;

    let check = match (row.is_selection_mode_active, row.is_selected) {
        (false, _) => "   ",
        (true, true) => "[x]",
        (true, false) => "[ ]",
    };
    let unread = if item.is_read { ' ' } else { '*' };
    let star = if item.is_starred { '+' } else { ' ' };
    let attachment = if item.has_attachments { '@' } else { ' ' };

    let mut correspondent: String = item
        .correspondent(row.location)
        .chars()
        .take(CORRESPONDENT_WIDTH)
        .collect();
    if item.is_draft {
        correspondent = format!("(draft) {correspondent}");
    }

    let mut line = format!(
        "{:>3} {check} {unread}{star}{attachment} {correspondent:<width$} {}",
        row.position,
        item.subject,
        width = CORRESPONDENT_WIDTH,
    );
    if item.is_conversation()
        && let Some(count) = item.messages_count
    {
        line.push_str(&format!(" ({count})"));
    }
    for label in &row.labels {
        line.push_str(&format!(" [{}]", label.name));
    }
    if row.is_being_sent {
        line.push_str("  sending...");
    }
    if row.is_uploading {
        line.push_str("  uploading attachments...");
    }
    line.push_str(&format!("  {}", item.last_message_time.format("%b %-d")));
    line
}

/// Renders the trailing loading row.
#[must_use]
pub fn footer_row(position: usize) -> String {
    format!("{position:>3}     ... loading more")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mailbox_list_core::{Label, MailboxItem, MessageLocation};

    fn item() -> MailboxItem {
        let time = Utc.with_ymd_and_hms(2026, 1, 8, 9, 0, 0).unwrap();
        let mut item = MailboxItem::new("m1", "John Doe", "Meeting Tomorrow", time);
        item.recipients = "Jane Smith".into();
        item
    }

    fn context<'a>(item: &'a MailboxItem, labels: Vec<&'a Label>) -> RowBindContext<'a> {
        RowBindContext {
            position: 0,
            item,
            is_being_sent: false,
            is_uploading: false,
            is_selected: false,
            is_selection_mode_active: false,
            location: MessageLocation::Inbox,
            labels,
        }
    }

    #[test]
    fn test_plain_row() {
        let item = item();
        let line = item_row(&context(&item, vec![]));

        assert!(line.starts_with("  0     *  "));
        assert!(line.contains("John Doe"));
        assert!(line.contains("Meeting Tomorrow"));
        assert!(line.ends_with("Jan 8"));
    }

    #[test]
    fn test_selection_markers() {
        let item = item();
        let mut row = context(&item, vec![]);
        row.is_selection_mode_active = true;
        assert!(item_row(&row).contains("[ ]"));

        row.is_selected = true;
        assert!(item_row(&row).contains("[x]"));
    }

    #[test]
    fn test_status_and_labels() {
        let item = item();
        let label = Label::new("work", "Work", "#7272a7");
        let mut row = context(&item, vec![&label]);
        row.is_being_sent = true;
        row.is_uploading = true;

        let line = item_row(&row);
        assert!(line.contains("[Work]"));
        assert!(line.contains("sending..."));
        assert!(line.contains("uploading attachments..."));
    }

    #[test]
    fn test_sent_location_shows_recipients() {
        let item = item();
        let mut row = context(&item, vec![]);
        row.location = MessageLocation::Sent;

        assert!(item_row(&row).contains("Jane Smith"));
    }

    #[test]
    fn test_footer() {
        assert_eq!(footer_row(5), "  5     ... loading more");
    }
}
