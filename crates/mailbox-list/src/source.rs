//! Mailbox data source.
//!
//! Loads a mailbox fixture off the screen task and feeds it to the screen as
//! a sequence of messages over a channel.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Duration, TimeZone, Utc};
use mailbox_list_core::{Gesture, ItemId, Label, LabelId, MailboxItem, PendingSend};
use serde::Deserialize;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::message::Message;

/// A scripted row gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScriptedGesture {
    /// Gesture to replay.
    pub gesture: Gesture,
    /// Row position it targets.
    pub position: usize,
}

/// Mailbox content and input script, as stored in a JSON fixture.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MailboxFixture {
    /// Mailbox items in display order.
    pub items: Vec<MailboxItem>,
    /// Known labels.
    pub labels: Vec<Label>,
    /// Items with uploads in flight.
    pub pending_uploads: Vec<ItemId>,
    /// Outgoing send records.
    pub pending_sends: Vec<PendingSend>,
    /// Gestures to replay once the data is loaded.
    pub gestures: Vec<ScriptedGesture>,
    /// Dismiss selection mode after the gestures.
    pub dismiss_selection: bool,
}

impl MailboxFixture {
    /// Built-in mailbox used when no fixture is configured.
    #[must_use]
    pub fn mock() -> Self {
        let day = |d: u32| -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2026, 1, d, 9, 0, 0)
                .single()
                .unwrap_or_default()
        };

        let mut meeting = MailboxItem::new("m1", "John Doe", "Meeting Tomorrow", day(8));
        meeting.label_ids = vec![LabelId::from("work")];

        let mut update = MailboxItem::new("m2", "Jane Smith", "Project Update", day(7));
        update.is_read = true;
        update.has_attachments = true;
        update.messages_count = Some(3);
        update.label_ids = vec![LabelId::from("work")];

        let mut invoice = MailboxItem::new("m3", "Bob Wilson", "Invoice #1234", day(6));
        invoice.is_read = true;
        invoice.is_starred = true;
        invoice.has_attachments = true;
        invoice.expiration_time = Some(day(6) + Duration::days(30));

        let mut report = MailboxItem::new("m4", "Me", "Re: Quarterly Report", day(5));
        report.is_read = true;
        report.recipients = "Alice Brown".into();

        let digest = MailboxItem::new("m5", "Tech News", "Your Weekly Tech Digest", day(4));

        Self {
            items: vec![meeting, update, invoice, report, digest],
            labels: vec![Label::new("work", "Work", "#7272a7")],
            pending_uploads: vec![ItemId::from("m2")],
            pending_sends: vec![PendingSend::in_flight("m4")],
            gestures: vec![
                ScriptedGesture {
                    gesture: Gesture::BodyTap,
                    position: 0,
                },
                ScriptedGesture {
                    gesture: Gesture::BodyLongPress,
                    position: 1,
                },
                ScriptedGesture {
                    gesture: Gesture::AvatarTap,
                    position: 2,
                },
                ScriptedGesture {
                    gesture: Gesture::BodyTap,
                    position: 1,
                },
            ],
            dismiss_selection: true,
        }
    }

    /// The messages this fixture feeds to the screen, in order.
    #[must_use]
    pub fn into_messages(self) -> Vec<Message> {
        let mut messages = vec![
            Message::LabelsLoaded(self.labels),
            Message::SnapshotLoaded(self.items),
            Message::PendingUploadsLoaded(self.pending_uploads),
            Message::PendingSendsLoaded(self.pending_sends),
        ];
        messages.extend(
            self.gestures
                .into_iter()
                .map(|scripted| Message::Gesture(scripted.gesture, scripted.position)),
        );
        if self.dismiss_selection {
            messages.push(Message::DismissSelection);
        }
        messages
    }
}

/// Load a fixture from a JSON file.
pub async fn load_fixture(path: &Path) -> anyhow::Result<MailboxFixture> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading mailbox fixture {}", path.display()))?;
    let fixture: MailboxFixture = serde_json::from_str(&contents)
        .with_context(|| format!("parsing mailbox fixture {}", path.display()))?;
    info!(
        path = %path.display(),
        items = fixture.items.len(),
        gestures = fixture.gestures.len(),
        "Loaded mailbox fixture"
    );
    Ok(fixture)
}

/// Feed a fixture to the screen. Ends when every message is delivered.
pub async fn feed(fixture: MailboxFixture, tx: mpsc::Sender<Message>) -> anyhow::Result<()> {
    for message in fixture.into_messages() {
        debug!(?message, "Feeding message");
        tx.send(message)
            .await
            .context("mailbox screen stopped receiving")?;
    }
    Ok(())
}
