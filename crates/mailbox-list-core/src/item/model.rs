//! Mailbox item data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a message or conversation, unique within one list snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new item ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Identifier of a label or label folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelId(pub String);

impl From<&str> for LabelId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A user label that can be attached to items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label identifier.
    pub id: LabelId,
    /// Display name.
    pub name: String,
    /// Chip color as a hex string (e.g. `#7272a7`).
    pub color: String,
}

impl Label {
    /// Creates a new label.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: LabelId(id.into()),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Location the list is currently filtered by.
///
/// Only used as a render hint: it never changes which items are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageLocation {
    /// No location selected yet.
    #[default]
    Invalid,
    /// Inbox.
    Inbox,
    /// Drafts.
    Drafts,
    /// Sent messages.
    Sent,
    /// Trash.
    Trash,
    /// Spam.
    Spam,
    /// Every message regardless of location.
    AllMail,
    /// Archive.
    Archive,
    /// Starred messages.
    Starred,
    /// A custom label.
    Label,
    /// A custom folder.
    LabelFolder,
}

impl MessageLocation {
    /// Parse from string representation.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "inbox" => Self::Inbox,
            "drafts" | "draft" => Self::Drafts,
            "sent" => Self::Sent,
            "trash" => Self::Trash,
            "spam" => Self::Spam,
            "all_mail" | "allmail" => Self::AllMail,
            "archive" => Self::Archive,
            "starred" => Self::Starred,
            "label" => Self::Label,
            "label_folder" | "folder" => Self::LabelFolder,
            _ => Self::Invalid,
        }
    }

    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Inbox => "inbox",
            Self::Drafts => "drafts",
            Self::Sent => "sent",
            Self::Trash => "trash",
            Self::Spam => "spam",
            Self::AllMail => "all_mail",
            Self::Archive => "archive",
            Self::Starred => "starred",
            Self::Label => "label",
            Self::LabelFolder => "label_folder",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Invalid => "",
            Self::Inbox => "Inbox",
            Self::Drafts => "Drafts",
            Self::Sent => "Sent",
            Self::Trash => "Trash",
            Self::Spam => "Spam",
            Self::AllMail => "All Mail",
            Self::Archive => "Archive",
            Self::Starred => "Starred",
            Self::Label => "Label",
            Self::LabelFolder => "Folder",
        }
    }

    /// Whether rows in this location show recipients instead of the sender.
    #[must_use]
    pub const fn shows_recipients(&self) -> bool {
        matches!(self, Self::Drafts | Self::Sent)
    }
}

impl std::str::FromStr for MessageLocation {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// A message or conversation displayed as one list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailboxItem {
    /// Unique identifier within the current snapshot.
    pub id: ItemId,
    /// Sender display name.
    pub sender_name: String,
    /// Subject line.
    pub subject: String,
    /// Time of the most recent message.
    pub last_message_time: DateTime<Utc>,
    /// Whether any message has attachments.
    #[serde(default)]
    pub has_attachments: bool,
    /// Whether the item is starred.
    #[serde(default)]
    pub is_starred: bool,
    /// Whether the item has been read.
    #[serde(default)]
    pub is_read: bool,
    /// When the item expires, if it does.
    #[serde(default)]
    pub expiration_time: Option<DateTime<Utc>>,
    /// Number of messages for a conversation, `None` for a single message.
    #[serde(default)]
    pub messages_count: Option<u32>,
    /// Whether the item has been deleted locally.
    #[serde(default)]
    pub is_deleted: bool,
    /// Whether the item is a draft.
    #[serde(default)]
    pub is_draft: bool,
    /// Recipients display string.
    #[serde(default)]
    pub recipients: String,
    /// Labels applied to the item.
    #[serde(default)]
    pub label_ids: Vec<LabelId>,
}

impl MailboxItem {
    /// Creates an unread single message with no attachments or labels.
    #[must_use]
    pub fn new(
        id: impl Into<ItemId>,
        sender_name: impl Into<String>,
        subject: impl Into<String>,
        last_message_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            sender_name: sender_name.into(),
            subject: subject.into(),
            last_message_time,
            has_attachments: false,
            is_starred: false,
            is_read: false,
            expiration_time: None,
            messages_count: None,
            is_deleted: false,
            is_draft: false,
            recipients: String::new(),
            label_ids: Vec::new(),
        }
    }

    /// Whether this row stands for a conversation of more than one message.
    #[must_use]
    pub fn is_conversation(&self) -> bool {
        self.messages_count.is_some_and(|count| count > 1)
    }

    /// Whether the item has expired at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiration_time.is_some_and(|at| at <= now)
    }

    /// Name shown in the correspondent column for the given location.
    #[must_use]
    pub fn correspondent(&self, location: MessageLocation) -> &str {
        if location.shows_recipients() && !self.recipients.is_empty() {
            &self.recipients
        } else {
            &self.sender_name
        }
    }
}
