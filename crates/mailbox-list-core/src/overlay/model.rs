//! Overlay data models.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::ItemId;

/// Send state of an outgoing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSend {
    /// Item being sent.
    pub message_id: ItemId,
    /// Local id assigned before the server knew about the message.
    #[serde(default)]
    pub offline_message_id: Option<String>,
    /// Completion marker: `None` while the send is in flight,
    /// `Some(true)` once sent, `Some(false)` if it failed.
    #[serde(default)]
    pub sent: Option<bool>,
}

impl PendingSend {
    /// Creates an in-flight send record.
    #[must_use]
    pub fn in_flight(message_id: impl Into<ItemId>) -> Self {
        Self {
            message_id: message_id.into(),
            offline_message_id: None,
            sent: None,
        }
    }

    /// Whether the completion marker is still unset.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        self.sent.is_none()
    }
}

/// Items with an attachment upload in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingUploadOverlay {
    ids: HashSet<ItemId>,
}

impl PendingUploadOverlay {
    /// Builds the overlay from the supplier's ids.
    #[must_use]
    pub fn new(ids: impl IntoIterator<Item = ItemId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Whether the item has an upload in flight.
    #[must_use]
    pub fn is_uploading(&self, id: &ItemId) -> bool {
        self.ids.contains(id)
    }

    /// Number of items with uploads in flight.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if no upload is in flight.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Send records keyed by item id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingSendOverlay {
    records: HashMap<ItemId, PendingSend>,
}

impl PendingSendOverlay {
    /// Builds the overlay from the supplier's records.
    ///
    /// When two records share an item id the first one wins.
    #[must_use]
    pub fn new(records: impl IntoIterator<Item = PendingSend>) -> Self {
        let mut map = HashMap::new();
        for record in records {
            map.entry(record.message_id.clone()).or_insert(record);
        }
        Self { records: map }
    }

    /// Returns the send record for an item.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&PendingSend> {
        self.records.get(id)
    }

    /// Whether the item is present with its completion marker unset.
    #[must_use]
    pub fn is_being_sent(&self, id: &ItemId) -> bool {
        self.get(id).is_some_and(PendingSend::is_in_flight)
    }

    /// Number of send records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no send records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
