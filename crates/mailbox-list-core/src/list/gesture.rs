//! Routing of raw row gestures.
//!
//! - avatar tap always toggles the row
//! - body tap toggles in selection mode, opens the item otherwise
//! - body long press enters selection mode, and is swallowed once in it

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::MailboxList;
use crate::Result;

/// A gesture on an item row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    /// Tap on the sender avatar.
    AvatarTap,
    /// Tap anywhere else on the row.
    BodyTap,
    /// Long press on the row.
    BodyLongPress,
}

impl MailboxList {
    /// Routes a gesture on the row at `position`.
    ///
    /// Returns whether the gesture was handled.
    ///
    /// # Errors
    ///
    /// Returns an error if `position` is not an item row.
    pub fn handle_gesture(&mut self, gesture: Gesture, position: usize) -> Result<bool> {
        let id = self.item(position)?.id.clone();
        let selecting = self.is_selection_mode_active();
        trace!(?gesture, position, selecting, "Routing gesture");

        match (gesture, selecting) {
            (Gesture::AvatarTap, _) | (Gesture::BodyTap, true) | (Gesture::BodyLongPress, false) => {
                Ok(self.toggle_selection(&id, position))
            }
            (Gesture::BodyTap, false) => self.open_item(position),
            (Gesture::BodyLongPress, true) => Ok(true),
        }
    }
}
