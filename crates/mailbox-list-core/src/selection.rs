//! Multi-item selection state machine.
//!
//! The list is either in *normal* mode (nothing selected) or in *selection*
//! mode (at least one item selected). Toggling an item reports which kind of
//! transition happened so the caller can fire the matching notification:
//!
//! | before        | toggle   | after        | transition |
//! |---------------|----------|--------------|------------|
//! | `{}`          | select   | `{id}`       | `Started`  |
//! | non-empty     | select   | `set + id`   | `Changed`  |
//! | `len > 1`     | deselect | `set - id`   | `Changed`  |
//! | `{id}`        | deselect | `{}`         | `Ended`    |

use tracing::debug;

use crate::ItemId;

/// Selection mode notification sent to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// The first item was selected.
    Started,
    /// The last selected item was deselected.
    Ended,
}

/// Outcome of a single toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionTransition {
    /// Empty set became non-empty.
    Started,
    /// Membership changed while staying non-empty.
    Changed,
    /// Non-empty set became empty.
    Ended,
}

impl SelectionTransition {
    /// The mode notification for a boundary crossing, if any.
    #[must_use]
    pub const fn mode_change(self) -> Option<SelectionMode> {
        match self {
            Self::Started => Some(SelectionMode::Started),
            Self::Ended => Some(SelectionMode::Ended),
            Self::Changed => None,
        }
    }
}

/// Selected item ids, in the order they were selected.
///
/// Ids are not checked against the list: an id stays selected after the list
/// is replaced even if the new list no longer contains it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<ItemId>,
}

impl SelectionSet {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `id` if absent, deselects it otherwise.
    pub fn toggle(&mut self, id: &ItemId) -> SelectionTransition {
        let transition = if let Some(index) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(index);
            if self.ids.is_empty() {
                SelectionTransition::Ended
            } else {
                SelectionTransition::Changed
            }
        } else {
            let was_empty = self.ids.is_empty();
            self.ids.push(id.clone());
            if was_empty {
                SelectionTransition::Started
            } else {
                SelectionTransition::Changed
            }
        };

        debug!(item = %id, ?transition, selected = self.ids.len(), "Selection toggled");
        transition
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Whether `id` is selected.
    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true in normal mode.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates selected ids in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.ids.iter()
    }
}
