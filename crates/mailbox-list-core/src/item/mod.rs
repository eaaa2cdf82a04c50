//! Mailbox items shown as list rows.
//!
//! An item is either a single message or a whole conversation; the list
//! controller only cares about its identifier, the remaining attributes are
//! carried through to rendering.

mod model;

pub use model::{ItemId, Label, LabelId, MailboxItem, MessageLocation};
