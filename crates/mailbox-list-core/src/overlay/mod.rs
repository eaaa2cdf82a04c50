//! Pending-operation overlays.
//!
//! Overlays are side channels replaced wholesale by their suppliers. They
//! never change which items are listed, only how a row is rendered.

mod model;

pub use model::{PendingSend, PendingSendOverlay, PendingUploadOverlay};
