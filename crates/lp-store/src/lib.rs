//! # lp-store
//!
//! Owner-scoped persistence for LaunchPad records. [`RecordStore`] is the
//! seam; [`MemoryStore`] keeps every collection in memory and can persist
//! them as a single JSON snapshot file.

mod error;
mod record;
mod snapshot;
mod store;

pub use error::StoreError;
pub use record::Record;
pub use snapshot::{SNAPSHOT_VERSION, Snapshot};
pub use store::{MemoryStore, RecordStore};
