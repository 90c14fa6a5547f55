//! Versioned persisted document for the pipeline collection.
//!
//! The collection is stored as one JSON document:
//!
//! ```json
//! {
//!   "version": 1,
//!   "savedAt": "2026-01-01T00:00:00Z",
//!   "state": { "candidates": [] }
//! }
//! ```
//!
//! Older layouts are upgraded on read by [`SnapshotUpgrader`] before the
//! document is decoded.

mod document;
mod error;
mod upgrader;

pub use document::{decode_snapshot, encode_snapshot};
pub use error::SnapshotSchemaError;
pub use upgrader::{SnapshotUpgrader, UpgradeResult};
