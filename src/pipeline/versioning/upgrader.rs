//! Upgrades older pipeline document layouts to the current version.
//!
//! Known layouts:
//!
//! - unversioned: `{ "candidates": [...] }`
//! - version 0: `{ "state": { "candidates": [...] }, "version": 0 }`, the
//!   layout the browser dashboard persisted
//! - version 1: version 0 plus an optional `savedAt` timestamp

use super::SnapshotSchemaError;
use serde_json::{Map, Value};

/// Result type for upgrade operations.
pub type UpgradeResult<T> = Result<T, SnapshotSchemaError>;

/// Stepwise upgrader for persisted pipeline documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct SnapshotUpgrader;

impl SnapshotUpgrader {
    /// The current document version.
    pub const CURRENT_VERSION: u64 = 1;

    /// Supported document versions.
    const SUPPORTED_VERSIONS: &'static [u64] = &[0, 1];

    /// Creates a new upgrader.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns `true` if documents at `version` can be read.
    #[must_use]
    pub fn supports_version(self, version: u64) -> bool {
        Self::SUPPORTED_VERSIONS.contains(&version)
    }

    /// Upgrades `document` to [`Self::CURRENT_VERSION`].
    ///
    /// Documents already at the current version are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotSchemaError::Malformed`] when the document is not an
    /// object or carries a non-integer version, and
    /// [`SnapshotSchemaError::UnsupportedVersion`] for unknown versions.
    pub fn upgrade(self, document: Value) -> UpgradeResult<Value> {
        let Value::Object(mut fields) = document else {
            return Err(SnapshotSchemaError::malformed(
                "expected snapshot document to be an object",
            ));
        };

        if !fields.contains_key("version") && !fields.contains_key("state") {
            fields = wrap_unversioned(fields);
        }

        loop {
            let version = declared_version(&fields)?;
            match version {
                0 => Self::upgrade_v0_to_v1(&mut fields),
                Self::CURRENT_VERSION => return Ok(Value::Object(fields)),
                other => return Err(SnapshotSchemaError::UnsupportedVersion(other)),
            }
        }
    }

    /// Stamps a version 0 document as version 1; `savedAt` stays absent.
    fn upgrade_v0_to_v1(fields: &mut Map<String, Value>) {
        fields.insert("version".to_owned(), Value::from(1_u64));
    }
}

/// Moves a bare `{ "candidates": [...] }` layout under `state`.
fn wrap_unversioned(fields: Map<String, Value>) -> Map<String, Value> {
    let mut wrapped = Map::new();
    wrapped.insert("state".to_owned(), Value::Object(fields));
    wrapped.insert("version".to_owned(), Value::from(0_u64));
    wrapped
}

/// Reads the `version` field; a missing version on a `state` document is 0.
fn declared_version(fields: &Map<String, Value>) -> UpgradeResult<u64> {
    fields.get("version").map_or(Ok(0), |value| {
        value
            .as_u64()
            .ok_or_else(|| SnapshotSchemaError::malformed("version must be a non-negative integer"))
    })
}
