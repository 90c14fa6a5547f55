//! JSON encoding of [`PipelineSnapshot`] values.

use super::{SnapshotSchemaError, SnapshotUpgrader};
use crate::pipeline::domain::{PipelineCandidate, PipelineSnapshot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentRef<'a> {
    version: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved_at: Option<DateTime<Utc>>,
    state: StateRef<'a>,
}

#[derive(Serialize)]
struct StateRef<'a> {
    candidates: &'a [PipelineCandidate],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    #[serde(default)]
    saved_at: Option<DateTime<Utc>>,
    state: State,
}

#[derive(Deserialize)]
struct State {
    #[serde(default)]
    candidates: Vec<PipelineCandidate>,
}

/// Encodes `snapshot` as a current-version JSON document.
///
/// # Errors
///
/// Returns [`SnapshotSchemaError::Serialization`] if JSON encoding fails.
pub fn encode_snapshot(snapshot: &PipelineSnapshot) -> Result<String, SnapshotSchemaError> {
    let document = DocumentRef {
        version: SnapshotUpgrader::CURRENT_VERSION,
        saved_at: snapshot.saved_at(),
        state: StateRef {
            candidates: snapshot.candidates(),
        },
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Decodes a JSON document of any supported version.
///
/// # Errors
///
/// Returns [`SnapshotSchemaError`] when the text is not JSON, the layout is
/// unknown, or a candidate entry does not match the expected shape (for
/// example an unknown stage identifier).
pub fn decode_snapshot(raw: &str) -> Result<PipelineSnapshot, SnapshotSchemaError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let upgraded = SnapshotUpgrader::new().upgrade(value)?;
    let document: Document = serde_json::from_value(upgraded)?;
    Ok(PipelineSnapshot::from_persisted(
        document.state.candidates,
        document.saved_at,
    ))
}
