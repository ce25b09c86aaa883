//! JSON encoding of link records as stored in the key-value store.
//!
//! Records are written with an explicit `version` field. Records without
//! one were written before versioning and are read with the same defaults
//! the old writer relied on (`clicks` 0, `rawDisplay` false).

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tether_core::{LinkRecord, StorageError};

pub const CURRENT_VERSION: u32 = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecordRef<'a> {
    version: u32,
    content: &'a str,
    is_url: bool,
    raw_display: bool,
    created_at: Timestamp,
    clicks: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    #[serde(default)]
    version: Option<u32>,
    content: String,
    is_url: bool,
    #[serde(default)]
    raw_display: bool,
    created_at: Timestamp,
    #[serde(default)]
    clicks: u64,
}

/// Serializes a record at [`CURRENT_VERSION`].
pub fn encode(record: &LinkRecord) -> Result<String, StorageError> {
    let stored = StoredRecordRef {
        version: CURRENT_VERSION,
        content: &record.content,
        is_url: record.is_url,
        raw_display: record.raw_display,
        created_at: record.created_at,
        clicks: record.clicks,
    };

    serde_json::to_string(&stored)
        .map_err(|e| StorageError::Operation(format!("failed to serialize link record: {e}")))
}

/// Parses and validates a stored record.
pub fn decode(raw: &str) -> Result<LinkRecord, StorageError> {
    let stored: StoredRecord = serde_json::from_str(raw)
        .map_err(|e| StorageError::InvalidData(format!("malformed link record: {e}")))?;

    if let Some(version) = stored.version {
        if version != CURRENT_VERSION {
            return Err(StorageError::InvalidData(format!(
                "unsupported link record version {version}"
            )));
        }
    }

    if stored.content.trim().is_empty() {
        return Err(StorageError::InvalidData(
            "link record has empty content".to_string(),
        ));
    }

    Ok(LinkRecord {
        content: stored.content,
        is_url: stored.is_url,
        raw_display: stored.raw_display,
        created_at: stored.created_at,
        clicks: stored.clicks,
    })
}
