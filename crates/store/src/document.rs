//! Persisted document shape and the read-only hydrated projection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use nexdrive_core::catalog::ModelKind;
use nexdrive_core::config::Configuration;
use nexdrive_core::error::CoreError;

/// The exact wire shape of one document in the `builds` collection.
///
/// Field names are part of the external contract; the store-assigned
/// record id is returned out-of-band and is never a document field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildDocument {
    pub model_key: String,
    pub color_value: String,
    pub trim_slots: BTreeMap<String, String>,
    pub owner_id: String,
}

impl BuildDocument {
    /// Snapshot a configuration for a given owner. The builder's own
    /// `owner_id`/`record_id` fields are ignored: ownership is always the
    /// principal at the moment of save.
    pub fn snapshot(config: &Configuration, owner_id: &str) -> Self {
        Self {
            model_key: config.model.as_key().to_string(),
            color_value: config.color_value.clone(),
            trim_slots: config.trim_slots.clone(),
            owner_id: owner_id.to_string(),
        }
    }
}

/// A persisted build as read back from the store. Read-only: there is no
/// edit-and-resave path.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedBuild {
    pub record_id: String,
    pub model: ModelKind,
    pub color_value: String,
    pub trim_slots: BTreeMap<String, String>,
    pub owner_id: String,
}

impl SavedBuild {
    /// Re-hydrate a document through the catalog. A dangling model key is
    /// an `InvalidKey` failure, never silently coerced.
    pub fn hydrate(record_id: String, doc: BuildDocument) -> Result<Self, CoreError> {
        let model = ModelKind::from_key(&doc.model_key)?;
        Ok(Self {
            record_id,
            model,
            color_value: doc.color_value,
            trim_slots: doc.trim_slots,
            owner_id: doc.owner_id,
        })
    }
}
