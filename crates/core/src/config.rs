//! The in-progress build configuration and its transition functions.
//!
//! A [`Configuration`] is mutated exclusively through discrete
//! field-replacement transitions, each drawing from a finite domain, so no
//! invalid intermediate state is representable. All transitions are pure:
//! they borrow the input and return a fresh value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{self, ModelKind};
use crate::error::{CoreError, KeyDomain};
use crate::principal::AuthState;

/// Option value a trim slot takes when the user has not touched it.
pub const TRIM_BASELINE: &str = "none";

/// The trim slots the builder UI presents, with their baseline options.
pub const TRIM_SLOTS: &[(&str, &str)] = &[
    ("wheel", "Classic"),
    ("spoiler", "None"),
    ("interior", "Black"),
];

/// What the user is currently building.
///
/// `owner_id` stays empty and `record_id` absent until the configuration is
/// saved; saving snapshots the value and never links the builder state to
/// the persisted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub model: ModelKind,
    pub color_value: String,
    /// Selected trim options by slot name. Absent slots are at baseline.
    pub trim_slots: BTreeMap<String, String>,
    pub owner_id: Option<String>,
    pub record_id: Option<String>,
}

impl Configuration {
    /// The documented baseline: first catalog entry, first palette color,
    /// no trims, no owner, no record id.
    pub fn default_build() -> Self {
        let first_model = catalog::catalog()[0].model;
        let first_color = catalog::palette()[0].color_value;
        Self {
            model: first_model,
            color_value: first_color.to_string(),
            trim_slots: BTreeMap::new(),
            owner_id: None,
            record_id: None,
        }
    }

    /// Replace the selected model. Every other field is untouched.
    pub fn select_model(&self, key: &str) -> Result<Self, CoreError> {
        let model = ModelKind::from_key(key)?;
        Ok(Self {
            model,
            ..self.clone()
        })
    }

    /// Replace the paint color. Rejects anything outside the fixed palette.
    pub fn select_color(&self, color_value: &str) -> Result<Self, CoreError> {
        if !catalog::is_palette_color(color_value) {
            return Err(CoreError::invalid_key(KeyDomain::Color, color_value));
        }
        Ok(Self {
            color_value: color_value.to_string(),
            ..self.clone()
        })
    }

    /// Set or overwrite a trim slot.
    ///
    /// Only the slot name is constrained (non-empty); option legality is a
    /// collaborator concern and is not validated here.
    pub fn select_trim(&self, slot: &str, option: &str) -> Result<Self, CoreError> {
        if slot.is_empty() {
            return Err(CoreError::invalid_key(KeyDomain::TrimSlot, slot));
        }
        let mut next = self.clone();
        next.trim_slots.insert(slot.to_string(), option.to_string());
        Ok(next)
    }

    /// The selected option for a slot, or [`TRIM_BASELINE`] when untouched.
    pub fn trim(&self, slot: &str) -> &str {
        self.trim_slots
            .get(slot)
            .map(String::as_str)
            .unwrap_or(TRIM_BASELINE)
    }

    /// Precondition gate for persistence: only a resolved, signed-in
    /// principal may own a saved build. The single point where identity
    /// state and configuration state interact.
    pub fn is_savable(&self, auth: &AuthState) -> bool {
        auth.principal().is_some()
    }
}
