//! The fixed catalog of selectable models and the paint palette.
//!
//! Pure static data plus lookup. Models are a closed enum rather than
//! free-form string keys so a missing entry is unrepresentable; the string
//! form only appears at the persistence and display boundaries.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, KeyDomain};

// ---------------------------------------------------------------------------
// Models
// ---------------------------------------------------------------------------

/// A selectable vehicle model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Sports,
    Muscle,
    Supercar,
}

impl ModelKind {
    /// Stable string key used in persisted documents.
    pub fn as_key(self) -> &'static str {
        match self {
            ModelKind::Sports => "sports",
            ModelKind::Muscle => "muscle",
            ModelKind::Supercar => "supercar",
        }
    }

    /// Parse a persisted/user-supplied key back into a model.
    pub fn from_key(key: &str) -> Result<Self, CoreError> {
        match key {
            "sports" => Ok(ModelKind::Sports),
            "muscle" => Ok(ModelKind::Muscle),
            "supercar" => Ok(ModelKind::Supercar),
            _ => Err(CoreError::invalid_key(KeyDomain::Model, key)),
        }
    }
}

/// Chassis dimensions used by the scene composer, in scene units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySpec {
    pub shell_length: f64,
    pub shell_height: f64,
    pub shell_width: f64,
}

/// One row of the model catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub model: ModelKind,
    pub display_name: &'static str,
    /// Price in integer cents. Converted to a display string only at the
    /// presentation boundary.
    pub price_cents: i64,
    pub horsepower: i32,
    pub body: BodySpec,
}

/// The full catalog in canonical order. `Sports` is the documented default.
const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        model: ModelKind::Sports,
        display_name: "Porsche 911 GT3",
        price_cents: 17_000_000,
        horsepower: 502,
        body: BodySpec {
            shell_length: 3.0,
            shell_height: 1.0,
            shell_width: 1.5,
        },
    },
    CatalogEntry {
        model: ModelKind::Muscle,
        display_name: "Dodge Hellcat",
        price_cents: 7_200_000,
        horsepower: 797,
        body: BodySpec {
            shell_length: 3.2,
            shell_height: 1.1,
            shell_width: 1.6,
        },
    },
    CatalogEntry {
        model: ModelKind::Supercar,
        display_name: "Lamborghini Aventador",
        price_cents: 42_000_000,
        horsepower: 769,
        body: BodySpec {
            shell_length: 3.1,
            shell_height: 0.9,
            shell_width: 1.6,
        },
    },
];

/// All catalog entries in canonical order.
pub fn catalog() -> &'static [CatalogEntry] {
    CATALOG
}

/// Look up the entry for a model. Total: every `ModelKind` has exactly one row.
pub fn entry(model: ModelKind) -> &'static CatalogEntry {
    // The catalog covers the enum exhaustively, so the scan cannot miss.
    CATALOG
        .iter()
        .find(|e| e.model == model)
        .expect("catalog covers every ModelKind")
}

// ---------------------------------------------------------------------------
// Paint palette
// ---------------------------------------------------------------------------

/// One selectable paint color.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintOption {
    pub display_name: &'static str,
    /// Canonical 7-character `#RRGGBB` form.
    pub color_value: &'static str,
}

/// The fixed paint palette. `Racing Red` is the documented default.
const PALETTE: &[PaintOption] = &[
    PaintOption {
        display_name: "Racing Red",
        color_value: "#ff3b30",
    },
    PaintOption {
        display_name: "Midnight Black",
        color_value: "#1a1a1a",
    },
    PaintOption {
        display_name: "Ocean Blue",
        color_value: "#007AFF",
    },
    PaintOption {
        display_name: "Lime Green",
        color_value: "#32D74B",
    },
    PaintOption {
        display_name: "Sunburst Yellow",
        color_value: "#FFD60A",
    },
    PaintOption {
        display_name: "Pearl White",
        color_value: "#f8f9fa",
    },
];

/// All palette entries in canonical order.
pub fn palette() -> &'static [PaintOption] {
    PALETTE
}

/// Find the palette entry for a color value, if it is part of the palette.
pub fn paint_by_color(color_value: &str) -> Option<&'static PaintOption> {
    PALETTE.iter().find(|p| p.color_value == color_value)
}

/// Returns `true` if the color value is one of the fixed palette colors.
pub fn is_palette_color(color_value: &str) -> bool {
    paint_by_color(color_value).is_some()
}

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

/// Render a cent amount as a dollar string with thousands separators,
/// e.g. `17_000_000_00` → `"$170,000"`. Fractional cents are dropped from
/// display (every catalog price is whole dollars).
pub fn format_price(price_cents: i64) -> String {
    let dollars = price_cents / 100;
    let digits = dollars.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if dollars < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::CoreError;

    #[test]
    fn catalog_is_in_canonical_order() {
        let models: Vec<ModelKind> = catalog().iter().map(|e| e.model).collect();
        assert_eq!(
            models,
            vec![ModelKind::Sports, ModelKind::Muscle, ModelKind::Supercar]
        );
    }

    #[test]
    fn entry_is_total_over_model_kinds() {
        for kind in [ModelKind::Sports, ModelKind::Muscle, ModelKind::Supercar] {
            assert_eq!(entry(kind).model, kind);
        }
    }

    #[test]
    fn from_key_round_trips_every_catalog_key() {
        for e in catalog() {
            assert_eq!(ModelKind::from_key(e.model.as_key()).unwrap(), e.model);
        }
    }

    #[test]
    fn from_key_rejects_unknown_keys() {
        assert_matches!(
            ModelKind::from_key("hatchback"),
            Err(CoreError::InvalidKey { .. })
        );
        assert_matches!(ModelKind::from_key(""), Err(CoreError::InvalidKey { .. }));
        // Keys are case-sensitive.
        assert_matches!(
            ModelKind::from_key("Sports"),
            Err(CoreError::InvalidKey { .. })
        );
    }

    #[test]
    fn palette_colors_are_canonical_hex() {
        for p in palette() {
            assert_eq!(p.color_value.len(), 7);
            assert!(p.color_value.starts_with('#'));
        }
    }

    #[test]
    fn palette_lookup() {
        assert!(is_palette_color("#ff3b30"));
        assert!(is_palette_color("#32D74B"));
        assert!(!is_palette_color("#123456"));
        assert_eq!(paint_by_color("#007AFF").unwrap().display_name, "Ocean Blue");
    }

    #[test]
    fn prices_are_whole_dollars_in_cents() {
        assert_eq!(entry(ModelKind::Sports).price_cents, 170_000 * 100);
        assert_eq!(entry(ModelKind::Muscle).price_cents, 72_000 * 100);
        assert_eq!(entry(ModelKind::Supercar).price_cents, 420_000 * 100);
    }

    #[test]
    fn format_price_groups_thousands() {
        assert_eq!(format_price(170_000 * 100), "$170,000");
        assert_eq!(format_price(72_000 * 100), "$72,000");
        assert_eq!(format_price(999 * 100), "$999");
        assert_eq!(format_price(0), "$0");
        assert_eq!(format_price(1_000_000 * 100), "$1,000,000");
    }
}
