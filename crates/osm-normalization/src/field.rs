//! Field kinds recognized by the dispatcher.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::normalization::{
    is_canonical_opening_hours, is_canonical_phone, is_canonical_postcode, is_house_number,
};
use crate::splitter::CANONICAL_DELIMITER;

/// A tag key with a dedicated normalizer.
///
/// Keys are matched after the `namespace:` prefix has been split off, so
/// `addr:postcode` and `contact:phone` resolve through `postcode` and `phone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    #[serde(rename = "phone")]
    Phone,
    #[serde(rename = "postcode")]
    Postcode,
    #[serde(rename = "housenumber")]
    HouseNumber,
    #[serde(rename = "opening_hours")]
    OpeningHours,
}

impl FieldKind {
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Phone,
        FieldKind::Postcode,
        FieldKind::HouseNumber,
        FieldKind::OpeningHours,
    ];

    /// Resolve a tag key; `None` for keys that pass through unchanged.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "phone" => Some(FieldKind::Phone),
            "postcode" => Some(FieldKind::Postcode),
            "housenumber" => Some(FieldKind::HouseNumber),
            "opening_hours" => Some(FieldKind::OpeningHours),
            _ => None,
        }
    }

    /// The tag key this kind is bound to.
    pub fn key(self) -> &'static str {
        match self {
            FieldKind::Phone => "phone",
            FieldKind::Postcode => "postcode",
            FieldKind::HouseNumber => "housenumber",
            FieldKind::OpeningHours => "opening_hours",
        }
    }

    /// Human-readable label for reports.
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Phone => "Phone",
            FieldKind::Postcode => "Postcode",
            FieldKind::HouseNumber => "House number",
            FieldKind::OpeningHours => "Opening hours",
        }
    }

    /// Whether this kind accepts several `;`-joined values.
    pub fn is_multi_valued(self) -> bool {
        matches!(self, FieldKind::Phone | FieldKind::OpeningHours)
    }

    /// Whether `value` is already canonical for this kind.
    pub fn is_canonical(self, value: &str) -> bool {
        match self {
            FieldKind::Phone => value.split(CANONICAL_DELIMITER).all(is_canonical_phone),
            FieldKind::Postcode => is_canonical_postcode(value),
            FieldKind::HouseNumber => is_house_number(value),
            FieldKind::OpeningHours => value
                .split(CANONICAL_DELIMITER)
                .all(is_canonical_opening_hours),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::from_key(s).ok_or_else(|| format!("unknown field kind: {s}"))
    }
}
