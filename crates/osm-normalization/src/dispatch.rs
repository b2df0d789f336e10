//! Value dispatcher: routes a tag to the normalizer of its field kind.

use crate::audit::RejectionLog;
use crate::field::FieldKind;
use crate::normalization::{
    normalize_house_number, normalize_opening_hours, normalize_phone, normalize_postcode,
};
use crate::options::NormalizationOptions;

/// Normalizes tag values according to their key.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    options: NormalizationOptions,
}

impl Normalizer {
    pub fn new(options: NormalizationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NormalizationOptions {
        &self.options
    }

    /// Normalize a `(key, value)` pair.
    ///
    /// Returns the canonical value, `None` when the value must be dropped, or
    /// the value unchanged when the key has no normalizer.
    pub fn normalize(&self, key: &str, value: &str) -> Option<String> {
        match FieldKind::from_key(key) {
            Some(kind) => self.normalize_kind(kind, value),
            None => Some(value.to_string()),
        }
    }

    /// Normalize a value of a known field kind.
    pub fn normalize_kind(&self, kind: FieldKind, value: &str) -> Option<String> {
        let policy = self.options.composite_policy;
        match kind {
            FieldKind::Phone => normalize_phone(value, policy),
            FieldKind::Postcode => normalize_postcode(value),
            FieldKind::HouseNumber => normalize_house_number(value),
            FieldKind::OpeningHours => normalize_opening_hours(value, policy),
        }
    }

    /// Like [`normalize`](Self::normalize), recording the outcome in `log`.
    pub fn normalize_recorded(
        &self,
        key: &str,
        value: &str,
        log: &mut RejectionLog,
    ) -> Option<String> {
        let Some(kind) = FieldKind::from_key(key) else {
            return Some(value.to_string());
        };
        let normalized = self.normalize_kind(kind, value);
        log.record(kind, value, normalized.as_deref());
        normalized
    }
}

/// Normalize with default options; an empty string means the value was rejected.
pub fn normalize(key: &str, value: &str) -> String {
    Normalizer::default()
        .normalize(key, value)
        .unwrap_or_default()
}
