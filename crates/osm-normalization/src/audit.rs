//! Rejection audit trail.
//!
//! The normalizers do not log. Adapters feed every outcome into a
//! [`RejectionLog`] so the caller can report or export what was dropped.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::field::FieldKind;

/// Outcome counters for one field kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldStats {
    /// Values presented to the normalizer.
    pub seen: usize,
    /// Values accepted in a different form than they arrived in.
    pub rewritten: usize,
    /// Raw values that were dropped, in encounter order.
    pub rejected: Vec<String>,
}

impl FieldStats {
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    /// Values accepted, rewritten or not.
    pub fn accepted(&self) -> usize {
        self.seen - self.rejected.len()
    }

    /// Up to `limit` distinct rejected values, first-seen first.
    pub fn samples(&self, limit: usize) -> Vec<&str> {
        let mut samples: Vec<&str> = Vec::new();
        for value in &self.rejected {
            if samples.len() == limit {
                break;
            }
            if !samples.contains(&value.as_str()) {
                samples.push(value);
            }
        }
        samples
    }
}

/// Per-field outcome of a normalization run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionLog {
    fields: BTreeMap<FieldKind, FieldStats>,
}

impl RejectionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one normalization; `normalized` is `None` when the value was rejected.
    pub fn record(&mut self, kind: FieldKind, raw: &str, normalized: Option<&str>) {
        let stats = self.fields.entry(kind).or_default();
        stats.seen += 1;
        match normalized {
            Some(value) if value != raw => stats.rewritten += 1,
            Some(_) => {}
            None => stats.rejected.push(raw.to_string()),
        }
    }

    pub fn get(&self, kind: FieldKind) -> Option<&FieldStats> {
        self.fields.get(&kind)
    }

    /// Field kinds that saw at least one value, in [`FieldKind`] order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKind, &FieldStats)> {
        self.fields.iter().map(|(kind, stats)| (*kind, stats))
    }

    pub fn total_seen(&self) -> usize {
        self.fields.values().map(|stats| stats.seen).sum()
    }

    pub fn total_rejected(&self) -> usize {
        self.fields.values().map(FieldStats::rejected_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fold another log into this one, keeping encounter order.
    pub fn merge(&mut self, other: RejectionLog) {
        for (kind, stats) in other.fields {
            let target = self.fields.entry(kind).or_default();
            target.seen += stats.seen;
            target.rewritten += stats.rewritten;
            target.rejected.extend(stats.rejected);
        }
    }
}
