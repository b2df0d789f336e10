//! Configuration options for normalization.

use serde::{Deserialize, Serialize};

/// What to do with a composite value when some of its sub-values reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompositePolicy {
    /// Any rejected sub-value rejects the whole attribute.
    #[default]
    RejectWhole,
    /// Drop rejected sub-values and keep the rest; reject only if none remain.
    KeepValid,
}

/// Options shared by every adapter that drives the [`Normalizer`](crate::Normalizer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationOptions {
    /// Policy for phone and opening-hours values with several sub-values.
    pub composite_policy: CompositePolicy,

    /// Add a `name` tag from the `zh` tag when an element has no name.
    pub fill_missing_names: bool,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            composite_policy: CompositePolicy::RejectWhole,
            fill_missing_names: true,
        }
    }
}

impl NormalizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_composite_policy(mut self, policy: CompositePolicy) -> Self {
        self.composite_policy = policy;
        self
    }

    pub fn with_fill_missing_names(mut self, enable: bool) -> Self {
        self.fill_missing_names = enable;
        self
    }
}
