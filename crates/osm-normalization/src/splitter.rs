//! Multi-value splitting and canonical re-joining.
//!
//! Phone and opening-hours values sometimes pack several logical values into
//! one attribute. They are split on a detected delimiter, normalized one by
//! one, and joined back with [`CANONICAL_DELIMITER`].

use crate::options::CompositePolicy;

/// Delimiter used between sub-values in every canonical composite value.
pub const CANONICAL_DELIMITER: &str = ";";

/// Result of splitting a raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeSplit<'a> {
    /// Trimmed sub-values in their original order.
    pub parts: Vec<&'a str>,
    /// The delimiter that was split on, if any.
    pub delimiter: Option<&'static str>,
}

impl CompositeSplit<'_> {
    pub fn is_composite(&self) -> bool {
        self.delimiter.is_some()
    }
}

/// Split `value` on the first of `delimiters` that occurs in it.
///
/// Delimiters are tried in the given priority order, not by leftmost
/// position. Without a match the whole (trimmed) value is the only part.
pub fn split_composite<'a>(value: &'a str, delimiters: &[&'static str]) -> CompositeSplit<'a> {
    match delimiters.iter().copied().find(|d| value.contains(d)) {
        Some(delimiter) => CompositeSplit {
            parts: value.split(delimiter).map(str::trim).collect(),
            delimiter: Some(delimiter),
        },
        None => CompositeSplit {
            parts: vec![value.trim()],
            delimiter: None,
        },
    }
}

/// Join normalized sub-values with the canonical delimiter.
pub fn join_canonical<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(CANONICAL_DELIMITER)
}

/// Combine per-part outcomes into one attribute outcome under `policy`.
///
/// Never produces a value made only of delimiters: if nothing survives, the
/// whole attribute is rejected.
pub fn combine_parts<I>(parts: I, policy: CompositePolicy) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    let accepted: Vec<String> = match policy {
        CompositePolicy::RejectWhole => parts.into_iter().collect::<Option<Vec<_>>>()?,
        CompositePolicy::KeepValid => parts.into_iter().flatten().collect(),
    };
    if accepted.is_empty() {
        return None;
    }
    Some(join_canonical(&accepted))
}
