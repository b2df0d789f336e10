//! Opening-hours normalization.
//!
//! Canonical values follow one of ten forms (see
//! [`opening_hours_forms`](crate::patterns::opening_hours_forms)), e.g.
//! `Mo-Su 06:00-23:00`, `Apr-Oct 08:00-17:00` or `24/7`. Several values are
//! joined with `;`.
//!
//! Processing order:
//! 1. Implicit multi-range values (`Mo-Fr 08:00-12:00 14:00-18:00`) are split
//!    into one piece per range.
//! 2. The value is split on `;`.
//! 3. Each piece that is not already canonical goes through the ordered
//!    [`rules`] and is validated again.

use std::borrow::Cow;

use crate::options::CompositePolicy;
use crate::patterns::{CANONICAL_OPENING_HOURS, CLOCK_RANGE};
use crate::splitter::{CANONICAL_DELIMITER, combine_parts, split_composite};

pub mod rules;

pub use rules::{RULES, RewriteRule, rewrite, rewrite_traced};

/// Normalize an opening-hours attribute.
pub fn normalize_opening_hours(value: &str, policy: CompositePolicy) -> Option<String> {
    let expanded = split_implicit_ranges(value);
    let split = split_composite(&expanded, &[CANONICAL_DELIMITER]);
    combine_parts(
        split.parts.into_iter().map(normalize_single_opening_hours),
        policy,
    )
}

/// Normalize one `;`-free opening-hours value.
pub fn normalize_single_opening_hours(value: &str) -> Option<String> {
    if is_canonical_opening_hours(value) {
        return Some(value.to_string());
    }
    let rewritten = rewrite(value);
    is_canonical_opening_hours(&rewritten).then_some(rewritten)
}

pub fn is_canonical_opening_hours(value: &str) -> bool {
    CANONICAL_OPENING_HOURS.is_match(value)
}

/// Split a value holding several `H-H` ranges without any `;` or `,`.
///
/// Each range becomes its own piece, prefixed by the text that precedes it
/// (`Mo-Fr 08:00-12:00 14:00-18:00` gives `Mo-Fr 08:00-12:00;14:00-18:00`).
/// Text after the last range is dropped. Values with fewer than two ranges
/// are returned unchanged.
pub fn split_implicit_ranges(value: &str) -> Cow<'_, str> {
    if value.contains(';') || value.contains(',') {
        return Cow::Borrowed(value);
    }
    let ranges: Vec<_> = CLOCK_RANGE.find_iter(value).collect();
    if ranges.len() < 2 {
        return Cow::Borrowed(value);
    }

    let mut pieces = Vec::with_capacity(ranges.len());
    let mut cursor = 0;
    for range in ranges {
        let head = value[cursor..range.start()].trim();
        if head.is_empty() {
            pieces.push(range.as_str().to_string());
        } else {
            pieces.push(format!("{head} {}", range.as_str()));
        }
        cursor = range.end();
    }
    Cow::Owned(pieces.join(CANONICAL_DELIMITER))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours(value: &str) -> Option<String> {
        normalize_opening_hours(value, CompositePolicy::RejectWhole)
    }

    #[test]
    fn test_canonical_unchanged() {
        for value in [
            "Mo-Su 06:00-23:00",
            "06:00-23:00",
            "Sa 09:30-22:00",
            "Apr-Oct Mo-Su 05:00-24:00",
            "Apr 1-Oct 31 05:00-24:00",
            "Su-Fr 08:30-11:30, 13:30-17:00",
            "08:30-11:30, 13:30-17:00",
            "Apr-Oct 08:00-17:00",
            "08:30-11:30,13:30-17:00",
            "24/7",
        ] {
            assert_eq!(hours(value).as_deref(), Some(value));
        }
    }

    #[test]
    fn test_rewritten_forms() {
        assert_eq!(hours("9:00 to 22:00").as_deref(), Some("9:00-22:00"));
        assert_eq!(hours("9am-5pm").as_deref(), Some("9:00-17:00"));
        assert_eq!(hours("24h").as_deref(), Some("24/7"));
        assert_eq!(hours("24小时").as_deref(), Some("24/7"));
        assert_eq!(hours("9:30~21:30").as_deref(), Some("9:30-21:30"));
        assert_eq!(hours("10.00-24.00").as_deref(), Some("10:00-24:00"));
        assert_eq!(
            hours("Jan-Dec: Mo-Su 11:00-23:00").as_deref(),
            Some("Jan-Dec Mo-Su 11:00-23:00")
        );
        assert_eq!(
            hours("Mon-Sun 10:00-22:00").as_deref(),
            Some("Mo-Su 10:00-22:00")
        );
    }

    #[test]
    fn test_semicolon_composite() {
        assert_eq!(
            hours("Mo-Fr 08:00-18:00; Sa 09:00-12:00").as_deref(),
            Some("Mo-Fr 08:00-18:00;Sa 09:00-12:00")
        );
        assert_eq!(
            hours("Mon-Fri 9am-6pm; Sat 10am-2pm").as_deref(),
            Some("Mo-Fr 9:00-18:00;Sa 10:00-14:00")
        );
    }

    #[test]
    fn test_implicit_ranges_split() {
        assert_eq!(
            split_implicit_ranges("Mo-Fr 08:00-12:00 14:00-18:00"),
            "Mo-Fr 08:00-12:00;14:00-18:00"
        );
        assert_eq!(
            hours("Mo-Fr 08:00-12:00 14:00-18:00").as_deref(),
            Some("Mo-Fr 08:00-12:00;14:00-18:00")
        );
    }

    #[test]
    fn test_implicit_split_skipped_with_separators() {
        let value = "08:30-11:30, 13:30-17:00";
        assert!(matches!(split_implicit_ranges(value), Cow::Borrowed(_)));
        let single = "Mo-Su 06:00-23:00";
        assert!(matches!(split_implicit_ranges(single), Cow::Borrowed(_)));
    }

    #[test]
    fn test_unrecoverable_rejected() {
        assert_eq!(hours("营业时间不定"), None);
        assert_eq!(hours("Mo-Fr"), None);
        assert_eq!(hours(""), None);
        assert_eq!(hours("sunrise-sunset"), None);
    }

    #[test]
    fn test_composite_policy() {
        let raw = "Mo-Fr 08:00-18:00; by appointment";
        assert_eq!(normalize_opening_hours(raw, CompositePolicy::RejectWhole), None);
        assert_eq!(
            normalize_opening_hours(raw, CompositePolicy::KeepValid).as_deref(),
            Some("Mo-Fr 08:00-18:00")
        );
    }

    #[test]
    fn test_trailing_separator_is_a_rejected_part() {
        let raw = "Mo-Fr 08:00-18:00;";
        assert_eq!(normalize_opening_hours(raw, CompositePolicy::RejectWhole), None);
        assert_eq!(
            normalize_opening_hours(raw, CompositePolicy::KeepValid).as_deref(),
            Some("Mo-Fr 08:00-18:00")
        );
    }
}
