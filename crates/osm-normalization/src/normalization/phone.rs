//! Telephone number normalization per the Beijing numbering plan.
//!
//! Canonical forms:
//! - Fixed line: `+86 10 ` + 8 digits
//! - Mobile: `+86 ` + 11 digits
//! - 400 service line: `+86 400` + 7 digits
//!
//! A raw number is reduced to its digits and classified by the digits left
//! over once the subscriber part is cut off, together with the total length.

use crate::options::CompositePolicy;
use crate::patterns::{
    CANONICAL_PHONE, COMPOSITE_PHONE_MIN_CHARS, FIXED_LINE_STYLES, MOBILE_PREFIXES, MOBILE_STYLES,
    PHONE_DELIMITERS, SPECIAL_STYLES,
};
use crate::splitter::{combine_parts, split_composite};

/// The three number styles, in classification order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Beijing fixed line (8-digit subscriber number, area code 10).
    FixedLine,
    /// 11-digit mobile number.
    Mobile,
    /// 400 service line.
    Special,
}

impl LineKind {
    /// Classification order; the first style that matches wins.
    pub const ORDER: [LineKind; 3] = [LineKind::FixedLine, LineKind::Mobile, LineKind::Special];

    /// Number of trailing digits cut off before the prefix is compared.
    fn suffix_len(self) -> usize {
        match self {
            LineKind::FixedLine => 8,
            LineKind::Mobile => 11,
            LineKind::Special => 7,
        }
    }

    fn styles(self) -> &'static [(&'static str, usize)] {
        match self {
            LineKind::FixedLine => FIXED_LINE_STYLES,
            LineKind::Mobile => MOBILE_STYLES,
            LineKind::Special => SPECIAL_STYLES,
        }
    }

    /// Whether a digit-only string has this style.
    pub fn matches(self, digits: &str) -> bool {
        let len = digits.len();
        let prefix = &digits[..len.saturating_sub(self.suffix_len())];
        let styled = self
            .styles()
            .iter()
            .any(|&(style_prefix, style_len)| style_prefix == prefix && style_len == len);
        match self {
            LineKind::Mobile => styled && is_mobile_number(last_digits(digits, 11)),
            LineKind::FixedLine | LineKind::Special => styled,
        }
    }

    /// Canonical rendering of a digit-only string already known to match.
    pub fn format(self, digits: &str) -> String {
        match self {
            LineKind::FixedLine => format!("+86 10 {}", last_digits(digits, 8)),
            LineKind::Mobile => format!("+86 {}", last_digits(digits, 11)),
            LineKind::Special => format!("+86 {}", last_digits(digits, 10)),
        }
    }

    /// Classify a digit-only string.
    pub fn classify(digits: &str) -> Option<LineKind> {
        Self::ORDER.into_iter().find(|kind| kind.matches(digits))
    }
}

/// Normalize a phone attribute, which may hold several numbers.
///
/// Values of at least 17 characters are checked for `/`, `;` and `；` (in that
/// order); the first delimiter present splits the value and every number is
/// normalized on its own.
pub fn normalize_phone(value: &str, policy: CompositePolicy) -> Option<String> {
    if value.chars().count() >= COMPOSITE_PHONE_MIN_CHARS {
        let split = split_composite(value, PHONE_DELIMITERS);
        if split.is_composite() {
            return combine_parts(split.parts.into_iter().map(normalize_single_phone), policy);
        }
    }
    normalize_single_phone(value)
}

/// Normalize one number.
pub fn normalize_single_phone(value: &str) -> Option<String> {
    let digits = phone_digits(value);
    let kind = LineKind::classify(&digits)?;
    Some(kind.format(&digits)).filter(|styled| is_canonical_phone(styled))
}

/// Whether a single number is already in canonical form.
pub fn is_canonical_phone(value: &str) -> bool {
    CANONICAL_PHONE.is_match(value)
}

/// An 11-digit number starting with an allocated mobile carrier prefix.
pub fn is_mobile_number(value: &str) -> bool {
    value.len() == 11
        && value.is_char_boundary(3)
        && MOBILE_PREFIXES.contains(&&value[..3])
}

/// Keep digits only; full-width digits are folded to ASCII.
fn phone_digits(value: &str) -> String {
    value
        .chars()
        .filter_map(|c| match c {
            '0'..='9' => Some(c),
            '０'..='９' => char::from_u32(u32::from(c) - u32::from('０') + u32::from('0')),
            _ => None,
        })
        .collect()
}

fn last_digits(digits: &str, count: usize) -> &str {
    &digits[digits.len().saturating_sub(count)..]
}
