//! Pattern library: the fixed grammars and lookup tables for every field kind.
//!
//! Everything here is immutable process-wide data. Regexes are compiled on
//! first use and shared afterwards.

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Telephone numbers (Beijing / China numbering plan)
// =============================================================================

/// Values at least this many characters long may hold several numbers.
pub const COMPOSITE_PHONE_MIN_CHARS: usize = 17;

/// Delimiters between numbers in a composite phone value, by priority.
pub const PHONE_DELIMITERS: &[&str] = &["/", ";", "；"];

/// First three digits of an 11-digit mobile number, per carrier allocation.
pub const MOBILE_PREFIXES: [&str; 37] = [
    "133", "153", "180", "181", "189", "177", "173", "149", "130", "131", "132", "155", "156",
    "145", "185", "186", "176", "175", "134", "135", "136", "137", "138", "139", "150", "151",
    "152", "157", "158", "159", "182", "183", "184", "187", "188", "147", "178",
];

/// `(prefix, total digit count)` combinations seen for Beijing fixed lines.
pub const FIXED_LINE_STYLES: &[(&str, usize)] = &[
    ("8610", 12),
    ("86010", 13),
    ("008610", 14),
    ("010", 11),
    ("10", 10),
    ("86", 10),
    ("", 8),
];

/// `(prefix, total digit count)` combinations seen for mobile numbers.
pub const MOBILE_STYLES: &[(&str, usize)] = &[("86", 13), ("0086", 15), ("", 11)];

/// `(prefix, total digit count)` combinations seen for 400 service lines.
pub const SPECIAL_STYLES: &[(&str, usize)] = &[("86400", 12), ("400", 10)];

/// Canonical phone grammar: fixed line, mobile, or 400 line.
pub static CANONICAL_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\+86 10 [0-9]{8}|\+86 [0-9]{11}|\+86 400[0-9]{7})$")
        .expect("Invalid canonical phone regex")
});

// =============================================================================
// Postcodes and house numbers
// =============================================================================

/// Beijing postal range: 100000-102999.
pub static POSTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^10[0-2][0-9]{3}$").expect("Invalid postcode regex"));

/// Any Unicode decimal digit.
pub static ANY_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("Invalid digit regex"));

// =============================================================================
// Opening hours
// =============================================================================

/// `H:M`, each part one or two digits.
pub const CLOCK_TIME: &str = "[0-9]{1,2}:[0-9]{1,2}";

/// Two-letter weekday codes.
pub const WEEKDAY_CODES: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// English weekday names as they appear in raw values.
pub const WEEKDAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Three-letter month abbreviations.
pub const MONTH_CODES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Canonical "always open" value.
pub const ALL_DAY: &str = "24/7";

/// Raw spellings of "always open".
pub const ALL_DAY_LITERALS: [&str; 4] = ["24h", "24小时", "24/24", "ALL"];

/// The nine structured opening-hours forms, by name. `24/7` is the tenth.
pub fn opening_hours_forms() -> [(&'static str, String); 9] {
    let range = format!("{CLOCK_TIME}-{CLOCK_TIME}");
    let weekday = format!("(?:{})", WEEKDAY_CODES.join("|"));
    let month = format!("(?:{})", MONTH_CODES.join("|"));
    let month_day = format!("{month} [0-9]{{1,2}}");
    let weekday_range = format!("{weekday}-{weekday} {range}");
    [
        ("range", range.clone()),
        ("weekday-range", weekday_range.clone()),
        ("weekday", format!("{weekday} {range}")),
        (
            "month-weekday-range",
            format!("{month}-{month} {weekday_range}"),
        ),
        ("month-day-range", format!("{month_day}-{month_day} {range}")),
        (
            "weekday-split-range",
            format!("{weekday_range}, {range}"),
        ),
        ("split-range", format!("{range}, {range}")),
        ("month-range", format!("{month}-{month} {range}")),
        ("split-range-compact", format!("{range},{range}")),
    ]
}

/// Canonical opening-hours grammar: one of the nine forms, or `24/7`.
pub static CANONICAL_OPENING_HOURS: LazyLock<Regex> = LazyLock::new(|| {
    let forms: Vec<String> = opening_hours_forms()
        .into_iter()
        .map(|(_, pattern)| pattern)
        .collect();
    Regex::new(&format!("^(?:{}|{})$", regex::escape(ALL_DAY), forms.join("|")))
        .expect("Invalid opening hours regex")
});

/// A single `H-H` time range anywhere in a value.
pub static CLOCK_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{CLOCK_TIME}-{CLOCK_TIME}")).expect("Invalid clock range regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_prefixes_unique() {
        let mut prefixes = MOBILE_PREFIXES.to_vec();
        prefixes.sort_unstable();
        prefixes.dedup();
        assert_eq!(prefixes.len(), 37);
    }

    #[test]
    fn test_canonical_phone_forms() {
        assert!(CANONICAL_PHONE.is_match("+86 10 12345678"));
        assert!(CANONICAL_PHONE.is_match("+86 13912345678"));
        assert!(CANONICAL_PHONE.is_match("+86 4001234567"));
        assert!(!CANONICAL_PHONE.is_match("+86 10 1234567"));
        assert!(!CANONICAL_PHONE.is_match("13912345678"));
    }

    #[test]
    fn test_postcode_range() {
        assert!(POSTCODE.is_match("100025"));
        assert!(POSTCODE.is_match("102999"));
        assert!(!POSTCODE.is_match("103000"));
        assert!(!POSTCODE.is_match("1000250"));
    }

    #[test]
    fn test_opening_hours_forms() {
        let accepted = [
            "24/7",
            "06:00-23:00",
            "Mo-Su 06:00-23:00",
            "Sa 09:30-22:00",
            "Apr-Oct Mo-Su 05:00-24:00",
            "Apr 1-Oct 31 05:00-24:00",
            "Su-Fr 08:30-11:30, 13:30-17:00",
            "08:30-11:30, 13:30-17:00",
            "Apr-Oct 08:00-17:00",
            "08:30-11:30,13:30-17:00",
        ];
        for value in accepted {
            assert!(CANONICAL_OPENING_HOURS.is_match(value), "{value}");
        }
        let rejected = ["24h", "Mon-Fri 09:00-18:00", "9:00 - 22:00", "Mo-Su", ""];
        for value in rejected {
            assert!(!CANONICAL_OPENING_HOURS.is_match(value), "{value}");
        }
    }

    #[test]
    fn test_clock_range_finds_all() {
        let ranges: Vec<&str> = CLOCK_RANGE
            .find_iter("Mo-Fr 08:00-12:00 14:00-18:00")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(ranges, vec!["08:00-12:00", "14:00-18:00"]);
    }
}
