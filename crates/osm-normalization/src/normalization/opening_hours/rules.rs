//! Ordered rewrite rules for opening-hours values.
//!
//! Rules run in the order of [`RULES`]; later rules rely on the output of
//! earlier ones (the dash rule expects `to` already rewritten, the am/pm rules
//! expect colons already fixed). Each rule returns `None` when its
//! precondition does not hold, so tests and `--explain` output can tell which
//! rules fired.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::patterns::{ALL_DAY, ALL_DAY_LITERALS, WEEKDAY_NAMES};

/// A single named rewrite step.
#[derive(Debug, Clone, Copy)]
pub struct RewriteRule {
    pub name: &'static str,
    pub description: &'static str,
    apply: fn(&str) -> Option<String>,
}

impl RewriteRule {
    /// Apply the rule; `None` if its precondition does not hold.
    pub fn apply(&self, value: &str) -> Option<String> {
        (self.apply)(value)
    }
}

pub static RULES: [RewriteRule; 12] = [
    RewriteRule {
        name: "fold_weekday_names",
        description: "Mon, Tue, ... become Mo, Tu, ...",
        apply: fold_weekday_names,
    },
    RewriteRule {
        name: "fold_all_day_literal",
        description: "24h, 24小时, 24/24 and ALL become 24/7",
        apply: fold_all_day_literal,
    },
    RewriteRule {
        name: "word_to_dash",
        description: "'to' becomes '-'",
        apply: word_to_dash,
    },
    RewriteRule {
        name: "tilde_to_dash",
        description: "'~' between two times becomes '-'",
        apply: tilde_to_dash,
    },
    RewriteRule {
        name: "dot_to_colon",
        description: "'.' between digit pairs becomes ':'",
        apply: dot_to_colon,
    },
    RewriteRule {
        name: "fullwidth_colon",
        description: "'：' becomes ':'",
        apply: fullwidth_colon,
    },
    RewriteRule {
        name: "drop_label_colon",
        description: "colon between two labels is dropped",
        apply: drop_label_colon,
    },
    RewriteRule {
        name: "twelve_hour_clock",
        description: "am/pm times become 24-hour times",
        apply: twelve_hour_clock,
    },
    RewriteRule {
        name: "strip_residual_am",
        description: "leftover 'am' is removed",
        apply: strip_residual_am,
    },
    RewriteRule {
        name: "strip_trailing_am",
        description: "' am' after a time range is removed",
        apply: strip_trailing_am,
    },
    RewriteRule {
        name: "collapse_dash_spacing",
        description: "spaces inside a leading 'H - H' or 'H: H-H: H' are removed",
        apply: collapse_dash_spacing,
    },
    RewriteRule {
        name: "trim",
        description: "surrounding whitespace is removed",
        apply: trim,
    },
];

/// Run every rule in order.
pub fn rewrite(value: &str) -> String {
    RULES
        .iter()
        .fold(value.to_string(), |current, rule| rule.apply(&current).unwrap_or(current))
}

/// Run every rule in order, also returning the names of the rules that fired.
pub fn rewrite_traced(value: &str) -> (String, Vec<&'static str>) {
    let mut fired = Vec::new();
    let mut current = value.to_string();
    for rule in &RULES {
        if let Some(next) = rule.apply(&current) {
            fired.push(rule.name);
            current = next;
        }
    }
    (current, fired)
}

static WEEKDAY_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&WEEKDAY_NAMES.join("|")).expect("Invalid weekday name regex")
});

static TILDE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2}:[0-9]{1,2})~([0-9]{1,2}:[0-9]{1,2})").expect("Invalid tilde regex")
});

static DOTTED_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2})\.([0-9]{1,2})").expect("Invalid dotted time regex")
});

static LABEL_COLON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z]+): ([A-Za-z]+)").expect("Invalid label colon regex")
});

static CLOCK_AM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2}:[0-9]{1,2})(?:am|AM)").expect("Invalid clock am regex")
});

static CLOCK_PM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2}):([0-9]{1,2})(?:pm|PM)").expect("Invalid clock pm regex")
});

static BARE_AM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{1,2})(?:am|AM)").expect("Invalid bare am regex"));

static BARE_PM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{1,2})(?:pm|PM)").expect("Invalid bare pm regex"));

static RANGE_THEN_AM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2}:[0-9]{1,2}-[0-9]{1,2}:[0-9]{1,2}) am")
        .expect("Invalid trailing am regex")
});

static SPACED_DASH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]{1,2}:[0-9]{1,2} - [0-9]{1,2}:[0-9]{1,2}|[0-9]{1,2}:\s[0-9]{1,2}-[0-9]{1,2}:\s[0-9]{1,2})")
        .expect("Invalid spaced dash regex")
});

fn fold_weekday_names(value: &str) -> Option<String> {
    if !WEEKDAY_NAME.is_match(value) {
        return None;
    }
    Some(
        WEEKDAY_NAME
            .replace_all(value, |caps: &Captures<'_>| caps[0][..2].to_string())
            .into_owned(),
    )
}

fn fold_all_day_literal(value: &str) -> Option<String> {
    ALL_DAY_LITERALS
        .contains(&value)
        .then(|| ALL_DAY.to_string())
}

fn word_to_dash(value: &str) -> Option<String> {
    value.contains("to").then(|| value.replace("to", "-"))
}

fn tilde_to_dash(value: &str) -> Option<String> {
    TILDE_RANGE
        .is_match(value)
        .then(|| TILDE_RANGE.replace_all(value, "${1}-${2}").into_owned())
}

fn dot_to_colon(value: &str) -> Option<String> {
    DOTTED_TIME
        .is_match(value)
        .then(|| DOTTED_TIME.replace_all(value, "${1}:${2}").into_owned())
}

fn fullwidth_colon(value: &str) -> Option<String> {
    value.contains('：').then(|| value.replace('：', ":"))
}

fn drop_label_colon(value: &str) -> Option<String> {
    LABEL_COLON
        .is_match(value)
        .then(|| LABEL_COLON.replace_all(value, "${1} ${2}").into_owned())
}

/// `H:Mam` loses its suffix, `H:Mpm` gains 12 hours. Bare `Ham`/`Hpm` are
/// only rewritten when no colon form of the same suffix was present.
fn twelve_hour_clock(value: &str) -> Option<String> {
    let has_clock_am = CLOCK_AM.is_match(value);
    let has_clock_pm = CLOCK_PM.is_match(value);
    let mut current = value.to_string();

    if has_clock_am {
        current = CLOCK_AM.replace_all(&current, "${1}").into_owned();
    }
    if has_clock_pm {
        current = CLOCK_PM
            .replace_all(&current, |caps: &Captures<'_>| match afternoon_hour(&caps[1]) {
                Some(hour) => format!("{hour}:{}", &caps[2]),
                None => caps[0].to_string(),
            })
            .into_owned();
    }
    if !has_clock_am && BARE_AM.is_match(&current) {
        current = BARE_AM.replace_all(&current, "${1}:00").into_owned();
    }
    if !has_clock_pm && BARE_PM.is_match(&current) {
        current = BARE_PM
            .replace_all(&current, |caps: &Captures<'_>| match afternoon_hour(&caps[1]) {
                Some(hour) => format!("{hour}:00"),
                None => caps[0].to_string(),
            })
            .into_owned();
    }

    (current != value).then_some(current)
}

fn afternoon_hour(hour: &str) -> Option<u32> {
    hour.parse::<u32>().ok().map(|h| h + 12)
}

fn strip_residual_am(value: &str) -> Option<String> {
    value.contains("am").then(|| value.replace("am", ""))
}

fn strip_trailing_am(value: &str) -> Option<String> {
    RANGE_THEN_AM
        .is_match(value)
        .then(|| RANGE_THEN_AM.replace_all(value, "${1}").into_owned())
}

fn collapse_dash_spacing(value: &str) -> Option<String> {
    SPACED_DASH
        .is_match(value)
        .then(|| value.replace(' ', ""))
}

fn trim(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (trimmed.len() != value.len()).then(|| trimmed.to_string())
}
