//! House number validation.

use crate::patterns::ANY_DIGIT;

/// Keep the house number unchanged if it contains at least one digit.
pub fn normalize_house_number(value: &str) -> Option<String> {
    is_house_number(value).then(|| value.to_string())
}

pub fn is_house_number(value: &str) -> bool {
    ANY_DIGIT.is_match(value)
}
