//! Postcode validation (Beijing postal range).
//!
//! Postcodes are accepted or rejected as-is; no rewriting is attempted.

use crate::patterns::POSTCODE;

/// Return the postcode unchanged if it is a six-digit code in 100000-102999.
pub fn normalize_postcode(value: &str) -> Option<String> {
    is_canonical_postcode(value).then(|| value.to_string())
}

pub fn is_canonical_postcode(value: &str) -> bool {
    POSTCODE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beijing_postcodes() {
        assert_eq!(normalize_postcode("100025"), Some("100025".to_string()));
        assert_eq!(normalize_postcode("101300"), Some("101300".to_string()));
        assert_eq!(normalize_postcode("102600"), Some("102600".to_string()));
    }

    #[test]
    fn test_other_regions_rejected() {
        assert_eq!(normalize_postcode("200001"), None);
        assert_eq!(normalize_postcode("103000"), None);
    }

    #[test]
    fn test_malformed_rejected() {
        assert_eq!(normalize_postcode("10002"), None);
        assert_eq!(normalize_postcode("1000250"), None);
        assert_eq!(normalize_postcode(" 100025"), None);
        assert_eq!(normalize_postcode("100 025"), None);
        assert_eq!(normalize_postcode(""), None);
    }
}
