//! Per-field normalization functions.
//!
//! Each function takes a raw value and returns the canonical value, or `None`
//! when the value has to be dropped.

pub mod house_number;
pub mod opening_hours;
pub mod phone;
pub mod postcode;

pub use house_number::{is_house_number, normalize_house_number};
pub use opening_hours::{is_canonical_opening_hours, normalize_opening_hours};
pub use phone::{LineKind, is_canonical_phone, is_mobile_number, normalize_phone};
pub use postcode::{is_canonical_postcode, normalize_postcode};
