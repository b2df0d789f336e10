//! OSM tag normalization crate.
//!
//! Canonicalizes free-text contact and address attributes (telephone numbers,
//! postal codes, house numbers, opening hours) or rejects them when no
//! canonical form can be recovered.
//!
//! # Overview
//!
//! This crate provides:
//! - **Pattern library**: the fixed grammars and lookup tables ([`patterns`])
//! - **Field normalizers**: one pure function per field kind ([`normalization`])
//! - **Dispatcher**: [`Normalizer`] routes a `(key, value)` pair by [`FieldKind`]
//! - **Adapters**: a polars tag-table adapter ([`frame`]) and per-element
//!   missing-name completion ([`names`]); the streamed XML adapter lives in
//!   `osm-ingest`
//! - **Audit**: [`RejectionLog`] collects what was rewritten and what was dropped
//!
//! # Example
//!
//! ```
//! use osm_normalization::{Normalizer, normalize};
//!
//! assert_eq!(normalize("phone", "010-12345678"), "+86 10 12345678");
//! assert_eq!(normalize("postcode", "200001"), "");
//! assert_eq!(normalize("name", "天安门"), "天安门");
//!
//! let normalizer = Normalizer::default();
//! assert_eq!(
//!     normalizer.normalize("opening_hours", "9:00 to 22:00").as_deref(),
//!     Some("9:00-22:00")
//! );
//! ```
//!
//! # Design Principles
//!
//! - **Rejection is a value**: malformed input yields `None`, never an error
//! - **Idempotent**: canonical values normalize to themselves
//! - **Stateless functions**: lookup tables are process-wide statics

mod audit;
mod dispatch;
mod error;
mod field;
mod options;

pub mod frame;
pub mod names;
pub mod normalization;
pub mod patterns;
pub mod splitter;

// Core types
pub use field::FieldKind;
pub use options::{CompositePolicy, NormalizationOptions};

// Dispatch
pub use dispatch::{Normalizer, normalize};

// Audit
pub use audit::{FieldStats, RejectionLog};

// Error type
pub use error::{NormalizationError, Result};

// Table adapter
pub use frame::{FrameOutcome, normalize_tag_frame, read_tag_frame, write_tag_frame};
