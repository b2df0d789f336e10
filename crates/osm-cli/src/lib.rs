//! CLI library components for `osm-clean`.

pub mod logging;
pub mod pipeline;
