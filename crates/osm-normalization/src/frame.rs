//! Tag-table adapter.
//!
//! A tag table has the columns `id`, `key`, `value`, `type` (the layout of
//! `nodes_tags.csv` and `ways_tags.csv`). Rows with a normalizable key get
//! the canonical value; rows whose value is rejected are dropped.

use std::fs::File;
use std::path::Path;

use osm_model::TagRecord;
use polars::prelude::*;

use crate::audit::RejectionLog;
use crate::dispatch::Normalizer;
use crate::error::{NormalizationError, Result};
use crate::names::fill_missing_names;

/// Required columns, in output order.
pub const TAG_COLUMNS: [&str; 4] = ["id", "key", "value", "type"];

/// Result of normalizing one tag table.
#[derive(Debug)]
pub struct FrameOutcome {
    /// The cleaned table, columns in [`TAG_COLUMNS`] order.
    pub frame: DataFrame,
    /// Per-field counters and rejected raw values.
    pub rejections: RejectionLog,
    /// Rows removed because their value was rejected.
    pub dropped: usize,
    /// `name` rows added from `zh` names.
    pub names_added: usize,
}

/// Normalize every row of a tag table.
pub fn normalize_tag_frame(df: &DataFrame, normalizer: &Normalizer) -> Result<FrameOutcome> {
    let rows = tag_rows(df)?;
    let input_rows = rows.len();

    let mut rejections = RejectionLog::new();
    let mut kept = Vec::with_capacity(input_rows);
    let mut dropped = 0;
    for mut row in rows {
        match normalizer.normalize_recorded(&row.key, &row.value, &mut rejections) {
            Some(value) => {
                row.value = value;
                kept.push(row);
            }
            None => {
                tracing::debug!(id = %row.id, key = %row.key, "Dropped rejected tag value");
                dropped += 1;
            }
        }
    }

    let names_added = if normalizer.options().fill_missing_names {
        fill_missing_names(&mut kept)
    } else {
        0
    };

    tracing::info!(
        input_rows,
        output_rows = kept.len(),
        dropped,
        names_added,
        "Normalized tag table"
    );

    Ok(FrameOutcome {
        frame: tag_frame(&kept)?,
        rejections,
        dropped,
        names_added,
    })
}

/// Extract tag rows from a DataFrame.
pub fn tag_rows(df: &DataFrame) -> Result<Vec<TagRecord>> {
    let [id_col, key_col, value_col, type_col] = TAG_COLUMNS.map(|name| {
        df.column(name)
            .map_err(|_| NormalizationError::MissingColumn {
                column: name.to_string(),
            })
    });
    let (id_col, key_col, value_col, type_col) = (id_col?, key_col?, value_col?, type_col?);

    let mut rows = Vec::with_capacity(df.height());
    for row_idx in 0..df.height() {
        rows.push(TagRecord {
            id: any_to_string(id_col.get(row_idx)?),
            key: any_to_string(key_col.get(row_idx)?),
            value: any_to_string(value_col.get(row_idx)?),
            tag_type: any_to_string(type_col.get(row_idx)?),
        });
    }
    Ok(rows)
}

/// Build a tag table from rows.
pub fn tag_frame(rows: &[TagRecord]) -> Result<DataFrame> {
    let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
    let keys: Vec<&str> = rows.iter().map(|row| row.key.as_str()).collect();
    let values: Vec<&str> = rows.iter().map(|row| row.value.as_str()).collect();
    let types: Vec<&str> = rows.iter().map(|row| row.tag_type.as_str()).collect();
    let columns = vec![
        Column::new("id".into(), ids),
        Column::new("key".into(), keys),
        Column::new("value".into(), values),
        Column::new("type".into(), types),
    ];
    DataFrame::new(columns).map_err(Into::into)
}

/// Read a tag table CSV; every column is read as a string.
pub fn read_tag_frame(path: &Path) -> Result<DataFrame> {
    let csv_error = |e: PolarsError| NormalizationError::CsvRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(csv_error)?
        .finish()
        .map_err(csv_error)
}

/// Write a tag table CSV with a header row.
pub fn write_tag_frame(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path).map_err(|source| NormalizationError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;
    Ok(())
}

fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}
