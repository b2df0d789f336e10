//! Cleaning pipelines with explicit stages.
//!
//! `convert` streams an OSM XML export:
//! 1. **Read**: pull `node`/`way` elements out of the XML
//! 2. **Shape**: split tag keys, normalize values, fill missing names
//! 3. **Write**: validate (optional) and append rows to the five CSV files
//!
//! `clean` runs the same normalizers over an existing tags CSV.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace};

use osm_ingest::{OsmReader, shape_element};
use osm_model::ElementKind;
use osm_normalization::{
    Normalizer, RejectionLog, normalize_tag_frame, read_tag_frame, write_tag_frame,
};
use osm_output::{CsvOutputs, OutputOptions, WrittenTable};

use crate::logging::redact_value;

/// Outcome of converting one OSM file.
#[derive(Debug)]
pub struct ConvertOutcome {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub nodes: usize,
    pub ways: usize,
    pub tables: Vec<WrittenTable>,
    pub rejections: RejectionLog,
}

/// Outcome of cleaning one tags CSV.
#[derive(Debug)]
pub struct CleanOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub input_rows: usize,
    pub output_rows: usize,
    pub dropped: usize,
    pub names_added: usize,
    pub rejections: RejectionLog,
}

/// Stream an OSM file into the five CSV tables.
pub fn convert(
    input: &Path,
    output: &OutputOptions,
    normalizer: &Normalizer,
) -> Result<ConvertOutcome> {
    let span = info_span!("convert", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let reader = OsmReader::from_path(input)
        .with_context(|| format!("open {}", input.display()))?;
    let mut outputs = CsvOutputs::create(output)
        .with_context(|| format!("create outputs in {}", output.output_dir.display()))?;

    let mut rejections = RejectionLog::new();
    let (mut nodes, mut ways) = (0usize, 0usize);
    for element in reader {
        let element = element.with_context(|| format!("read {}", input.display()))?;
        let shaped = shape_element(&element, normalizer, &mut rejections)
            .with_context(|| format!("shape {} {}", element.kind, element.id()))?;
        outputs
            .write_element(&shaped)
            .with_context(|| format!("write {} {}", element.kind, element.id()))?;
        match element.kind {
            ElementKind::Node => nodes += 1,
            ElementKind::Way => ways += 1,
        }
        if (nodes + ways) % 100_000 == 0 {
            debug!(nodes, ways, "Progress");
        }
    }

    let tables = outputs.finish().context("flush outputs")?;
    trace_rejections(&rejections);
    info!(
        nodes,
        ways,
        rejected = rejections.total_rejected(),
        duration_ms = start.elapsed().as_millis(),
        "Conversion complete"
    );

    Ok(ConvertOutcome {
        input: input.to_path_buf(),
        output_dir: output.output_dir.clone(),
        nodes,
        ways,
        tables,
        rejections,
    })
}

/// Normalize the values of a tags CSV and write the cleaned table.
pub fn clean(input: &Path, output: &Path, normalizer: &Normalizer) -> Result<CleanOutcome> {
    let span = info_span!("clean", input = %input.display());
    let _guard = span.enter();

    let frame = read_tag_frame(input).with_context(|| format!("read {}", input.display()))?;
    let input_rows = frame.height();
    let mut outcome = normalize_tag_frame(&frame, normalizer)
        .with_context(|| format!("normalize {}", input.display()))?;
    write_tag_frame(&mut outcome.frame, output)
        .with_context(|| format!("write {}", output.display()))?;
    trace_rejections(&outcome.rejections);

    Ok(CleanOutcome {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        input_rows,
        output_rows: outcome.frame.height(),
        dropped: outcome.dropped,
        names_added: outcome.names_added,
        rejections: outcome.rejections,
    })
}

/// `<dir>/<stem>_clean.csv` for an input `<dir>/<stem>.csv`.
pub fn default_clean_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "tags".to_string());
    input.with_file_name(format!("{stem}_clean.csv"))
}

/// Write the rejection log as pretty-printed JSON.
pub fn export_rejections(rejections: &RejectionLog, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), rejections)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn trace_rejections(rejections: &RejectionLog) {
    for (kind, stats) in rejections.iter() {
        debug!(
            field = %kind,
            seen = stats.seen,
            rewritten = stats.rewritten,
            rejected = stats.rejected_count(),
            "Field summary"
        );
        for raw in &stats.rejected {
            trace!(field = %kind, value = redact_value(raw), "Rejected value");
        }
    }
}
