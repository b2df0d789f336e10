use anyhow::Result;
use tracing::info;

use osm_cli::pipeline::{
    CleanOutcome, ConvertOutcome, clean, convert, default_clean_output, export_rejections,
};
use osm_normalization::normalization::opening_hours::{
    is_canonical_opening_hours, rewrite_traced, split_implicit_ranges,
};
use osm_normalization::splitter::{CANONICAL_DELIMITER, split_composite};
use osm_normalization::{FieldKind, NormalizationOptions, Normalizer};
use osm_output::OutputOptions;

use crate::cli::{CleanArgs, ConvertArgs, NormalizeArgs};

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertOutcome> {
    let normalizer = Normalizer::new(args.normalization.options());
    let output = OutputOptions::new(&args.output_dir).with_validation(args.validate);
    let outcome = convert(&args.osm_file, &output, &normalizer)?;
    if let Some(path) = &args.rejections {
        export_rejections(&outcome.rejections, path)?;
        info!(path = %path.display(), "Wrote rejection log");
    }
    Ok(outcome)
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanOutcome> {
    let normalizer = Normalizer::new(args.normalization.options());
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_clean_output(&args.tags_csv));
    let outcome = clean(&args.tags_csv, &output, &normalizer)?;
    if let Some(path) = &args.rejections {
        export_rejections(&outcome.rejections, path)?;
        info!(path = %path.display(), "Wrote rejection log");
    }
    Ok(outcome)
}

/// Print the normalized value; returns false when the value was rejected.
pub fn run_normalize(args: &NormalizeArgs) -> bool {
    let options = NormalizationOptions::new().with_composite_policy(args.composite_policy.into());
    let normalizer = Normalizer::new(options);
    let kind = FieldKind::from_key(&args.key);

    if args.explain {
        match kind {
            Some(FieldKind::OpeningHours) => explain_opening_hours(&args.value),
            Some(kind) => eprintln!("{}: no rewrite rules, value is validated as-is", kind.label()),
            None => eprintln!("'{}' has no normalizer, value passes through", args.key),
        }
    }

    match normalizer.normalize(&args.key, &args.value) {
        Some(value) => {
            println!("{value}");
            true
        }
        None => {
            eprintln!("rejected: {:?}", args.value);
            false
        }
    }
}

fn explain_opening_hours(value: &str) {
    let expanded = split_implicit_ranges(value);
    if expanded != value {
        eprintln!("split ranges: {expanded}");
    }
    for part in split_composite(&expanded, &[CANONICAL_DELIMITER]).parts {
        if is_canonical_opening_hours(part) {
            eprintln!("{part:?}: canonical");
            continue;
        }
        let (rewritten, fired) = rewrite_traced(part);
        let verdict = if is_canonical_opening_hours(&rewritten) {
            "accepted"
        } else {
            "rejected"
        };
        eprintln!("{part:?} -> {rewritten:?} ({verdict})");
        for rule in fired {
            eprintln!("  rule: {rule}");
        }
    }
}
