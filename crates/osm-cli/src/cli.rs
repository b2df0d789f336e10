//! CLI argument definitions for `osm-clean`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use osm_normalization::{CompositePolicy, NormalizationOptions};

#[derive(Parser)]
#[command(
    name = "osm-clean",
    version,
    about = "Clean an OpenStreetMap XML export into CSV tables",
    long_about = "Clean an OpenStreetMap XML export into CSV tables.\n\n\
                  Phone numbers, postcodes, house numbers and opening hours are\n\
                  rewritten to canonical form; values that cannot be recovered are dropped."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include raw tag values in trace logs.
    #[arg(long = "log-values", global = true)]
    pub log_values: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert an OSM XML file into the five CSV tables.
    Convert(ConvertArgs),

    /// Normalize the values of an existing tags CSV.
    Clean(CleanArgs),

    /// Normalize a single value and print the result.
    Normalize(NormalizeArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// OSM XML export to read.
    #[arg(value_name = "OSM_FILE")]
    pub osm_file: PathBuf,

    /// Directory for the CSV files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Check every element against the output schema before writing it.
    #[arg(long = "validate")]
    pub validate: bool,

    #[command(flatten)]
    pub normalization: NormalizationArgs,

    /// Write the rejection log as JSON.
    #[arg(long = "rejections", value_name = "PATH")]
    pub rejections: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// CSV with `id,key,value,type` columns.
    #[arg(value_name = "TAGS_CSV")]
    pub tags_csv: PathBuf,

    /// Output CSV (default: <TAGS_CSV stem>_clean.csv next to the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub normalization: NormalizationArgs,

    /// Write the rejection log as JSON.
    #[arg(long = "rejections", value_name = "PATH")]
    pub rejections: Option<PathBuf>,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Tag key after namespace splitting (phone, postcode, housenumber, opening_hours).
    pub key: String,

    /// Raw value.
    pub value: String,

    /// Show which opening-hours rewrite rules fired.
    #[arg(long = "explain")]
    pub explain: bool,

    /// How to treat a multi-value attribute with some invalid parts.
    #[arg(long = "composite-policy", value_enum, default_value = "reject-whole")]
    pub composite_policy: CompositePolicyArg,
}

/// Normalization flags shared by `convert` and `clean`.
#[derive(Args)]
pub struct NormalizationArgs {
    /// How to treat a multi-value attribute with some invalid parts.
    #[arg(long = "composite-policy", value_enum, default_value = "reject-whole")]
    pub composite_policy: CompositePolicyArg,

    /// Do not add `name` tags from `name:zh`.
    #[arg(long = "no-fill-names")]
    pub no_fill_names: bool,
}

impl NormalizationArgs {
    pub fn options(&self) -> NormalizationOptions {
        NormalizationOptions::new()
            .with_composite_policy(self.composite_policy.into())
            .with_fill_missing_names(!self.no_fill_names)
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CompositePolicyArg {
    /// Drop the whole attribute if any part is invalid.
    RejectWhole,
    /// Keep the valid parts.
    KeepValid,
}

impl From<CompositePolicyArg> for CompositePolicy {
    fn from(arg: CompositePolicyArg) -> Self {
        match arg {
            CompositePolicyArg::RejectWhole => CompositePolicy::RejectWhole,
            CompositePolicyArg::KeepValid => CompositePolicy::KeepValid,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
