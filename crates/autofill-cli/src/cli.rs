//! CLI argument definitions for `field-mapper`.

use std::path::PathBuf;

use autofill_model::FormField;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "field-mapper",
    version,
    about = "Map web form fields onto an applicant profile",
    long_about = "Map scraped web form fields onto a fixed applicant profile schema.\n\n\
                  Field names are normalized and matched exactly, fuzzily, or through\n\
                  their label/placeholder/title/class attributes. Each mapping gets a\n\
                  confidence score."
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

    /// Allow applicant-supplied values to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Config file (default: the per-user field-mapper/config.toml).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Extra mapping file merged into the table; may be repeated.
    #[arg(long = "mappings", value_name = "FILE", global = true)]
    pub mappings: Vec<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Map and score every field in a JSON form description.
    Analyze(AnalyzeArgs),

    /// Map a single field name and explain the decision.
    Test(TestArgs),

    /// Teach a custom field name -> profile field mapping.
    Map(MapArgs),

    /// Write the current mapping table to a JSON file.
    Export {
        /// Destination file.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// Merge a mapping file into the table.
    Import {
        /// Mapping file to merge.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Write the merged table here.
        #[arg(long = "output", short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Check a value against the rule for a profile field.
    Validate {
        /// Profile field, e.g. email or zipCode.
        #[arg(value_name = "PROFILE_FIELD")]
        profile_field: String,

        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: String,
    },

    /// List profile fields and their known variants.
    Fields {
        /// Show every variant instead of a count.
        #[arg(long = "variants")]
        variants: bool,
    },
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// JSON array of form fields, or an object with a `fields` array.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Args)]
pub struct TestArgs {
    /// Field name or id as scraped.
    #[arg(value_name = "FIELD")]
    pub field: String,

    #[arg(long = "placeholder")]
    pub placeholder: Option<String>,

    #[arg(long = "label")]
    pub label: Option<String>,

    #[arg(long = "class")]
    pub class: Option<String>,

    #[arg(long = "title")]
    pub title: Option<String>,
}

impl TestArgs {
    pub fn to_field(&self) -> FormField {
        let mut field = FormField::named(self.field.as_str());
        for (name, value) in [
            ("placeholder", &self.placeholder),
            ("label", &self.label),
            ("class", &self.class),
            ("title", &self.title),
        ] {
            if let Some(value) = value {
                field = field.with_attribute(name, value.as_str());
            }
        }
        field
    }
}

#[derive(Args)]
pub struct MapArgs {
    /// Field name as it appears on forms.
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// Profile field it should fill.
    #[arg(value_name = "PROFILE_FIELD")]
    pub profile_field: String,

    /// Write the updated table here.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
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
