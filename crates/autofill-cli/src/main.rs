//! `field-mapper`: form field to applicant profile mapping CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use autofill_cli::commands::{
    build_engine, run_analyze, run_export, run_import, run_map, run_test, run_validate,
};
use autofill_cli::config::load_config;
use autofill_cli::logging::{LogConfig, LogFormat, init_logging};
use autofill_map::MappingEngine;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, ReportFormatArg};
use crate::summary::{print_fields, print_merge, print_report, print_trace};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(error) => {
            tracing::error!("{error:#}");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<i32> {
    let Cli {
        command,
        config,
        mappings,
        ..
    } = cli;
    // Validate needs neither the config nor any mapping file.
    let load_engine = || -> Result<MappingEngine> {
        let config = load_config(config.as_deref())?;
        build_engine(config, &mappings)
    };

    match command {
        Command::Validate {
            profile_field,
            value,
        } => {
            let check = run_validate(&profile_field, &value);
            if !check.is_valid() {
                println!("invalid: {}", check.reason());
                return Ok(1);
            }
            println!("valid");
        }
        Command::Analyze(args) => {
            let report = run_analyze(&load_engine()?, &args.input)?;
            match args.format {
                ReportFormatArg::Table => print_report(&report),
                ReportFormatArg::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
        Command::Test(args) => print_trace(&run_test(&load_engine()?, &args.to_field())),
        Command::Map(args) => {
            let added = run_map(
                &mut load_engine()?,
                &args.field,
                &args.profile_field,
                args.output.as_deref(),
            )?;
            if added {
                println!("Mapped '{}' -> {}", args.field, args.profile_field);
            } else {
                println!(
                    "'{}' is already a variant of {} (or empty after normalization)",
                    args.field, args.profile_field
                );
            }
            match &args.output {
                Some(path) => println!("Wrote mappings to {}", path.display()),
                None => println!("Not saved; pass --output to keep this mapping"),
            }
        }
        Command::Export { path } => {
            run_export(&load_engine()?, &path)?;
            println!("Wrote mappings to {}", path.display());
        }
        Command::Import { path, output } => {
            let summary = run_import(&mut load_engine()?, &path, output.as_deref())?;
            print_merge(&summary);
            if let Some(output) = output {
                println!("Wrote mappings to {}", output.display());
            }
        }
        Command::Fields { variants } => print_fields(load_engine()?.table(), variants),
    }
    Ok(0)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
