// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::core::{Metric, RunConfig};
use crate::data::loaders::{LoaderOptions, DEFAULT_EXCLUDED_COLUMNS};
use crate::error::{MlstDistError, Result};
use crate::output::{Layout, OutputFormat, RowOrder};
use regex::Regex;
use std::collections::HashSet;

pub struct ValidationResult {
    pub run_config: RunConfig,
    pub loader_options: LoaderOptions,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult> {
    let run_config = RunConfig {
        metric: args.metric.parse::<Metric>()?,
        layout: args.layout.parse::<Layout>()?,
        order: args.order.parse::<RowOrder>()?,
        format: args.output_format.parse::<OutputFormat>()?,
        show_progress: args.progress,
    };
    run_config.validate()?;

    let delimiter = parse_single_byte("separator", &args.sep)?;
    let quote = parse_single_byte("quote", &args.quote)?;
    if delimiter == quote {
        return Err(MlstDistError::config(
            "separator and quote character must differ",
        ));
    }

    if args.threads == Some(0) {
        return Err(MlstDistError::config("--threads must be at least 1"));
    }

    let mut excluded_columns: HashSet<String> = DEFAULT_EXCLUDED_COLUMNS
        .iter()
        .map(|s| s.to_string())
        .collect();
    if let Some(labels) = &args.exclude {
        excluded_columns.extend(
            labels
                .split(',')
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string()),
        );
    }

    let exclude_pattern = if let Some(pattern) = &args.exclude_loci {
        Some(Regex::new(pattern).map_err(|e| {
            MlstDistError::config(format!("invalid exclude_loci regex: {}", e))
        })?)
    } else {
        None
    };

    Ok(ValidationResult {
        run_config,
        loader_options: LoaderOptions {
            delimiter,
            quote,
            excluded_columns,
            exclude_pattern,
        },
    })
}

/// Accept one ASCII character, or the `\t` / `tab` spellings of a tab
fn parse_single_byte(what: &str, value: &str) -> Result<u8> {
    match value {
        "\\t" | "tab" | "TAB" => return Ok(b'\t'),
        _ => {}
    }
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(MlstDistError::config(format!(
            "{} must be a single ASCII character, got '{}'",
            what, value
        ))),
    }
}
