// merge.rs - Merge configuration file with CLI arguments

use crate::cli::args::{
    DEFAULT_FORMAT, DEFAULT_LAYOUT, DEFAULT_METRIC, DEFAULT_ORDER, DEFAULT_QUOTE, DEFAULT_SEP,
};
use crate::cli::{Args, Config};
use crate::error::Result;

/// Replace `value` with `from_config` while it still holds the CLI default
fn fill_default(value: &mut String, default: &str, from_config: Option<String>) {
    if value == default {
        if let Some(v) = from_config {
            *value = v;
        }
    }
}

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        if self.input.is_none() {
            self.input = config.input;
        }

        // Only override defaults, not explicit CLI values
        fill_default(&mut self.sep, DEFAULT_SEP, config.sep);
        fill_default(&mut self.quote, DEFAULT_QUOTE, config.quote);
        fill_default(&mut self.metric, DEFAULT_METRIC, config.metric);
        fill_default(&mut self.layout, DEFAULT_LAYOUT, config.layout);
        fill_default(&mut self.order, DEFAULT_ORDER, config.order);
        fill_default(&mut self.output_format, DEFAULT_FORMAT, config.output_format);

        if self.exclude.is_none() {
            self.exclude = config.exclude.map(|labels| labels.join(","));
        }
        if self.exclude_loci.is_none() {
            self.exclude_loci = config.exclude_loci;
        }
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.progress && config.progress.unwrap_or(false) {
            self.progress = true;
        }
        if !self.quiet && config.quiet.unwrap_or(false) {
            self.quiet = true;
        }
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
