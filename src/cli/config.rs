// config.rs - Configuration file support

use crate::error::{MlstDistError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Config {
    // Input
    pub input: Option<String>,
    pub sep: Option<String>,
    pub quote: Option<String>,
    pub exclude: Option<Vec<String>>,
    pub exclude_loci: Option<String>,

    // Core settings
    pub metric: Option<String>,
    pub layout: Option<String>,
    pub order: Option<String>,
    pub output_format: Option<String>,

    // Performance
    pub threads: Option<usize>,

    // Flags
    pub progress: Option<bool>,
    pub quiet: Option<bool>,
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self {
            input: None,
            sep: None,
            quote: None,
            exclude: None,
            exclude_loci: None,
            metric: None,
            layout: None,
            order: None,
            output_format: None,
            threads: None,
            progress: None,
            quiet: None,
            dry_run: None,
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            MlstDistError::config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            MlstDistError::config(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        log::info!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| MlstDistError::config(format!("failed to serialize config: {}", e)))?;

        fs::write(path, content)?;
        log::info!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# mlstdist.toml - Configuration file for mlstdist
# Command line arguments override these settings

# =============================================================================
# INPUT
# =============================================================================

# Allelic profile table (first column: sample identifier)
input = "/path/to/profiles.tsv"

# Field separator ("\t" for tab) and quote character
sep = "\t"
quote = "\""

# Column labels excluded from the loci, on top of ST and clonal_complex
exclude = ["lineage", "serotype"]

# Exclude loci whose name matches this regex
# exclude_loci = "^deprecated_"

# =============================================================================
# CORE SETTINGS
# =============================================================================

# Distance metric: count (alias absolute), proportion
metric = "count"

# Matrix layout: square, triangular
layout = "square"

# Row order: loaded, sorted
order = "loaded"

# Output format: phylip, tsv (tsv requires the square layout)
output_format = "phylip"

# =============================================================================
# PERFORMANCE
# =============================================================================

# Number of threads (omit for auto-detection)
# threads = 8

# =============================================================================
# FLAGS
# =============================================================================

progress = false
quiet = false
dry_run = false
"#
        .to_string()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
