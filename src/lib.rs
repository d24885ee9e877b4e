// lib.rs - mlstdist library root

//! # mlstdist - Pairwise distance matrices from allelic profiles
//!
//! Computes the dissimilarity between every pair of samples in an MLST or
//! cgMLST allele-call table and writes the matrix in the layout downstream
//! phylogenetic and clustering tools expect.
//!
//! ## Features
//!
//! - **Two metrics**: number of differing loci (`count`) or the fraction of
//!   differing loci (`proportion`)
//! - **Two layouts**: full square matrix or strict lower triangle
//! - **Deterministic output**: fixed 8-decimal values, rows in load order or
//!   sorted by sample identifier
//! - **Parallel**: pairwise comparisons run on a rayon pool
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use mlstdist::prelude::*;
//!
//! let table = ProfileTable::from_delimited_file(
//!     std::path::Path::new("profiles.tsv"),
//!     &LoaderOptions::default(),
//! )?;
//!
//! let config = RunConfig {
//!     metric: Metric::Proportion,
//!     layout: Layout::Triangular,
//!     ..RunConfig::default()
//! };
//! let matrix = run_pipeline(&table, &config)?;
//! print!("{}", render(&matrix, config.format)?);
//! # Ok::<(), mlstdist::MlstDistError>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, Config, ValidationResult};
    pub use crate::core::{calculate_distance_matrix, calculate_sample_distance, run_pipeline};
    pub use crate::core::{DistanceEngine, DistanceMatrix, Metric, PairKey, RunConfig};
    pub use crate::data::{generate_random_profiles, write_profiles_tsv};
    pub use crate::data::{AllelicProfile, LoaderOptions, ProfileTable, TableSummary};
    pub use crate::error::{MlstDistError, Result};
    pub use crate::output::{assemble, render, write_matrix};
    pub use crate::output::{AssembledMatrix, Layout, OutputFormat, RowOrder};
}

// Re-export main types at the root level for convenience
pub use crate::core::{DistanceEngine, DistanceMatrix, Metric, RunConfig};
pub use crate::data::ProfileTable;
pub use crate::error::{MlstDistError, Result};
pub use crate::output::{Layout, OutputFormat, RowOrder};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
