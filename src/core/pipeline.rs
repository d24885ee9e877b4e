// pipeline.rs - Table to assembled matrix in one call

use crate::core::distance::{calculate_distance_matrix, DistanceEngine};
use crate::core::metric::Metric;
use crate::data::ProfileTable;
use crate::error::{MlstDistError, Result};
use crate::output::{assemble, AssembledMatrix, Layout, OutputFormat, RowOrder};

/// Everything the core needs to know about a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub metric: Metric,
    pub layout: Layout,
    pub order: RowOrder,
    pub format: OutputFormat,
    pub show_progress: bool,
}

impl RunConfig {
    /// Reject combinations no formatter can produce
    pub fn validate(&self) -> Result<()> {
        if !self.format.supports(self.layout) {
            return Err(MlstDistError::config(format!(
                "output format '{}' does not support the {} layout",
                self.format, self.layout
            )));
        }
        Ok(())
    }
}

/// Compute and assemble the distance matrix for `table`.
///
/// Fails before any computation if `config` is inconsistent.
pub fn run_pipeline(table: &ProfileTable, config: &RunConfig) -> Result<AssembledMatrix> {
    config.validate()?;
    let engine = DistanceEngine::new(config.metric);
    let matrix = calculate_distance_matrix(table, &engine, config.show_progress)?;
    assemble(&matrix, config.layout, config.order)
}
