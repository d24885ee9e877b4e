// mod.rs - Core logic module

pub mod distance;
pub mod metric;
pub mod pipeline;

// Re-export main types for convenience
pub use distance::{
    calculate_distance_matrix, calculate_sample_distance, DistanceEngine, DistanceMatrix, PairKey,
};
pub use metric::Metric;
pub use pipeline::{run_pipeline, RunConfig};
