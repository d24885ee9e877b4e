// mod.rs - Data structures module

pub mod generator;
pub mod loaders;
pub mod profile;

// Re-export main types for convenience
pub use generator::{generate_random_profiles, write_profiles_tsv};
pub use loaders::LoaderOptions;
pub use profile::{AlleleCode, AllelicProfile, ProfileTable, ProfileTableBuilder, TableSummary};
