// mod.rs - Profile table loaders

pub mod delimited;

pub use delimited::{LoaderOptions, DEFAULT_EXCLUDED_COLUMNS};
