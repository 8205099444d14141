//! Configuration management for the N-queens enumerator

pub mod settings;

pub use settings::{
    CliOverrides, EncodingConfig, OutputConfig, OutputFormat, PuzzleConfig, Settings, SolverConfig,
};
