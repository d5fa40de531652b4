//! Invocation configuration
//!
//! Built once from the parsed command line and handed to the transcoder by value.

use std::path::PathBuf;

/// Where to read the module from and where to write the generated fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub output_path: PathBuf,
    pub input_path: PathBuf,
}

impl GenerateConfig {
    pub fn new(output_path: impl Into<PathBuf>, input_path: impl Into<PathBuf>) -> Self {
        Self { output_path: output_path.into(), input_path: input_path.into() }
    }
}
